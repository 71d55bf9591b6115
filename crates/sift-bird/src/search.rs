//! `bird search` as a [`PostSource`].

use std::collections::HashSet;

use sift_core::{RawPost, SearchQuery};
use sift_pipeline::PostSource;

use crate::cli::BirdCli;
use crate::error::BirdError;
use crate::query::build_search_query;
use crate::types::BirdTweet;

#[derive(Debug, Clone)]
pub struct BirdPostSource {
    cli: BirdCli,
    limit: u32,
}

impl BirdPostSource {
    /// `limit` caps how many posts `bird` is asked for.
    #[must_use]
    pub fn new(cli: BirdCli, limit: u32) -> Self {
        Self { cli, limit }
    }
}

impl PostSource for BirdPostSource {
    type Error = BirdError;

    /// Runs one `bird search` for the whole query.
    ///
    /// Unlike profile lookups, a failed or undecodable search is an error:
    /// an empty result here would end in an empty table being written.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawPost>, BirdError> {
        let search = build_search_query(query);
        let limit = self.limit.to_string();
        tracing::info!(query = %search, limit = self.limit, "running bird search");

        let stdout = self
            .cli
            .run(&["search", &search, "--json", "-n", &limit])
            .await?;

        let tweets: Vec<BirdTweet> =
            serde_json::from_slice(&stdout).map_err(|source| BirdError::Decode {
                command: "search".to_owned(),
                source,
            })?;

        Ok(dedupe(tweets))
    }
}

/// Converts tweets to posts, dropping repeats of an already seen URL.
fn dedupe(tweets: Vec<BirdTweet>) -> Vec<RawPost> {
    let mut seen: HashSet<String> = HashSet::new();
    tweets
        .into_iter()
        .map(BirdTweet::into_raw_post)
        .filter(|post| {
            let fresh = seen.insert(post.url.clone());
            if !fresh {
                tracing::debug!(url = %post.url, "dropping duplicate post");
            }
            fresh
        })
        .collect()
}
