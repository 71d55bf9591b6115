//! `bird user` as a [`ProfileSource`].

use sift_core::EnrichmentResult;
use sift_pipeline::ProfileSource;

use crate::cli::BirdCli;
use crate::types::BirdUser;

#[derive(Debug, Clone)]
pub struct BirdProfileSource {
    cli: BirdCli,
}

impl BirdProfileSource {
    #[must_use]
    pub fn new(cli: BirdCli) -> Self {
        Self { cli }
    }
}

impl ProfileSource for BirdProfileSource {
    /// One `bird user` call. Every failure is logged and reported as `None`
    /// so the caller's attempt budget decides what happens next.
    async fn fetch(&self, handle: &str) -> Option<EnrichmentResult> {
        let username = handle.trim().trim_start_matches('@');

        let stdout = match self.cli.run(&["user", username, "--json"]).await {
            Ok(stdout) => stdout,
            Err(e) => {
                tracing::warn!(handle, error = %e, "bird user failed");
                return None;
            }
        };

        match serde_json::from_slice::<BirdUser>(&stdout) {
            Ok(user) => Some(user.into_enrichment()),
            Err(e) => {
                tracing::warn!(handle, error = %e, "bird user returned undecodable output");
                None
            }
        }
    }
}
