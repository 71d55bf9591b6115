//! Run orchestration.
//!
//! 1. Search the post source and snapshot every result.
//! 2. Check every engagement count before a human spends time on review.
//! 3. Curate, map, and enrich, in that order.
//! 4. Hand the finished table to the sink, keyed by the query's date range.
//!
//! Nothing is persisted until step 4, so a run that fails earlier leaves no
//! output behind.

use sift_core::{OutputRecord, RawPost, RunMetadata, SearchQuery};

use crate::curation::{curate, CurationSummary};
use crate::enrich::{enrich_records, EnrichPolicy, EnrichmentSummary};
use crate::error::PipelineError;
use crate::mapper::{map_records, parse_counts};
use crate::ports::{Operator, PostSource, ProfileSource, TableSink};

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Final table, in the order the operator kept the posts.
    pub records: Vec<OutputRecord>,
    pub curation: CurationSummary,
    pub enrichment: EnrichmentSummary,
}

/// Runs the search and collects the full result set up front.
///
/// # Errors
///
/// Returns [`PipelineError::Search`] if the source fails.
pub async fn collect_posts<P>(
    source: &P,
    query: &SearchQuery,
) -> Result<Vec<RawPost>, PipelineError>
where
    P: PostSource,
{
    let posts = source
        .search(query)
        .await
        .map_err(|e| PipelineError::Search(Box::new(e)))?;

    tracing::info!(
        count = posts.len(),
        since = %query.since,
        until = %query.until,
        "collected posts"
    );
    Ok(posts)
}

/// Verifies every like/reply/share count is blank or a non-negative integer.
///
/// # Errors
///
/// Returns [`PipelineError::MalformedCount`] for the first offending field.
pub fn check_counts(posts: &[RawPost]) -> Result<(), PipelineError> {
    for post in posts {
        parse_counts(post)?;
    }
    Ok(())
}

/// Curates, maps, and enriches an already collected snapshot.
///
/// # Errors
///
/// Returns [`PipelineError::MalformedCount`] before review starts if a count
/// is unusable, or [`PipelineError::OperatorInput`] if the operator channel
/// fails mid-review. Profile lookups never fail the run.
pub async fn process_posts<O, S>(
    raw: Vec<RawPost>,
    operator: &mut O,
    profiles: &S,
    metadata: &RunMetadata,
    policy: &EnrichPolicy,
) -> Result<RunReport, PipelineError>
where
    O: Operator + ?Sized,
    S: ProfileSource,
{
    check_counts(&raw)?;

    let curated = curate(raw, operator)?;
    let mut records = map_records(curated.posts, metadata)?;
    let enrichment = enrich_records(&mut records, profiles, policy).await;

    Ok(RunReport {
        records,
        curation: curated.summary,
        enrichment,
    })
}

/// Runs a complete collection: search, review, map, enrich, persist.
///
/// # Errors
///
/// Any error from [`collect_posts`] or [`process_posts`], or
/// [`PipelineError::Persist`] if the sink rejects the table.
pub async fn run_pipeline<P, S, O, T>(
    query: &SearchQuery,
    metadata: &RunMetadata,
    posts: &P,
    profiles: &S,
    operator: &mut O,
    sink: &mut T,
    policy: &EnrichPolicy,
) -> Result<RunReport, PipelineError>
where
    P: PostSource,
    S: ProfileSource,
    O: Operator + ?Sized,
    T: TableSink,
{
    let raw = collect_posts(posts, query).await?;
    let report = process_posts(raw, operator, profiles, metadata, policy).await?;

    sink.persist(query, &report.records)
        .map_err(|e| PipelineError::Persist {
            range: query.range_key(),
            source: Box::new(e),
        })?;

    tracing::info!(
        rows = report.records.len(),
        unresolved = report.enrichment.unresolved.len(),
        range = %query.range_key(),
        "run complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(likes: &str) -> RawPost {
        RawPost {
            handle: "@a".to_owned(),
            display_name: "A".to_owned(),
            text: "t".to_owned(),
            embedded_text: None,
            url: "https://x.com/a/status/1".to_owned(),
            timestamp: String::new(),
            likes: likes.to_owned(),
            replies: String::new(),
            shares: "3".to_owned(),
        }
    }

    #[test]
    fn check_counts_accepts_blank_and_numeric() {
        assert!(check_counts(&[post(""), post("12"), post("  ")]).is_ok());
    }

    #[test]
    fn check_counts_rejects_first_malformed_post() {
        let result = check_counts(&[post("1"), post("1,024")]);
        assert!(matches!(
            result,
            Err(PipelineError::MalformedCount { field: "likes", ref value, .. }) if value == "1,024"
        ));
    }
}
