//! Reshapes curated [`RawPost`]s into fixed-schema [`OutputRecord`]s.
//!
//! Mapping is pure: provenance comes from [`RunMetadata`], post fields are
//! copied or coerced, and enrichment/review fields start out empty.

use std::num::ParseIntError;

use chrono::{Local, NaiveDateTime};
use sift_core::{OutputRecord, RawPost, RunMetadata};

use crate::error::PipelineError;

/// Format of the run timestamp stamped on every row.
pub const RUN_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Parses an engagement count. Blank or whitespace-only input counts as zero.
///
/// # Errors
///
/// Returns the parse error for any other non-numeric (or negative) input.
pub fn coerce_count(raw: &str) -> Result<u64, ParseIntError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u64>()
}

/// Coerced like/reply/share counts of one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Counts {
    pub likes: u64,
    pub replies: u64,
    pub shares: u64,
}

pub(crate) fn parse_counts(post: &RawPost) -> Result<Counts, PipelineError> {
    let field = |name: &'static str, raw: &str| {
        coerce_count(raw).map_err(|_| PipelineError::MalformedCount {
            url: post.url.clone(),
            field: name,
            value: raw.to_owned(),
        })
    };

    Ok(Counts {
        likes: field("likes", &post.likes)?,
        replies: field("replies", &post.replies)?,
        shares: field("shares", &post.shares)?,
    })
}

/// Maps every post with a run timestamp captured once, now.
///
/// # Errors
///
/// Returns [`PipelineError::MalformedCount`] if a count is neither blank nor
/// a non-negative integer.
pub fn map_records(
    posts: Vec<RawPost>,
    metadata: &RunMetadata,
) -> Result<Vec<OutputRecord>, PipelineError> {
    map_records_at(posts, metadata, Local::now().naive_local())
}

/// Maps every post, stamping all rows with the same `run_at`.
///
/// # Errors
///
/// See [`map_records`].
pub fn map_records_at(
    posts: Vec<RawPost>,
    metadata: &RunMetadata,
    run_at: NaiveDateTime,
) -> Result<Vec<OutputRecord>, PipelineError> {
    let run_timestamp = run_at.format(RUN_TIMESTAMP_FORMAT).to_string();
    posts
        .into_iter()
        .map(|post| map_post(post, metadata, &run_timestamp))
        .collect()
}

/// Maps a single post into a row.
///
/// # Errors
///
/// See [`map_records`].
pub fn map_post(
    post: RawPost,
    metadata: &RunMetadata,
    run_timestamp: &str,
) -> Result<OutputRecord, PipelineError> {
    let counts = parse_counts(&post)?;

    Ok(OutputRecord {
        timestamp: run_timestamp.to_owned(),
        tweet_url: post.url,
        group: metadata.topic.group,
        collector: metadata.collector.clone(),
        category: metadata.topic.category.clone(),
        topic: metadata.topic.topic.clone(),
        keywords: metadata.joined_keywords(),
        account_handle: post.handle,
        account_name: post.display_name,
        tweet: post.text,
        date_posted: post.timestamp,
        likes: counts.likes,
        replies: counts.replies,
        retweets: counts.shares,
        ..OutputRecord::default()
    })
}
