//! Collaborator seams of the pipeline.
//!
//! The pipeline never talks to a platform, a terminal or a file directly.
//! Each of those lives behind one of the traits below so runs can be driven
//! by the `bird` adapters in production and by plain stubs in tests.

use std::future::Future;
use std::io;

use sift_core::{EnrichmentResult, OutputRecord, RawPost, SearchQuery};

use crate::curation::CurationSummary;

/// Searches a platform for posts matching a query.
pub trait PostSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns every post the platform yields for `query`, in source order.
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<RawPost>, Self::Error>>;
}

/// Looks up one account's profile attributes.
pub trait ProfileSource {
    /// A single attempt. `None` means the account could not be resolved this
    /// time; the caller decides whether to try again.
    fn fetch(&self, handle: &str) -> impl Future<Output = Option<EnrichmentResult>>;
}

/// The operator's verdict on one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Discard,
}

/// 1-based position of a post within the review pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewPosition {
    pub index: usize,
    pub total: usize,
}

impl std::fmt::Display for ReviewPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.index, self.total)
    }
}

/// Synchronous keep/discard channel to a human reviewer.
///
/// Implementations block until they have a valid decision. An `Err` means
/// the channel itself is gone (e.g. stdin closed) and aborts the run.
pub trait Operator {
    /// Called once when the search results are in, before any post is shown.
    /// `total` may be zero.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the operator cannot be reached.
    fn begin(&mut self, total: usize) -> io::Result<()> {
        let _ = total;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an I/O error when no decision can ever be obtained.
    fn review(&mut self, position: ReviewPosition, post: &RawPost) -> io::Result<Decision>;

    /// Called once after the last decision, before enrichment starts.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the operator cannot be reached.
    fn finish(&mut self, summary: &CurationSummary) -> io::Result<()> {
        let _ = summary;
        Ok(())
    }
}

impl<F> Operator for F
where
    F: FnMut(&RawPost) -> Decision,
{
    fn review(&mut self, _position: ReviewPosition, post: &RawPost) -> io::Result<Decision> {
        Ok(self(post))
    }
}

/// Persists the final table, keyed by the query's date range.
pub trait TableSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes `records` for `query`, replacing any table previously stored
    /// for the same range.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the table cannot be written.
    fn persist(&mut self, query: &SearchQuery, records: &[OutputRecord])
        -> Result<(), Self::Error>;
}
