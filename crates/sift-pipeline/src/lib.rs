//! Curation and enrichment pipeline for scraped posts.
//!
//! Raw posts from a [`PostSource`] are reviewed one by one by an
//! [`Operator`], reshaped into [`sift_core::OutputRecord`] rows, enriched with
//! author profiles from a [`ProfileSource`] under a bounded attempt budget,
//! and finally handed to a [`TableSink`].

pub mod attempts;
pub mod curation;
pub mod driver;
pub mod enrich;
pub mod error;
pub mod mapper;
pub mod ports;

pub use attempts::{fetch_with_attempts, FetchOutcome};
pub use curation::{curate, Curated, CurationSummary};
pub use driver::{check_counts, collect_posts, process_posts, run_pipeline, RunReport};
pub use enrich::{
    apply_enrichment, enrich_records, normalize_join_date, EnrichPolicy, EnrichmentSummary,
};
pub use error::PipelineError;
pub use mapper::{coerce_count, map_post, map_records, map_records_at};
pub use ports::{Decision, Operator, PostSource, ProfileSource, ReviewPosition, TableSink};
