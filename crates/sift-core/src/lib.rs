//! Shared domain types and configuration for sift.
//!
//! Everything the pipeline, the `bird` adapters and the CLI agree on lives
//! here: raw posts, the fixed output row, enrichment results, run metadata
//! and the environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod error;
pub mod posts;
pub mod record;

pub use app_config::{AppConfig, TopicConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use posts::{EnrichmentResult, RawPost, RunMetadata, SearchQuery};
pub use record::{OutputRecord, COLUMNS};
