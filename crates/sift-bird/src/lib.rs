//! Twitter/X collaborators backed by the `bird` CLI.
//!
//! [`BirdPostSource`] runs `bird search` for the keyword/hashtag query and
//! [`BirdProfileSource`] runs `bird user` for one author at a time. Both
//! shell out through a shared [`BirdCli`] that carries the executable path
//! and optional session credentials.

pub mod cli;
pub mod error;
pub mod profile;
pub mod query;
pub mod search;

mod types;

pub use cli::BirdCli;
pub use error::BirdError;
pub use profile::BirdProfileSource;
pub use query::build_search_query;
pub use search::BirdPostSource;
