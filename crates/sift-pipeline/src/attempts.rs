//! Bounded profile lookups.
//!
//! [`fetch_with_attempts`] calls a [`ProfileSource`] until it yields a
//! profile or the attempt budget runs out. Attempts follow each other
//! immediately; there is no back-off between them.

use sift_core::EnrichmentResult;

use crate::ports::ProfileSource;

/// How a bounded lookup ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The source answered on attempt number `attempts`.
    Found {
        result: EnrichmentResult,
        attempts: u32,
    },
    /// Every one of the `attempts` calls came back empty.
    Exhausted { attempts: u32 },
}

/// Runs up to `max_attempts` lookups for `handle`, stopping at the first hit.
pub async fn fetch_with_attempts<S>(source: &S, handle: &str, max_attempts: u32) -> FetchOutcome
where
    S: ProfileSource,
{
    for attempt in 1..=max_attempts {
        tracing::info!(handle, attempt, max_attempts, "fetching profile");

        if let Some(result) = source.fetch(handle).await {
            return FetchOutcome::Found {
                result,
                attempts: attempt,
            };
        }

        if attempt < max_attempts {
            tracing::warn!(
                handle,
                attempt,
                max_attempts,
                "profile lookup came back empty, trying again"
            );
        } else {
            tracing::warn!(handle, attempt, max_attempts, "profile lookup came back empty");
        }
    }

    FetchOutcome::Exhausted {
        attempts: max_attempts,
    }
}
