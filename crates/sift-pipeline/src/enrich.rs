//! Author profile enrichment of mapped rows.

use chrono::NaiveDate;
use sift_core::{EnrichmentResult, OutputRecord};

use crate::attempts::{fetch_with_attempts, FetchOutcome};
use crate::ports::ProfileSource;

/// Attempt budget used when nothing else is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichPolicy {
    /// Profile lookups allowed per row before giving up on it.
    pub max_attempts: u32,
}

impl Default for EnrichPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Outcome counts of an enrichment pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub resolved: usize,
    /// Handles whose rows kept empty enrichment fields, in row order.
    pub unresolved: Vec<String>,
}

/// Converts `"Joined September 2015"` into `"09/2015"`.
///
/// The leading label word is dropped and the rest must be exactly a month
/// name (full or abbreviated) followed by a four-digit year. Anything else
/// yields an empty string.
#[must_use]
pub fn normalize_join_date(raw: &str) -> String {
    let words: Vec<&str> = raw.split_whitespace().skip(1).collect();

    // chrono's %Y also takes "15" as year 15.
    let four_digit_year = words
        .last()
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()));
    if !four_digit_year {
        tracing::debug!(raw, "join date does not end in a four-digit year");
        return String::new();
    }

    let rest = words.join(" ");
    match NaiveDate::parse_from_str(&format!("01 {rest}"), "%d %B %Y") {
        Ok(date) => date.format("%m/%Y").to_string(),
        Err(e) => {
            tracing::debug!(raw, error = %e, "join date not in \"Joined <Month> <Year>\" form");
            String::new()
        }
    }
}

/// Copies the five consumed profile attributes onto `record`.
///
/// Overwrites rather than accumulates, so applying the same result twice
/// leaves the row as applying it once.
pub fn apply_enrichment(record: &mut OutputRecord, result: &EnrichmentResult) {
    record.account_bio.clone_from(&result.bio);
    record.joined = normalize_join_date(&result.joined);
    record.following = result.following;
    record.followers = result.followers;
    record.location.clone_from(&result.location);
}

/// Looks up and merges the author profile of every row, in order.
///
/// Rows whose lookups are exhausted keep their empty enrichment fields and
/// are listed in [`EnrichmentSummary::unresolved`]; the pass always runs to
/// the end.
pub async fn enrich_records<S>(
    records: &mut [OutputRecord],
    source: &S,
    policy: &EnrichPolicy,
) -> EnrichmentSummary
where
    S: ProfileSource,
{
    let total = records.len();
    let mut summary = EnrichmentSummary::default();

    tracing::info!(total, "starting profile lookups");

    for (i, record) in records.iter_mut().enumerate() {
        let handle = record.account_handle.clone();
        tracing::info!(handle = %handle, row = i + 1, total, "looking up author profile");

        match fetch_with_attempts(source, &handle, policy.max_attempts).await {
            FetchOutcome::Found { result, attempts } => {
                apply_enrichment(record, &result);
                tracing::debug!(
                    handle = %handle,
                    attempts,
                    following = record.following,
                    followers = record.followers,
                    joined = %record.joined,
                    "profile merged"
                );
                summary.resolved += 1;
            }
            FetchOutcome::Exhausted { attempts } => {
                tracing::warn!(
                    handle = %handle,
                    attempts,
                    "profile unresolved, fill it in by hand"
                );
                summary.unresolved.push(handle);
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    use super::*;

    fn profile(followers: u64) -> EnrichmentResult {
        EnrichmentResult {
            following: 120,
            followers,
            joined: "Joined September 2015".to_owned(),
            bio: "Proud Pinoy".to_owned(),
            location: "Quezon City".to_owned(),
            birthday: None,
            website: Some("https://example.ph".to_owned()),
        }
    }

    fn row(handle: &str) -> OutputRecord {
        OutputRecord {
            account_handle: handle.to_owned(),
            ..OutputRecord::default()
        }
    }

    /// Serves fixed profiles per handle and counts calls per handle.
    struct Directory {
        profiles: HashMap<String, EnrichmentResult>,
        calls: Mutex<HashMap<String, u32>>,
    }

    impl Directory {
        fn new(entries: &[(&str, EnrichmentResult)]) -> Self {
            Self {
                profiles: entries
                    .iter()
                    .map(|(h, p)| ((*h).to_owned(), p.clone()))
                    .collect(),
                calls: Mutex::new(HashMap::new()),
            }
        }

        fn calls_for(&self, handle: &str) -> u32 {
            self.calls
                .lock()
                .unwrap()
                .get(handle)
                .copied()
                .unwrap_or(0)
        }
    }

    impl ProfileSource for Directory {
        async fn fetch(&self, handle: &str) -> Option<EnrichmentResult> {
            *self
                .calls
                .lock()
                .unwrap()
                .entry(handle.to_owned())
                .or_insert(0) += 1;
            self.profiles.get(handle).cloned()
        }
    }

    // -----------------------------------------------------------------------
    // normalize_join_date
    // -----------------------------------------------------------------------

    #[test]
    fn join_date_full_month_name() {
        assert_eq!(normalize_join_date("Joined September 2015"), "09/2015");
    }

    #[test]
    fn join_date_single_digit_month_is_zero_padded() {
        assert_eq!(normalize_join_date("Joined March 2009"), "03/2009");
    }

    #[test]
    fn join_date_tolerates_extra_whitespace() {
        assert_eq!(normalize_join_date("  Joined   December  2020 "), "12/2020");
    }

    #[test]
    fn join_date_garbage_is_empty() {
        assert_eq!(normalize_join_date("garbage"), "");
    }

    #[test]
    fn join_date_empty_is_empty() {
        assert_eq!(normalize_join_date(""), "");
    }

    #[test]
    fn join_date_trailing_words_are_rejected() {
        assert_eq!(normalize_join_date("Joined September 2015 via web"), "");
    }

    #[test]
    fn join_date_two_digit_year_is_rejected() {
        assert_eq!(normalize_join_date("Joined September 15"), "");
        assert_eq!(normalize_join_date("Joined Sep 015"), "");
    }

    #[test]
    fn join_date_five_digit_year_is_rejected() {
        assert_eq!(normalize_join_date("Joined September 20155"), "");
    }

    #[test]
    fn join_date_abbreviated_month() {
        assert_eq!(normalize_join_date("Joined Sep 2015"), "09/2015");
    }

    #[test]
    fn join_date_without_label_is_rejected() {
        assert_eq!(normalize_join_date("September 2015"), "");
    }

    // -----------------------------------------------------------------------
    // apply_enrichment
    // -----------------------------------------------------------------------

    #[test]
    fn apply_enrichment_sets_the_five_fields() {
        let mut record = row("@juan");
        apply_enrichment(&mut record, &profile(999));
        assert_eq!(record.account_bio, "Proud Pinoy");
        assert_eq!(record.joined, "09/2015");
        assert_eq!(record.following, 120);
        assert_eq!(record.followers, 999);
        assert_eq!(record.location, "Quezon City");
        assert_eq!(record.account_handle, "@juan");
    }

    #[test]
    fn apply_enrichment_is_idempotent() {
        let result = profile(5);
        let mut once = row("@juan");
        apply_enrichment(&mut once, &result);
        let mut twice = once.clone();
        apply_enrichment(&mut twice, &result);
        assert_eq!(once, twice);
    }

    #[test]
    fn apply_enrichment_malformed_join_date_leaves_field_empty() {
        let mut result = profile(5);
        result.joined = "garbage".to_owned();
        let mut record = row("@juan");
        apply_enrichment(&mut record, &result);
        assert_eq!(record.joined, "");
        assert_eq!(record.followers, 5);
    }

    // -----------------------------------------------------------------------
    // enrich_records
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn unresolved_rows_keep_defaults_after_full_budget() {
        let source = Directory::new(&[]);
        let mut records = vec![row("@ghost"), row("@phantom")];

        let summary = enrich_records(&mut records, &source, &EnrichPolicy::default()).await;

        assert_eq!(source.calls_for("@ghost"), 10);
        assert_eq!(source.calls_for("@phantom"), 10);
        assert!(records.iter().all(OutputRecord::is_unenriched));
        assert_eq!(summary.resolved, 0);
        assert_eq!(summary.unresolved, ["@ghost", "@phantom"]);
    }

    #[tokio::test]
    async fn mixed_rows_resolve_independently() {
        let source = Directory::new(&[("@juan", profile(10)), ("@maria", profile(20))]);
        let mut records = vec![row("@juan"), row("@ghost"), row("@maria")];

        let policy = EnrichPolicy { max_attempts: 3 };
        let summary = enrich_records(&mut records, &source, &policy).await;

        assert_eq!(records[0].followers, 10);
        assert!(records[1].is_unenriched());
        assert_eq!(records[2].followers, 20);
        assert_eq!(source.calls_for("@juan"), 1);
        assert_eq!(source.calls_for("@ghost"), 3);
        assert_eq!(summary.resolved, 2);
        assert_eq!(summary.unresolved, ["@ghost"]);
    }

    #[tokio::test]
    async fn repeated_handles_are_looked_up_per_row() {
        let source = Directory::new(&[("@juan", profile(10))]);
        let mut records = vec![row("@juan"), row("@juan")];

        enrich_records(&mut records, &source, &EnrichPolicy::default()).await;

        assert_eq!(source.calls_for("@juan"), 2);
        assert_eq!(records[0], records[1]);
    }

    #[tokio::test]
    async fn success_on_third_attempt_uses_that_answer() {
        struct ThirdTime(AtomicU32);
        impl ProfileSource for ThirdTime {
            async fn fetch(&self, _handle: &str) -> Option<EnrichmentResult> {
                let call = self.0.fetch_add(1, Ordering::SeqCst) + 1;
                (call >= 3).then(|| profile(u64::from(call) * 100))
            }
        }

        let source = ThirdTime(AtomicU32::new(0));
        let mut records = vec![row("@juan")];
        let summary = enrich_records(&mut records, &source, &EnrichPolicy::default()).await;

        assert_eq!(records[0].followers, 300);
        assert_eq!(source.0.load(Ordering::SeqCst), 3);
        assert_eq!(summary.resolved, 1);
        assert!(summary.unresolved.is_empty());
    }
}
