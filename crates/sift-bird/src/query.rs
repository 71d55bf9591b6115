//! Search query construction for `bird search`.

use sift_core::SearchQuery;

/// Builds the platform search string for `query`.
///
/// Keywords and hashtags are OR-ed into one group, followed by the
/// `since:`/`until:` date operators:
///
/// ```text
/// (fakevp OR "leni mandaraya" OR #FakeVP) since:2016-01-01 until:2016-03-01
/// ```
#[must_use]
pub fn build_search_query(query: &SearchQuery) -> String {
    let keywords = query
        .keywords
        .iter()
        .map(|k| k.trim().replace('"', ""))
        .filter(|k| !k.is_empty())
        .map(|k| {
            if k.contains(char::is_whitespace) {
                format!("\"{k}\"")
            } else {
                k
            }
        });

    let hashtags = query
        .hashtags
        .iter()
        .map(|h| h.trim().trim_start_matches('#'))
        .filter(|h| !h.is_empty())
        .map(|h| format!("#{h}"));

    let terms: Vec<String> = keywords.chain(hashtags).collect();

    let dates = format!(
        "since:{} until:{}",
        query.since.format("%Y-%m-%d"),
        query.until.format("%Y-%m-%d")
    );

    match terms.len() {
        0 => dates,
        1 => format!("{} {dates}", terms[0]),
        _ => format!("({}) {dates}", terms.join(" OR ")),
    }
}
