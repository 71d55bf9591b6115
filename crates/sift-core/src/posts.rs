use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::app_config::TopicConfig;

/// One post exactly as the search source delivered it.
///
/// Engagement counts stay as raw text: sources are allowed to hand back
/// blank or whitespace-only values, which the mapper reads as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    /// Account handle of the author.
    pub handle: String,
    /// Display name of the author.
    pub display_name: String,
    pub text: String,
    /// Text of attached media or a quoted post, if any.
    pub embedded_text: Option<String>,
    pub url: String,
    /// Post timestamp, copied verbatim into the table.
    pub timestamp: String,
    pub likes: String,
    pub replies: String,
    pub shares: String,
}

impl RawPost {
    /// The embedded caption, treating an empty string as absent.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.embedded_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Profile attributes returned by a single successful profile lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub following: u64,
    pub followers: u64,
    /// Join date as shown on the profile, e.g. `"Joined September 2015"`.
    pub joined: String,
    pub bio: String,
    pub location: String,
    pub birthday: Option<String>,
    pub website: Option<String>,
}

/// Search terms and the date window handed to the post source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keywords: Vec<String>,
    pub hashtags: Vec<String>,
    pub since: NaiveDate,
    pub until: NaiveDate,
}

impl SearchQuery {
    /// `<since>---<until>`, the key the final table is stored under.
    #[must_use]
    pub fn range_key(&self) -> String {
        format!(
            "{}---{}",
            self.since.format("%Y-%m-%d"),
            self.until.format("%Y-%m-%d")
        )
    }
}

/// Constant provenance for one run, stamped onto every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    pub topic: TopicConfig,
    pub collector: String,
    pub keywords: Vec<String>,
}

impl RunMetadata {
    #[must_use]
    pub fn joined_keywords(&self) -> String {
        self.keywords.join(", ")
    }
}
