//! The fixed output row and its column schema.

use serde::Serialize;

/// Column headers of the final table, in output order.
pub const COLUMNS: [&str; 33] = [
    "ID",
    "Timestamp",
    "Tweet URL",
    "Group",
    "Collector",
    "Category",
    "Topic",
    "Keywords",
    "Account handle",
    "Account name",
    "Account bio",
    "Account type",
    "Joined",
    "Following",
    "Followers",
    "Location",
    "Tweet",
    "Tweet Translated",
    "Tweet Type",
    "Date posted",
    "Screenshot",
    "Content type",
    "Likes",
    "Replies",
    "Retweets",
    "Quote Tweets",
    "Views",
    "Rating",
    "Reasoning",
    "Remarks",
    "Tweet ID",
    "Reviewer",
    "Review",
];

/// One normalized row of the final table.
///
/// Field order matches [`COLUMNS`]. Provenance and post fields are filled by
/// the mapper, enrichment fields by the profile fetcher. The remaining
/// fields are left blank for reviewers downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Tweet URL")]
    pub tweet_url: String,
    #[serde(rename = "Group")]
    pub group: u32,
    #[serde(rename = "Collector")]
    pub collector: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Topic")]
    pub topic: String,
    #[serde(rename = "Keywords")]
    pub keywords: String,
    #[serde(rename = "Account handle")]
    pub account_handle: String,
    #[serde(rename = "Account name")]
    pub account_name: String,
    #[serde(rename = "Account bio")]
    pub account_bio: String,
    #[serde(rename = "Account type")]
    pub account_type: String,
    /// `MM/YYYY`, or empty when unknown.
    #[serde(rename = "Joined")]
    pub joined: String,
    #[serde(rename = "Following")]
    pub following: u64,
    #[serde(rename = "Followers")]
    pub followers: u64,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Tweet")]
    pub tweet: String,
    #[serde(rename = "Tweet Translated")]
    pub tweet_translated: String,
    #[serde(rename = "Tweet Type")]
    pub tweet_type: String,
    #[serde(rename = "Date posted")]
    pub date_posted: String,
    #[serde(rename = "Screenshot")]
    pub screenshot: String,
    #[serde(rename = "Content type")]
    pub content_type: String,
    #[serde(rename = "Likes")]
    pub likes: u64,
    #[serde(rename = "Replies")]
    pub replies: u64,
    #[serde(rename = "Retweets")]
    pub retweets: u64,
    #[serde(rename = "Quote Tweets")]
    pub quote_tweets: u64,
    #[serde(rename = "Views")]
    pub views: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Reasoning")]
    pub reasoning: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "Tweet ID")]
    pub tweet_id: String,
    #[serde(rename = "Reviewer")]
    pub reviewer: String,
    #[serde(rename = "Review")]
    pub review: String,
}

impl OutputRecord {
    /// True when none of the enrichment fields have been filled.
    #[must_use]
    pub fn is_unenriched(&self) -> bool {
        self.account_bio.is_empty()
            && self.joined.is_empty()
            && self.following == 0
            && self.followers == 0
            && self.location.is_empty()
    }
}
