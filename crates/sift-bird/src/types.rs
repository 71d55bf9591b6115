//! Wire shapes of `bird --json` output.

use serde::Deserialize;
use serde_json::Value;
use sift_core::{EnrichmentResult, RawPost};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BirdTweet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub author: BirdAuthor,
    #[serde(default)]
    pub like_count: Option<Value>,
    #[serde(default)]
    pub reply_count: Option<Value>,
    #[serde(default)]
    pub retweet_count: Option<Value>,
    #[serde(default)]
    pub quoted_tweet: Option<BirdQuoted>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BirdAuthor {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BirdQuoted {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BirdUser {
    #[serde(default)]
    pub followers_count: Option<Value>,
    #[serde(default)]
    pub following_count: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Profile-page join label, e.g. `"Joined September 2015"`.
    #[serde(default)]
    pub joined: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Renders an engagement count the way it arrived: numbers as digits,
/// strings verbatim, anything else as blank.
fn count_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Reads a profile count leniently: numbers, digit strings (commas allowed)
/// and anything unusable as zero.
fn count_number(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().replace(',', "").parse().unwrap_or_default(),
        _ => 0,
    }
}

impl BirdTweet {
    pub(crate) fn url(&self) -> String {
        format!(
            "https://x.com/{}/status/{}",
            self.author.username, self.id
        )
    }

    pub(crate) fn into_raw_post(self) -> RawPost {
        let url = self.url();
        RawPost {
            handle: format!("@{}", self.author.username),
            display_name: self.author.name.unwrap_or_default(),
            text: self.text,
            embedded_text: self
                .quoted_tweet
                .and_then(|q| q.text)
                .filter(|t| !t.trim().is_empty()),
            url,
            timestamp: self.created_at.unwrap_or_default(),
            likes: count_text(self.like_count.as_ref()),
            replies: count_text(self.reply_count.as_ref()),
            shares: count_text(self.retweet_count.as_ref()),
        }
    }
}

impl BirdUser {
    pub(crate) fn into_enrichment(self) -> EnrichmentResult {
        EnrichmentResult {
            following: count_number(self.following_count.as_ref()),
            followers: count_number(self.followers_count.as_ref()),
            joined: self.joined.unwrap_or_default(),
            bio: self.description.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            birthday: self.birthday,
            website: self.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_bird_tweet() {
        let json = r#"[
            {
                "id": "1234567890",
                "text": "Si Leni daw nandaya",
                "author": { "username": "testuser" }
            }
        ]"#;
        let tweets: Vec<BirdTweet> = serde_json::from_str(json).unwrap();
        assert_eq!(tweets.len(), 1);
        assert_eq!(tweets[0].id, "1234567890");
        assert_eq!(tweets[0].author.username, "testuser");
        assert!(tweets[0].like_count.is_none());
    }

    #[test]
    fn deserialize_extra_fields_ignored() {
        let json = r#"[
            {
                "id": "999",
                "text": "fake vp",
                "createdAt": "2016-05-10T00:00:00Z",
                "likeCount": 42,
                "retweetCount": "7",
                "replyCount": null,
                "author": { "username": "juan", "name": "Juan dela Cruz" },
                "authorId": "111",
                "lang": "tl"
            }
        ]"#;
        let tweets: Vec<BirdTweet> = serde_json::from_str(json).unwrap();
        let post = tweets.into_iter().next().unwrap().into_raw_post();
        assert_eq!(post.handle, "@juan");
        assert_eq!(post.display_name, "Juan dela Cruz");
        assert_eq!(post.url, "https://x.com/juan/status/999");
        assert_eq!(post.timestamp, "2016-05-10T00:00:00Z");
        assert_eq!(post.likes, "42");
        assert_eq!(post.shares, "7");
        assert_eq!(post.replies, "");
        assert_eq!(post.embedded_text, None);
    }

    #[test]
    fn quoted_tweet_text_becomes_embedded_caption() {
        let json = r#"{
            "id": "5",
            "text": "look at this",
            "author": { "username": "maria" },
            "quotedTweet": { "id": "4", "text": "original claim" }
        }"#;
        let tweet: BirdTweet = serde_json::from_str(json).unwrap();
        assert_eq!(
            tweet.into_raw_post().embedded_text.as_deref(),
            Some("original claim")
        );
    }

    #[test]
    fn blank_quoted_text_is_no_caption() {
        let json = r#"{
            "id": "5",
            "text": "look",
            "author": { "username": "maria" },
            "quotedTweet": { "text": "  " }
        }"#;
        let tweet: BirdTweet = serde_json::from_str(json).unwrap();
        assert_eq!(tweet.into_raw_post().embedded_text, None);
    }

    #[test]
    fn count_text_renders_each_shape() {
        assert_eq!(count_text(Some(&serde_json::json!(12))), "12");
        assert_eq!(count_text(Some(&serde_json::json!(" "))), " ");
        assert_eq!(count_text(Some(&Value::Null)), "");
        assert_eq!(count_text(Some(&serde_json::json!([1]))), "");
        assert_eq!(count_text(None), "");
    }

    #[test]
    fn deserialize_bird_user() {
        let json = r#"{
            "username": "juan",
            "followersCount": 1500,
            "followingCount": 300,
            "description": "Tagapagtanggol ng katotohanan",
            "location": "Cebu",
            "joined": "Joined September 2015",
            "birthday": null,
            "url": "https://juan.example"
        }"#;
        let user: BirdUser = serde_json::from_str(json).unwrap();
        let profile = user.into_enrichment();
        assert_eq!(profile.followers, 1500);
        assert_eq!(profile.following, 300);
        assert_eq!(profile.bio, "Tagapagtanggol ng katotohanan");
        assert_eq!(profile.location, "Cebu");
        assert_eq!(profile.joined, "Joined September 2015");
        assert_eq!(profile.birthday, None);
        assert_eq!(profile.website.as_deref(), Some("https://juan.example"));
    }

    #[test]
    fn sparse_bird_user_defaults_to_empty() {
        let user: BirdUser = serde_json::from_str(r#"{ "description": null }"#).unwrap();
        let profile = user.into_enrichment();
        assert_eq!(profile, EnrichmentResult::default());
    }

    #[test]
    fn null_user_counts_still_decode() {
        let json = r#"{
            "followersCount": null,
            "followingCount": "1,204",
            "joined": "Joined March 2009"
        }"#;
        let user: BirdUser = serde_json::from_str(json).unwrap();
        let profile = user.into_enrichment();
        assert_eq!(profile.followers, 0);
        assert_eq!(profile.following, 1204);
        assert_eq!(profile.joined, "Joined March 2009");
    }

    #[test]
    fn count_number_handles_each_shape() {
        assert_eq!(count_number(Some(&serde_json::json!(1500))), 1500);
        assert_eq!(count_number(Some(&serde_json::json!(" 42 "))), 42);
        assert_eq!(count_number(Some(&serde_json::json!(-3))), 0);
        assert_eq!(count_number(Some(&serde_json::json!("many"))), 0);
        assert_eq!(count_number(Some(&Value::Null)), 0);
        assert_eq!(count_number(None), 0);
    }
}
