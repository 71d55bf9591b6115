use std::path::PathBuf;

/// The fixed labels stamped on every row of a run.
///
/// Loaded once from the environment so the same binary can serve several
/// topics without recompilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicConfig {
    pub group: u32,
    pub category: String,
    pub topic: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub topic: TopicConfig,
    pub log_level: String,
    pub max_profile_attempts: u32,
    pub output_dir: PathBuf,
    pub bird_bin: String,
    pub search_limit: u32,
    pub notify: bool,
    pub twitter_auth_token: Option<String>,
    pub twitter_ct0: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("topic", &self.topic)
            .field("log_level", &self.log_level)
            .field("max_profile_attempts", &self.max_profile_attempts)
            .field("output_dir", &self.output_dir)
            .field("bird_bin", &self.bird_bin)
            .field("search_limit", &self.search_limit)
            .field("notify", &self.notify)
            .field(
                "twitter_auth_token",
                &self.twitter_auth_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "twitter_ct0",
                &self.twitter_ct0.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
