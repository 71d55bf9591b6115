use crate::app_config::{AppConfig, TopicConfig};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        let value = lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))?;
        if value.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar(var.to_string()));
        }
        Ok(value)
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |raw: &str, var: &str| -> Result<u32, ConfigError> {
        raw.trim()
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let group_raw = require("SIFT_GROUP")?;
    let group = parse_u32(&group_raw, "SIFT_GROUP")?;
    let category = require("SIFT_CATEGORY")?;
    let topic = require("SIFT_TOPIC")?;

    let log_level = or_default("SIFT_LOG_LEVEL", "info");

    let max_profile_attempts = parse_u32(
        &or_default("SIFT_MAX_PROFILE_ATTEMPTS", "10"),
        "SIFT_MAX_PROFILE_ATTEMPTS",
    )?;
    if max_profile_attempts == 0 {
        return Err(invalid(
            "SIFT_MAX_PROFILE_ATTEMPTS",
            "must be at least 1".to_string(),
        ));
    }

    let output_dir = PathBuf::from(or_default("SIFT_OUTPUT_DIR", "."));
    let bird_bin = or_default("SIFT_BIRD_BIN", "bird");
    let search_limit = parse_u32(&or_default("SIFT_SEARCH_LIMIT", "100"), "SIFT_SEARCH_LIMIT")?;

    let notify_raw = or_default("SIFT_NOTIFY", "true");
    let notify = parse_bool(&notify_raw).ok_or_else(|| {
        invalid(
            "SIFT_NOTIFY",
            format!("expected true/false, got \"{notify_raw}\""),
        )
    })?;

    let twitter_auth_token = lookup("TWITTER_AUTH_TOKEN").ok().filter(|v| !v.is_empty());
    let twitter_ct0 = lookup("TWITTER_CT0").ok().filter(|v| !v.is_empty());

    Ok(AppConfig {
        topic: TopicConfig {
            group,
            category,
            topic,
        },
        log_level,
        max_profile_attempts,
        output_dir,
        bird_bin,
        search_limit,
        notify,
        twitter_auth_token,
        twitter_ct0,
    })
}

/// Parse a boolean flag. Accepts `true/false`, `1/0`, `yes/no`.
fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
