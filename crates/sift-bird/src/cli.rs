//! Subprocess wrapper around the `bird` executable.

use sift_core::AppConfig;

use crate::error::BirdError;

/// Location of the `bird` binary plus the session cookies it needs.
#[derive(Clone)]
pub struct BirdCli {
    bin: String,
    auth_token: Option<String>,
    ct0: Option<String>,
}

impl std::fmt::Debug for BirdCli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BirdCli")
            .field("bin", &self.bin)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[redacted]"))
            .field("ct0", &self.ct0.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

impl BirdCli {
    #[must_use]
    pub fn new(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            auth_token: None,
            ct0: None,
        }
    }

    #[must_use]
    pub fn with_credentials(mut self, auth_token: Option<String>, ct0: Option<String>) -> Self {
        self.auth_token = auth_token;
        self.ct0 = ct0;
        self
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.bird_bin.clone())
            .with_credentials(config.twitter_auth_token.clone(), config.twitter_ct0.clone())
    }

    /// Full argument list for a `bird` invocation.
    ///
    /// Credentials are only passed when both halves are present; otherwise
    /// `bird` falls back to whatever session it has stored itself.
    pub(crate) fn args(&self, args: &[&str]) -> Vec<String> {
        let mut full: Vec<String> = args.iter().map(|a| (*a).to_owned()).collect();
        if let (Some(auth_token), Some(ct0)) = (&self.auth_token, &self.ct0) {
            full.extend([
                "--auth-token".to_owned(),
                auth_token.clone(),
                "--ct0".to_owned(),
                ct0.clone(),
            ]);
        }
        full
    }

    /// Runs `bird <args>` and returns its stdout.
    ///
    /// # Errors
    ///
    /// Returns [`BirdError::Spawn`] if the executable cannot be started and
    /// [`BirdError::Exit`] if it exits non-zero.
    pub(crate) async fn run(&self, args: &[&str]) -> Result<Vec<u8>, BirdError> {
        let command = args.first().copied().unwrap_or_default().to_owned();

        let output = tokio::process::Command::new(&self.bin)
            .args(self.args(args))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| BirdError::Spawn {
                bin: self.bin.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(BirdError::Exit {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(output.stdout)
    }
}
