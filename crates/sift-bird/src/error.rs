use thiserror::Error;

#[derive(Debug, Error)]
pub enum BirdError {
    #[error("failed to spawn `{bin}`: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`bird {command}` exited with {status}: {stderr}")]
    Exit {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("could not decode `bird {command}` output: {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}
