use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("post search failed: {0}")]
    Search(#[source] BoxError),

    #[error("malformed {field} count \"{value}\" on {url}")]
    MalformedCount {
        url: String,
        field: &'static str,
        value: String,
    },

    #[error("operator input unavailable: {0}")]
    OperatorInput(#[from] std::io::Error),

    #[error("failed to persist table for {range}: {source}")]
    Persist {
        range: String,
        #[source]
        source: BoxError,
    },
}
