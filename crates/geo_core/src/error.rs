use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream fetch from {endpoint} failed: {message}")]
    UpstreamFetch { endpoint: String, message: String },

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    pub fn upstream(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::UpstreamFetch {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// True for errors caused by the caller rather than by this service or its upstreams.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
