use std::path::PathBuf;
use thiserror::Error;

/// Failures while talking to the recognition service
#[derive(Debug, Error)]
pub enum RequestError {
    /// The server could not be reached or the exchange broke off
    #[error("transport failure: {0}")]
    Transport(String),

    /// A local file that should be uploaded could not be read
    #[error("failed to read {path}: {source}")]
    ReadUpload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client itself could not be set up
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl RequestError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
