use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
/// Everything that can go wrong while looking up a track
pub enum Error {
    /// Network failure or a non-success HTTP status
    #[error("LastFM request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body is not JSON or misses the expected fields
    #[error("LastFM Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Well-formed body that still can't produce a track
    #[error("LastFM API unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Error envelope reported by Last.fm itself
    #[error("LastFM API error {code}: {message}")]
    Api {
        /// Last.fm error code, e.g. 10 for an invalid API key
        code: i64,
        /// Human readable message sent along with the code
        message: String,
    },

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// True when the request never produced a usable HTTP response
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Configuration(format!("invalid API url: {err}"))
    }
}
