use thiserror::Error;

pub type Result<T> = std::result::Result<T, MediaWikiError>;

#[derive(Debug, Error)]
pub enum MediaWikiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for MediaWikiError {
    fn from(err: reqwest::Error) -> Self {
        MediaWikiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for MediaWikiError {
    fn from(err: serde_json::Error) -> Self {
        MediaWikiError::Parse(err.to_string())
    }
}
