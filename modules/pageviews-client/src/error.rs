use thiserror::Error;

pub type Result<T> = std::result::Result<T, PageviewsError>;

#[derive(Debug, Error)]
pub enum PageviewsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid metrics URL: {0}")]
    Url(String),
}

impl From<reqwest::Error> for PageviewsError {
    fn from(err: reqwest::Error) -> Self {
        PageviewsError::Network(err.to_string())
    }
}
