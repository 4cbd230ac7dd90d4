use thiserror::Error;

#[derive(Error, Debug)]
pub enum WikigapError {
    #[error("No input: select at least one category and a non-zero article cap")]
    NoInput,

    #[error("Discovery backend unavailable: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
