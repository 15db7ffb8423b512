use thiserror::Error;

#[derive(Error, Debug)]
pub enum SccError {
    #[error("Invalid timestamp '{input}': {reason}")]
    TimeParse { input: String, reason: String },

    #[error("Malformed caption block #{index}: {excerpt}")]
    MalformedBlock { index: usize, excerpt: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SccError {
    pub(crate) fn time_parse(input: &str, reason: impl Into<String>) -> Self {
        SccError::TimeParse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SccError>;
