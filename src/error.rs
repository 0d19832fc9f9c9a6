/// Failure of a single upstream request.
///
/// Every transport, status and decoding problem other than a missing
/// resource collapses into [`ApiError::Transport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

impl ApiError {
    pub fn transport(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
