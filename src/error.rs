use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(format!("JSON error: {}", err))
    }
}

impl From<quick_xml::DeError> for AppError {
    fn from(err: quick_xml::DeError) -> Self {
        AppError::Parse(format!("XML error: {}", err))
    }
}

impl AppError {
    /// Transport-level failures (network or non-2xx status) as opposed to
    /// malformed-payload failures. Both trigger fallback at the aggregator;
    /// the distinction only matters for logging.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::UpstreamStatus(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

// Alias for convenience
pub type Error = AppError;
