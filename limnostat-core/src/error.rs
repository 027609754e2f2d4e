use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Insufficient sample size for {group}: required {required}, got {actual}")]
    InsufficientSample {
        group: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("Domain error in {function}: {detail}")]
    Domain {
        function: &'static str,
        detail: String,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Non-finite observation in {group} at index {index}: {value}")]
    NonFiniteObservation {
        group: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StatsError {
    pub fn domain(function: &'static str, detail: impl Into<String>) -> Self {
        StatsError::Domain {
            function,
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

// Implement From for common error types
impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        StatsError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for StatsError {
    fn from(err: validator::ValidationErrors) -> Self {
        StatsError::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for StatsError {
    fn from(err: config::ConfigError) -> Self {
        StatsError::Configuration(err.to_string())
    }
}
