use thiserror::Error;

/// Errors raised by the estimator.
///
/// Every failure is an input problem: the projections themselves are total
/// over valid inputs, so there is a single error kind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl EstimatorError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        EstimatorError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Human readable description of what is wrong with the input.
    pub fn reason(&self) -> &str {
        match self {
            EstimatorError::InvalidInput { reason } => reason,
        }
    }
}

impl From<serde_json::Error> for EstimatorError {
    fn from(err: serde_json::Error) -> Self {
        EstimatorError::invalid_input(err.to_string())
    }
}

impl From<toml::de::Error> for EstimatorError {
    fn from(err: toml::de::Error) -> Self {
        EstimatorError::invalid_input(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
