use thiserror::Error as ThisError;
use uniffi::Error;

#[derive(Debug, ThisError, Error)]
#[non_exhaustive]
pub enum LiftlogError {
    #[error("error: {0}")]
    Common(String),
}

impl From<anyhow::Error> for LiftlogError {
    fn from(e: anyhow::Error) -> Self {
        LiftlogError::Common(e.to_string())
    }
}

impl From<String> for LiftlogError {
    fn from(s: String) -> Self {
        LiftlogError::Common(s)
    }
}

impl From<&str> for LiftlogError {
    fn from(s: &str) -> Self {
        LiftlogError::Common(s.to_string())
    }
}
