use thiserror::Error;

/// Errors raised at the plant boundary.
///
/// The dynamics and reward functions themselves never fail; these cover
/// malformed inputs and configurations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlantError {
    #[error("dimension mismatch: expected {expected} entries, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("invalid plant configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse plant configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for PlantError {
    fn from(err: serde_json::Error) -> Self {
        PlantError::Parse(err.to_string())
    }
}
