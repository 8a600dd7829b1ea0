//! Error types for placement resolution

use thiserror::Error;

/// Errors that can occur when turning untyped input into placements
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The placement name is not one of the twelve recognized variants
    #[error("invalid placement '{value}' (valid placements: {valid})")]
    InvalidPlacement { value: String, valid: String },
}

impl PlacementError {
    /// Create an invalid placement error listing the accepted names
    pub fn invalid(value: impl Into<String>) -> Self {
        let valid = crate::placement::Placement::ALL
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ");
        Self::InvalidPlacement {
            value: value.into(),
            valid,
        }
    }
}
