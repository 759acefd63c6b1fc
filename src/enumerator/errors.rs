use thiserror::Error;

use crate::charset::CharsetError;

/// Errors reported by the strict constructor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnumeratorError {
    #[error("Charset error: {0}")]
    Charset(#[from] CharsetError),
    #[error("Minimum length must be at least 1")]
    ZeroMinLength,
    #[error("Invalid length bounds: min={min}, max={max}")]
    InvalidBounds { min: usize, max: usize },
}
