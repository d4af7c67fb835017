use thiserror::Error;

use crate::models::photovoltaic::string::SeriesRangeError;

/// Errors that block a calculation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// The series range is invalid; nothing is computed.
    #[error("invalid series range")]
    InvalidRange(#[from] SeriesRangeError),
}
