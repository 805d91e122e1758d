//! Value-level parse errors.
//!
//! The parser itself never fails; these errors are rendered into
//! reporting-sink messages at the interpretation boundary and parsing
//! continues.

use thiserror::Error;

/// Result type for value-level parsing.
pub type ValueResult<T> = Result<T, ValueError>;

/// A non-fatal error while interpreting a property value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The raw value could not be read as a calendar date.
    #[error("invalid date format {0}")]
    InvalidDate(String),
}
