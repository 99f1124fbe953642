use std::fmt;

use thiserror::Error;

/// Which end of the requested range a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Start => write!(f, "start"),
            Bound::End => write!(f, "end"),
        }
    }
}

/// Errors raised by range extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A requested bound does not parse to an instant. Returned instead of
    /// any records, so it stays distinct from a valid but empty range.
    #[error("invalid {bound} date: {value:?}")]
    InvalidDate { bound: Bound, value: String },
}

pub type Result<T> = std::result::Result<T, RangeError>;
