//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every error is terminal for the call that raised it. Configuration
/// errors are raised before any simulation state exists, so a run either
/// completes or never starts.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame capacity below the minimum of one frame.
    #[error("Invalid frame count {0}: at least 1 frame is required")]
    InvalidCapacity(usize),

    /// A token in a textual reference string is not an integer.
    #[error("Invalid page reference {token:?} at position {position}")]
    InvalidReference { token: String, position: usize },

    /// The policy selector names none of FIFO, LRU, OPTIMAL, CLOCK.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// No preset scenario with the given id or name.
    #[error("Unknown scenario: {0:?}")]
    UnknownScenario(String),

    /// Random access past the end of a trace.
    #[error("No such step: index {index} (trace has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    /// A 1-based step number of 0 or past the end of a trace.
    #[error("No such step: {number} (trace has {len} steps)")]
    StepNumberOutOfRange { number: usize, len: usize },

    /// Export was asked for a trace with no steps.
    #[error("No simulation data to export")]
    EmptyTrace,

    /// I/O error while writing an exported trace.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by bad run inputs (capacity or references).
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidCapacity(_) | Error::InvalidReference { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(
            format!("{}", err),
            "Invalid frame count 0: at least 1 frame is required"
        );

        let err = Error::UnknownPolicy("MRU".to_string());
        assert_eq!(format!("{}", err), "Unknown replacement policy: \"MRU\"");

        let err = Error::StepOutOfRange { index: 9, len: 3 };
        assert_eq!(format!("{}", err), "No such step: index 9 (trace has 3 steps)");

        let err = Error::StepNumberOutOfRange { number: 4, len: 3 };
        assert_eq!(format!("{}", err), "No such step: 4 (trace has 3 steps)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_configuration_category() {
        assert!(Error::InvalidCapacity(0).is_invalid_configuration());
        assert!(Error::InvalidReference {
            token: "a".into(),
            position: 0
        }
        .is_invalid_configuration());
        assert!(!Error::UnknownPolicy("x".into()).is_invalid_configuration());
        assert!(!Error::EmptyTrace.is_invalid_configuration());
    }
}
