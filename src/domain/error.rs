//! Error types for the engine and pattern library.
//!
//! Every variant is a caller-input precondition violation. Operations
//! validate before mutating, so a returned error means the grid is
//! exactly as it was before the call.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifeError {
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("fill probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("malformed stamp {name}: {reason}")]
    MalformedStamp { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = LifeError::OutOfBounds {
            row: 5,
            col: 7,
            rows: 4,
            cols: 4,
        };
        assert_eq!(err.to_string(), "cell (5, 7) is outside the 4x4 grid");

        let err = LifeError::UnknownPattern("loaf".into());
        assert_eq!(err.to_string(), "unknown pattern: loaf");
    }
}
