use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Errors reported by the fit/transform surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalerError {
    /// `transform` or `inverse_transform` called before a successful `fit`.
    NotFitted,
    /// Column count differs from the one seen during `fit`.
    ShapeMismatch { expected: usize, found: usize },
    /// Spread of `column` is exactly zero.
    DivisionByZero { column: usize },
    InvalidInput(String),
}

impl fmt::Display for ScalerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScalerError::NotFitted => write!(f, "Scaler has not been fitted; call fit first"),
            ScalerError::ShapeMismatch { expected, found } => write!(
                f,
                "Expected {} feature columns, got {}",
                expected, found
            ),
            ScalerError::DivisionByZero { column } => write!(
                f,
                "Feature column {} has zero spread; cannot scale a constant column",
                column
            ),
            ScalerError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl Error for ScalerError {}

impl From<ShapeError> for ScalerError {
    fn from(err: ShapeError) -> Self {
        ScalerError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_column() {
        let err = ScalerError::DivisionByZero { column: 3 };
        assert!(err.to_string().contains("column 3"));
    }

    #[test]
    fn shape_error_becomes_invalid_input() {
        let err: ScalerError = ShapeError::BufferLength {
            rows: 2,
            cols: 2,
            len: 3,
        }
        .into();
        assert!(matches!(err, ScalerError::InvalidInput(_)));
    }
}
