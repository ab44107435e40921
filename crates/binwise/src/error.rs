//! Error types for bucketization.

use thiserror::Error;

/// A specialized Result type for bucketization operations.
pub type BinResult<T> = Result<T, BinError>;

/// Errors that can occur when validating break points or output buffers.
///
/// The raw [`bucketize`](crate::bucketize::bucketize) operation never fails;
/// these errors only come from the validated entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BinError {
    /// Break points are not in non-decreasing order.
    #[error("Break points must be non-decreasing: breaks[{index}] = {current} < {previous}")]
    UnsortedBreaks {
        /// Index of the first offending break point.
        index: usize,
        /// The break point preceding it.
        previous: f64,
        /// The offending break point.
        current: f64,
    },

    /// A break point is NaN.
    #[error("Break point at index {index} is NaN")]
    NanBreak {
        /// Index of the NaN break point.
        index: usize,
    },

    /// Output buffer length differs from the value sequence length.
    #[error("Output length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Required length (number of values).
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

impl BinError {
    /// Creates an unsorted breaks error.
    #[must_use]
    pub fn unsorted_breaks(index: usize, previous: f64, current: f64) -> Self {
        Self::UnsortedBreaks {
            index,
            previous,
            current,
        }
    }

    /// Creates a NaN break error.
    #[must_use]
    pub fn nan_break(index: usize) -> Self {
        Self::NanBreak { index }
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BinError::unsorted_breaks(2, 3.0, 1.5);
        let msg = err.to_string();
        assert!(msg.contains("breaks[2]"));
        assert!(msg.contains("1.5"));

        let err = BinError::nan_break(4);
        assert!(err.to_string().contains("index 4"));

        let err = BinError::length_mismatch(10, 7);
        assert!(err.to_string().contains("expected 10, got 7"));
    }

    #[test]
    fn test_error_clone() {
        let err = BinError::length_mismatch(1, 2);
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
