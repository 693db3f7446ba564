//! Error type shared by all fallible operations.

use thiserror::Error;

/// Result type alias using [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors reported by operations that cannot produce a meaningful value for their input.
///
/// Every variant describes a degenerate *input*; none of them are transient, so retrying the same
/// operation with the same values will fail the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A vector or matrix column with a length of zero was normalized.
    #[error("attempt to normalize a vector of length zero")]
    DivisionByZero,

    /// A matrix with a determinant of zero was inverted.
    #[error("attempt to invert a singular matrix")]
    SingularMatrix,

    /// A symmetric-only algorithm was called on a matrix whose off-diagonal elements differ.
    #[error("matrix is not symmetric")]
    NotSymmetric,

    /// A quaternion with a norm of zero was normalized.
    #[error("attempt to normalize a zero quaternion")]
    NormalizeZeroQuaternion,

    /// A quaternion with a norm of zero was inverted.
    #[error("attempt to invert a zero quaternion")]
    InvertZeroQuaternion,

    /// A rotation matrix was requested from a quaternion with a norm of zero.
    #[error("cannot create a rotation matrix from a zero quaternion")]
    MatrixFromZeroQuaternion,

    /// A slice with the wrong number of elements was converted to a fixed-size type.
    #[error("expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// Number of elements the target type holds.
        expected: usize,
        /// Number of elements that were provided.
        actual: usize,
    },
}
