/// Errors reported by the checked vector operations.
///
/// Out-of-range indexing is a contract violation and panics instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// The vector has zero magnitude and cannot be normalized.
    #[error("Cannot normalize a vector with zero magnitude")]
    Degenerate,

    /// A slice did not hold exactly as many components as the vector.
    #[error("Length mismatch: expected {expected} components, got {actual}")]
    LengthMismatch {
        /// Number of components of the vector type.
        expected: usize,
        /// Length of the provided slice.
        actual: usize,
    },
}
