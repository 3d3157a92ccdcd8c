//! Error type for the numerics crate.

/// Errors reported by validated operations.
///
/// The default (lenient) algebra never produces these except for row and
/// column access; everything else comes from the strict variants in
/// `numerics::checked` or from configuration parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericsError {
    #[error("{axis} index {index} is out of range for a 4x4 matrix (expected 0..=3)")]
    IndexOutOfRange { axis: &'static str, index: usize },

    #[error("Matrix is singular: determinant {determinant} is within tolerance of zero")]
    SingularMatrix { determinant: f64 },

    #[error("Degenerate projection: {0}")]
    DegenerateProjection(String),

    #[error("Quaternion is not unit length: |q| = {length}")]
    NonUnitQuaternion { length: f64 },

    #[error("Buffer overflow: need {required} floats, capacity is {available}")]
    BufferOverflow { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, NumericsError>;
