//! # Numerics - Transform Matrices for GPU-facing 3D Code
//!
//! A column-major 4x4 matrix with the vector and quaternion types it works
//! with. Matrices are plain `Copy` values: every operation returns a new one,
//! and the memory layout is the flat column-major order graphics APIs expect.
//!
//! ## Core Features
//!
//! - **Construction**: identity, perspective and orthographic projection,
//!   rotation from a quaternion, translation, scale, combined TRS
//! - **Algebra**: negation, scalar/matrix/vector products, transpose,
//!   determinant, adjugate inverse, normal matrix
//! - **Interchange**: flat column-major export, clear/fill/flip buffer writes,
//!   `bytemuck` casts for uniform uploads
//! - **Strict mode**: opt-in validated variants that report singular matrices
//!   and degenerate projections instead of producing Inf/NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use numerics::{FloatBuffer, Matrix4x4, Quaternion, Vector3, Vector4};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model: Matrix4x4 = Matrix4x4::for_translation_rotation_scale(
//!     Vector3::new(5.0, 6.0, 7.0),
//!     Quaternion::identity(),
//!     Vector3::new(2.0, 2.0, 2.0),
//! );
//!
//! // Scale first, then translate
//! let p = model * Vector4::new(1.0, 0.0, 0.0, 1.0);
//! assert_eq!(p, Vector4::new(7.0, 6.0, 7.0, 1.0));
//!
//! // Upload-ready storage
//! let mut buffer: FloatBuffer = FloatBuffer::for_matrix();
//! model.write_into(&mut buffer)?;
//! assert_eq!(buffer.as_slice(), &model.to_cols_array()[..]);
//!
//! // Out-of-range accessors are the one validated precondition
//! assert!(model.row(4).is_err());
//! # Ok(())
//! # }
//! ```

pub mod numerics;

// Re-export commonly used types for convenience
pub use numerics::{
    FloatBuffer, FloatingPoint, Matrix4x4, MatrixSink, NumericsConfig, NumericsError, Point3,
    Quaternion, ValidationMode, Vector3, Vector4,
};

/// Version information for the numerics crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
