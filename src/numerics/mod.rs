// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod vector;
    pub mod point;
    pub mod quaternion;
    pub mod matrix;
}

pub mod buffer;
pub mod checked;
pub mod config;
pub mod error;

pub use buffer::{FloatBuffer, MatrixSink, MATRIX_FLOATS};
pub use config::{parse_parameters, NumericsConfig, ValidationMode};
pub use error::{NumericsError, Result};
pub use types::matrix::Matrix4x4;
pub use types::point::Point3;
pub use types::quaternion::Quaternion;
pub use types::traits::FloatingPoint;
pub use types::vector::{Vector3, Vector4};
