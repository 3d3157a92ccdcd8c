// src/numerics/types/point.rs
// Point3 is an alias for Vector3.

use super::vector::Vector3;

/// Point3 is an alias to Vector3 to represent positions in space.
///
/// The distinction only matters to `Matrix4x4::transform_point`, which applies
/// translation, versus `Matrix4x4::transform_vector`, which does not.
pub type Point3<T = f32> = Vector3<T>;
