// src/numerics/types/quaternion.rs
// Rotation quaternion with default precision f32.

use core::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Quaternion `(x, y, z, w)` where `w` is the scalar part.
///
/// Rotation code assumes unit length but nothing here enforces it; see
/// `Quaternion::normalize` and `checked::checked_rotation`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Quaternion<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Serialize for Quaternion<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z, &self.w).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Quaternion<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(T, T, T, T)>::deserialize(deserializer)?;
        Ok(Quaternion { x, y, z, w })
    }
}

impl<T: FloatingPoint> Quaternion<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The no-rotation quaternion `(0, 0, 0, 1)`.
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Rotation of `radians` about `axis`. The axis is normalized first.
    pub fn from_axis_angle(axis: Vector3<T>, radians: T) -> Self {
        let axis = axis.normalize();
        let half = radians / T::two();
        let s = half.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn normalize(&self) -> Self {
        let inv = T::one() / self.length();
        Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }
}

impl<T: FloatingPoint> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// Hamilton product: `a * b` applies `b` first, then `a`.
impl<T: FloatingPoint> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

unsafe impl<T: FloatingPoint + bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: FloatingPoint + bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

impl<T: FloatingPoint + AbsDiffEq<Epsilon = T>> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl<T: FloatingPoint + RelativeEq<Epsilon = T>> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}
