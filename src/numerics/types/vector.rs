// src/numerics/types/vector.rs
// Vector3 and Vector4 with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use core::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;

/// Three component vector used for translations, scale factors and directions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Four component vector; the homogeneous operand of `Matrix4x4` and the
/// result type of its row and column accessors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Vector4<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// Conditional impls for serde
impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T> Serialize for Vector4<T>
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

impl<'de, T> Deserialize<'de> for Vector4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(T, T, T, T)>::deserialize(deserializer)?;
        Ok(Vector4 { x, y, z, w })
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction. A zero vector yields NaN components.
    pub fn normalize(&self) -> Self {
        *self * (T::one() / self.length())
    }

    /// Extend into homogeneous coordinates with the given `w`.
    pub fn extend(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl<T: FloatingPoint> Vector4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Drop the `w` component.
    pub fn truncate(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: FloatingPoint> Add for Vector4<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w + other.w)
    }
}

impl<T: FloatingPoint> Sub for Vector4<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w - other.w)
    }
}

impl<T: FloatingPoint> Neg for Vector4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector4<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

// Conversions between vectors and tuples / arrays

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

#[allow(clippy::from_over_into)]
impl<T: FloatingPoint> Into<(T, T, T)> for Vector3<T> {
    fn into(self) -> (T, T, T) {
        (self.x, self.y, self.z)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

#[allow(clippy::from_over_into)]
impl<T: FloatingPoint> Into<[T; 3]> for Vector3<T> {
    fn into(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: FloatingPoint> From<[T; 4]> for Vector4<T> {
    fn from(array: [T; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

#[allow(clippy::from_over_into)]
impl<T: FloatingPoint> Into<[T; 4]> for Vector4<T> {
    fn into(self) -> [T; 4] {
        self.to_array()
    }
}

impl<T: FloatingPoint> From<(T, T, T, T)> for Vector4<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

// GPU interchange: both layouts are #[repr(C)] runs of T with no padding.
unsafe impl<T: FloatingPoint + bytemuck::Zeroable> bytemuck::Zeroable for Vector3<T> {}
unsafe impl<T: FloatingPoint + bytemuck::Pod> bytemuck::Pod for Vector3<T> {}
unsafe impl<T: FloatingPoint + bytemuck::Zeroable> bytemuck::Zeroable for Vector4<T> {}
unsafe impl<T: FloatingPoint + bytemuck::Pod> bytemuck::Pod for Vector4<T> {}

// Tolerance comparisons, componentwise.

impl<T: FloatingPoint + AbsDiffEq<Epsilon = T>> AbsDiffEq for Vector3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T: FloatingPoint + RelativeEq<Epsilon = T>> RelativeEq for Vector3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl<T: FloatingPoint + AbsDiffEq<Epsilon = T>> AbsDiffEq for Vector4<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: FloatingPoint + RelativeEq<Epsilon = T>> RelativeEq for Vector4<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: FloatingPoint + UlpsEq<Epsilon = T>> UlpsEq for Vector4<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
