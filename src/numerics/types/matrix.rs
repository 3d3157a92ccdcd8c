// src/numerics/types/matrix.rs
// Column-major 4x4 transform matrix.

use core::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};

use crate::numerics::error::{NumericsError, Result};
use crate::numerics::types::point::Point3;
use crate::numerics::types::quaternion::Quaternion;
use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::{Vector3, Vector4};

/// Row and column indices left over after deleting one, in ascending order.
const REMAINING: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];

/// 4x4 matrix stored column-major: `cols[col][row]`.
///
/// Memory order matches the flat export order, so a `Matrix4x4<f32>` can be
/// handed to a graphics API expecting column-major `mat4` data as is.
/// Values are immutable; every operation returns a new matrix.
///
/// Degenerate inputs are not rejected. Projections with zero spans and the
/// inverse of a singular matrix produce Inf/NaN cells. Use the `checked_*`
/// variants with a strict `NumericsConfig` to get errors instead.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Matrix4x4<T: FloatingPoint = f32> {
    cols: [[T; 4]; 4],
}

impl<T: FloatingPoint> Matrix4x4<T> {
    /// Build from sixteen cells in column-major order: the first four values
    /// are column 0 (`m00..m03`), the next four column 1, and so on.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self {
            cols: [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
        }
    }

    pub fn from_columns(c0: Vector4<T>, c1: Vector4<T>, c2: Vector4<T>, c3: Vector4<T>) -> Self {
        Self {
            cols: [c0.to_array(), c1.to_array(), c2.to_array(), c3.to_array()],
        }
    }

    pub fn from_cols_array(m: [T; 16]) -> Self {
        Self::new(
            m[0], m[1], m[2], m[3],
            m[4], m[5], m[6], m[7],
            m[8], m[9], m[10], m[11],
            m[12], m[13], m[14], m[15],
        )
    }

    pub fn from_cols_array_2d(cols: [[T; 4]; 4]) -> Self {
        Self { cols }
    }

    pub fn zero() -> Self {
        Self { cols: [[T::zero(); 4]; 4] }
    }

    pub fn identity() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::new(
            l, o, o, o,
            o, l, o, o,
            o, o, l, o,
            o, o, o, l,
        )
    }

    /// Right-handed perspective projection with `f = 1 / tan(fov / 2)`.
    ///
    /// Nothing is validated: `near == far`, `aspect == 0` or a zero field of
    /// view give non-finite cells.
    pub fn for_perspective(fov_radians: T, aspect: T, near: T, far: T) -> Self {
        let o = T::zero();
        let f = T::one() / (fov_radians / T::two()).tan();
        let range = near - far;
        Self::new(
            f / aspect, o, o, o,
            o, f, o, o,
            o, o, (far + near) / range, -T::one(),
            o, o, T::two() * far * near / range, o,
        )
    }

    /// Orthographic projection of the given box onto `[-1, 1]^3`.
    ///
    /// Depth uses the `-(far + near) / (far - near)` offset with a `-2 / depth`
    /// scale. Zero spans give non-finite cells.
    pub fn for_ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let o = T::zero();
        let two = T::two();
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Self::new(
            two / width, o, o, o,
            o, two / height, o, o,
            o, o, -two / depth, o,
            -(right + left) / width, -(top + bottom) / height, -(far + near) / depth, T::one(),
        )
    }

    /// Rotation matrix from a quaternion using the doubled cross-term form.
    ///
    /// The quaternion is used as given. A non-unit input produces a matrix
    /// that also scales.
    pub fn for_rotation(q: Quaternion<T>) -> Self {
        let o = T::zero();
        let l = T::one();
        let (x2, y2, z2) = (q.x + q.x, q.y + q.y, q.z + q.z);
        let (xx, xy, xz) = (q.x * x2, q.x * y2, q.x * z2);
        let (yy, yz, zz) = (q.y * y2, q.y * z2, q.z * z2);
        let (wx, wy, wz) = (q.w * x2, q.w * y2, q.w * z2);
        Self::new(
            l - (yy + zz), xy + wz, xz - wy, o,
            xy - wz, l - (xx + zz), yz + wx, o,
            xz + wy, yz - wx, l - (xx + yy), o,
            o, o, o, l,
        )
    }

    pub fn for_translation(t: Vector3<T>) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::new(
            l, o, o, o,
            o, l, o, o,
            o, o, l, o,
            t.x, t.y, t.z, l,
        )
    }

    pub fn for_scale(s: Vector3<T>) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::new(
            s.x, o, o, o,
            o, s.y, o, o,
            o, o, s.z, o,
            o, o, o, l,
        )
    }

    /// `T * R * S`: a point is scaled, then rotated, then translated.
    pub fn for_translation_rotation_scale(t: Vector3<T>, r: Quaternion<T>, s: Vector3<T>) -> Self {
        Self::for_translation(t)
            .mul_matrix(&Self::for_rotation(r))
            .mul_matrix(&Self::for_scale(s))
    }

    pub fn negate(&self) -> Self {
        self.map(|v| -v)
    }

    pub fn mul_scalar(&self, scalar: T) -> Self {
        self.map(|v| v * scalar)
    }

    /// Standard product `self * rhs`; each cell is a four-term sum evaluated
    /// left to right.
    pub fn mul_matrix(&self, rhs: &Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut cols = [[T::zero(); 4]; 4];
        for (col, out) in cols.iter_mut().enumerate() {
            for (row, cell) in out.iter_mut().enumerate() {
                *cell = a[0][row] * b[col][0]
                    + a[1][row] * b[col][1]
                    + a[2][row] * b[col][2]
                    + a[3][row] * b[col][3];
            }
        }
        Self { cols }
    }

    /// `self * v` with `v` as a column vector.
    pub fn mul_vector(&self, v: Vector4<T>) -> Vector4<T> {
        let m = &self.cols;
        let dot = |row: usize| m[0][row] * v.x + m[1][row] * v.y + m[2][row] * v.z + m[3][row] * v.w;
        Vector4::new(dot(0), dot(1), dot(2), dot(3))
    }

    /// Transform a position (`w = 1`). No perspective divide is applied.
    pub fn transform_point(&self, p: Point3<T>) -> Point3<T> {
        self.mul_vector(p.extend(T::one())).truncate()
    }

    /// Transform a direction (`w = 0`), ignoring translation.
    pub fn transform_vector(&self, v: Vector3<T>) -> Vector3<T> {
        self.mul_vector(v.extend(T::zero())).truncate()
    }

    pub fn transpose(&self) -> Self {
        let m = &self.cols;
        let mut cols = [[T::zero(); 4]; 4];
        for (col, out) in cols.iter_mut().enumerate() {
            for (row, cell) in out.iter_mut().enumerate() {
                *cell = m[row][col];
            }
        }
        Self { cols }
    }

    /// Determinant of the 3x3 submatrix left after deleting `col` and `row`.
    fn minor(&self, col: usize, row: usize) -> T {
        let cs = REMAINING[col];
        let rs = REMAINING[row];
        let a = |i: usize, j: usize| self.cols[cs[j]][rs[i]];
        a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
            - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
            + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))
    }

    /// Signed minor; the sign alternates with `col + row`.
    fn cofactor(&self, col: usize, row: usize) -> T {
        let minor = self.minor(col, row);
        if (col + row) % 2 == 0 { minor } else { -minor }
    }

    /// Cofactor expansion along the first column.
    pub fn determinant(&self) -> T {
        let c0 = &self.cols[0];
        c0[0] * self.minor(0, 0)
            - c0[1] * self.minor(0, 1)
            + c0[2] * self.minor(0, 2)
            - c0[3] * self.minor(0, 3)
    }

    /// Classical adjugate inverse: `transpose(cofactors) * (1 / det)`.
    ///
    /// A singular matrix is not reported; `1 / 0` turns every cell into
    /// Inf or NaN.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == T::zero() {
            tracing::debug!(determinant = ?det, "inverting a singular matrix, result is non-finite");
        }
        let mut cofactors = [[T::zero(); 4]; 4];
        for (col, out) in cofactors.iter_mut().enumerate() {
            for (row, cell) in out.iter_mut().enumerate() {
                *cell = self.cofactor(col, row);
            }
        }
        Self { cols: cofactors }
            .transpose()
            .mul_scalar(T::one() / det)
    }

    /// Inverse-transpose, for transforming surface normals.
    pub fn normal_matrix(&self) -> Self {
        self.transpose().inverse()
    }

    pub fn column(&self, index: usize) -> Result<Vector4<T>> {
        self.cols
            .get(index)
            .map(|&c| Vector4::from(c))
            .ok_or(NumericsError::IndexOutOfRange { axis: "column", index })
    }

    pub fn row(&self, index: usize) -> Result<Vector4<T>> {
        if index > 3 {
            return Err(NumericsError::IndexOutOfRange { axis: "row", index });
        }
        let m = &self.cols;
        Ok(Vector4::new(m[0][index], m[1][index], m[2][index], m[3][index]))
    }

    /// Single cell at `col`, `row`.
    pub fn get(&self, col: usize, row: usize) -> Result<T> {
        let column = self.column(col)?;
        if row > 3 {
            return Err(NumericsError::IndexOutOfRange { axis: "row", index: row });
        }
        Ok(column.to_array()[row])
    }

    /// The sixteen cells in column-major order `[m00, m01, m02, m03, m10, ..]`.
    pub fn to_cols_array(&self) -> [T; 16] {
        core::array::from_fn(|i| self.cols[i / 4][i % 4])
    }

    pub fn to_cols_array_2d(&self) -> [[T; 4]; 4] {
        self.cols
    }

    /// Borrow the sixteen cells as a flat column-major slice without copying.
    pub fn as_slice(&self) -> &[T] {
        self.cols.as_flattened()
    }

    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|v| v.is_finite())
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self { cols: self.cols.map(|c| c.map(&f)) }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let mut cols = self.cols;
        for (out, theirs) in cols.iter_mut().zip(other.cols.iter()) {
            for (cell, &b) in out.iter_mut().zip(theirs.iter()) {
                *cell = f(*cell, b);
            }
        }
        Self { cols }
    }
}

impl<T: FloatingPoint> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatingPoint> From<[[T; 4]; 4]> for Matrix4x4<T> {
    fn from(cols: [[T; 4]; 4]) -> Self {
        Self::from_cols_array_2d(cols)
    }
}

impl<T: FloatingPoint> From<[T; 16]> for Matrix4x4<T> {
    fn from(m: [T; 16]) -> Self {
        Self::from_cols_array(m)
    }
}

#[allow(clippy::from_over_into)]
impl<T: FloatingPoint> Into<[T; 16]> for Matrix4x4<T> {
    fn into(self) -> [T; 16] {
        self.to_cols_array()
    }
}

impl<T: FloatingPoint> Neg for Matrix4x4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<T: FloatingPoint> Add for Matrix4x4<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip_with(&other, |a, b| a + b)
    }
}

impl<T: FloatingPoint> Sub for Matrix4x4<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.zip_with(&other, |a, b| a - b)
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix4x4<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.mul_scalar(scalar)
    }
}

impl<T: FloatingPoint> Mul for Matrix4x4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_matrix(&rhs)
    }
}

impl<T: FloatingPoint> Mul<Vector4<T>> for Matrix4x4<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        self.mul_vector(rhs)
    }
}

// Serialized as the column-major [[T; 4]; 4].
impl<T> Serialize for Matrix4x4<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.cols.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix4x4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cols = <[[T; 4]; 4]>::deserialize(deserializer)?;
        Ok(Matrix4x4 { cols })
    }
}

unsafe impl<T: FloatingPoint + bytemuck::Zeroable> bytemuck::Zeroable for Matrix4x4<T> {}
unsafe impl<T: FloatingPoint + bytemuck::Pod> bytemuck::Pod for Matrix4x4<T> {}

impl<T: FloatingPoint + AbsDiffEq<Epsilon = T>> AbsDiffEq for Matrix4x4<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: FloatingPoint + RelativeEq<Epsilon = T>> RelativeEq for Matrix4x4<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: FloatingPoint + UlpsEq<Epsilon = T>> UlpsEq for Matrix4x4<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
