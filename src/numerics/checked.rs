//! Opt-in validated variants of the matrix operations.
//!
//! Under `ValidationMode::Lenient` every function returns exactly what the
//! unguarded operation returns, wrapped in `Ok`. Under `ValidationMode::Strict`
//! degenerate input is rejected before any division happens.

use crate::numerics::config::NumericsConfig;
use crate::numerics::error::{NumericsError, Result};
use crate::numerics::types::matrix::Matrix4x4;
use crate::numerics::types::quaternion::Quaternion;
use crate::numerics::types::traits::FloatingPoint;

fn reject<T>(err: NumericsError) -> Result<T> {
    tracing::warn!(error = %err, "strict validation rejected input");
    Err(err)
}

fn degenerate<T>(reason: &str) -> Result<T> {
    reject(NumericsError::DegenerateProjection(reason.to_string()))
}

impl<T: FloatingPoint> Matrix4x4<T> {
    pub fn checked_inverse(&self, config: &NumericsConfig) -> Result<Self> {
        if config.is_strict() {
            let det = self.determinant().to_f64();
            if !det.is_finite() || det.abs() <= config.singular_epsilon {
                return reject(NumericsError::SingularMatrix { determinant: det });
            }
        }
        Ok(self.inverse())
    }

    pub fn checked_normal_matrix(&self, config: &NumericsConfig) -> Result<Self> {
        self.transpose().checked_inverse(config)
    }

    pub fn checked_perspective(
        fov_radians: T,
        aspect: T,
        near: T,
        far: T,
        config: &NumericsConfig,
    ) -> Result<Self> {
        if config.is_strict() {
            let all_finite = [fov_radians, aspect, near, far].iter().all(|v| v.is_finite());
            if !all_finite {
                return degenerate("perspective parameters must be finite");
            }
            if fov_radians <= T::zero() {
                return degenerate("field of view must be positive");
            }
            if aspect == T::zero() {
                return degenerate("aspect ratio must be non-zero");
            }
            if near == far {
                return degenerate("near and far planes coincide");
            }
        }
        let m = Self::for_perspective(fov_radians, aspect, near, far);
        if config.is_strict() && !m.is_finite() {
            return degenerate("perspective produced non-finite cells");
        }
        Ok(m)
    }

    pub fn checked_ortho(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
        config: &NumericsConfig,
    ) -> Result<Self> {
        if config.is_strict() {
            if left == right {
                return degenerate("left and right planes coincide");
            }
            if bottom == top {
                return degenerate("bottom and top planes coincide");
            }
            if near == far {
                return degenerate("near and far planes coincide");
            }
        }
        let m = Self::for_ortho(left, right, bottom, top, near, far);
        if config.is_strict() && !m.is_finite() {
            return degenerate("orthographic projection produced non-finite cells");
        }
        Ok(m)
    }

    pub fn checked_rotation(q: Quaternion<T>, config: &NumericsConfig) -> Result<Self> {
        if config.is_strict() {
            let length = q.length().to_f64();
            if !length.is_finite() || (length - 1.0).abs() > config.unit_tolerance {
                return reject(NumericsError::NonUnitQuaternion { length });
            }
        }
        Ok(Self::for_rotation(q))
    }
}
