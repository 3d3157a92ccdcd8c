// src/numerics/types/traits.rs
// Scalar trait shared by every numerics value type.

/// FloatingPoint is the scalar bound for vectors, quaternions and matrices.
///
/// Only `f32` and `f64` implement it. Formulas are written once against this
/// trait so both precisions evaluate the same expressions in the same order.
pub trait FloatingPoint:
Copy + PartialOrd + core::fmt::Debug + Default + 'static
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn two() -> Self;

    /// Widening conversion used when comparing against `f64` tolerances.
    fn to_f64(self) -> f64;

    fn sqrt(self) -> Self;
    fn tan(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn is_finite(self) -> bool;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn to_f64(self) -> f64 { self as f64 }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn tan(self) -> Self { f32::tan(self) }
    fn sin(self) -> Self { f32::sin(self) }
    fn cos(self) -> Self { f32::cos(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn to_f64(self) -> f64 { self }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn tan(self) -> Self { f64::tan(self) }
    fn sin(self) -> Self { f64::sin(self) }
    fn cos(self) -> Self { f64::cos(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}
