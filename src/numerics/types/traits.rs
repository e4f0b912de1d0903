// src/numerics/types/traits.rs
// FloatingPoint scalar trait shared by every vector and matrix type.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// FloatingPoint is the scalar bound for all numerics types.
///
/// It covers the arithmetic the vector family needs, plus `sqrt` so lengths
/// work for every precision and not only `f32`.
pub trait FloatingPoint:
    Copy
    + PartialOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;

    /// The larger of `|self|` and `|other|`.
    fn max_abs(self, other: Self) -> Self {
        let (a, b) = (self.abs(), other.abs());
        if b > a {
            b
        } else {
            a
        }
    }
}

macro_rules! impl_floating_point {
    ( $( $float:ty )+ ) => {
        $(
            impl FloatingPoint for $float {
                fn zero() -> Self { 0.0 }
                fn one() -> Self { 1.0 }
                fn sqrt(self) -> Self { <$float>::sqrt(self) }
                fn abs(self) -> Self { <$float>::abs(self) }
                fn is_finite(self) -> bool { <$float>::is_finite(self) }
            }
        )+
    };
}

impl_floating_point! { f32 f64 }

/// Clamp a single component into `[min, max]`.
///
/// Inverted bounds (`min > max`) always yield `min`. A NaN `value` is
/// returned unchanged. Never panics, unlike `f32::clamp`.
pub fn clamp_scalar<T: FloatingPoint>(value: T, min: T, max: T) -> T {
    if min > max || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
