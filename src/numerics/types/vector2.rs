// src/numerics/types/vector2.rs
// Vector2 generic implementation with default precision f32.

use super::ops::impl_vector_ops;
use super::traits::{clamp_scalar, FloatingPoint};

/// Two-component vector, copied by value.
///
/// Equality is exact IEEE comparison of each component; there is no epsilon.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector2<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
}

impl<T: FloatingPoint> Vector2<T> {
    /// Construct a new Vector2. Any value is accepted, including NaN and infinities.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Signed area of the parallelogram spanned by `self` and `other`, i.e. the
    /// z component of the 3D cross product of the two vectors lifted to z = 0.
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length; skips the square root for threshold comparisons.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit-length copy, or the zero vector when the length is not positive.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > T::zero() {
            self.unit_from_length(len)
        } else {
            tracing::trace!(target: "numerus::vector", vector = %self, "normalized() on zero-length Vector2");
            Self::zero()
        }
    }

    /// In-place form of [`normalized`](Self::normalized); a zero-length vector
    /// is left untouched.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > T::zero() {
            *self = self.unit_from_length(len);
        } else {
            tracing::trace!(target: "numerus::vector", vector = %self, "normalize() on zero-length Vector2");
        }
    }

    // The length overflows to infinity for large finite components; rescale by
    // the largest component first in that case.
    fn unit_from_length(&self, len: T) -> Self {
        if len.is_finite() {
            *self / len
        } else {
            let scaled = *self / self.x.max_abs(self.y);
            scaled / scaled.length()
        }
    }

    pub fn distance(&self, other: &Self) -> T {
        (*other - *self).length()
    }

    /// `a + (b - a) * t`. `t` is not clamped, so values outside `[0, 1]` extrapolate.
    pub fn lerp(a: Self, b: Self, t: T) -> Self {
        a + (b - a) * t
    }

    /// Per-component clamp. See [`clamp_scalar`] for inverted bounds and NaN.
    pub fn clamp(v: Self, min: Self, max: Self) -> Self {
        Self::new(
            clamp_scalar(v.x, min.x, max.x),
            clamp_scalar(v.y, min.y, max.y),
        )
    }
}

impl_vector_ops!(Vector2 { x, y });

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<&(T, T)> for Vector2<T> {
    fn from(tuple: &(T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<&[T; 2]> for Vector2<T> {
    fn from(array: &[T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<&Vector2<T>> for (T, T) {
    fn from(v: &Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T: FloatingPoint> From<&Vector2<T>> for [T; 2] {
    fn from(v: &Vector2<T>) -> Self {
        [v.x, v.y]
    }
}
