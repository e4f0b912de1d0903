// src/numerics/types/vector3.rs
// Vector3 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use super::ops::impl_vector_ops;
use super::traits::{clamp_scalar, FloatingPoint};

/// Vector3 is a simple 3D vector type with template-able numeric type.
///
/// All operations are total: division by zero and degenerate inputs follow
/// IEEE rules rather than signalling an error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub const fn new(x: T, y: T, z: T) -> Self {
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

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
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

    /// Return the Euclidean length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit-length copy. A zero-length vector yields the zero vector instead of NaN.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > T::zero() {
            self.unit_from_length(len)
        } else {
            tracing::trace!(target: "numerus::vector", vector = %self, "normalized() on zero-length Vector3");
            Self::zero()
        }
    }

    /// Normalize in place; zero-length vectors are left as they are.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > T::zero() {
            *self = self.unit_from_length(len);
        } else {
            tracing::trace!(target: "numerus::vector", vector = %self, "normalize() on zero-length Vector3");
        }
    }

    /// Distance between two points
    // The length overflows to infinity for large finite components; rescale by
    // the largest component first in that case.
    fn unit_from_length(&self, len: T) -> Self {
        if len.is_finite() {
            *self / len
        } else {
            let scaled = *self / self.x.max_abs(self.y).max_abs(self.z);
            scaled / scaled.length()
        }
    }

    pub fn distance(&self, other: &Self) -> T {
        (*other - *self).length()
    }

    /// Linear interpolation without clamping `t`.
    pub fn lerp(a: Self, b: Self, t: T) -> Self {
        a + (b - a) * t
    }

    /// Per-component clamp against independent bounds.
    pub fn clamp(v: Self, min: Self, max: Self) -> Self {
        Self::new(
            clamp_scalar(v.x, min.x, max.x),
            clamp_scalar(v.y, min.y, max.y),
            clamp_scalar(v.z, min.z, max.z),
        )
    }
}

impl_vector_ops!(Vector3 { x, y, z });

// Conversions between Vector3<T> and tuples

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

// Conversions from references to Vector3<T>

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

// Reverse conversions: from &Vector3<T> into tuples and arrays

impl<T: FloatingPoint> From<&Vector3<T>> for (T, T, T) {
    fn from(v: &Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}
