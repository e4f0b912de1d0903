// src/numerics/types/vector4.rs
// Vector4 generic implementation with default precision f32.
// No cross product at this arity.

use super::ops::impl_vector_ops;
use super::traits::{clamp_scalar, FloatingPoint};

/// Four-component vector, typically a homogeneous position or an RGBA value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector4<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: FloatingPoint> Vector4<T> {
    /// Construct a new Vector4
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one(), T::one())
    }

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    /// Unit vector along `w`, the homogeneous axis
    pub fn unit_w() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Return the Euclidean length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit-length copy, or the zero vector when the length is not positive.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > T::zero() {
            self.unit_from_length(len)
        } else {
            tracing::trace!(target: "numerus::vector", vector = %self, "normalized() on zero-length Vector4");
            Self::zero()
        }
    }

    /// Normalize in place; zero-length vectors are left as they are.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > T::zero() {
            *self = self.unit_from_length(len);
        } else {
            tracing::trace!(target: "numerus::vector", vector = %self, "normalize() on zero-length Vector4");
        }
    }

    // The length overflows to infinity for large finite components; rescale by
    // the largest component first in that case.
    fn unit_from_length(&self, len: T) -> Self {
        if len.is_finite() {
            *self / len
        } else {
            let scaled = *self / self.x.max_abs(self.y).max_abs(self.z).max_abs(self.w);
            scaled / scaled.length()
        }
    }

    /// Distance between two points
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
            clamp_scalar(v.w, min.w, max.w),
        )
    }
}

impl_vector_ops!(Vector4 { x, y, z, w });

impl<T: FloatingPoint> From<(T, T, T, T)> for Vector4<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

impl<T: FloatingPoint> From<&(T, T, T, T)> for Vector4<T> {
    fn from(tuple: &(T, T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

impl<T: FloatingPoint> From<[T; 4]> for Vector4<T> {
    fn from(array: [T; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl<T: FloatingPoint> From<&[T; 4]> for Vector4<T> {
    fn from(array: &[T; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for (T, T, T, T) {
    fn from(v: Vector4<T>) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

impl<T: FloatingPoint> From<&Vector4<T>> for (T, T, T, T) {
    fn from(v: &Vector4<T>) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for [T; 4] {
    fn from(v: Vector4<T>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl<T: FloatingPoint> From<&Vector4<T>> for [T; 4] {
    fn from(v: &Vector4<T>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        let b = Vector4::new(4.0_f32, 3.0, 2.0, 1.0);
        assert_eq!(a + b, Vector4::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a - b, Vector4::new(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(a + -a, Vector4::zero());
    }

    #[test]
    fn test_dot_length() {
        let a = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        assert_eq!(a.dot(&Vector4::one()), 10.0);
        assert_eq!(a.length_squared(), 30.0);
        assert_eq!(Vector4::new(1.0_f32, 1.0, 1.0, 1.0).length(), 2.0);
    }

    #[test]
    fn test_scalar_ops() {
        let a = Vector4::new(2.0_f32, 4.0, 6.0, 8.0);
        assert_eq!(a / 2.0, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(0.5_f32 * a, a / 2.0);
        assert_eq!(a * 1.0, a);
        assert_eq!(a * 0.0, Vector4::zero());
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector4::new(0.0_f32, 0.0, 0.0, 2.0);
        v.normalize();
        assert_eq!(v, Vector4::unit_w());

        let mut z = Vector4::<f32>::zero();
        z.normalize();
        assert_eq!(z, Vector4::zero());
        assert_eq!(Vector4::<f32>::default().normalized(), Vector4::zero());
    }

    #[test]
    fn test_normalize_large_finite_components() {
        // length_squared overflows f32 here
        let v = Vector4::new(0.0_f32, 0.0, 1e20, 0.0);
        assert!(v.length().is_infinite());
        assert_eq!(v.normalized(), Vector4::unit_z());

        let mut w = Vector4::new(2e19_f32, 2e19, 2e19, 2e19);
        w.normalize();
        assert!((w.length() - 1.0).abs() < 1e-6);
        assert!((w.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_clamp_distance() {
        let a = Vector4::new(0.0_f32, 0.0, 0.0, 0.0);
        let b = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        assert_eq!(Vector4::lerp(a, b, 0.0), a);
        assert_eq!(Vector4::lerp(a, b, 1.0), b);
        assert_eq!(
            Vector4::clamp(b, Vector4::one(), Vector4::new(2.0, 2.0, 2.0, 2.0)),
            Vector4::new(1.0, 2.0, 2.0, 2.0)
        );
        assert_eq!(a.distance(&Vector4::new(1.0, 1.0, 1.0, 1.0)), 2.0);
    }

    #[test]
    fn test_array_and_tuple_conversions() {
        let p: Vector4 = [1.0, 2.0, 3.0, 1.0].into();
        assert_eq!(p, Vector4::new(1.0, 2.0, 3.0, 1.0));

        let arr: [f32; 4] = p.into();
        assert_eq!(Vector4::from(&arr), p);
        let tup: (f32, f32, f32, f32) = (&p).into();
        assert_eq!(Vector4::from(tup), p);
    }

    #[test]
    fn test_display() {
        let text = Vector4::new(1.0_f32, 2.0, 3.0, 4.0).to_string();
        assert_eq!(text, "(1, 2, 3, 4)");
    }
}
