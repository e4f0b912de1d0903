// src/numerics/types/matrix.rs
// Flat 16-element transform buffer, column-major, storage only.

use core::ops::{Index, IndexMut};

use crate::numerics::types::traits::FloatingPoint;

/// Number of elements in a [`Matrix4x4`].
pub const MATRIX_LEN: usize = 16;

/// Errors raised when building a matrix from runtime data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Sixteen contiguous floats holding a 4x4 transform, typically a
/// model-view-projection matrix headed for a uniform buffer.
///
/// Layout is column-major: element `(row, col)` lives at linear index
/// `col * 4 + row`, which is what OpenGL, Vulkan and wgpu expect. The type
/// carries no arithmetic; it only stores and hands out the buffer.
///
/// `new()` and `Default` zero-initialize every element.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4<T: FloatingPoint = f32> {
    pub data: [T; MATRIX_LEN],
}

impl<T: FloatingPoint> Matrix4x4<T> {
    /// Zero matrix
    pub fn new() -> Self {
        Self::zero()
    }

    pub fn zero() -> Self {
        Self {
            data: [T::zero(); MATRIX_LEN],
        }
    }

    pub const fn from_array(data: [T; MATRIX_LEN]) -> Self {
        Self { data }
    }

    /// Linear index of `(row, col)` under the column-major convention.
    pub const fn linear_index(row: usize, col: usize) -> usize {
        col * 4 + row
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Pointer to the first element, for native graphics calls that take a
    /// raw `const float*`.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    pub fn into_array(self) -> [T; MATRIX_LEN] {
        self.data
    }

    /// Raw bytes of the buffer, ready for a GPU upload.
    #[cfg(feature = "bytemuck")]
    pub fn as_bytes(&self) -> &[u8]
    where
        Self: bytemuck::Pod,
    {
        bytemuck::bytes_of(self)
    }
}

impl<T: FloatingPoint> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> Index<usize> for Matrix4x4<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: FloatingPoint> IndexMut<usize> for Matrix4x4<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: FloatingPoint> From<[T; MATRIX_LEN]> for Matrix4x4<T> {
    fn from(data: [T; MATRIX_LEN]) -> Self {
        Self { data }
    }
}

impl<T: FloatingPoint> From<Matrix4x4<T>> for [T; MATRIX_LEN] {
    fn from(matrix: Matrix4x4<T>) -> Self {
        matrix.data
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Matrix4x4<T> {
    type Error = MatrixError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let data: [T; MATRIX_LEN] = slice.try_into().map_err(|_| {
            tracing::debug!(
                target: "numerus::matrix",
                actual = slice.len(),
                "rejected slice of wrong length for Matrix4x4"
            );
            MatrixError::LengthMismatch {
                expected: MATRIX_LEN,
                actual: slice.len(),
            }
        })?;
        Ok(Self { data })
    }
}

// Safe: `repr(C)` over a single `[f32; 16]` / `[f64; 16]`, no padding, and
// the all-zero bit pattern is the zero matrix.
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for Matrix4x4<f32> {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Pod for Matrix4x4<f32> {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for Matrix4x4<f64> {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Pod for Matrix4x4<f64> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> Matrix4x4<f32> {
        let mut data = [0.0f32; MATRIX_LEN];
        for (idx, slot) in data.iter_mut().enumerate() {
            *slot = idx as f32;
        }
        Matrix4x4::from_array(data)
    }

    #[test]
    fn test_new_is_zeroed() {
        let m = Matrix4x4::<f32>::new();
        assert!(m.as_slice().iter().all(|&e| e == 0.0));
        assert_eq!(m, Matrix4x4::default());
        assert_eq!(m.as_slice().len(), 16);
    }

    #[test]
    fn test_linear_read_write() {
        let mut m = Matrix4x4::<f32>::zero();
        m[0] = 1.0;
        m[15] = 2.0;
        *m.get_mut(5).unwrap() = 3.0;
        assert_eq!(m[0], 1.0);
        assert_eq!(m.get(15), Some(&2.0));
        assert_eq!(m[5], 3.0);
        assert_eq!(m.get(16), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let m = Matrix4x4::<f32>::zero();
        let _ = m[16];
    }

    #[test]
    fn test_column_major_index() {
        let m = sequence();
        // Translation of an OpenGL-style matrix sits in the last column.
        assert_eq!(Matrix4x4::<f32>::linear_index(0, 3), 12);
        assert_eq!(Matrix4x4::<f32>::linear_index(3, 0), 3);
        assert_eq!(m[Matrix4x4::<f32>::linear_index(2, 1)], 6.0);
    }

    #[test]
    fn test_try_from_slice() {
        let values: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let m = Matrix4x4::try_from(values.as_slice()).unwrap();
        assert_eq!(m, sequence());

        let short = [1.0f32; 9];
        let err = Matrix4x4::try_from(&short[..]).unwrap_err();
        assert_eq!(err, MatrixError::LengthMismatch { expected: 16, actual: 9 });
        assert_eq!(err.to_string(), "Length mismatch: expected 16 elements, got 9");
    }

    #[test]
    fn test_array_roundtrip_and_pointer() {
        let m = sequence();
        let arr: [f32; 16] = m.into();
        assert_eq!(Matrix4x4::from(arr), m);
        assert_eq!(m.into_array(), arr);
        assert_eq!(unsafe { *m.as_ptr().add(7) }, 7.0);
    }

    #[test]
    fn test_mut_slice_is_contiguous_view() {
        let mut m = Matrix4x4::<f64>::zero();
        m.as_mut_slice()[10] = 4.5;
        assert_eq!(m.data[10], 4.5);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn test_as_bytes_layout() {
        let mut m = Matrix4x4::<f32>::zero();
        m[1] = 1.0;
        let bytes = m.as_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[4..8], &1.0f32.to_ne_bytes());
        assert_eq!(core::mem::size_of::<Matrix4x4<f64>>(), 128);
    }
}
