//! # Numerus - Vector and Transform Buffer Primitives
//!
//! Plain value types for rendering and transform code: 2-, 3- and
//! 4-component vectors and a flat 16-element matrix buffer.
//!
//! ## Core Features
//!
//! - **Vectors**: component-wise and scalar arithmetic, dot/cross products,
//!   lengths, normalization, distance, `lerp` and `clamp`
//! - **Matrix buffer**: column-major `[T; 16]` storage with linear indexing,
//!   ready to hand to a GPU API (storage only, no matrix arithmetic)
//! - **Total operations**: nothing returns an error or panics on numeric
//!   input; IEEE infinities and NaN pass straight through
//!
//! ## Quick Start
//!
//! ```rust
//! use numerus::prelude::*;
//!
//! let a = Vector3::new(1.0_f32, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(&b), Vector3::new(0.0, 0.0, 1.0));
//!
//! let halfway = Vector3::lerp(a, b, 0.5);
//! println!("halfway = {}", halfway);
//!
//! let mut mvp = Matrix4x4::<f32>::new();
//! mvp[Matrix4x4::<f32>::linear_index(0, 3)] = 2.5; // x translation
//! assert_eq!(mvp.as_slice()[12], 2.5);
//! ```
//!
//! Equality is exact. Compare with a tolerance where rounding matters:
//!
//! ```rust
//! use numerus::prelude::*;
//!
//! let n = Vector2::new(1.0_f32, 1.0).normalized();
//! assert!((n.length() - 1.0).abs() < 1e-6);
//! ```

pub mod numerics;

pub use numerics::{FloatingPoint, Matrix4x4, MatrixError, Vector2, Vector3, Vector4};

pub mod prelude {
    pub use crate::numerics::types::traits::FloatingPoint;
    pub use crate::numerics::{Matrix4x4, MatrixError, Vector2, Vector3, Vector4, MATRIX_LEN};
}
