// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    mod ops;

    pub mod matrix;
    pub mod traits;
    pub mod vector2;
    pub mod vector3;
    pub mod vector4;
}

pub use types::matrix::{Matrix4x4, MatrixError, MATRIX_LEN};
pub use types::traits::FloatingPoint;
pub use types::vector2::Vector2;
pub use types::vector3::Vector3;
pub use types::vector4::Vector4;
