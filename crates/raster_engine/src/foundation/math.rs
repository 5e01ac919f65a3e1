//! Math utilities and types
//!
//! Thin aliases over nalgebra so the rest of the engine names vectors the
//! same way everywhere.

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type, used for every interpolated vertex attribute
pub type Vec4 = Vector4<f32>;

/// Build a homogeneous position (w = 1) from three coordinates
pub fn position(x: f32, y: f32, z: f32) -> Vec4 {
    Vec4::new(x, y, z, 1.0)
}

/// Build a direction (w = 0) from three coordinates
pub fn direction(x: f32, y: f32, z: f32) -> Vec4 {
    Vec4::new(x, y, z, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_homogeneous() {
        assert_eq!(position(1.0, 2.0, 3.0).w, 1.0);
        assert_eq!(direction(1.0, 2.0, 3.0).w, 0.0);
    }
}
