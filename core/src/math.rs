//! Math type aliases.
//!
//! Rendering math is always f32; these aliases keep nalgebra out of
//! most signatures.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

/// Component-wise mean of a set of 3D vectors.
///
/// Returns the zero vector for an empty slice. The result is NOT
/// renormalized; callers that need a unit vector must normalize it
/// themselves.
pub fn mean_vec3(vectors: &[Vec3]) -> Vec3 {
    if vectors.is_empty() {
        return Vec3::zeros();
    }
    let sum: Vec3 = vectors.iter().sum();
    sum / vectors.len() as f32
}
