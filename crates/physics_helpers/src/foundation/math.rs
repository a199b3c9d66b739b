//! Math utilities and types
//!
//! Vector aliases plus the direction and angle helpers that the query
//! helpers are built on.
//!
//! Directions follow an origin-to-target convention: `direction(from, to)`
//! points from `from` towards `to`.

use nalgebra::SVector;

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// Unit direction from `from` towards `to`.
///
/// Works for any fixed dimension, so 2D, 3D and 4D points all go through the
/// same function.
///
/// The caller must ensure `from != to`. Coincident points have no direction
/// and the result is a NaN vector; use [`try_direction`] when that can
/// happen.
///
/// ```
/// use physics_helpers::foundation::math::{direction, Vec2};
///
/// let dir = direction(Vec2::new(1.0, 1.0), Vec2::new(1.0, 5.0));
/// assert_eq!(dir, Vec2::new(0.0, 1.0));
/// ```
pub fn direction<const D: usize>(from: SVector<f32, D>, to: SVector<f32, D>) -> SVector<f32, D> {
    -(from - to).normalize()
}

/// Raw (unnormalized) difference `to - from`
pub fn direction_raw<const D: usize>(from: SVector<f32, D>, to: SVector<f32, D>) -> SVector<f32, D> {
    to - from
}

/// Direction from `from` towards `to`, normalized only when `normalized` is set
pub fn direction_with<const D: usize>(
    from: SVector<f32, D>,
    to: SVector<f32, D>,
    normalized: bool,
) -> SVector<f32, D> {
    if normalized {
        direction(from, to)
    } else {
        direction_raw(from, to)
    }
}

/// Unit direction from `from` towards `to`, or `None` if the points coincide
pub fn try_direction<const D: usize>(
    from: SVector<f32, D>,
    to: SVector<f32, D>,
) -> Option<SVector<f32, D>> {
    (to - from).try_normalize(f32::EPSILON)
}

/// Unsigned angle between two vectors, in degrees
///
/// The result is in `[0, 180]`. If either vector has zero length the angle
/// is `0`.
pub fn angle_between(a: &Vec3, b: &Vec3) -> f32 {
    const MIN_DENOMINATOR: f32 = 1e-15;

    let denominator = (a.norm_squared() * b.norm_squared()).sqrt();
    if denominator < MIN_DENOMINATOR {
        return 0.0;
    }

    let cos_angle = (a.dot(b) / denominator).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}
