//! Line-of-sight checks
//!
//! A target is visible when the nearest raycast hit from the origin is the
//! target itself. Misses, stale targets and occluders all read as `false`.

use crate::core::config::QueryConfig;
use crate::foundation::math::{direction, Vec3};
use crate::physics::{PhysicsQuery, Ray};

/// True if a ray from `origin` towards `target` hits `target` first
///
/// Uses the default [`QueryConfig`]: every layer except
/// `IGNORE_RAYCAST`, unbounded distance.
pub fn has_line_of_sight<Q: PhysicsQuery>(physics: &Q, origin: Vec3, target: Q::Handle) -> bool {
    has_line_of_sight_with(physics, &QueryConfig::default(), origin, target)
}

/// [`has_line_of_sight`] with the raycast mask and distance from `config`
pub fn has_line_of_sight_with<Q: PhysicsQuery>(
    physics: &Q,
    config: &QueryConfig,
    origin: Vec3,
    target: Q::Handle,
) -> bool {
    let Some(target_position) = physics.position(target) else {
        log::debug!("Line of sight to {target:?}: target has no position");
        return false;
    };

    has_line_of_sight_along_with(physics, config, origin, direction(origin, target_position), target)
}

/// True if a ray from `origin` along `direction` hits `target` first
pub fn has_line_of_sight_along<Q: PhysicsQuery>(
    physics: &Q,
    origin: Vec3,
    direction: Vec3,
    target: Q::Handle,
) -> bool {
    has_line_of_sight_along_with(physics, &QueryConfig::default(), origin, direction, target)
}

/// [`has_line_of_sight_along`] with the raycast mask and distance from `config`
pub fn has_line_of_sight_along_with<Q: PhysicsQuery>(
    physics: &Q,
    config: &QueryConfig,
    origin: Vec3,
    direction: Vec3,
    target: Q::Handle,
) -> bool {
    let ray = Ray::new(origin, direction);

    match physics.raycast(&ray, config.max_ray_distance, config.raycast_mask) {
        Some(hit) if hit.handle == target => {
            log::debug!("Line of sight to {target:?}: clear at {:.2}", hit.distance);
            true
        }
        Some(hit) => {
            log::debug!("Line of sight to {target:?}: blocked by {:?} at {:.2}", hit.handle, hit.distance);
            false
        }
        None => {
            log::debug!("Line of sight to {target:?}: ray hit nothing");
            false
        }
    }
}
