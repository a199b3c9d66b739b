//! Cone-shaped overlap query
//!
//! A sphere overlap narrowed down to the colliders whose direction from the
//! cone's apex lies within an angle of its forward axis. This is a plain
//! angular threshold, not a frustum test: the angle is measured to each
//! collider's position, so a large collider whose center sits just outside
//! the cone is dropped even if part of it reaches inside.

use crate::core::config::QueryConfig;
use crate::foundation::math::{angle_between, direction, Vec3};
use crate::physics::PhysicsQuery;

/// Colliders within `range` of `position` and less than `angle` degrees off `forward`
///
/// Uses the default [`QueryConfig`]. Results keep the order returned by
/// [`PhysicsQuery::overlap_sphere`].
pub fn overlap_cone<Q: PhysicsQuery>(
    physics: &Q,
    position: Vec3,
    forward: Vec3,
    range: f32,
    angle: f32,
) -> Vec<Q::Handle> {
    overlap_cone_with(physics, &QueryConfig::default(), position, forward, range, angle)
}

/// [`overlap_cone`] using the overlap layer mask from `config`
pub fn overlap_cone_with<Q: PhysicsQuery>(
    physics: &Q,
    config: &QueryConfig,
    position: Vec3,
    forward: Vec3,
    range: f32,
    angle: f32,
) -> Vec<Q::Handle> {
    let candidates = physics.overlap_sphere(position, range, config.layer_mask);
    let candidate_count = candidates.len();

    let inside: Vec<Q::Handle> = candidates
        .into_iter()
        .filter(|&handle| {
            let Some(candidate) = physics.position(handle) else {
                log::warn!("Overlap returned {handle:?} without a position, skipping");
                return false;
            };

            // No direction to a collider sitting on the apex
            if candidate == position {
                log::trace!("Skipping {handle:?}: coincides with cone apex");
                return false;
            }

            let offset = angle_between(&forward, &direction(position, candidate));
            log::trace!("{handle:?} is {offset:.2} degrees off axis (limit {angle})");
            offset < angle
        })
        .collect();

    log::debug!(
        "Cone at {position:?}: {} of {candidate_count} overlap candidates inside {angle} degrees",
        inside.len()
    );
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{ColliderWorld, CollisionLayers, Ray, RayHit};

    /// Scatter small colliders on a ring around the origin in the XZ plane
    fn ring_world(radius: f32, count: usize) -> ColliderWorld {
        let mut world = ColliderWorld::new();
        for i in 0..count {
            let theta = (i as f32 / count as f32) * std::f32::consts::TAU;
            let center = Vec3::new(theta.sin() * radius, 0.0, theta.cos() * radius);
            world.insert(center, 0.1, CollisionLayers::DEFAULT);
        }
        world
    }

    #[test]
    fn test_keeps_only_colliders_in_front() {
        let mut world = ColliderWorld::new();
        let ahead = world.insert(Vec3::new(0.0, 0.0, 5.0), 0.5, CollisionLayers::ENEMY);
        let slightly_off = world.insert(Vec3::new(1.0, 0.0, 5.0), 0.5, CollisionLayers::ENEMY);
        let _side = world.insert(Vec3::new(5.0, 0.0, 0.0), 0.5, CollisionLayers::ENEMY);
        let _behind = world.insert(Vec3::new(0.0, 0.0, -5.0), 0.5, CollisionLayers::ENEMY);

        let hits = overlap_cone(&world, Vec3::zeros(), Vec3::z(), 10.0, 30.0);
        assert_eq!(hits, vec![ahead, slightly_off]);
    }

    #[test]
    fn test_range_limits_candidates() {
        let mut world = ColliderWorld::new();
        let near = world.insert(Vec3::new(0.0, 0.0, 5.0), 0.5, CollisionLayers::DEFAULT);
        let _far = world.insert(Vec3::new(0.0, 0.0, 50.0), 0.5, CollisionLayers::DEFAULT);

        assert_eq!(overlap_cone(&world, Vec3::zeros(), Vec3::z(), 10.0, 45.0), vec![near]);
    }

    #[test]
    fn test_every_result_is_in_range_and_inside_angle() {
        let world = ring_world(8.0, 36);
        let position = Vec3::new(0.5, 0.0, -1.0);
        let forward = Vec3::new(1.0, 0.0, 1.0);
        let (range, angle) = (10.0, 40.0);

        let hits = overlap_cone(&world, position, forward, range, angle);
        assert!(!hits.is_empty());

        for handle in hits {
            let collider = world.get(handle).unwrap();
            let center = collider.sphere.center;
            assert!((center - position).norm() - collider.sphere.radius <= range);
            assert!(angle_between(&forward, &(center - position)) < angle);
        }
    }

    #[test]
    fn test_threshold_around_right_angle() {
        let mut world = ColliderWorld::new();
        let just_in_front = world.insert(Vec3::new(3.0, 0.0, 0.05), 0.1, CollisionLayers::DEFAULT);
        let _just_behind = world.insert(Vec3::new(-3.0, 0.0, -0.05), 0.1, CollisionLayers::DEFAULT);

        assert_eq!(overlap_cone(&world, Vec3::zeros(), Vec3::z(), 10.0, 90.0), vec![just_in_front]);
        assert!(overlap_cone(&world, Vec3::zeros(), Vec3::z(), 10.0, 85.0).is_empty());
    }

    #[test]
    fn test_full_angle_behaves_like_sphere_minus_apex() {
        let mut world = ring_world(4.0, 12);
        let _apex = world.insert(Vec3::zeros(), 0.5, CollisionLayers::DEFAULT);

        // Everything except the collider sitting on the apex
        let hits = overlap_cone(&world, Vec3::zeros(), Vec3::x(), 10.0, 180.1);
        assert_eq!(hits.len(), 12);
    }

    #[test]
    fn test_layer_mask_from_config() {
        let mut world = ColliderWorld::new();
        let enemy = world.insert(Vec3::new(0.0, 0.0, 5.0), 0.5, CollisionLayers::ENEMY);
        let _pickup = world.insert(Vec3::new(0.0, 1.0, 5.0), 0.5, CollisionLayers::PICKUP);

        let config = QueryConfig::default().with_layer_mask(CollisionLayers::ENEMY);
        let hits = overlap_cone_with(&world, &config, Vec3::zeros(), Vec3::z(), 10.0, 45.0);
        assert_eq!(hits, vec![enemy]);
    }

    /// Query whose overlap returns handles it cannot place
    struct StaleQuery;

    impl PhysicsQuery for StaleQuery {
        type Handle = u32;

        fn overlap_sphere(&self, _center: Vec3, _radius: f32, _layer_mask: u32) -> Vec<u32> {
            vec![1, 2]
        }

        fn raycast(&self, _ray: &Ray, _max_distance: f32, _layer_mask: u32) -> Option<RayHit<u32>> {
            None
        }

        fn position(&self, handle: u32) -> Option<Vec3> {
            (handle == 2).then(|| Vec3::new(0.0, 0.0, 1.0))
        }
    }

    #[test]
    fn test_skips_handles_without_position() {
        assert_eq!(overlap_cone(&StaleQuery, Vec3::zeros(), Vec3::z(), 5.0, 10.0), vec![2]);
    }
}
