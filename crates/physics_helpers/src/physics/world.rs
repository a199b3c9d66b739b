//! In-memory collider set implementing [`PhysicsQuery`]
//!
//! Colliders are bounding spheres on a single layer. Queries are brute
//! force over all colliders, which is plenty for tools, tests and small
//! scenes that have no engine behind them.

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::Vec3;
use crate::physics::collision_layers::CollisionLayers;
use crate::physics::primitives::{BoundingSphere, Ray, RayHit};
use crate::physics::query::PhysicsQuery;

new_key_type! {
    /// Handle to a collider stored in a [`ColliderWorld`]
    pub struct ColliderHandle;
}

/// Collider data stored by the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// World-space bounds
    pub sphere: BoundingSphere,
    /// Layer bit this collider sits on
    pub layer: u32,
}

/// Flat collider store answering overlap and raycast queries
#[derive(Debug, Default, Clone)]
pub struct ColliderWorld {
    colliders: SlotMap<ColliderHandle, Collider>,
}

impl ColliderWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a spherical collider and return its handle
    pub fn insert(&mut self, center: Vec3, radius: f32, layer: u32) -> ColliderHandle {
        let handle = self.colliders.insert(Collider {
            sphere: BoundingSphere::new(center, radius),
            layer,
        });
        log::trace!("Inserted collider {handle:?} at {center:?} (radius {radius}, layer {layer:#x})");
        handle
    }

    /// Remove a collider, returning its data if it existed
    pub fn remove(&mut self, handle: ColliderHandle) -> Option<Collider> {
        self.colliders.remove(handle)
    }

    /// Move a collider; returns false if the handle is stale
    pub fn set_position(&mut self, handle: ColliderHandle, center: Vec3) -> bool {
        match self.colliders.get_mut(handle) {
            Some(collider) => {
                collider.sphere.center = center;
                true
            }
            None => false,
        }
    }

    /// Look up a collider
    pub fn get(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle)
    }

    /// Number of colliders
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// True if the world holds no colliders
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Remove every collider
    pub fn clear(&mut self) {
        self.colliders.clear();
    }
}

impl PhysicsQuery for ColliderWorld {
    type Handle = ColliderHandle;

    fn overlap_sphere(&self, center: Vec3, radius: f32, layer_mask: u32) -> Vec<ColliderHandle> {
        let query = BoundingSphere::new(center, radius);
        self.colliders
            .iter()
            .filter(|(_, collider)| CollisionLayers::contains(layer_mask, collider.layer))
            .filter(|(_, collider)| query.intersects(&collider.sphere))
            .map(|(handle, _)| handle)
            .collect()
    }

    fn raycast(&self, ray: &Ray, max_distance: f32, layer_mask: u32) -> Option<RayHit<ColliderHandle>> {
        self.colliders
            .iter()
            .filter(|(_, collider)| CollisionLayers::contains(layer_mask, collider.layer))
            // Rays starting inside a collider do not report it
            .filter(|(_, collider)| !collider.sphere.contains_point(ray.origin))
            .filter_map(|(handle, collider)| {
                collider
                    .sphere
                    .intersect_ray(ray)
                    .filter(|(distance, _, _)| *distance <= max_distance)
                    .map(|(distance, point, normal)| RayHit {
                        handle,
                        distance,
                        point,
                        normal,
                    })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    fn position(&self, handle: ColliderHandle) -> Option<Vec3> {
        self.colliders.get(handle).map(|collider| collider.sphere.center)
    }
}
