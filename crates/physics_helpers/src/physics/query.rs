//! Abstract physics query interface provided by the host engine
//!
//! The helpers never own colliders. Everything they know about the scene
//! comes through this trait: a sphere overlap for broad-phase candidates, a
//! nearest-hit raycast, and a position lookup for a collider handle.

use std::fmt::Debug;

use crate::foundation::math::Vec3;
use crate::physics::primitives::{Ray, RayHit};

/// Read-only spatial queries the helpers delegate to
///
/// Implementations must be reentrant for concurrent read-only calls if the
/// helpers are used from several threads.
pub trait PhysicsQuery {
    /// Opaque handle identifying a collider
    type Handle: Copy + Eq + Debug;

    /// All colliders on a layer in `layer_mask` that touch the sphere
    ///
    /// Order is implementation-defined.
    fn overlap_sphere(&self, center: Vec3, radius: f32, layer_mask: u32) -> Vec<Self::Handle>;

    /// Nearest collider on a layer in `layer_mask` hit within `max_distance`
    fn raycast(&self, ray: &Ray, max_distance: f32, layer_mask: u32) -> Option<RayHit<Self::Handle>>;

    /// World-space position of a collider, `None` if the handle is stale
    fn position(&self, handle: Self::Handle) -> Option<Vec3>;
}

impl<Q: PhysicsQuery + ?Sized> PhysicsQuery for &Q {
    type Handle = Q::Handle;

    fn overlap_sphere(&self, center: Vec3, radius: f32, layer_mask: u32) -> Vec<Self::Handle> {
        (**self).overlap_sphere(center, radius, layer_mask)
    }

    fn raycast(&self, ray: &Ray, max_distance: f32, layer_mask: u32) -> Option<RayHit<Self::Handle>> {
        (**self).raycast(ray, max_distance, layer_mask)
    }

    fn position(&self, handle: Self::Handle) -> Option<Vec3> {
        (**self).position(handle)
    }
}
