//! Physics module: primitives, layers and the host query seam
//!
//! [`PhysicsQuery`] is the only thing the query helpers need from an
//! engine. [`ColliderWorld`] implements it for scenes without one.

pub mod collision_layers;
pub mod primitives;
pub mod query;
pub mod world;

pub use collision_layers::CollisionLayers;
pub use primitives::{BoundingSphere, Ray, RayHit};
pub use query::PhysicsQuery;
pub use world::{Collider, ColliderHandle, ColliderWorld};
