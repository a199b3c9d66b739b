//! # Physics Helpers
//!
//! Small, stateless helpers that sit on top of a host engine's vector and
//! physics API.
//!
//! ## Features
//!
//! - **Directions**: normalized or raw direction between 2D, 3D and 4D points
//! - **Cone Overlap**: narrow a sphere overlap down to an angular cone
//! - **Line of Sight**: nearest-hit raycast towards a specific collider
//! - **Comparators**: descending-order comparator for `sort_by`
//! - **Range / Sign**: inclusive range check and generic negation
//!
//! The host engine's broad-phase overlap and raycast are reached through the
//! [`physics::PhysicsQuery`] trait. [`physics::ColliderWorld`] is a small
//! in-memory implementation for callers without an engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use physics_helpers::prelude::*;
//!
//! let mut world = ColliderWorld::new();
//! let guard = world.insert(Vec3::new(0.0, 0.0, 10.0), 1.0, CollisionLayers::ENEMY);
//! let _behind = world.insert(Vec3::new(0.0, 0.0, -10.0), 1.0, CollisionLayers::ENEMY);
//!
//! let seen = overlap_cone(&world, Vec3::zeros(), Vec3::z(), 20.0, 45.0);
//! assert_eq!(seen, vec![guard]);
//! assert!(has_line_of_sight(&world, Vec3::zeros(), guard));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod core;
pub mod foundation;
pub mod physics;
pub mod queries;

/// Common imports for helper users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, QueryConfig},
        foundation::{
            math::{angle_between, direction, direction_raw, direction_with, try_direction, Vec2, Vec3, Vec4},
            numeric::{compare_descending, in_range, negate},
        },
        physics::{BoundingSphere, ColliderHandle, ColliderWorld, CollisionLayers, PhysicsQuery, Ray, RayHit},
        queries::{
            has_line_of_sight, has_line_of_sight_along, has_line_of_sight_along_with,
            has_line_of_sight_with, overlap_cone, overlap_cone_with,
        },
    };
}
