//! Query helpers built on [`PhysicsQuery`](crate::physics::PhysicsQuery)
//!
//! - [`cone`] - sphere overlap narrowed to an angular cone
//! - [`sight`] - nearest-hit line-of-sight checks

pub mod cone;
pub mod sight;

pub use cone::{overlap_cone, overlap_cone_with};
pub use sight::{
    has_line_of_sight, has_line_of_sight_along, has_line_of_sight_along_with,
    has_line_of_sight_with,
};
