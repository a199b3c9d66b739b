//! Primitive collision shapes and intersection algorithms
//!
//! Rays, ray hits and bounding spheres shared between the query helpers and
//! the host physics implementation.

use crate::foundation::math::Vec3;

/// A ray for ray casting and line-of-sight checks
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (normalized by [`Ray::new`])
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    ///
    /// A zero-length direction produces a NaN direction, which never hits
    /// anything.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a ray intersection test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit<H> {
    /// The collider that was hit
    pub handle: H,
    /// The distance from the ray origin to the hit point
    pub distance: f32,
    /// The point of intersection in world space
    pub point: Vec3,
    /// The surface normal at the intersection point
    pub normal: Vec3,
}

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another (touching counts)
    pub fn intersects(&self, other: &Self) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Check if a point lies inside or on the sphere
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).magnitude_squared() <= self.radius * self.radius
    }

    /// Test ray intersection with this sphere
    /// Returns (distance, hit_point, normal) for the nearest forward hit
    ///
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f32, Vec3, Vec3)> {
        // Solve |origin + t*direction - center|^2 = radius^2
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * oc.dot(&ray.direction);
        let c = self.radius.mul_add(-self.radius, oc.dot(&oc));

        let discriminant = b.mul_add(b, -4.0 * a * c);
        if discriminant.is_nan() || discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / (2.0 * a);
        let t2 = (-b + sqrt_discriminant) / (2.0 * a);

        // Closest positive intersection
        let t = if t1 > 0.0 {
            t1
        } else if t2 > 0.0 {
            t2
        } else {
            return None;
        };

        let hit_point = ray.point_at(t);
        let normal = (hit_point - self.center).normalize();

        Some((t, hit_point, normal))
    }
}
