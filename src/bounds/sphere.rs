/// Bounding sphere.
///
/// Used for light volumes (point/spot lights) and as a cheap conservative
/// stand-in for an AABB. Convertible to and from [`Aabb`] in both
/// directions.

use glam::Vec3;
use super::aabb::Aabb;
use super::coverage::Coverage;

/// Bounding sphere `{center, radius}`. Invariant: `radius >= 0`.
///
/// The maximum sphere ([`BoundingSphere::MAXIMUM`]) has infinite radius
/// and encloses everything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Sphere center
    pub center: Vec3,
    /// Sphere radius (non-negative)
    pub radius: f32,
}

impl BoundingSphere {
    /// The maximum sphere: absorbing element for enclosure tests.
    pub const MAXIMUM: BoundingSphere = BoundingSphere {
        center: Vec3::ZERO,
        radius: f32::INFINITY,
    };

    /// Create a sphere from center and radius.
    pub fn new(center: Vec3, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "sphere radius must be non-negative");
        Self { center, radius }
    }

    /// Enclosing sphere of an AABB: center at the box centroid, radius
    /// equal to half the diagonal length.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: aabb.center(),
            radius: aabb.half_diagonal(),
        }
    }

    /// Enclosing AABB of this sphere.
    pub fn to_aabb(&self) -> Aabb {
        Aabb::from_center_extent(self.center, Vec3::splat(self.radius))
    }

    // ===== PREDICATES =====

    /// Non-strict point containment: `distance(center, point) <= radius`.
    pub fn encloses_point(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Strict point containment.
    pub fn encloses_point_strict(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) < self.radius * self.radius
    }

    /// Non-strict sphere containment: the contained sphere lies at or
    /// inside this sphere's boundary.
    pub fn encloses_sphere(&self, other: &BoundingSphere) -> bool {
        // Infinite radius absorbs everything, and avoids INF - INF below.
        if self.radius == f32::INFINITY {
            return true;
        }
        self.center.distance(other.center) + other.radius <= self.radius
    }

    /// Strict sphere containment.
    pub fn encloses_sphere_strict(&self, other: &BoundingSphere) -> bool {
        if self.radius == f32::INFINITY {
            return true;
        }
        self.center.distance(other.center) + other.radius < self.radius
    }

    /// Non-strict AABB containment: the box's farthest corner lies at or
    /// inside the sphere boundary.
    pub fn encloses_aabb(&self, aabb: &Aabb) -> bool {
        self.farthest_corner_distance_squared(aabb) <= self.radius * self.radius
    }

    /// Strict AABB containment.
    pub fn encloses_aabb_strict(&self, aabb: &Aabb) -> bool {
        self.farthest_corner_distance_squared(aabb) < self.radius * self.radius
    }

    /// Non-strict sphere overlap: touching spheres count as overlapping.
    pub fn overlaps_sphere(&self, other: &BoundingSphere) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }

    /// Strict sphere overlap.
    pub fn overlaps_sphere_strict(&self, other: &BoundingSphere) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) < reach * reach
    }

    /// Non-strict AABB overlap: the closest point of the box lies at or
    /// inside the sphere boundary.
    pub fn overlaps_aabb(&self, aabb: &Aabb) -> bool {
        let closest = self.center.clamp(aabb.min, aabb.max);
        self.center.distance_squared(closest) <= self.radius * self.radius
    }

    /// Strict AABB overlap.
    pub fn overlaps_aabb_strict(&self, aabb: &Aabb) -> bool {
        let closest = self.center.clamp(aabb.min, aabb.max);
        self.center.distance_squared(closest) < self.radius * self.radius
    }

    // ===== REGION OPERATIONS =====

    /// Smallest sphere around this sphere's center enclosing both inputs.
    ///
    /// Keeps the base center and grows the radius to reach the more
    /// distant point. This is NOT the true minimal bounding sphere:
    /// chained unions must share a single fixed base center for
    /// correctness. O(1) per union instead of recomputing the minimal
    /// enclosing sphere.
    pub fn union(&self, other: &BoundingSphere) -> BoundingSphere {
        BoundingSphere {
            center: self.center,
            radius: self
                .radius
                .max(self.center.distance(other.center) + other.radius),
        }
    }

    /// Grow the radius from the fixed center to reach `point`.
    pub fn union_point(&self, point: Vec3) -> BoundingSphere {
        BoundingSphere {
            center: self.center,
            radius: self.radius.max(self.center.distance(point)),
        }
    }

    /// Classify a contained sphere against this sphere.
    pub fn classify_sphere(&self, contained: &BoundingSphere) -> Coverage {
        if self.encloses_sphere(contained) {
            Coverage::FullCoverage
        } else if self.overlaps_sphere(contained) {
            Coverage::PartialCoverage
        } else {
            Coverage::NoCoverage
        }
    }

    /// Classify a contained AABB against this sphere.
    pub fn classify_aabb(&self, contained: &Aabb) -> Coverage {
        if self.encloses_aabb(contained) {
            Coverage::FullCoverage
        } else if self.overlaps_aabb(contained) {
            Coverage::PartialCoverage
        } else {
            Coverage::NoCoverage
        }
    }

    /// Squared distance from the sphere center to the box corner
    /// farthest from it.
    fn farthest_corner_distance_squared(&self, aabb: &Aabb) -> f32 {
        let d = (self.center - aabb.min)
            .abs()
            .max((aabb.max - self.center).abs());
        d.length_squared()
    }
}

#[cfg(test)]
#[path = "sphere_tests.rs"]
mod tests;
