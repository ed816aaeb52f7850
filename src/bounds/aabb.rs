/// Axis-Aligned Bounding Box.
///
/// Created per draw call from an object's local extents transformed into
/// world or view space. All boundary comparisons come in two flavors:
/// non-strict (closed intervals, touching counts) and strict (open
/// intervals, touching does not count).

use glam::{Mat4, Vec3};
use super::coverage::Coverage;

/// Axis-aligned bounding box `{min, max}`.
///
/// Invariant for a valid (non-degenerate) box: `min.axis <= max.axis`
/// for every axis. The canonical empty box ([`Aabb::EMPTY`]) inverts
/// that: `min = +inf`, `max = -inf`, so it is absorbed by any union and
/// never overlaps anything, including itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    /// The empty/identity AABB: absorbed by `union`, overlaps nothing.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Create an AABB from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest AABB enclosing all the given points.
    ///
    /// An empty slice yields [`Aabb::EMPTY`].
    pub fn from_points(points: &[Vec3]) -> Self {
        points.iter().fold(Self::EMPTY, |acc, &p| Aabb {
            min: acc.min.min(p),
            max: acc.max.max(p),
        })
    }

    /// AABB centered at `center` extending `half_extent` along each axis.
    pub fn from_center_extent(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Box centroid.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half the diagonal length (radius of the enclosing sphere).
    pub fn half_diagonal(&self) -> f32 {
        self.size().length() * 0.5
    }

    /// True if `min <= max` holds on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Transform this AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB
    /// extents for an exact (tight) result without transforming all
    /// 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        Aabb { min: new_min, max: new_max }
    }

    // ===== PREDICATES =====

    /// Full coverage, non-strict: every point of `other` lies at or
    /// inside the boundary of `self`.
    pub fn encloses(&self, other: &Aabb) -> bool {
        self.min.cmple(other.min).all() && other.max.cmple(self.max).all()
    }

    /// Full coverage with all boundary comparisons strict.
    ///
    /// A box exactly touching another box's face is `encloses == true`,
    /// `encloses_strict == false`.
    pub fn encloses_strict(&self, other: &Aabb) -> bool {
        self.min.cmplt(other.min).all() && other.max.cmplt(self.max).all()
    }

    /// Partial-or-full coverage: true unless the boxes are provably
    /// disjoint along some axis. Touching boundaries count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }

    /// Overlap test where touching boundaries do not count.
    pub fn overlaps_strict(&self, other: &Aabb) -> bool {
        self.min.cmplt(other.max).all() && other.min.cmplt(self.max).all()
    }

    /// Non-strict point containment.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.min.cmple(point).all() && point.cmple(self.max).all()
    }

    // ===== REGION OPERATIONS =====

    /// Smallest AABB enclosing both inputs (component-wise min/max).
    ///
    /// [`Aabb::EMPTY`] is the identity: `union(EMPTY, b) == b`.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Overlapping sub-region of the two boxes, or [`Aabb::EMPTY`] if
    /// they do not overlap (non-strict test).
    pub fn overlap(&self, other: &Aabb) -> Aabb {
        if !self.overlaps(other) {
            return Aabb::EMPTY;
        }
        Aabb {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Overlapping sub-region using the strict overlap test; boxes that
    /// merely touch yield [`Aabb::EMPTY`].
    pub fn overlap_strict(&self, other: &Aabb) -> Aabb {
        if !self.overlaps_strict(other) {
            return Aabb::EMPTY;
        }
        Aabb {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Classify `contained` against this box.
    ///
    /// The three outcomes partition all input pairs:
    /// `FullCoverage` iff `encloses`, else `PartialCoverage` iff
    /// `overlaps`, else `NoCoverage`.
    pub fn classify(&self, contained: &Aabb) -> Coverage {
        if self.encloses(contained) {
            Coverage::FullCoverage
        } else if self.overlaps(contained) {
            Coverage::PartialCoverage
        } else {
            Coverage::NoCoverage
        }
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
