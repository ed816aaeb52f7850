/// BoundingFrustum — six half-space planes for visibility culling.
///
/// Each plane is a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed offset
/// - A point P is inside the half-space iff dot(normal, P) + D >= 0
///
/// Built once per camera per frame from an object-to-clip (or
/// world-to-clip) matrix. The coordinate space of the six planes matches
/// whatever space the supplied matrix maps into clip space from:
/// supplying a view-to-projection matrix yields view-space planes,
/// a world-to-projection matrix yields world-space planes.

use glam::{Mat4, Vec3, Vec4};
use super::aabb::Aabb;
use super::sphere::BoundingSphere;
use super::coverage::Coverage;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct BoundingFrustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl BoundingFrustum {
    /// Extract frustum planes from a to-clip-space matrix.
    ///
    /// Uses the Gribb & Hartmann method. Works for both perspective
    /// and orthographic projections.
    pub fn from_matrix(to_clip: &Mat4) -> Self {
        let m = to_clip.to_cols_array_2d();

        // Gribb & Hartmann: extract planes from rows of the matrix
        let mut planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            Vec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        // Normalize each plane so distances are in world units
        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// The canonical per-draw visibility test.
    ///
    /// An object is culled (skipped) iff its bounding volume, transformed
    /// into the frustum's space by `to_clip`, does not overlap the
    /// frustum. Pure function: same inputs, same result.
    pub fn cull(to_clip: &Mat4, volume: &Aabb) -> bool {
        !Self::from_matrix(to_clip).overlaps_aabb(volume)
    }

    // ===== POINT =====

    /// Non-strict point containment: at-boundary points count as inside.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(point) + plane.w >= 0.0)
    }

    /// Strict point containment.
    pub fn contains_point_strict(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(point) + plane.w > 0.0)
    }

    // ===== AABB =====

    /// Non-strict AABB overlap.
    ///
    /// Uses the "positive vertex" test: for each plane, take the AABB
    /// corner most in the direction of the plane normal. If that corner
    /// is outside any plane, the AABB is fully outside. Touching a plane
    /// counts as overlapping. Conservative: may report overlap for boxes
    /// outside a frustum corner, never the reverse.
    pub fn overlaps_aabb(&self, aabb: &Aabb) -> bool {
        // The empty box overlaps nothing
        if !aabb.is_valid() {
            return false;
        }
        for plane in &self.planes {
            let normal = plane.truncate();
            if normal.dot(positive_vertex(aabb, normal)) + plane.w < 0.0 {
                return false;
            }
        }
        true
    }

    /// AABB overlap where touching a boundary plane does not count.
    pub fn overlaps_aabb_strict(&self, aabb: &Aabb) -> bool {
        if !aabb.is_valid() {
            return false;
        }
        for plane in &self.planes {
            let normal = plane.truncate();
            if normal.dot(positive_vertex(aabb, normal)) + plane.w <= 0.0 {
                return false;
            }
        }
        true
    }

    /// Non-strict AABB enclosure: the "negative vertex" (corner least in
    /// the direction of each normal) lies at or inside every plane.
    pub fn encloses_aabb(&self, aabb: &Aabb) -> bool {
        for plane in &self.planes {
            let normal = plane.truncate();
            if normal.dot(negative_vertex(aabb, normal)) + plane.w < 0.0 {
                return false;
            }
        }
        true
    }

    /// Strict AABB enclosure.
    pub fn encloses_aabb_strict(&self, aabb: &Aabb) -> bool {
        for plane in &self.planes {
            let normal = plane.truncate();
            if normal.dot(negative_vertex(aabb, normal)) + plane.w <= 0.0 {
                return false;
            }
        }
        true
    }

    /// Classify an AABB against the frustum.
    ///
    /// Single pass over the six planes testing both the positive and
    /// negative vertex, with an early out when the box is fully outside.
    pub fn classify_aabb(&self, aabb: &Aabb) -> Coverage {
        if !aabb.is_valid() {
            return Coverage::NoCoverage;
        }
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            // Positive vertex outside → entire AABB is outside
            if normal.dot(positive_vertex(aabb, normal)) + plane.w < 0.0 {
                return Coverage::NoCoverage;
            }

            // Negative vertex outside → AABB straddles this plane
            if normal.dot(negative_vertex(aabb, normal)) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside {
            Coverage::FullCoverage
        } else {
            Coverage::PartialCoverage
        }
    }

    // ===== SPHERE =====

    /// Non-strict sphere overlap: the sphere reaches at least the
    /// boundary of every half-space.
    pub fn overlaps_sphere(&self, sphere: &BoundingSphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(sphere.center) + plane.w >= -sphere.radius)
    }

    /// Strict sphere overlap.
    pub fn overlaps_sphere_strict(&self, sphere: &BoundingSphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(sphere.center) + plane.w > -sphere.radius)
    }

    /// Non-strict sphere enclosure: the whole sphere lies at or inside
    /// every plane.
    pub fn encloses_sphere(&self, sphere: &BoundingSphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(sphere.center) + plane.w >= sphere.radius)
    }

    /// Classify a sphere against the frustum.
    pub fn classify_sphere(&self, sphere: &BoundingSphere) -> Coverage {
        if self.encloses_sphere(sphere) {
            Coverage::FullCoverage
        } else if self.overlaps_sphere(sphere) {
            Coverage::PartialCoverage
        } else {
            Coverage::NoCoverage
        }
    }
}

/// AABB corner most aligned with the plane normal.
fn positive_vertex(aabb: &Aabb, normal: Vec3) -> Vec3 {
    Vec3::new(
        if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
        if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
        if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
    )
}

/// AABB corner least aligned with the plane normal.
fn negative_vertex(aabb: &Aabb, normal: Vec3) -> Vec3 {
    Vec3::new(
        if normal.x >= 0.0 { aabb.min.x } else { aabb.max.x },
        if normal.y >= 0.0 { aabb.min.y } else { aabb.max.y },
        if normal.z >= 0.0 { aabb.min.z } else { aabb.max.z },
    )
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
