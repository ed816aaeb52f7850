use glam::{Mat4, Vec3};
use crate::bounds::Coverage;
use super::*;

fn unit_box() -> Aabb {
    Aabb::new(Vec3::ZERO, Vec3::ONE)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_empty_aabb_is_union_identity() {
    let a = unit_box();
    let merged = Aabb::EMPTY.union(&a);
    assert_eq!(merged, a);
    let merged = a.union(&Aabb::EMPTY);
    assert_eq!(merged, a);
}

#[test]
fn test_empty_aabb_overlaps_nothing() {
    assert!(!Aabb::EMPTY.overlaps(&unit_box()));
    assert!(!unit_box().overlaps(&Aabb::EMPTY));
    assert!(!Aabb::EMPTY.overlaps(&Aabb::EMPTY));
}

#[test]
fn test_from_points() {
    let aabb = Aabb::from_points(&[
        Vec3::new(1.0, -2.0, 0.5),
        Vec3::new(-1.0, 3.0, 0.0),
        Vec3::new(0.0, 0.0, 2.0),
    ]);
    assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
    assert_eq!(aabb.max, Vec3::new(1.0, 3.0, 2.0));
}

#[test]
fn test_from_points_empty_slice() {
    assert_eq!(Aabb::from_points(&[]), Aabb::EMPTY);
}

#[test]
fn test_center_size_half_diagonal() {
    let aabb = Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(aabb.center(), Vec3::ZERO);
    assert_eq!(aabb.size(), Vec3::new(2.0, 4.0, 6.0));
    let expected = Vec3::new(1.0, 2.0, 3.0).length();
    assert!((aabb.half_diagonal() - expected).abs() < 1e-6);
}

#[test]
fn test_is_valid() {
    assert!(unit_box().is_valid());
    assert!(Aabb::new(Vec3::ONE, Vec3::ONE).is_valid()); // degenerate point box
    assert!(!Aabb::EMPTY.is_valid());
}

// ============================================================================
// Encloses / EnclosesStrict
// ============================================================================

#[test]
fn test_encloses_self_non_strict() {
    let a = unit_box();
    assert!(a.encloses(&a));
    assert!(!a.encloses_strict(&a));
}

#[test]
fn test_encloses_smaller_box() {
    let outer = Aabb::new(Vec3::splat(-2.0), Vec3::splat(2.0));
    let inner = unit_box();
    assert!(outer.encloses(&inner));
    assert!(outer.encloses_strict(&inner));
    assert!(!inner.encloses(&outer));
}

#[test]
fn test_encloses_face_touching_box() {
    // Inner box shares the container's max.x face
    let outer = Aabb::new(Vec3::ZERO, Vec3::splat(4.0));
    let inner = Aabb::new(Vec3::new(3.0, 1.0, 1.0), Vec3::new(4.0, 2.0, 2.0));
    assert!(outer.encloses(&inner));
    assert!(!outer.encloses_strict(&inner));
}

// ============================================================================
// Overlaps / OverlapsStrict
// ============================================================================

#[test]
fn test_overlaps_disjoint_boxes() {
    let a = unit_box();
    let b = Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0));
    assert!(!a.overlaps(&b));
    assert!(!a.overlaps_strict(&b));
}

#[test]
fn test_overlaps_face_touching_boxes() {
    // Boxes sharing exactly one face: a.max.x == b.min.x
    let a = unit_box();
    let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    assert!(a.overlaps(&b));
    assert!(!a.overlaps_strict(&b));
}

#[test]
fn test_overlaps_intersecting_boxes() {
    let a = unit_box();
    let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5));
    assert!(a.overlaps(&b));
    assert!(a.overlaps_strict(&b));
}

#[test]
fn test_overlaps_is_symmetric() {
    let a = unit_box();
    let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5));
    assert_eq!(a.overlaps(&b), b.overlaps(&a));
    assert_eq!(a.overlaps_strict(&b), b.overlaps_strict(&a));
}

#[test]
fn test_zero_size_box_overlap() {
    // A point box on the surface of another box
    let a = unit_box();
    let p = Aabb::new(Vec3::new(1.0, 0.5, 0.5), Vec3::new(1.0, 0.5, 0.5));
    assert!(a.overlaps(&p));
    assert!(!a.overlaps_strict(&p));
}

// ============================================================================
// Union / Overlap regions
// ============================================================================

#[test]
fn test_union_encloses_both_inputs() {
    let a = unit_box();
    let p = Aabb::new(Vec3::splat(5.0), Vec3::splat(5.0)); // single-point box
    let u = a.union(&p);
    assert!(u.encloses(&a));
    assert!(u.encloses(&p));
}

#[test]
fn test_overlap_region() {
    let a = unit_box();
    let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(2.0));
    let region = a.overlap(&b);
    assert_eq!(region.min, Vec3::splat(0.5));
    assert_eq!(region.max, Vec3::ONE);
}

#[test]
fn test_overlap_of_disjoint_boxes_is_empty() {
    let a = unit_box();
    let b = Aabb::new(Vec3::splat(5.0), Vec3::splat(6.0));
    assert_eq!(a.overlap(&b), Aabb::EMPTY);
    assert_eq!(a.overlap_strict(&b), Aabb::EMPTY);
}

#[test]
fn test_overlap_strict_of_touching_boxes_is_empty() {
    let a = unit_box();
    let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    // Non-strict: the shared face (a zero-width box)
    let face = a.overlap(&b);
    assert_eq!(face.min.x, 1.0);
    assert_eq!(face.max.x, 1.0);
    // Strict: empty
    assert_eq!(a.overlap_strict(&b), Aabb::EMPTY);
}

// ============================================================================
// Classify
// ============================================================================

#[test]
fn test_classify_full_coverage() {
    let outer = Aabb::new(Vec3::splat(-2.0), Vec3::splat(2.0));
    let inner = unit_box();
    assert_eq!(outer.classify(&inner), Coverage::FullCoverage);
}

#[test]
fn test_classify_partial_coverage() {
    let a = unit_box();
    let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(2.0));
    assert_eq!(a.classify(&b), Coverage::PartialCoverage);
}

#[test]
fn test_classify_no_coverage() {
    let a = unit_box();
    let b = Aabb::new(Vec3::splat(3.0), Vec3::splat(4.0));
    assert_eq!(a.classify(&b), Coverage::NoCoverage);
}

#[test]
fn test_classify_partitions_all_pairs() {
    // Coverage outcomes must match the predicate pair exactly, with
    // no gap or double-assignment, across a grid of box pairs.
    let a = unit_box();
    for i in -3..4 {
        for j in 0..3 {
            let offset = Vec3::splat(i as f32 * 0.75);
            let half = Vec3::splat(0.25 + j as f32 * 0.5);
            let b = Aabb::from_center_extent(Vec3::splat(0.5) + offset, half);

            let coverage = a.classify(&b);
            match coverage {
                Coverage::FullCoverage => assert!(a.encloses(&b)),
                Coverage::PartialCoverage => {
                    assert!(a.overlaps(&b) && !a.encloses(&b))
                }
                Coverage::NoCoverage => assert!(!a.overlaps(&b)),
            }
            assert_eq!(coverage.is_visible(), a.overlaps(&b) || a.encloses(&b));
        }
    }
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn test_transformed_by_translation() {
    let aabb = unit_box();
    let moved = aabb.transformed(&Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));
    assert_eq!(moved.min, Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(moved.max, Vec3::new(11.0, 1.0, 1.0));
}

#[test]
fn test_transformed_by_rotation_stays_enclosing() {
    let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let rot = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4);
    let rotated = aabb.transformed(&rot);
    // A 45° rotation around Y widens x/z to sqrt(2)
    let expected = 2.0_f32.sqrt();
    assert!((rotated.max.x - expected).abs() < 1e-5);
    assert!((rotated.max.z - expected).abs() < 1e-5);
    assert!((rotated.max.y - 1.0).abs() < 1e-5);
}

#[test]
fn test_transformed_by_scale() {
    let aabb = unit_box();
    let scaled = aabb.transformed(&Mat4::from_scale(Vec3::splat(2.0)));
    assert_eq!(scaled.min, Vec3::ZERO);
    assert_eq!(scaled.max, Vec3::splat(2.0));
}
