use glam::{Mat4, Vec4};
use super::*;

// ============================================================================
// Perspective
// ============================================================================

#[test]
fn test_perspective_matches_glam() {
    let projection = Projection::Perspective {
        fov_y: std::f32::consts::FRAC_PI_4,
        aspect: 16.0 / 9.0,
    };
    let m = projection_matrix(&projection, 0.1, 100.0);
    let expected = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
    assert_eq!(m, expected);
}

#[test]
fn test_perspective_maps_near_plane_to_zero_depth() {
    let projection = Projection::Perspective {
        fov_y: std::f32::consts::FRAC_PI_2,
        aspect: 1.0,
    };
    let m = projection_matrix(&projection, 1.0, 100.0);
    let on_near = m * Vec4::new(0.0, 0.0, -1.0, 1.0);
    assert!((on_near.z / on_near.w).abs() < 1e-6);
}

// ============================================================================
// Orthographic
// ============================================================================

#[test]
fn test_orthographic_is_centered() {
    let projection = Projection::Orthographic {
        width: 20.0,
        height: 10.0,
    };
    let m = projection_matrix(&projection, 0.1, 100.0);
    let expected = Mat4::orthographic_rh(-10.0, 10.0, -5.0, 5.0, 0.1, 100.0);
    assert_eq!(m, expected);
}

#[test]
fn test_orthographic_edges_map_to_ndc() {
    let projection = Projection::Orthographic {
        width: 8.0,
        height: 6.0,
    };
    let m = projection_matrix(&projection, 0.1, 100.0);
    let right_edge = m * Vec4::new(4.0, 0.0, -1.0, 1.0);
    let top_edge = m * Vec4::new(0.0, 3.0, -1.0, 1.0);
    assert!((right_edge.x - 1.0).abs() < 1e-6);
    assert!((top_edge.y - 1.0).abs() < 1e-6);
}

#[test]
fn test_orchestrator_never_branches_on_tag() {
    // Both variants flow through the same pure function
    let near = 0.5;
    let far = 50.0;
    let variants = [
        Projection::Perspective { fov_y: 1.0, aspect: 1.5 },
        Projection::Orthographic { width: 10.0, height: 10.0 },
    ];
    for projection in &variants {
        let m = projection_matrix(projection, near, far);
        assert_ne!(m, Mat4::ZERO);
    }
}
