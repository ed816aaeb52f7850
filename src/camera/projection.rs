/// Projection variants and matrix construction.
///
/// A tagged variant replaces runtime polymorphism over projection kinds:
/// the orchestrator asks for one projection matrix per camera and never
/// branches on the tag itself.

use glam::Mat4;

/// Camera projection kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection from vertical field of view and aspect ratio
    Perspective {
        /// Vertical field of view in radians
        fov_y: f32,
        /// Width / height
        aspect: f32,
    },
    /// Orthographic projection from view-volume width and height
    Orthographic {
        /// View volume width in world units
        width: f32,
        /// View volume height in world units
        height: f32,
    },
}

/// Build the view-to-projection matrix for a projection variant.
///
/// Pure function of its inputs. Right-handed, depth range [0, 1].
pub fn projection_matrix(projection: &Projection, near: f32, far: f32) -> Mat4 {
    match *projection {
        Projection::Perspective { fov_y, aspect } => {
            Mat4::perspective_rh(fov_y, aspect, near, far)
        }
        Projection::Orthographic { width, height } => {
            let half_w = width * 0.5;
            let half_h = height * 0.5;
            Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, near, far)
        }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
