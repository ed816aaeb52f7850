/// Light — a light-emitting world entity.
///
/// Point and spot lights carry a finite range and therefore a bounding
/// sphere the light-buffer pass culls against. Directional lights reach
/// the whole scene and are never culled.

use glam::{Mat4, Vec3};
use crate::bounds::BoundingSphere;
use super::EntityState;

/// Light kind with its reach parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Infinite-distance light along a direction; unbounded reach
    Directional,
    /// Omnidirectional light with finite range
    Point { range: f32 },
    /// Cone light with finite range and full cone angle in radians
    Spot { range: f32, angle: f32 },
}

/// A light-emitting entity.
#[derive(Debug, Clone)]
pub struct Light {
    kind: LightKind,
    position: Vec3,
    direction: Vec3,
    color: Vec3,
    intensity: f32,
    casts_shadows: bool,
    state: EntityState,
}

impl Light {
    /// Create an active light. Direction defaults to -Y.
    pub fn new(kind: LightKind, position: Vec3) -> Self {
        Self {
            kind,
            position,
            direction: Vec3::NEG_Y,
            color: Vec3::ONE,
            intensity: 1.0,
            casts_shadows: false,
            state: EntityState::Active,
        }
    }

    pub fn kind(&self) -> LightKind {
        self.kind
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn casts_shadows(&self) -> bool {
        self.casts_shadows
    }

    pub fn state(&self) -> EntityState {
        self.state
    }

    /// Bounding sphere of the light's reach.
    ///
    /// `None` for directional lights: their reach is unbounded and they
    /// must never be culled.
    pub fn bounding_sphere(&self) -> Option<BoundingSphere> {
        match self.kind {
            LightKind::Directional => None,
            LightKind::Point { range } | LightKind::Spot { range, .. } => {
                Some(BoundingSphere::new(self.position, range))
            }
        }
    }

    /// View-projection transform for this light's shadow-map render.
    pub fn shadow_view_projection(&self) -> Mat4 {
        let up = if self.direction.abs_diff_eq(Vec3::Y, 1e-4)
            || self.direction.abs_diff_eq(Vec3::NEG_Y, 1e-4)
        {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_to_rh(self.position, self.direction, up);
        let projection = match self.kind {
            LightKind::Directional => {
                // Fixed-extent ortho volume along the light direction
                Mat4::orthographic_rh(-50.0, 50.0, -50.0, 50.0, 0.1, 200.0)
            }
            LightKind::Point { range } => {
                Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, range.max(0.1))
            }
            LightKind::Spot { range, angle } => {
                Mat4::perspective_rh(angle.min(std::f32::consts::PI - 0.01), 1.0, 0.1, range.max(0.1))
            }
        };
        projection * view
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.normalize_or_zero();
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    pub fn set_casts_shadows(&mut self, casts_shadows: bool) {
        self.casts_shadows = casts_shadows;
    }

    pub fn set_state(&mut self, state: EntityState) {
        self.state = state;
    }
}
