/// Model — a drawable world entity.
///
/// Carries the world transform, local-space bounds, geometry counts,
/// and the surface flags the forward/deferred passes use to pick which
/// step draws the model.

use glam::Mat4;
use crate::bounds::Aabb;
use super::EntityState;

/// A drawable entity with local-space bounds.
#[derive(Debug, Clone)]
pub struct Model {
    world_transform: Mat4,
    local_bounds: Aabb,
    vertex_count: u32,
    index_count: u32,
    transparent: bool,
    emissive: bool,
    state: EntityState,
}

impl Model {
    /// Create an active opaque model.
    pub fn new(local_bounds: Aabb, vertex_count: u32, index_count: u32) -> Self {
        Self {
            world_transform: Mat4::IDENTITY,
            local_bounds,
            vertex_count,
            index_count,
            transparent: false,
            emissive: false,
            state: EntityState::Active,
        }
    }

    pub fn world_transform(&self) -> &Mat4 {
        &self.world_transform
    }

    /// Local-space bounding box.
    pub fn local_bounds(&self) -> &Aabb {
        &self.local_bounds
    }

    /// World-space bounding box, recomputed from the current transform.
    pub fn world_bounds(&self) -> Aabb {
        self.local_bounds.transformed(&self.world_transform)
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn is_emissive(&self) -> bool {
        self.emissive
    }

    pub fn state(&self) -> EntityState {
        self.state
    }

    pub fn set_world_transform(&mut self, transform: Mat4) {
        self.world_transform = transform;
    }

    pub fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }

    pub fn set_emissive(&mut self, emissive: bool) {
        self.emissive = emissive;
    }

    pub fn set_state(&mut self, state: EntityState) {
        self.state = state;
    }
}
