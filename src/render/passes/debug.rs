/// Bounding-volume debug layer — world-space AABBs as wire boxes.

use glam::Mat4;
use crate::error::Result;
use crate::bounds::BoundingFrustum;
use crate::world::{EntityState, World};
use crate::render::command_list::CommandList;
use crate::render::state::{BlendMode, DepthMode, RasterMode, StateManager};
use super::PassStats;

#[derive(Default)]
pub struct BoundingVolumeDebugPass;

impl BoundingVolumeDebugPass {
    pub fn new() -> Self {
        Self
    }

    /// Draw a line box around every visible model's world bounds.
    /// The box corners are pushed as constants; the pipeline expands
    /// them into 12 line segments.
    pub fn render(
        &self,
        world: &World,
        world_to_projection: &Mat4,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<PassStats> {
        state.bind(cmd, BlendMode::Opaque, DepthMode::ReadOnly, RasterMode::Wireframe)?;
        cmd.bind_pipeline("bounds_debug")?;

        let mut stats = PassStats::default();
        let mut result = Ok(());
        world.for_each_model(|_, model| {
            if result.is_err() || model.state() == EntityState::Passive {
                return;
            }
            let to_clip = *world_to_projection * *model.world_transform();
            if BoundingFrustum::cull(&to_clip, model.local_bounds()) {
                stats.culled += 1;
                return;
            }
            let bounds = model.world_bounds();
            let corners = [
                bounds.min.x, bounds.min.y, bounds.min.z, 0.0,
                bounds.max.x, bounds.max.y, bounds.max.z, 0.0,
            ];
            result = cmd
                .push_constants(bytemuck::cast_slice(&corners))
                .and_then(|_| cmd.draw(24, 0));
            if result.is_ok() {
                stats.drawn += 1;
            }
        });
        result?;
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
