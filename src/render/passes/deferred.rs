/// Deferred passes — G-Buffer fill and the shading resolve.
///
/// The shading resolve prefers a compute dispatch; multi-sampled
/// G-Buffer attachments cannot be read by the compute path, so an MSAA
/// display falls back to a fullscreen pixel draw.

use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::bounds::BoundingFrustum;
use crate::world::{EntityState, ModelKey, World};
use crate::render::command_list::{CommandList, Viewport};
use crate::render::config::DisplayConfig;
use crate::render::state::{BlendMode, DepthMode, RasterMode, StateManager};
use super::PassStats;

/// Compute tile edge for the shading dispatch.
const SHADING_TILE: u32 = 8;

/// Fills the G-Buffer with opaque geometry attributes.
#[derive(Default)]
pub struct GBufferPass;

impl GBufferPass {
    pub fn new() -> Self {
        Self
    }

    /// Draw every active opaque model that survives frustum culling.
    /// Transparents never write the G-Buffer; they are forward-drawn
    /// later in the sequence.
    pub fn render(
        &self,
        world: &World,
        world_to_projection: &Mat4,
        slots: &FxHashMap<ModelKey, u32>,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<PassStats> {
        state.bind(cmd, BlendMode::Opaque, DepthMode::ReadWrite, RasterMode::BackCull)?;
        cmd.bind_pipeline("gbuffer_opaque")?;

        let mut stats = PassStats::default();
        let mut result = Ok(());
        world.for_each_model(|key, model| {
            if result.is_err() || model.state() == EntityState::Passive {
                return;
            }
            if model.is_transparent() {
                return;
            }
            let to_clip = *world_to_projection * *model.world_transform();
            if BoundingFrustum::cull(&to_clip, model.local_bounds()) {
                stats.culled += 1;
                return;
            }
            let Some(&slot) = slots.get(&key) else {
                return;
            };
            result = super::forward::draw_model(cmd, model, slot);
            if result.is_ok() {
                stats.drawn += 1;
            }
        });
        result?;
        Ok(stats)
    }
}

/// Resolves the G-Buffer into lit color.
#[derive(Default)]
pub struct DeferredShadingPass;

impl DeferredShadingPass {
    pub fn new() -> Self {
        Self
    }

    /// Shade the camera viewport: compute dispatch over tiles, or a
    /// fullscreen pixel draw when the display is multi-sampled.
    pub fn render(
        &self,
        display: &DisplayConfig,
        viewport: &Viewport,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        if display.uses_msaa() {
            state.bind(cmd, BlendMode::Opaque, DepthMode::Disabled, RasterMode::NoCull)?;
            cmd.bind_pipeline("deferred_shading_ps")?;
            cmd.draw(3, 0)
        } else {
            cmd.bind_pipeline("deferred_shading_cs")?;
            let groups_x = (viewport.width as u32).div_ceil(SHADING_TILE);
            let groups_y = (viewport.height as u32).div_ceil(SHADING_TILE);
            cmd.dispatch(groups_x.max(1), groups_y.max(1), 1)
        }
    }
}

#[cfg(test)]
#[path = "deferred_tests.rs"]
mod tests;
