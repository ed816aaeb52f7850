/// Voxelization passes — scene voxelization for cone tracing and the
/// voxel-grid visualization mode.

use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::bounds::Coverage;
use crate::world::{EntityState, ModelKey, World};
use crate::render::command_list::{CommandList, Viewport};
use crate::render::config::VoxelizationConfig;
use crate::render::state::{BlendMode, DepthMode, RasterMode, StateManager};
use super::PassStats;

/// Rasterizes the scene into the voxel grid.
///
/// Models whose world bounds fall outside the grid are skipped; the
/// grid classification uses world-space boxes directly, no frustum.
pub struct VoxelizationPass {
    config: VoxelizationConfig,
}

impl VoxelizationPass {
    /// Validate the grid configuration. The resolution must be a
    /// nonzero power of two so the mip chain divides evenly.
    pub fn new(config: &VoxelizationConfig) -> Result<Self> {
        if config.resolution == 0 || !config.resolution.is_power_of_two() {
            crate::helios_bail!(
                "VoxelizationPass",
                "voxel resolution must be a nonzero power of two, got {}",
                config.resolution
            );
        }
        if config.voxel_size <= 0.0 {
            crate::helios_bail!(
                "VoxelizationPass",
                "voxel size must be positive, got {}",
                config.voxel_size
            );
        }
        Ok(Self { config: *config })
    }

    pub fn config(&self) -> &VoxelizationConfig {
        &self.config
    }

    /// Voxelize every active model intersecting the grid bounds.
    pub fn render(
        &self,
        world: &World,
        slots: &FxHashMap<ModelKey, u32>,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<PassStats> {
        // Conservative rasterization wants every triangle, so no
        // culling and no depth; the viewport matches the grid slice.
        let edge = self.config.resolution as f32;
        cmd.set_viewport(Viewport::new(edge, edge))?;
        state.bind(cmd, BlendMode::Opaque, DepthMode::Disabled, RasterMode::NoCull)?;
        cmd.bind_pipeline("voxelize")?;

        let grid = self.config.grid_bounds();
        let mut stats = PassStats::default();
        let mut result = Ok(());
        world.for_each_model(|key, model| {
            if result.is_err() || model.state() == EntityState::Passive {
                return;
            }
            if grid.classify(&model.world_bounds()) == Coverage::NoCoverage {
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

/// Draws the voxel grid contents as instanced cubes.
#[derive(Default)]
pub struct VoxelGridPass;

impl VoxelGridPass {
    pub fn new() -> Self {
        Self
    }

    /// One cube instance per voxel; empty voxels are discarded
    /// in-shader.
    pub fn render(
        &self,
        config: &VoxelizationConfig,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        state.bind(cmd, BlendMode::Opaque, DepthMode::ReadWrite, RasterMode::BackCull)?;
        cmd.bind_pipeline("voxel_grid_viz")?;
        let instances = config.resolution * config.resolution * config.resolution;
        cmd.draw_instanced(36, instances)
    }
}

#[cfg(test)]
#[path = "voxel_tests.rs"]
mod tests;
