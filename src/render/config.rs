/// Render configuration — process-wide settings with an init-once,
/// update-occasionally lifecycle.
///
/// One explicit struct passed by reference into `Renderer::new` and
/// threaded through the passes that need it. Single source of truth,
/// no hidden global state.

use glam::Vec3;
use crate::bounds::Aabb;
use super::command_list::Viewport;

/// Anti-aliasing technique for the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AntiAliasing {
    /// No resolve step
    #[default]
    None,
    /// Post-process edge smoothing: two-stage luma preprocess + resolve
    Fxaa,
    /// Hardware multi-sampling, single resolve
    Msaa { samples: u32 },
    /// Super-sampling, single resolve
    Ssaa { factor: u32 },
}

/// Display output configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub anti_aliasing: AntiAliasing,
}

impl DisplayConfig {
    /// True when the display renders into multi-sampled attachments.
    ///
    /// Selects the pixel-shader deferred shading path; the compute path
    /// cannot read multi-sampled G-Buffer attachments.
    pub fn uses_msaa(&self) -> bool {
        matches!(self.anti_aliasing, AntiAliasing::Msaa { .. })
    }

    /// Full-display viewport.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            anti_aliasing: AntiAliasing::None,
        }
    }
}

/// Voxel grid placement and resolution for voxel cone tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelizationConfig {
    /// World-space center of the voxel grid
    pub center: Vec3,
    /// Voxels along each axis (must be a nonzero power of two)
    pub resolution: u32,
    /// World-space edge length of one voxel
    pub voxel_size: f32,
}

impl VoxelizationConfig {
    /// World-space region covered by the voxel grid.
    pub fn grid_bounds(&self) -> Aabb {
        let half_extent = self.resolution as f32 * self.voxel_size * 0.5;
        Aabb::from_center_extent(self.center, Vec3::splat(half_extent))
    }
}

impl Default for VoxelizationConfig {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            resolution: 128,
            voxel_size: 0.25,
        }
    }
}

/// Top-level render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub display: DisplayConfig,
    pub voxelization: VoxelizationConfig,
    /// Display gamma applied by the back-buffer tone-mapping pass
    pub gamma: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            voxelization: VoxelizationConfig::default(),
            gamma: 2.2,
        }
    }
}
