/// CommandList — GPU command recording seam.
///
/// Implemented by backend command lists. Passes record draw/dispatch
/// work and fixed-function state binds through this trait and hold the
/// reference only for the duration of one call.

use crate::error::Result;
use super::state::{BlendMode, DepthMode, RasterMode, SamplerMode};

/// Viewport dimensions and depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-size viewport at origin with the standard [0, 1] depth range.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// GPU-visible constant/storage buffer addressed by the renderer.
///
/// Slots are stable across frames: an entity keeps its slot for as long
/// as it lives in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferSlot {
    /// Per-camera constant buffer (transform + settings)
    Camera(u32),
    /// Per-object constant buffer (world transform)
    Object(u32),
    /// Shared light-list buffer filled by the light-buffer pass
    LightList,
}

/// Command recording interface implemented by GPU backends.
///
/// All methods return `Result` so backend submission errors propagate;
/// in steady state none of these calls is expected to fail.
pub trait CommandList {
    /// Set the active viewport.
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Bind a named graphics or compute pipeline.
    fn bind_pipeline(&mut self, name: &str) -> Result<()>;

    /// Bind a blend state.
    fn bind_blend(&mut self, mode: BlendMode) -> Result<()>;

    /// Bind a depth-stencil state.
    fn bind_depth(&mut self, mode: DepthMode) -> Result<()>;

    /// Bind a rasterizer state.
    fn bind_raster(&mut self, mode: RasterMode) -> Result<()>;

    /// Bind a sampler at the given slot.
    fn bind_sampler(&mut self, slot: u32, mode: SamplerMode) -> Result<()>;

    /// Push small per-draw constants.
    fn push_constants(&mut self, data: &[u8]) -> Result<()>;

    /// Upload data into a renderer-owned buffer slot.
    fn update_buffer(&mut self, slot: BufferSlot, data: &[u8]) -> Result<()>;

    /// Draw non-indexed geometry.
    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<()>;

    /// Draw non-indexed geometry with instancing.
    fn draw_instanced(&mut self, vertex_count: u32, instance_count: u32) -> Result<()>;

    /// Draw indexed geometry.
    fn draw_indexed(&mut self, index_count: u32, first_index: u32, vertex_offset: i32) -> Result<()>;

    /// Dispatch a compute workload.
    fn dispatch(&mut self, groups_x: u32, groups_y: u32, groups_z: u32) -> Result<()>;
}
