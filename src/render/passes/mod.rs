/// Render passes — one module per pass family.
///
/// Each pass is a plain struct with a `render` method taking the world
/// (read-only), the GPU seams, and whatever per-camera data it needs.
/// Geometry passes return [`PassStats`] so the renderer can aggregate
/// per-frame counters.

mod lighting;
mod forward;
mod deferred;
mod sky;
mod voxel;
mod post;
mod debug;
mod sprite;

pub use lighting::{LightBufferPass, DepthPass};
pub use forward::{ForwardPass, ForwardShading};
pub use deferred::{GBufferPass, DeferredShadingPass};
pub use sky::SkyPass;
pub use voxel::{VoxelizationPass, VoxelGridPass};
pub use post::{AntiAliasPass, DepthOfFieldPass, BackBufferPass};
pub use debug::BoundingVolumeDebugPass;
pub use sprite::{Sprite, SpritePass};

/// Draw/cull counters returned by geometry passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassStats {
    /// Entities submitted to the GPU
    pub drawn: u32,
    /// Entities rejected by visibility tests
    pub culled: u32,
}

impl PassStats {
    /// Fold another pass's counters into this one.
    pub fn merge(&mut self, other: PassStats) {
        self.drawn += other.drawn;
        self.culled += other.culled;
    }
}
