/// StateManager — named fixed-function GPU states.
///
/// Passes bind blend/depth/raster combinations through the state
/// manager; the renderer itself binds the persistent sampler set once
/// at the start of the first frame.

use rustc_hash::FxHashMap;
use crate::error::Result;
use super::command_list::CommandList;

/// Blend state presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Blending disabled, source overwrites
    Opaque,
    /// Classic source-alpha blending
    AlphaBlend,
    /// Additive accumulation (emissive, light volumes)
    Additive,
}

/// Depth-stencil state presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthMode {
    /// Depth test + write
    ReadWrite,
    /// Depth test only
    ReadOnly,
    /// Depth disabled (fullscreen passes, overlays)
    Disabled,
}

/// Rasterizer state presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterMode {
    /// Back-face culling, solid fill
    BackCull,
    /// No culling, solid fill (transparents, voxelization)
    NoCull,
    /// Line fill for wireframe layers
    Wireframe,
}

/// Sampler presets bound persistently at fixed slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerMode {
    PointClamp,
    LinearClamp,
    LinearWrap,
    Anisotropic,
    Shadow,
}

/// Persistent sampler slots.
const PERSISTENT_SAMPLERS: [(u32, SamplerMode); 5] = [
    (0, SamplerMode::PointClamp),
    (1, SamplerMode::LinearClamp),
    (2, SamplerMode::LinearWrap),
    (3, SamplerMode::Anisotropic),
    (4, SamplerMode::Shadow),
];

/// Owner of the fixed-function state presets.
pub struct StateManager {
    persistent_samplers: FxHashMap<u32, SamplerMode>,
}

impl StateManager {
    /// Create the state manager with the default persistent sampler set.
    pub fn new() -> Self {
        Self {
            persistent_samplers: PERSISTENT_SAMPLERS.iter().copied().collect(),
        }
    }

    /// Bind the sampler set that stays bound for the whole process.
    ///
    /// Called once by the renderer on its first frame.
    pub fn bind_persistent_state(&self, cmd: &mut dyn CommandList) -> Result<()> {
        let mut slots: Vec<_> = self.persistent_samplers.iter().collect();
        slots.sort_by_key(|(slot, _)| **slot);
        for (slot, mode) in slots {
            cmd.bind_sampler(*slot, *mode)?;
        }
        Ok(())
    }

    /// Bind a blend/depth/raster combination for a pass step.
    pub fn bind(
        &self,
        cmd: &mut dyn CommandList,
        blend: BlendMode,
        depth: DepthMode,
        raster: RasterMode,
    ) -> Result<()> {
        cmd.bind_blend(blend)?;
        cmd.bind_depth(depth)?;
        cmd.bind_raster(raster)
    }

    /// Sampler mode registered at a persistent slot, if any.
    pub fn persistent_sampler(&self, slot: u32) -> Option<SamplerMode> {
        self.persistent_samplers.get(&slot).copied()
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
