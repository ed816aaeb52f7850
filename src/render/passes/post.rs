/// Post-processing passes — anti-aliasing resolve, depth of field, and
/// the back-buffer tone map.

use crate::camera::{CameraLens, ToneMapping};
use crate::error::Result;
use crate::render::command_list::{CommandList, Viewport};
use crate::render::config::{AntiAliasing, DisplayConfig};
use crate::render::output::{BindScope, BindScopeKind, OutputManager};
use crate::render::state::{BlendMode, DepthMode, RasterMode, StateManager};

/// Compute tile edge for the depth-of-field dispatch.
const DOF_TILE: u32 = 8;

/// Resolves the camera output into the display's anti-aliased target.
pub struct AntiAliasPass {
    anti_aliasing: AntiAliasing,
}

impl AntiAliasPass {
    /// Validate the display's anti-aliasing settings against what the
    /// resolve pipelines support.
    pub fn new(display: &DisplayConfig) -> Result<Self> {
        match display.anti_aliasing {
            AntiAliasing::Msaa { samples } if !matches!(samples, 2 | 4 | 8) => {
                crate::helios_bail!(
                    "AntiAliasPass",
                    "unsupported MSAA sample count {}, expected 2, 4 or 8",
                    samples
                );
            }
            AntiAliasing::Ssaa { factor } if !matches!(factor, 2 | 4) => {
                crate::helios_bail!(
                    "AntiAliasPass",
                    "unsupported SSAA factor {}, expected 2 or 4",
                    factor
                );
            }
            _ => {}
        }
        Ok(Self {
            anti_aliasing: display.anti_aliasing,
        })
    }

    /// Resolve inside a nested scope on the camera output. FXAA runs
    /// two stages through the ping-pong pair; MSAA and SSAA are a
    /// single hardware resolve. `AntiAliasing::None` opens no scope.
    pub fn render(
        &self,
        output_scope: &mut BindScope,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        match self.anti_aliasing {
            AntiAliasing::None => Ok(()),
            AntiAliasing::Fxaa => {
                let mut scope = output_scope.nest(BindScopeKind::Resolve);
                state.bind(cmd, BlendMode::Opaque, DepthMode::Disabled, RasterMode::NoCull)?;
                cmd.bind_pipeline("fxaa_luma")?;
                cmd.draw(3, 0)?;
                scope.output().bind_ping_pong();
                cmd.bind_pipeline("fxaa_resolve")?;
                cmd.draw(3, 0)
            }
            AntiAliasing::Msaa { .. } | AntiAliasing::Ssaa { .. } => {
                let _scope = output_scope.nest(BindScopeKind::Resolve);
                state.bind(cmd, BlendMode::Opaque, DepthMode::Disabled, RasterMode::NoCull)?;
                cmd.bind_pipeline("hardware_resolve")?;
                cmd.draw(3, 0)
            }
        }
    }
}

/// Thin-lens depth of field over the resolved camera output.
#[derive(Default)]
pub struct DepthOfFieldPass;

impl DepthOfFieldPass {
    pub fn new() -> Self {
        Self
    }

    /// Dispatch the blur for a finite-aperture lens; a pinhole camera
    /// (zero aperture) skips the pass entirely.
    pub fn render(
        &self,
        lens: &CameraLens,
        viewport: &Viewport,
        output: &mut dyn OutputManager,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        if !lens.has_finite_aperture() {
            return Ok(());
        }
        output.bind_begin_post_processing();
        cmd.bind_pipeline("depth_of_field_cs")?;
        cmd.push_constants(bytemuck::cast_slice(&[
            lens.aperture_radius,
            lens.focal_distance,
            lens.focal_length,
            0.0,
        ]))?;
        let groups_x = (viewport.width as u32).div_ceil(DOF_TILE);
        let groups_y = (viewport.height as u32).div_ceil(DOF_TILE);
        cmd.dispatch(groups_x.max(1), groups_y.max(1), 1)
    }
}

/// Tone maps the camera output into the back buffer.
#[derive(Default)]
pub struct BackBufferPass;

impl BackBufferPass {
    pub fn new() -> Self {
        Self
    }

    /// Pipeline implementing the camera's tone-mapping operator.
    fn pipeline(tone_mapping: ToneMapping) -> &'static str {
        match tone_mapping {
            ToneMapping::Linear => "tonemap_linear",
            ToneMapping::Reinhard => "tonemap_reinhard",
            ToneMapping::Filmic => "tonemap_filmic",
            ToneMapping::Aces => "tonemap_aces",
        }
    }

    /// Fullscreen draw into the back buffer at the camera viewport,
    /// after the camera's output scope has closed.
    pub fn render(
        &self,
        tone_mapping: ToneMapping,
        gamma: f32,
        viewport: &Viewport,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        cmd.set_viewport(*viewport)?;
        state.bind(cmd, BlendMode::Opaque, DepthMode::Disabled, RasterMode::NoCull)?;
        cmd.bind_pipeline(Self::pipeline(tone_mapping))?;
        cmd.push_constants(bytemuck::cast_slice(&[gamma]))?;
        cmd.draw(3, 0)
    }
}

#[cfg(test)]
#[path = "post_tests.rs"]
mod tests;
