/// Sky pass — drawn after opaques so depth testing rejects covered
/// pixels, before transparents so they blend over the sky.

use crate::camera::SkyMode;
use crate::error::Result;
use crate::render::command_list::CommandList;
use crate::render::state::{BlendMode, DepthMode, RasterMode, StateManager};

#[derive(Default)]
pub struct SkyPass;

impl SkyPass {
    pub fn new() -> Self {
        Self
    }

    /// Draw the sky for the camera's mode; `SkyMode::None` draws
    /// nothing.
    pub fn render(
        &self,
        mode: SkyMode,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        match mode {
            SkyMode::None => Ok(()),
            SkyMode::Procedural => {
                state.bind(cmd, BlendMode::Opaque, DepthMode::ReadOnly, RasterMode::NoCull)?;
                cmd.bind_pipeline("sky_procedural")?;
                // Fullscreen triangle, ray direction derived in-shader
                cmd.draw(3, 0)
            }
            SkyMode::Skybox => {
                state.bind(cmd, BlendMode::Opaque, DepthMode::ReadOnly, RasterMode::NoCull)?;
                cmd.bind_pipeline("sky_box")?;
                // Unit cube around the camera
                cmd.draw(36, 0)
            }
        }
    }
}

#[cfg(test)]
#[path = "sky_tests.rs"]
mod tests;
