/// Sprite overlay — screen-space quads drawn once per frame at the
/// full display viewport, after every camera has rendered.

use crate::error::Result;
use crate::render::command_list::{CommandList, Viewport};
use crate::render::output::OutputManager;
use crate::render::state::{BlendMode, DepthMode, RasterMode, StateManager};

/// A queued screen-space quad in display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Caller-fed overlay queue, drained by the frame render.
#[derive(Default)]
pub struct SpritePass {
    queue: Vec<Sprite>,
}

impl SpritePass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a sprite for the next frame.
    pub fn enqueue(&mut self, sprite: Sprite) {
        self.queue.push(sprite);
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Draw and clear the queue at the display viewport. An empty
    /// queue skips the pass without touching the output.
    pub fn render(
        &mut self,
        display_viewport: &Viewport,
        output: &mut dyn OutputManager,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        if self.queue.is_empty() {
            return Ok(());
        }
        output.bind_display_viewport();
        cmd.set_viewport(*display_viewport)?;
        state.bind(cmd, BlendMode::AlphaBlend, DepthMode::Disabled, RasterMode::NoCull)?;
        cmd.bind_pipeline("sprite")?;
        for sprite in self.queue.drain(..) {
            cmd.push_constants(bytemuck::cast_slice(&[
                sprite.x,
                sprite.y,
                sprite.width,
                sprite.height,
            ]))?;
            cmd.draw(6, 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sprite_tests.rs"]
mod tests;
