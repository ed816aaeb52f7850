//! Render module — orchestration, passes, and GPU collaborator seams.
//!
//! The renderer sequences GPU work across rendering strategies (forward,
//! deferred, voxel grid, solid, false-color debug views). GPU-side state
//! lives behind the `CommandList` and `OutputManager` traits; backends
//! implement those, the core never touches a device directly.

mod config;
mod command_list;
mod output;
mod state;
mod renderer;
pub mod passes;

#[cfg(test)]
pub(crate) mod mock;

pub use config::{RenderConfig, DisplayConfig, AntiAliasing, VoxelizationConfig};
pub use command_list::{CommandList, Viewport, BufferSlot};
pub use output::{OutputManager, BindScope, BindScopeKind};
pub use state::{StateManager, BlendMode, DepthMode, RasterMode, SamplerMode};
pub use renderer::{Renderer, FrameStats};
