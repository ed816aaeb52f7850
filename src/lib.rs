/*!
# Helios Renderer

Frame-rendering core for a real-time 3D engine: geometric culling
primitives and the pass orchestration that turns a world of cameras,
models, and lights into an ordered stream of GPU commands.

This crate is platform-agnostic. GPU work goes through the
`CommandList` and `OutputManager` traits; backend crates (Vulkan,
Direct3D 12, etc.) implement those and never leak into the core.

## Architecture

- **Bounds**: AABB, bounding sphere, and frustum volumes with
  strict/non-strict overlap, enclosure, and coverage classification
- **Camera**: projection, lens, and the per-camera settings block that
  selects the render mode
- **World**: slotmap-backed camera/model/light collections, read-only
  during rendering
- **Renderer**: per-frame orchestrator executing one pass sequence per
  active camera, with anti-aliasing, depth of field, tone mapping, and
  the sprite overlay

Backends drive it with `Renderer::render(&world, &mut output, &mut cmd)`
once per frame.
*/

// Internal modules
mod error;
pub mod log;
pub mod bounds;
pub mod camera;
pub mod world;
pub mod render;

// Math types are part of the public API surface
pub use glam;

// Main helios namespace module
pub mod helios {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger};
        // Note: helios_* macros are NOT re-exported here - they are internal only
    }

    // Bounding volumes and culling
    pub mod bounds {
        pub use crate::bounds::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // World sub-module
    pub mod world {
        pub use crate::world::*;
    }

    // Render sub-module with the orchestrator and GPU seams
    pub mod render {
        pub use crate::render::*;
        pub use crate::render::passes::{Sprite, PassStats};
    }
}
