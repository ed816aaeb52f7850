//! World — entity collections consumed by the renderer.
//!
//! The world holds cameras, models, and lights in slotmap storage and
//! exposes read-only visitor iteration. It does not filter by entity
//! state; the renderer checks `Active` itself before acting.

mod model;
mod light;
mod world;

pub use model::Model;
pub use light::{Light, LightKind};
pub use world::{World, CameraKey, ModelKey, LightKey};

/// Participation state of a world entity.
///
/// Only `Active` entities take part in rendering or culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityState {
    #[default]
    Active,
    Passive,
}
