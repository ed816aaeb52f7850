//! Camera module — camera data container, projection, and settings.
//!
//! Cameras are passive data: the renderer reads them every frame and
//! never mutates them. Scene setup creates them, editor/scripts mutate
//! them between frames.

mod camera;
mod projection;

pub use camera::{
    Camera, CameraSettings, CameraLens, RenderMode, FalseColorView,
    Brdf, ToneMapping, Fog, SkyMode, RenderLayers,
};
pub use projection::{Projection, projection_matrix};
