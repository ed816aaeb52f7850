/// Camera — passive data container consumed by the renderer.
///
/// The renderer reads cameras during `Render` and never mutates them.
/// The camera carries its projection, viewport, lens, and the settings
/// block that selects which pass sequence the renderer executes.

use glam::Mat4;
use bitflags::bitflags;
use crate::render::Viewport;
use crate::world::EntityState;
use super::projection::{Projection, projection_matrix};

// ===== RENDER MODE =====

/// False-color debug views, one forward pipeline variant each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FalseColorView {
    Albedo,
    Normal,
    Depth,
    Roughness,
    Metalness,
    Emission,
    AmbientOcclusion,
    TexCoord,
    Tangent,
    Bitangent,
    VertexColor,
    SpecularF0,
    Fresnel,
    LightHeatmap,
    MaterialId,
}

impl FalseColorView {
    /// Pipeline name suffix for this view.
    pub fn name(self) -> &'static str {
        match self {
            FalseColorView::Albedo => "albedo",
            FalseColorView::Normal => "normal",
            FalseColorView::Depth => "depth",
            FalseColorView::Roughness => "roughness",
            FalseColorView::Metalness => "metalness",
            FalseColorView::Emission => "emission",
            FalseColorView::AmbientOcclusion => "ambient_occlusion",
            FalseColorView::TexCoord => "tex_coord",
            FalseColorView::Tangent => "tangent",
            FalseColorView::Bitangent => "bitangent",
            FalseColorView::VertexColor => "vertex_color",
            FalseColorView::SpecularF0 => "specular_f0",
            FalseColorView::Fresnel => "fresnel",
            FalseColorView::LightHeatmap => "light_heatmap",
            FalseColorView::MaterialId => "material_id",
        }
    }
}

/// Rendering strategy selected per camera, re-evaluated every frame.
///
/// `None` is the safe fallback: the renderer binds the viewport and
/// draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// No dedicated pipeline: viewport bind only, zero draws
    #[default]
    None,
    /// One lighting pass per object
    Forward,
    /// G-Buffer then per-pixel deferred shading
    Deferred,
    /// Flat single material override, no per-object material binding
    Solid,
    /// Voxelize the scene and visualize the voxel grid
    VoxelGrid,
    /// Single false-color forward pass, no lighting setup
    FalseColor(FalseColorView),
}

// ===== SETTINGS =====

/// Lighting model selecting the shading pass variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brdf {
    Lambert,
    #[default]
    CookTorrance,
    OrenNayar,
}

/// Tone-mapping operator applied by the back-buffer pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToneMapping {
    Linear,
    #[default]
    Reinhard,
    Filmic,
    Aces,
}

/// Sky rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkyMode {
    /// No sky draw
    None,
    #[default]
    Procedural,
    Skybox,
}

/// Distance fog parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub enabled: bool,
    pub density: f32,
    pub height_falloff: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            enabled: false,
            density: 0.02,
            height_falloff: 0.1,
        }
    }
}

bitflags! {
    /// Optional debug render layers, drawn after the camera's primary
    /// mode pass, still inside the forward attachment scope.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RenderLayers: u32 {
        /// Wireframe overlay of visible geometry
        const WIREFRAME = 1 << 0;
        /// World-space AABB visualization
        const BOUNDS = 1 << 1;
    }
}

/// Per-camera render settings, read-only during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraSettings {
    pub render_mode: RenderMode,
    pub brdf: Brdf,
    pub tone_mapping: ToneMapping,
    pub render_layers: RenderLayers,
    pub fog: Fog,
    pub sky: SkyMode,
    /// Voxel cone tracing: inserts the voxelization step into the
    /// Forward/Deferred sequences
    pub voxel_gi: bool,
}

/// Thin-lens parameters used by the depth-of-field pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLens {
    /// Aperture radius in meters; zero means a pinhole camera
    pub aperture_radius: f32,
    /// Distance to the focal plane in meters
    pub focal_distance: f32,
    /// Focal length in meters
    pub focal_length: f32,
}

impl CameraLens {
    /// Depth of field is dispatched only for a finite aperture.
    pub fn has_finite_aperture(&self) -> bool {
        self.aperture_radius != 0.0
    }
}

impl Default for CameraLens {
    fn default() -> Self {
        Self {
            aperture_radius: 0.0,
            focal_distance: 10.0,
            focal_length: 0.05,
        }
    }
}

// ===== CAMERA =====

/// Camera entity: world transform, projection, viewport, lens, settings.
#[derive(Debug, Clone)]
pub struct Camera {
    world_transform: Mat4,
    projection: Projection,
    near: f32,
    far: f32,
    viewport: Viewport,
    lens: CameraLens,
    settings: CameraSettings,
    state: EntityState,
}

impl Camera {
    /// Create an active camera with default lens and settings.
    pub fn new(projection: Projection, near: f32, far: f32, viewport: Viewport) -> Self {
        Self {
            world_transform: Mat4::IDENTITY,
            projection,
            near,
            far,
            viewport,
            lens: CameraLens::default(),
            settings: CameraSettings::default(),
            state: EntityState::Active,
        }
    }

    // ===== GETTERS =====

    /// World transform of the camera (camera-to-world).
    pub fn world_transform(&self) -> &Mat4 {
        &self.world_transform
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn lens(&self) -> &CameraLens {
        &self.lens
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn state(&self) -> EntityState {
        self.state
    }

    // ===== DERIVED TRANSFORMS =====

    /// View matrix: inverse of the camera's world transform.
    pub fn world_to_view(&self) -> Mat4 {
        self.world_transform.inverse()
    }

    /// Projection matrix from the camera's projection variant.
    pub fn view_to_projection(&self) -> Mat4 {
        projection_matrix(&self.projection, self.near, self.far)
    }

    /// Combined world-to-clip transform, recomputed per frame.
    pub fn world_to_projection(&self) -> Mat4 {
        self.view_to_projection() * self.world_to_view()
    }

    // ===== SETTERS (editor/scripts, between frames) =====

    pub fn set_world_transform(&mut self, transform: Mat4) {
        self.world_transform = transform;
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_lens(&mut self, lens: CameraLens) {
        self.lens = lens;
    }

    pub fn settings_mut(&mut self) -> &mut CameraSettings {
        &mut self.settings
    }

    pub fn set_state(&mut self, state: EntityState) {
        self.state = state;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
