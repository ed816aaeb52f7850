/// Forward pass — one lighting evaluation per drawn object.
///
/// The same pass machinery serves several shading flavors: lit opaque
/// and transparent steps, the additive emissive step after deferred
/// shading, the flat solid override, the wireframe debug layer, and the
/// false-color debug views. The flavor picks the pipeline, the
/// fixed-function states, and which models qualify.

use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::camera::{Brdf, FalseColorView};
use crate::error::Result;
use crate::bounds::BoundingFrustum;
use crate::world::{EntityState, Model, ModelKey, World};
use crate::render::command_list::CommandList;
use crate::render::state::{BlendMode, DepthMode, RasterMode, StateManager};
use super::PassStats;

/// Shading flavor of a forward pass invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardShading {
    /// Lit opaque geometry
    Opaque(Brdf),
    /// Lit transparent geometry, drawn after opaques and the sky
    Transparent(Brdf),
    /// Additive emissive surfaces (deferred sequences only)
    Emissive,
    /// Flat single-material override
    Solid,
    /// Wireframe debug layer over visible geometry
    Wireframe,
    /// Unlit false-color debug view
    FalseColor(FalseColorView),
}

impl ForwardShading {
    /// Graphics pipeline implementing this flavor.
    pub fn pipeline(self) -> &'static str {
        match self {
            ForwardShading::Opaque(Brdf::Lambert) => "forward_opaque_lambert",
            ForwardShading::Opaque(Brdf::CookTorrance) => "forward_opaque_cook_torrance",
            ForwardShading::Opaque(Brdf::OrenNayar) => "forward_opaque_oren_nayar",
            ForwardShading::Transparent(Brdf::Lambert) => "forward_transparent_lambert",
            ForwardShading::Transparent(Brdf::CookTorrance) => "forward_transparent_cook_torrance",
            ForwardShading::Transparent(Brdf::OrenNayar) => "forward_transparent_oren_nayar",
            ForwardShading::Emissive => "forward_emissive",
            ForwardShading::Solid => "forward_solid",
            ForwardShading::Wireframe => "forward_wireframe",
            ForwardShading::FalseColor(view) => match view {
                FalseColorView::Albedo => "falsecolor_albedo",
                FalseColorView::Normal => "falsecolor_normal",
                FalseColorView::Depth => "falsecolor_depth",
                FalseColorView::Roughness => "falsecolor_roughness",
                FalseColorView::Metalness => "falsecolor_metalness",
                FalseColorView::Emission => "falsecolor_emission",
                FalseColorView::AmbientOcclusion => "falsecolor_ambient_occlusion",
                FalseColorView::TexCoord => "falsecolor_tex_coord",
                FalseColorView::Tangent => "falsecolor_tangent",
                FalseColorView::Bitangent => "falsecolor_bitangent",
                FalseColorView::VertexColor => "falsecolor_vertex_color",
                FalseColorView::SpecularF0 => "falsecolor_specular_f0",
                FalseColorView::Fresnel => "falsecolor_fresnel",
                FalseColorView::LightHeatmap => "falsecolor_light_heatmap",
                FalseColorView::MaterialId => "falsecolor_material_id",
            },
        }
    }

    /// Fixed-function states bound before the draws.
    fn states(self) -> (BlendMode, DepthMode, RasterMode) {
        match self {
            ForwardShading::Opaque(_) => (BlendMode::Opaque, DepthMode::ReadWrite, RasterMode::BackCull),
            ForwardShading::Transparent(_) => (BlendMode::AlphaBlend, DepthMode::ReadOnly, RasterMode::NoCull),
            ForwardShading::Emissive => (BlendMode::Additive, DepthMode::ReadOnly, RasterMode::BackCull),
            ForwardShading::Solid => (BlendMode::Opaque, DepthMode::ReadWrite, RasterMode::BackCull),
            ForwardShading::Wireframe => (BlendMode::Opaque, DepthMode::ReadOnly, RasterMode::Wireframe),
            ForwardShading::FalseColor(_) => (BlendMode::Opaque, DepthMode::ReadWrite, RasterMode::BackCull),
        }
    }

    /// Whether this flavor draws the given model.
    fn selects(self, model: &Model) -> bool {
        match self {
            ForwardShading::Opaque(_) => !model.is_transparent(),
            ForwardShading::Transparent(_) => model.is_transparent(),
            ForwardShading::Emissive => model.is_emissive() && !model.is_transparent(),
            ForwardShading::Solid
            | ForwardShading::Wireframe
            | ForwardShading::FalseColor(_) => true,
        }
    }
}

/// Geometry pass drawing world models with per-object culling.
#[derive(Default)]
pub struct ForwardPass;

impl ForwardPass {
    pub fn new() -> Self {
        Self
    }

    /// Draw every active model the flavor selects that survives
    /// frustum culling against the camera's clip transform.
    pub fn render(
        &self,
        world: &World,
        world_to_projection: &Mat4,
        shading: ForwardShading,
        slots: &FxHashMap<ModelKey, u32>,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<PassStats> {
        let (blend, depth, raster) = shading.states();
        state.bind(cmd, blend, depth, raster)?;
        cmd.bind_pipeline(shading.pipeline())?;

        let mut stats = PassStats::default();
        let mut result = Ok(());
        world.for_each_model(|key, model| {
            if result.is_err() || model.state() == EntityState::Passive {
                return;
            }
            if !shading.selects(model) {
                return;
            }
            let to_clip = *world_to_projection * *model.world_transform();
            if BoundingFrustum::cull(&to_clip, model.local_bounds()) {
                stats.culled += 1;
                return;
            }
            let Some(&slot) = slots.get(&key) else {
                return;
            };
            result = draw_model(cmd, model, slot);
            if result.is_ok() {
                stats.drawn += 1;
            }
        });
        result?;
        Ok(stats)
    }
}

/// Submit one model draw: slot index as push constants, indexed when
/// the model carries indices.
pub(super) fn draw_model(cmd: &mut dyn CommandList, model: &Model, slot: u32) -> Result<()> {
    cmd.push_constants(bytemuck::cast_slice(&[slot]))?;
    if model.index_count() > 0 {
        cmd.draw_indexed(model.index_count(), 0, 0)
    } else {
        cmd.draw(model.vertex_count(), 0)
    }
}

#[cfg(test)]
#[path = "forward_tests.rs"]
mod tests;
