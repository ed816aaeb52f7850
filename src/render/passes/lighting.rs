/// Light-buffer pass — gathers visible lights into the shared light
/// list and drives shadow-map renders for the shadow casters among
/// them.
///
/// Point and spot lights carry a finite reach sphere and are culled
/// against the camera frustum; directional lights always make the list.

use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::bounds::BoundingFrustum;
use crate::world::{EntityState, Light, LightKind, ModelKey, World};
use crate::render::command_list::{BufferSlot, CommandList};
use crate::render::state::{BlendMode, DepthMode, RasterMode, StateManager};
use super::PassStats;

/// Floats per packed light record.
const LIGHT_STRIDE: usize = 16;

/// Packed header + light records uploaded to [`BufferSlot::LightList`].
fn pack_lights(lights: &[Light]) -> Vec<f32> {
    let mut data = Vec::with_capacity(4 + lights.len() * LIGHT_STRIDE);
    data.extend_from_slice(&[lights.len() as f32, 0.0, 0.0, 0.0]);
    for light in lights {
        let (kind_id, range, angle) = match light.kind() {
            LightKind::Directional => (0.0, f32::INFINITY, 0.0),
            LightKind::Point { range } => (1.0, range, 0.0),
            LightKind::Spot { range, angle } => (2.0, range, angle),
        };
        let position = light.position();
        let direction = light.direction();
        let color = light.color();
        data.extend_from_slice(&[
            position.x, position.y, position.z, kind_id,
            direction.x, direction.y, direction.z, range,
            color.x, color.y, color.z, light.intensity(),
            angle,
            if light.casts_shadows() { 1.0 } else { 0.0 },
            0.0, 0.0,
        ]);
    }
    data
}

/// Depth-only render of the scene from a light's viewpoint.
#[derive(Default)]
pub struct DepthPass;

impl DepthPass {
    pub fn new() -> Self {
        Self
    }

    /// Draw every active model that overlaps the light frustum,
    /// depth only.
    pub fn render(
        &self,
        world: &World,
        light_view_projection: &Mat4,
        slots: &FxHashMap<ModelKey, u32>,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<PassStats> {
        state.bind(cmd, BlendMode::Opaque, DepthMode::ReadWrite, RasterMode::BackCull)?;
        cmd.bind_pipeline("shadow_depth")?;

        let mut stats = PassStats::default();
        let mut result = Ok(());
        world.for_each_model(|key, model| {
            if result.is_err() || model.state() == EntityState::Passive {
                return;
            }
            let to_clip = *light_view_projection * *model.world_transform();
            if BoundingFrustum::cull(&to_clip, model.local_bounds()) {
                stats.culled += 1;
                return;
            }
            let Some(&slot) = slots.get(&key) else {
                return;
            };
            result = super::forward::draw_model(cmd, model, slot);
            if result.is_ok() {
                stats.drawn += 1;
            }
        });
        result?;
        Ok(stats)
    }
}

/// Collects visible lights, uploads the light list, renders shadow
/// maps.
#[derive(Default)]
pub struct LightBufferPass;

impl LightBufferPass {
    pub fn new() -> Self {
        Self
    }

    /// Cull, pack, and upload the light list for one camera, then run
    /// the depth pass once per visible shadow caster.
    ///
    /// Returned stats count lights: `drawn` is the light-list length,
    /// `culled` the lights rejected by the sphere test.
    pub fn render(
        &self,
        world: &World,
        world_to_projection: &Mat4,
        depth: &DepthPass,
        slots: &FxHashMap<ModelKey, u32>,
        state: &StateManager,
        cmd: &mut dyn CommandList,
    ) -> Result<PassStats> {
        let frustum = BoundingFrustum::from_matrix(world_to_projection);
        let mut visible: Vec<Light> = Vec::new();
        let mut stats = PassStats::default();
        world.for_each_light(|_, light| {
            if light.state() == EntityState::Passive {
                return;
            }
            match light.bounding_sphere() {
                Some(sphere) if !frustum.overlaps_sphere(&sphere) => {
                    stats.culled += 1;
                }
                _ => visible.push(light.clone()),
            }
        });
        stats.drawn = visible.len() as u32;

        let data = pack_lights(&visible);
        cmd.update_buffer(BufferSlot::LightList, bytemuck::cast_slice(&data))?;

        for light in &visible {
            if light.casts_shadows() {
                depth.render(world, &light.shadow_view_projection(), slots, state, cmd)?;
            }
        }
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "lighting_tests.rs"]
mod tests;
