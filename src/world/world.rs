/// World — slotmap-backed entity collections.
///
/// Read-only for the duration of `Renderer::render`: the simulation
/// phase mutates it, then hands it to the renderer. Iteration is
/// exposed through visitor closures; the world never filters by entity
/// state (the renderer does).

use slotmap::SlotMap;
use crate::camera::Camera;
use super::model::Model;
use super::light::Light;

slotmap::new_key_type! {
    /// Key of a camera in the world
    pub struct CameraKey;
    /// Key of a model in the world
    pub struct ModelKey;
    /// Key of a light in the world
    pub struct LightKey;
}

/// Entity collections: cameras, models, lights.
#[derive(Default)]
pub struct World {
    cameras: SlotMap<CameraKey, Camera>,
    models: SlotMap<ModelKey, Model>,
    lights: SlotMap<LightKey, Light>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== CAMERAS =====

    pub fn add_camera(&mut self, camera: Camera) -> CameraKey {
        self.cameras.insert(camera)
    }

    pub fn remove_camera(&mut self, key: CameraKey) -> Option<Camera> {
        self.cameras.remove(key)
    }

    pub fn camera(&self, key: CameraKey) -> Option<&Camera> {
        self.cameras.get(key)
    }

    pub fn camera_mut(&mut self, key: CameraKey) -> Option<&mut Camera> {
        self.cameras.get_mut(key)
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Visit every camera in collection iteration order.
    pub fn for_each_camera(&self, mut visitor: impl FnMut(CameraKey, &Camera)) {
        for (key, camera) in &self.cameras {
            visitor(key, camera);
        }
    }

    // ===== MODELS =====

    pub fn add_model(&mut self, model: Model) -> ModelKey {
        self.models.insert(model)
    }

    pub fn remove_model(&mut self, key: ModelKey) -> Option<Model> {
        self.models.remove(key)
    }

    pub fn model(&self, key: ModelKey) -> Option<&Model> {
        self.models.get(key)
    }

    pub fn model_mut(&mut self, key: ModelKey) -> Option<&mut Model> {
        self.models.get_mut(key)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Visit every model in collection iteration order.
    pub fn for_each_model(&self, mut visitor: impl FnMut(ModelKey, &Model)) {
        for (key, model) in &self.models {
            visitor(key, model);
        }
    }

    // ===== LIGHTS =====

    pub fn add_light(&mut self, light: Light) -> LightKey {
        self.lights.insert(light)
    }

    pub fn remove_light(&mut self, key: LightKey) -> Option<Light> {
        self.lights.remove(key)
    }

    pub fn light(&self, key: LightKey) -> Option<&Light> {
        self.lights.get(key)
    }

    pub fn light_mut(&mut self, key: LightKey) -> Option<&mut Light> {
        self.lights.get_mut(key)
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Visit every light in collection iteration order.
    pub fn for_each_light(&self, mut visitor: impl FnMut(LightKey, &Light)) {
        for (key, light) in &self.lights {
            visitor(key, light);
        }
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
