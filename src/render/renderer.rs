/// Renderer — per-frame orchestration over the pass family.
///
/// `render` walks the world once per active camera, re-reads the
/// camera's render mode, and executes the matching pass sequence. Mode
/// sequences are static step tables, so adding a mode means adding a
/// table entry, not another branch in the frame loop.

use rustc_hash::FxHashMap;
use crate::camera::{Camera, RenderLayers, RenderMode};
use crate::error::Result;
use crate::{helios_info, helios_warn};
use crate::world::{CameraKey, EntityState, ModelKey, World};
use super::command_list::{BufferSlot, CommandList};
use super::config::RenderConfig;
use super::output::{BindScope, BindScopeKind, OutputManager};
use super::state::StateManager;
use super::passes::{
    AntiAliasPass, BackBufferPass, BoundingVolumeDebugPass, DeferredShadingPass, DepthPass,
    DepthOfFieldPass, ForwardPass, ForwardShading, GBufferPass, LightBufferPass, PassStats,
    SkyPass, Sprite, SpritePass, VoxelGridPass, VoxelizationPass,
};

// ============================================================================
// Mode sequences
// ============================================================================

/// A step executed inside the forward attachment scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ForwardStep {
    Opaque,
    Transparent,
    Emissive,
    Sky,
    Solid,
    FalseColor,
    VoxelGridViz,
    DebugLayers,
}

/// A step of a camera's scene sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SceneStep {
    /// Cull lights, upload the light list, render shadow maps
    LightBuffer,
    /// Voxelize the scene; skipped unless the camera enables voxel GI
    /// or `always` is set
    Voxelize { always: bool },
    /// Fill the G-Buffer
    GBuffer,
    /// Resolve the G-Buffer into lit color
    DeferredShading,
    /// Open the forward scope and run the inner steps
    ForwardScope(&'static [ForwardStep]),
}

const FORWARD_SEQUENCE: &[SceneStep] = &[
    SceneStep::LightBuffer,
    SceneStep::Voxelize { always: false },
    SceneStep::ForwardScope(&[
        ForwardStep::Opaque,
        ForwardStep::Sky,
        ForwardStep::Transparent,
        ForwardStep::DebugLayers,
    ]),
];

const DEFERRED_SEQUENCE: &[SceneStep] = &[
    SceneStep::LightBuffer,
    SceneStep::Voxelize { always: false },
    SceneStep::GBuffer,
    SceneStep::DeferredShading,
    SceneStep::ForwardScope(&[
        ForwardStep::Emissive,
        ForwardStep::Sky,
        ForwardStep::Transparent,
        ForwardStep::DebugLayers,
    ]),
];

const SOLID_SEQUENCE: &[SceneStep] = &[
    SceneStep::LightBuffer,
    SceneStep::ForwardScope(&[ForwardStep::Solid, ForwardStep::DebugLayers]),
];

const VOXEL_GRID_SEQUENCE: &[SceneStep] = &[
    SceneStep::LightBuffer,
    SceneStep::Voxelize { always: true },
    SceneStep::ForwardScope(&[ForwardStep::VoxelGridViz, ForwardStep::DebugLayers]),
];

const FALSE_COLOR_SEQUENCE: &[SceneStep] = &[SceneStep::ForwardScope(&[
    ForwardStep::FalseColor,
    ForwardStep::DebugLayers,
])];

/// Scene sequence for a render mode. `None` is the fallback for
/// cameras without a dedicated pipeline: bind only, draw nothing.
fn sequence(mode: RenderMode) -> &'static [SceneStep] {
    match mode {
        RenderMode::None => &[],
        RenderMode::Forward => FORWARD_SEQUENCE,
        RenderMode::Deferred => DEFERRED_SEQUENCE,
        RenderMode::Solid => SOLID_SEQUENCE,
        RenderMode::VoxelGrid => VOXEL_GRID_SEQUENCE,
        RenderMode::FalseColor(_) => FALSE_COLOR_SEQUENCE,
    }
}

// ============================================================================
// Frame stats
// ============================================================================

/// Per-frame counters, reset at the start of every `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub cameras_rendered: u32,
    pub models_drawn: u32,
    pub models_culled: u32,
    pub lights_visible: u32,
    pub lights_culled: u32,
}

impl FrameStats {
    fn add_models(&mut self, stats: PassStats) {
        self.models_drawn += stats.drawn;
        self.models_culled += stats.culled;
    }

    fn add_lights(&mut self, stats: PassStats) {
        self.lights_visible += stats.drawn;
        self.lights_culled += stats.culled;
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Frame orchestrator owning the passes, the state manager, and the
/// per-entity buffer slot tables.
pub struct Renderer {
    config: RenderConfig,
    state: StateManager,

    lbuffer: LightBufferPass,
    depth: DepthPass,
    forward: ForwardPass,
    gbuffer: GBufferPass,
    deferred: DeferredShadingPass,
    sky: SkyPass,
    voxelization: VoxelizationPass,
    voxel_grid: VoxelGridPass,
    anti_alias: AntiAliasPass,
    depth_of_field: DepthOfFieldPass,
    back_buffer: BackBufferPass,
    bounds_debug: BoundingVolumeDebugPass,
    sprite: SpritePass,

    // Slots are stable for an entity's lifetime and released when it
    // leaves the world; slot indices themselves are never reused
    camera_slots: FxHashMap<CameraKey, u32>,
    model_slots: FxHashMap<ModelKey, u32>,
    next_camera_slot: u32,
    next_model_slot: u32,

    persistent_state_bound: bool,
    stats: FrameStats,
}

impl Renderer {
    /// Validate the configuration and build the pass family.
    pub fn new(config: &RenderConfig) -> Result<Self> {
        let voxelization = VoxelizationPass::new(&config.voxelization)?;
        let anti_alias = AntiAliasPass::new(&config.display)?;
        helios_info!(
            "Renderer",
            "renderer initialized: {}x{}, {:?}, voxel grid {}^3",
            config.display.width,
            config.display.height,
            config.display.anti_aliasing,
            config.voxelization.resolution
        );
        Ok(Self {
            config: *config,
            state: StateManager::new(),
            lbuffer: LightBufferPass::new(),
            depth: DepthPass::new(),
            forward: ForwardPass::new(),
            gbuffer: GBufferPass::new(),
            deferred: DeferredShadingPass::new(),
            sky: SkyPass::new(),
            voxelization,
            voxel_grid: VoxelGridPass::new(),
            anti_alias,
            depth_of_field: DepthOfFieldPass::new(),
            back_buffer: BackBufferPass::new(),
            bounds_debug: BoundingVolumeDebugPass::new(),
            sprite: SpritePass::new(),
            camera_slots: FxHashMap::default(),
            model_slots: FxHashMap::default(),
            next_camera_slot: 0,
            next_model_slot: 0,
            persistent_state_bound: false,
            stats: FrameStats::default(),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Counters of the most recent frame.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Queue a screen-space sprite for the next frame's overlay.
    pub fn enqueue_sprite(&mut self, sprite: Sprite) {
        self.sprite.enqueue(sprite);
    }

    /// Render one frame: every active camera in world order, then the
    /// sprite overlay once at the display viewport.
    pub fn render(
        &mut self,
        world: &World,
        output: &mut dyn OutputManager,
        cmd: &mut dyn CommandList,
    ) -> Result<FrameStats> {
        if !self.persistent_state_bound {
            self.state.bind_persistent_state(cmd)?;
            self.persistent_state_bound = true;
        }
        self.update_buffers(world, cmd)?;

        let mut stats = FrameStats::default();

        let mut camera_keys = Vec::new();
        world.for_each_camera(|key, camera| {
            if camera.state() == EntityState::Active {
                camera_keys.push(key);
            }
        });

        for key in camera_keys {
            let Some(camera) = world.camera(key) else {
                continue;
            };
            self.render_camera(world, camera, output, cmd, &mut stats)?;
            stats.cameras_rendered += 1;
        }

        self.sprite.render(
            &self.config.display.viewport(),
            output,
            &self.state,
            cmd,
        )?;

        self.stats = stats;
        Ok(stats)
    }

    /// One camera's frame: scene sequence inside the output scope,
    /// anti-aliasing and depth of field still inside it, tone map into
    /// the back buffer after it closes.
    fn render_camera(
        &self,
        world: &World,
        camera: &Camera,
        output: &mut dyn OutputManager,
        cmd: &mut dyn CommandList,
        stats: &mut FrameStats,
    ) -> Result<()> {
        let world_to_projection = camera.world_to_projection();
        let settings = *camera.settings();
        if settings.render_mode == RenderMode::None {
            helios_warn!("Renderer", "camera has no render mode, binding viewport only");
        }

        {
            let mut camera_scope = BindScope::open(output, BindScopeKind::Output);
            cmd.set_viewport(*camera.viewport())?;

            for step in sequence(settings.render_mode) {
                match step {
                    SceneStep::LightBuffer => {
                        stats.add_lights(self.lbuffer.render(
                            world,
                            &world_to_projection,
                            &self.depth,
                            &self.model_slots,
                            &self.state,
                            cmd,
                        )?);
                    }
                    SceneStep::Voxelize { always } => {
                        if *always || settings.voxel_gi {
                            stats.add_models(self.voxelization.render(
                                world,
                                &self.model_slots,
                                &self.state,
                                cmd,
                            )?);
                            // Voxelization replaced the viewport
                            cmd.set_viewport(*camera.viewport())?;
                        }
                    }
                    SceneStep::GBuffer => {
                        let _scope = camera_scope.nest(BindScopeKind::GBuffer);
                        stats.add_models(self.gbuffer.render(
                            world,
                            &world_to_projection,
                            &self.model_slots,
                            &self.state,
                            cmd,
                        )?);
                    }
                    SceneStep::DeferredShading => {
                        let _scope = camera_scope.nest(BindScopeKind::Deferred);
                        self.deferred.render(
                            &self.config.display,
                            camera.viewport(),
                            &self.state,
                            cmd,
                        )?;
                    }
                    SceneStep::ForwardScope(steps) => {
                        let _scope = camera_scope.nest(BindScopeKind::Forward);
                        for inner in *steps {
                            self.run_forward_step(
                                *inner,
                                world,
                                camera,
                                &world_to_projection,
                                cmd,
                                stats,
                            )?;
                        }
                    }
                }
            }

            self.anti_alias.render(&mut camera_scope, &self.state, cmd)?;
            self.depth_of_field.render(
                camera.lens(),
                camera.viewport(),
                camera_scope.output(),
                cmd,
            )?;
        }

        self.back_buffer.render(
            settings.tone_mapping,
            self.config.gamma,
            camera.viewport(),
            &self.state,
            cmd,
        )
    }

    fn run_forward_step(
        &self,
        step: ForwardStep,
        world: &World,
        camera: &Camera,
        world_to_projection: &glam::Mat4,
        cmd: &mut dyn CommandList,
        stats: &mut FrameStats,
    ) -> Result<()> {
        let settings = camera.settings();
        match step {
            ForwardStep::Opaque => {
                stats.add_models(self.forward.render(
                    world,
                    world_to_projection,
                    ForwardShading::Opaque(settings.brdf),
                    &self.model_slots,
                    &self.state,
                    cmd,
                )?);
            }
            ForwardStep::Transparent => {
                stats.add_models(self.forward.render(
                    world,
                    world_to_projection,
                    ForwardShading::Transparent(settings.brdf),
                    &self.model_slots,
                    &self.state,
                    cmd,
                )?);
            }
            ForwardStep::Emissive => {
                stats.add_models(self.forward.render(
                    world,
                    world_to_projection,
                    ForwardShading::Emissive,
                    &self.model_slots,
                    &self.state,
                    cmd,
                )?);
            }
            ForwardStep::Sky => {
                self.sky.render(settings.sky, &self.state, cmd)?;
            }
            ForwardStep::Solid => {
                stats.add_models(self.forward.render(
                    world,
                    world_to_projection,
                    ForwardShading::Solid,
                    &self.model_slots,
                    &self.state,
                    cmd,
                )?);
            }
            ForwardStep::FalseColor => {
                if let RenderMode::FalseColor(view) = settings.render_mode {
                    stats.add_models(self.forward.render(
                        world,
                        world_to_projection,
                        ForwardShading::FalseColor(view),
                        &self.model_slots,
                        &self.state,
                        cmd,
                    )?);
                }
            }
            ForwardStep::VoxelGridViz => {
                self.voxel_grid.render(&self.config.voxelization, &self.state, cmd)?;
            }
            ForwardStep::DebugLayers => {
                if settings.render_layers.contains(RenderLayers::WIREFRAME) {
                    stats.add_models(self.forward.render(
                        world,
                        world_to_projection,
                        ForwardShading::Wireframe,
                        &self.model_slots,
                        &self.state,
                        cmd,
                    )?);
                }
                if settings.render_layers.contains(RenderLayers::BOUNDS) {
                    stats.add_models(self.bounds_debug.render(
                        world,
                        world_to_projection,
                        &self.state,
                        cmd,
                    )?);
                }
            }
        }
        Ok(())
    }

    /// Assign buffer slots to new active entities and upload their
    /// per-entity data. Slots of entities removed from the world are
    /// released; a passive entity keeps its slot but is not refreshed.
    fn update_buffers(&mut self, world: &World, cmd: &mut dyn CommandList) -> Result<()> {
        self.camera_slots.retain(|key, _| world.camera(*key).is_some());
        self.model_slots.retain(|key, _| world.model(*key).is_some());

        let mut result = Ok(());
        world.for_each_camera(|key, camera| {
            if result.is_err() || camera.state() != EntityState::Active {
                return;
            }
            let slot = *self.camera_slots.entry(key).or_insert_with(|| {
                let slot = self.next_camera_slot;
                self.next_camera_slot += 1;
                slot
            });
            let mut data = Vec::with_capacity(36);
            data.extend_from_slice(&camera.world_to_view().to_cols_array());
            data.extend_from_slice(&camera.view_to_projection().to_cols_array());
            data.extend_from_slice(&[
                camera.near(),
                camera.far(),
                camera.lens().aperture_radius,
                camera.lens().focal_distance,
            ]);
            result = cmd.update_buffer(BufferSlot::Camera(slot), bytemuck::cast_slice(&data));
        });
        result?;

        let mut result = Ok(());
        world.for_each_model(|key, model| {
            if result.is_err() || model.state() != EntityState::Active {
                return;
            }
            let slot = *self.model_slots.entry(key).or_insert_with(|| {
                let slot = self.next_model_slot;
                self.next_model_slot += 1;
                slot
            });
            let data = model.world_transform().to_cols_array();
            result = cmd.update_buffer(BufferSlot::Object(slot), bytemuck::cast_slice(&data));
        });
        result
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
