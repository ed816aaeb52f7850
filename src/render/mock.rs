/// Mock GPU collaborators for unit tests (no GPU required).
///
/// Record every command/transition so tests can assert pass sequencing,
/// culling behavior, and begin/end scope balance.

use crate::error::Result;
use super::command_list::{CommandList, Viewport, BufferSlot};
use super::output::{OutputManager, BindScopeKind};
use super::state::{BlendMode, DepthMode, RasterMode, SamplerMode};

// ============================================================================
// Mock CommandList
// ============================================================================

/// A recorded GPU command.
#[derive(Debug, Clone, PartialEq)]
pub enum GpuEvent {
    Viewport(Viewport),
    Pipeline(String),
    Blend(BlendMode),
    Depth(DepthMode),
    Raster(RasterMode),
    Sampler(u32, SamplerMode),
    PushConstants(usize),
    UpdateBuffer(BufferSlot, usize),
    Draw { vertices: u32 },
    DrawInstanced { vertices: u32, instances: u32 },
    DrawIndexed { indices: u32 },
    Dispatch { x: u32, y: u32, z: u32 },
}

/// Command list that records events instead of talking to a GPU.
#[derive(Default)]
pub struct MockCommandList {
    pub events: Vec<GpuEvent>,
}

impl MockCommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total draw calls of any kind.
    pub fn draw_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    GpuEvent::Draw { .. } | GpuEvent::DrawInstanced { .. } | GpuEvent::DrawIndexed { .. }
                )
            })
            .count()
    }

    pub fn dispatch_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GpuEvent::Dispatch { .. }))
            .count()
    }

    pub fn buffer_update_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GpuEvent::UpdateBuffer(..)))
            .count()
    }

    /// Pipeline names in bind order.
    pub fn pipelines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GpuEvent::Pipeline(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_pipeline(&self, name: &str) -> bool {
        self.pipelines().contains(&name)
    }

    /// Draw calls recorded after binding `name` and before the next
    /// pipeline bind.
    pub fn draws_for_pipeline(&self, name: &str) -> usize {
        let mut count = 0;
        let mut in_section = false;
        for event in &self.events {
            match event {
                GpuEvent::Pipeline(bound) => in_section = bound == name,
                GpuEvent::Draw { .. }
                | GpuEvent::DrawInstanced { .. }
                | GpuEvent::DrawIndexed { .. } => {
                    if in_section {
                        count += 1;
                    }
                }
                _ => {}
            }
        }
        count
    }
}

impl CommandList for MockCommandList {
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.events.push(GpuEvent::Viewport(viewport));
        Ok(())
    }

    fn bind_pipeline(&mut self, name: &str) -> Result<()> {
        self.events.push(GpuEvent::Pipeline(name.to_string()));
        Ok(())
    }

    fn bind_blend(&mut self, mode: BlendMode) -> Result<()> {
        self.events.push(GpuEvent::Blend(mode));
        Ok(())
    }

    fn bind_depth(&mut self, mode: DepthMode) -> Result<()> {
        self.events.push(GpuEvent::Depth(mode));
        Ok(())
    }

    fn bind_raster(&mut self, mode: RasterMode) -> Result<()> {
        self.events.push(GpuEvent::Raster(mode));
        Ok(())
    }

    fn bind_sampler(&mut self, slot: u32, mode: SamplerMode) -> Result<()> {
        self.events.push(GpuEvent::Sampler(slot, mode));
        Ok(())
    }

    fn push_constants(&mut self, data: &[u8]) -> Result<()> {
        self.events.push(GpuEvent::PushConstants(data.len()));
        Ok(())
    }

    fn update_buffer(&mut self, slot: BufferSlot, data: &[u8]) -> Result<()> {
        self.events.push(GpuEvent::UpdateBuffer(slot, data.len()));
        Ok(())
    }

    fn draw(&mut self, vertex_count: u32, _first_vertex: u32) -> Result<()> {
        self.events.push(GpuEvent::Draw { vertices: vertex_count });
        Ok(())
    }

    fn draw_instanced(&mut self, vertex_count: u32, instance_count: u32) -> Result<()> {
        self.events.push(GpuEvent::DrawInstanced {
            vertices: vertex_count,
            instances: instance_count,
        });
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: u32, _first_index: u32, _vertex_offset: i32) -> Result<()> {
        self.events.push(GpuEvent::DrawIndexed { indices: index_count });
        Ok(())
    }

    fn dispatch(&mut self, groups_x: u32, groups_y: u32, groups_z: u32) -> Result<()> {
        self.events.push(GpuEvent::Dispatch {
            x: groups_x,
            y: groups_y,
            z: groups_z,
        });
        Ok(())
    }
}

// ============================================================================
// Mock OutputManager
// ============================================================================

/// A recorded attachment transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeEvent {
    Begin(BindScopeKind),
    End(BindScopeKind),
    PingPong,
    BeginPostProcessing,
    DisplayViewport,
}

/// Output manager that records transitions instead of binding targets.
#[derive(Default)]
pub struct MockOutputManager {
    pub events: Vec<ScopeEvent>,
}

impl MockOutputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assert every Begin(kind) is closed by End(kind) in LIFO order.
    pub fn assert_balanced(&self) {
        let mut stack = Vec::new();
        for event in &self.events {
            match event {
                ScopeEvent::Begin(kind) => stack.push(*kind),
                ScopeEvent::End(kind) => {
                    let open = stack.pop().unwrap_or_else(|| {
                        panic!("End({:?}) without a matching Begin", kind)
                    });
                    assert_eq!(open, *kind, "scopes must close in LIFO order");
                }
                _ => {}
            }
        }
        assert!(stack.is_empty(), "unclosed scopes: {:?}", stack);
    }

    pub fn begin_count(&self, kind: BindScopeKind) -> usize {
        self.events
            .iter()
            .filter(|e| **e == ScopeEvent::Begin(kind))
            .count()
    }

    pub fn display_viewport_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| **e == ScopeEvent::DisplayViewport)
            .count()
    }
}

impl OutputManager for MockOutputManager {
    fn bind_begin(&mut self, scope: BindScopeKind) {
        self.events.push(ScopeEvent::Begin(scope));
    }

    fn bind_end(&mut self, scope: BindScopeKind) {
        self.events.push(ScopeEvent::End(scope));
    }

    fn bind_ping_pong(&mut self) {
        self.events.push(ScopeEvent::PingPong);
    }

    fn bind_begin_post_processing(&mut self) {
        self.events.push(ScopeEvent::BeginPostProcessing);
    }

    fn bind_display_viewport(&mut self) {
        self.events.push(ScopeEvent::DisplayViewport);
    }
}
