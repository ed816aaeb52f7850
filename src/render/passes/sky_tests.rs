use super::*;
use crate::render::mock::{GpuEvent, MockCommandList};
use crate::render::state::DepthMode;

#[test]
fn none_mode_draws_nothing() {
    let mut cmd = MockCommandList::new();
    SkyPass::new()
        .render(SkyMode::None, &StateManager::new(), &mut cmd)
        .unwrap();
    assert!(cmd.events.is_empty());
}

#[test]
fn procedural_sky_is_a_fullscreen_triangle() {
    let mut cmd = MockCommandList::new();
    SkyPass::new()
        .render(SkyMode::Procedural, &StateManager::new(), &mut cmd)
        .unwrap();
    assert!(cmd.has_pipeline("sky_procedural"));
    assert!(cmd.events.contains(&GpuEvent::Draw { vertices: 3 }));
}

#[test]
fn skybox_is_a_cube() {
    let mut cmd = MockCommandList::new();
    SkyPass::new()
        .render(SkyMode::Skybox, &StateManager::new(), &mut cmd)
        .unwrap();
    assert!(cmd.has_pipeline("sky_box"));
    assert!(cmd.events.contains(&GpuEvent::Draw { vertices: 36 }));
}

#[test]
fn sky_never_writes_depth() {
    let mut cmd = MockCommandList::new();
    SkyPass::new()
        .render(SkyMode::Procedural, &StateManager::new(), &mut cmd)
        .unwrap();
    assert!(cmd.events.contains(&GpuEvent::Depth(DepthMode::ReadOnly)));
}
