use super::*;
use glam::Vec3;
use crate::bounds::Aabb;
use crate::world::Model;
use crate::render::mock::{GpuEvent, MockCommandList};

fn clip_from_origin() -> Mat4 {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
    projection * view
}

#[test]
fn visible_model_gets_a_wire_box() {
    let mut world = World::new();
    world.add_model(Model::new(
        Aabb::from_center_extent(Vec3::ZERO, Vec3::ONE),
        36,
        36,
    ));
    let mut cmd = MockCommandList::new();
    let stats = BoundingVolumeDebugPass::new()
        .render(&world, &clip_from_origin(), &StateManager::new(), &mut cmd)
        .unwrap();

    assert_eq!(stats, PassStats { drawn: 1, culled: 0 });
    assert!(cmd.has_pipeline("bounds_debug"));
    assert!(cmd.events.contains(&GpuEvent::Draw { vertices: 24 }));
    assert!(cmd.events.contains(&GpuEvent::Raster(RasterMode::Wireframe)));
}

#[test]
fn culled_model_gets_no_box() {
    let mut world = World::new();
    let mut model = Model::new(Aabb::from_center_extent(Vec3::ZERO, Vec3::ONE), 36, 36);
    model.set_world_transform(glam::Mat4::from_translation(Vec3::new(0.0, 0.0, 200.0)));
    world.add_model(model);
    let mut cmd = MockCommandList::new();
    let stats = BoundingVolumeDebugPass::new()
        .render(&world, &clip_from_origin(), &StateManager::new(), &mut cmd)
        .unwrap();

    assert_eq!(stats, PassStats { drawn: 0, culled: 1 });
    assert_eq!(cmd.draw_count(), 0);
}

#[test]
fn box_corners_are_pushed_as_constants() {
    let mut world = World::new();
    world.add_model(Model::new(
        Aabb::from_center_extent(Vec3::ZERO, Vec3::ONE),
        36,
        36,
    ));
    let mut cmd = MockCommandList::new();
    BoundingVolumeDebugPass::new()
        .render(&world, &clip_from_origin(), &StateManager::new(), &mut cmd)
        .unwrap();

    // min + max as two padded vec4s
    assert!(cmd.events.contains(&GpuEvent::PushConstants(32)));
}
