use super::*;
use crate::error::Error;
use crate::render::mock::{GpuEvent, MockCommandList, MockOutputManager, ScopeEvent};

fn display(anti_aliasing: AntiAliasing) -> DisplayConfig {
    DisplayConfig {
        width: 1280,
        height: 720,
        anti_aliasing,
    }
}

// ============================================================================
// Anti-aliasing validation
// ============================================================================

#[test]
fn accepts_supported_msaa_sample_counts() {
    for samples in [2, 4, 8] {
        assert!(AntiAliasPass::new(&display(AntiAliasing::Msaa { samples })).is_ok());
    }
}

#[test]
fn rejects_unsupported_msaa_sample_counts() {
    for samples in [0, 1, 3, 16] {
        assert!(matches!(
            AntiAliasPass::new(&display(AntiAliasing::Msaa { samples })),
            Err(Error::InitializationFailed(_))
        ));
    }
}

#[test]
fn rejects_unsupported_ssaa_factors() {
    assert!(AntiAliasPass::new(&display(AntiAliasing::Ssaa { factor: 2 })).is_ok());
    assert!(AntiAliasPass::new(&display(AntiAliasing::Ssaa { factor: 3 })).is_err());
}

// ============================================================================
// Resolve sequencing
// ============================================================================

#[test]
fn no_anti_aliasing_opens_no_resolve_scope() {
    let pass = AntiAliasPass::new(&display(AntiAliasing::None)).unwrap();
    let mut output = MockOutputManager::new();
    let mut cmd = MockCommandList::new();
    {
        let mut scope = BindScope::open(&mut output, BindScopeKind::Output);
        pass.render(&mut scope, &StateManager::new(), &mut cmd).unwrap();
    }
    assert_eq!(output.begin_count(BindScopeKind::Resolve), 0);
    assert_eq!(cmd.draw_count(), 0);
}

#[test]
fn fxaa_runs_two_stages_through_ping_pong() {
    let pass = AntiAliasPass::new(&display(AntiAliasing::Fxaa)).unwrap();
    let mut output = MockOutputManager::new();
    let mut cmd = MockCommandList::new();
    {
        let mut scope = BindScope::open(&mut output, BindScopeKind::Output);
        pass.render(&mut scope, &StateManager::new(), &mut cmd).unwrap();
    }

    assert_eq!(cmd.pipelines(), vec!["fxaa_luma", "fxaa_resolve"]);
    assert_eq!(cmd.draw_count(), 2);
    assert_eq!(
        output.events,
        vec![
            ScopeEvent::Begin(BindScopeKind::Output),
            ScopeEvent::Begin(BindScopeKind::Resolve),
            ScopeEvent::PingPong,
            ScopeEvent::End(BindScopeKind::Resolve),
            ScopeEvent::End(BindScopeKind::Output),
        ]
    );
}

#[test]
fn msaa_is_a_single_hardware_resolve() {
    let pass = AntiAliasPass::new(&display(AntiAliasing::Msaa { samples: 4 })).unwrap();
    let mut output = MockOutputManager::new();
    let mut cmd = MockCommandList::new();
    {
        let mut scope = BindScope::open(&mut output, BindScopeKind::Output);
        pass.render(&mut scope, &StateManager::new(), &mut cmd).unwrap();
    }

    assert_eq!(cmd.pipelines(), vec!["hardware_resolve"]);
    assert_eq!(output.begin_count(BindScopeKind::Resolve), 1);
    output.assert_balanced();
}

// ============================================================================
// Depth of field
// ============================================================================

#[test]
fn pinhole_lens_skips_depth_of_field() {
    let lens = CameraLens::default();
    let mut output = MockOutputManager::new();
    let mut cmd = MockCommandList::new();
    DepthOfFieldPass::new()
        .render(&lens, &Viewport::new(1280.0, 720.0), &mut output, &mut cmd)
        .unwrap();

    assert!(output.events.is_empty());
    assert_eq!(cmd.dispatch_count(), 0);
}

#[test]
fn finite_aperture_dispatches_blur() {
    let lens = CameraLens {
        aperture_radius: 0.01,
        focal_distance: 5.0,
        focal_length: 0.05,
    };
    let mut output = MockOutputManager::new();
    let mut cmd = MockCommandList::new();
    DepthOfFieldPass::new()
        .render(&lens, &Viewport::new(1280.0, 720.0), &mut output, &mut cmd)
        .unwrap();

    assert_eq!(output.events, vec![ScopeEvent::BeginPostProcessing]);
    assert!(cmd.has_pipeline("depth_of_field_cs"));
    assert!(cmd.events.contains(&GpuEvent::Dispatch { x: 160, y: 90, z: 1 }));
}

// ============================================================================
// Back buffer
// ============================================================================

#[test]
fn tone_map_pipeline_follows_operator() {
    for (operator, pipeline) in [
        (ToneMapping::Linear, "tonemap_linear"),
        (ToneMapping::Reinhard, "tonemap_reinhard"),
        (ToneMapping::Filmic, "tonemap_filmic"),
        (ToneMapping::Aces, "tonemap_aces"),
    ] {
        let mut cmd = MockCommandList::new();
        BackBufferPass::new()
            .render(operator, 2.2, &Viewport::new(1280.0, 720.0), &StateManager::new(), &mut cmd)
            .unwrap();
        assert!(cmd.has_pipeline(pipeline));
        assert!(cmd.events.contains(&GpuEvent::Draw { vertices: 3 }));
    }
}

#[test]
fn back_buffer_pushes_gamma_and_sets_viewport() {
    let viewport = Viewport::new(640.0, 480.0);
    let mut cmd = MockCommandList::new();
    BackBufferPass::new()
        .render(ToneMapping::Reinhard, 2.4, &viewport, &StateManager::new(), &mut cmd)
        .unwrap();

    assert!(cmd.events.contains(&GpuEvent::Viewport(viewport)));
    assert!(cmd.events.contains(&GpuEvent::PushConstants(4)));
}
