use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::{
    breathing_scale, cube_vertices, platform_float, tilt, Architecture, NodeKind,
    PLATFORM_FLOAT_AMPLITUDE,
};
use std::f32::consts::TAU;

fn build() -> Architecture {
    Architecture::build(&mut StdRng::seed_from_u64(42))
}

#[test]
fn authored_layout_has_sixteen_nodes() {
    let arch = build();
    assert_eq!(arch.node_count(), 16);
    let count = |kind| arch.nodes().iter().filter(|n| n.kind == kind).count();
    assert_eq!(count(NodeKind::Monolith), 1);
    assert_eq!(count(NodeKind::Band), 8);
    assert_eq!(count(NodeKind::Wing), 2);
    assert_eq!(count(NodeKind::Platform), 5);
}

#[test]
fn bands_stack_one_unit_apart_and_wings_flank() {
    let arch = build();
    let bands: Vec<f32> = arch
        .nodes()
        .iter()
        .filter(|n| n.kind == NodeKind::Band)
        .map(|n| n.base_position.y)
        .collect();
    for (i, y) in bands.iter().enumerate() {
        assert_eq!(*y, -2.0 + i as f32);
    }
    let wings: Vec<f32> = arch
        .nodes()
        .iter()
        .filter(|n| n.kind == NodeKind::Wing)
        .map(|n| n.base_position.x)
        .collect();
    assert_eq!(wings, vec![-2.5, 2.5]);
}

#[test]
fn platform_phases_are_sampled_from_a_full_turn() {
    let arch = build();
    for n in arch.nodes().iter().filter(|n| n.kind == NodeKind::Platform) {
        assert!(n.float_offset >= 0.0 && n.float_offset < TAU);
    }
    // Non-platforms carry no phase.
    for n in arch.nodes().iter().filter(|n| n.kind != NodeKind::Platform) {
        assert_eq!(n.float_offset, 0.0);
    }
}

#[test]
fn platform_float_is_bounded_for_all_time() {
    for i in 0..2000 {
        let t = i as f32 * 7.3;
        let y = platform_float(t, 1.234);
        assert!(y.abs() <= PLATFORM_FLOAT_AMPLITUDE + 1e-6, "t={t} y={y}");
    }
}

#[test]
fn breathing_stays_within_five_percent() {
    for i in 0..1000 {
        let s = breathing_scale(i as f32 * 0.37);
        assert!((0.95..=1.05).contains(&s));
    }
}

#[test]
fn tilt_follows_the_pointer() {
    let (rot_x, rot_y) = tilt(Vec2::new(1.0, 1.0));
    assert!((rot_y - 0.15).abs() < 1e-6);
    assert!((rot_x + 0.08).abs() < 1e-6);
    assert_eq!(tilt(Vec2::ZERO), (0.0, 0.0));
}

#[test]
fn instances_are_stable_in_count_and_opaque() {
    let arch = build();
    for t in [0.0f32, 1.5, 300.0] {
        let instances = arch.instances(t, Vec2::new(0.3, -0.2));
        assert_eq!(instances.len(), 16);
        for inst in &instances {
            assert_eq!(inst.color[3], 1.0);
            assert!(inst.model.iter().flatten().all(|v| v.is_finite()));
        }
    }
}

#[test]
fn poses_are_pure_in_time_and_mouse() {
    let arch = build();
    let a = arch.instances(5.0, Vec2::new(0.5, 0.5));
    let b = arch.instances(5.0, Vec2::new(0.5, 0.5));
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.model, y.model);
    }
}

#[test]
fn cube_mesh_is_a_closed_unit_box() {
    let verts = cube_vertices();
    assert_eq!(verts.len(), 36);
    for v in &verts {
        for c in v.position {
            assert!(c == 0.5 || c == -0.5);
        }
        // Each vertex sits on the face its normal names.
        let dot: f32 = v
            .position
            .iter()
            .zip(v.normal)
            .map(|(p, n)| p * n)
            .sum();
        assert_eq!(dot, 0.5);
    }
}
