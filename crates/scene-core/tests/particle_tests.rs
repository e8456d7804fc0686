use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::{
    displaced_position, particle_alpha, particle_color, particle_count_for_width, point_size_px,
    Particle, ParticleField,
};

#[test]
fn generated_samples_stay_in_the_dome() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::generate(10_000, &mut rng);
    assert_eq!(field.len(), 10_000);
    for p in field.particles() {
        assert!(p.position.y >= -5.0 && p.position.y <= 15.0, "y={}", p.position.y);
        // Horizontal radius about the dome center (8 units in front).
        let horiz = (p.position.x.powi(2) + (p.position.z + 8.0).powi(2)).sqrt();
        assert!(horiz <= 20.0 + 1e-3, "horiz={horiz}");
        assert!(p.size >= 3.0 && p.size < 11.0, "size={}", p.size);
        assert!(p.phase >= 0.0 && p.phase < 1.0, "phase={}", p.phase);
        for c in p.velocity.to_array() {
            assert!(c >= -2.0 && c < 2.0, "velocity component {c}");
        }
    }
}

#[test]
fn particle_budget_follows_the_breakpoint() {
    assert_eq!(particle_count_for_width(320.0), 3000);
    assert_eq!(particle_count_for_width(767.0), 3000);
    assert_eq!(particle_count_for_width(768.0), 8000);
    assert_eq!(particle_count_for_width(1920.0), 8000);
}

#[test]
fn empty_field_is_legal() {
    let mut rng = StdRng::seed_from_u64(1);
    let field = ParticleField::generate(0, &mut rng);
    assert!(field.is_empty());
    assert!(field.instances().is_empty());
}

#[test]
fn per_frame_math_is_deterministic() {
    let p = Particle {
        position: Vec3::new(3.0, 2.0, -6.0),
        size: 7.5,
        phase: 0.37,
        velocity: Vec3::new(1.2, -0.8, 0.4),
    };
    let t = 12.25;
    let mouse = Vec2::new(0.4, -0.6);
    let a = displaced_position(&p, t, mouse, 0.8);
    let b = displaced_position(&p, t, mouse, 0.8);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
    assert_eq!(a.z.to_bits(), b.z.to_bits());

    let c0 = particle_color(p.phase, a.y);
    let c1 = particle_color(p.phase, a.y);
    assert_eq!(c0.to_array().map(f32::to_bits), c1.to_array().map(f32::to_bits));
    assert_eq!(
        particle_alpha(a, p.size).to_bits(),
        particle_alpha(a, p.size).to_bits()
    );
}

#[test]
fn repulsion_pushes_particles_away_from_the_pointer() {
    let p = Particle {
        position: Vec3::new(2.0, 1.0, 0.5),
        size: 5.0,
        phase: 0.0,
        velocity: Vec3::ZERO,
    };
    // Pointer at normalized (0.25, 0.2) maps to world (2, 1, 0), right next
    // to the particle.
    let mouse = Vec2::new(0.25, 0.2);
    let mouse_world = Vec3::new(2.0, 1.0, 0.0);
    let calm = displaced_position(&p, 0.0, mouse, 0.0);
    let pushed = displaced_position(&p, 0.0, mouse, 1.0);
    assert!(
        (pushed - mouse_world).length() > (calm - mouse_world).length(),
        "repulsion did not increase pointer distance"
    );
}

#[test]
fn far_pointers_leave_particles_alone() {
    let p = Particle {
        position: Vec3::new(10.0, 10.0, -3.0),
        size: 5.0,
        phase: 0.25,
        velocity: Vec3::new(0.5, 0.5, 0.5),
    };
    // Pointer in the opposite corner, well beyond the 6-unit falloff.
    let near = displaced_position(&p, 1.0, Vec2::new(-1.0, -1.0), 1.0);
    let zeroed = displaced_position(&p, 1.0, Vec2::new(-1.0, -1.0), 0.0);
    assert!((near - zeroed).length() < 1e-5);
}

#[test]
fn point_size_is_perspective_scaled_and_clamped() {
    // Close-up: would exceed the frame, clamps high.
    assert_eq!(point_size_px(11.0, -1.0), 80.0);
    // Far away: stays visible, clamps low.
    assert_eq!(point_size_px(3.0, -90.0), 2.0);
    // Mid-range: plain perspective division.
    let s = point_size_px(4.0, -35.0);
    assert!((s - 4.0 * 350.0 / 35.0).abs() < 1e-4);
}

#[test]
fn alpha_vanishes_at_the_field_edge() {
    for r in [20.0f32, 25.0, 40.0] {
        let pos = Vec3::new(r, 0.0, 0.0);
        assert_eq!(particle_alpha(pos, 11.0), 0.0, "r={r}");
    }
    // Near the center the largest particles read strongest.
    let near = Vec3::new(1.0, 1.0, 1.0);
    assert!(particle_alpha(near, 10.0) > particle_alpha(near, 3.0));
}

#[test]
fn color_blends_toward_platinum_with_height() {
    let low = particle_color(0.5, -10.0);
    let high = particle_color(0.5, 10.0);
    for (got, want) in high.to_array().into_iter().zip([0.67, 0.73, 0.82]) {
        assert!((got - want).abs() < 1e-5, "got {got}, want {want}");
    }
    // At the bottom of the gradient the warm blend survives untouched.
    assert!(low.x > low.z, "low altitude color should stay warm");
}
