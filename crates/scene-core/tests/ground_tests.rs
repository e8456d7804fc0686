use scene_core::{grid_pulse, ground_alpha, ground_vertices, radial_fade};

#[test]
fn quad_lies_flat_below_the_origin() {
    let verts = ground_vertices();
    assert_eq!(verts.len(), 6);
    for v in &verts {
        assert_eq!(v[1], -3.0);
        assert!(v[0].abs() <= 40.0 && v[2].abs() <= 40.0);
    }
    // Both extremes of the 80-unit span are present.
    assert!(verts.iter().any(|v| v[0] == -40.0));
    assert!(verts.iter().any(|v| v[0] == 40.0));
}

#[test]
fn fade_is_full_near_the_center_and_gone_past_thirty() {
    assert_eq!(radial_fade(0.0), 1.0);
    assert_eq!(radial_fade(5.0), 1.0);
    assert_eq!(radial_fade(30.0), 0.0);
    assert_eq!(radial_fade(55.0), 0.0);
    let mid = radial_fade(17.5);
    assert!(mid > 0.0 && mid < 1.0);
}

#[test]
fn fade_decreases_with_distance() {
    let mut prev = radial_fade(0.0);
    for i in 1..=60 {
        let f = radial_fade(i as f32);
        assert!(f <= prev + 1e-6, "fade rose at dist {i}");
        prev = f;
    }
}

#[test]
fn pulse_stays_normalized() {
    for ti in 0..50 {
        for di in 0..50 {
            let p = grid_pulse(ti as f32 * 0.7, di as f32 * 0.9);
            assert!((0.0..=1.0).contains(&p));
        }
    }
}

#[test]
fn alpha_vanishes_at_the_radial_boundary() {
    // Even a fully lit line mask reads as zero past the fade edge.
    assert_eq!(ground_alpha(1.0, 30.0), 0.0);
    assert_eq!(ground_alpha(1.0, 45.0), 0.0);
    // Full line mask at the center caps at the 0.6 plane opacity.
    assert!((ground_alpha(1.0, 0.0) - 0.6).abs() < 1e-6);
    assert_eq!(ground_alpha(0.0, 0.0), 0.0);
}
