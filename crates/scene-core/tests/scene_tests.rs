use scene_core::{Scene, SceneConfig, SceneError};

fn config() -> SceneConfig {
    SceneConfig {
        width: 1280,
        height: 720,
        seed: 99,
    }
}

/// Drive the scene with a simulated monotonic clock in 10 ms steps.
fn run_for(scene: &mut Scene, start: f64, steps: usize) -> f64 {
    let mut now = start;
    for _ in 0..steps {
        scene.tick(now);
        now += 0.01;
    }
    now
}

#[test]
fn lifecycle_transitions_are_idempotent() {
    let mut scene = Scene::new(config());
    assert!(!scene.is_running());
    scene.start();
    scene.start();
    assert!(scene.is_running());
    scene.stop();
    scene.stop();
    assert!(!scene.is_running());
    scene.dispose();
    scene.dispose();
    assert!(scene.is_disposed());
    // A disposed scene refuses to restart or animate.
    scene.start();
    assert!(!scene.is_running());
    assert_eq!(scene.begin_intro(), Err(SceneError::Disposed));
}

#[test]
fn full_session_settles_on_the_resting_pose() {
    let mut scene = Scene::new(config());
    assert_eq!(scene.particles.len(), 8000);
    scene.start();
    scene.begin_intro().unwrap();

    // 2.8 s of simulated frames lands the flythrough.
    let now = run_for(&mut scene, 0.0, 285);
    assert!(scene.intro_played());
    assert!((scene.camera.eye.y - 4.0).abs() < 0.01);
    assert!((scene.camera.eye.z - 18.0).abs() < 0.01);

    // Pointer response converges once the intro hands over.
    scene.input.set_pointer_target(1.0, -1.0);
    run_for(&mut scene, now, 90);
    assert!((scene.mouse().x - 1.0).abs() < 0.01);
    assert!((scene.mouse().y + 1.0).abs() < 0.01);
    assert!((scene.camera.eye.x - 1.5).abs() < 0.02);

    scene.dispose();
    assert!(scene.particles.is_empty());
    assert_eq!(scene.architecture.node_count(), 0);
}

#[test]
fn clock_only_advances_while_running() {
    let mut scene = Scene::new(config());
    // Ticks before start are ignored outright.
    scene.tick(5.0);
    assert_eq!(scene.time(), 0.0);

    scene.start();
    run_for(&mut scene, 0.0, 101);
    let paused_at = scene.time();
    assert!((paused_at - 1.0).abs() < 1e-3);

    scene.stop();
    scene.tick(50.0);
    assert_eq!(scene.time(), paused_at);

    // Restarting re-anchors the clock; the wall-time gap does not leak in.
    scene.start();
    run_for(&mut scene, 100.0, 51);
    assert!((scene.time() - paused_at - 0.5).abs() < 1e-3);
}

#[test]
fn stopping_mid_intro_freezes_the_flight() {
    let mut scene = Scene::new(config());
    scene.start();
    scene.begin_intro().unwrap();
    run_for(&mut scene, 0.0, 141);
    assert!(scene.intro_active());
    let held = scene.camera.eye;

    scene.stop();
    scene.tick(1000.0);
    assert_eq!(scene.camera.eye, held);
    assert!(scene.intro_active());

    // Resuming finishes the flight from where it froze.
    scene.start();
    run_for(&mut scene, 2000.0, 161);
    assert!(scene.intro_played());
    assert!((scene.camera.eye.z - 18.0).abs() < 0.01);
}

#[test]
fn identical_seeds_yield_bitwise_identical_fields() {
    let a = Scene::new(config());
    let b = Scene::new(config());
    assert_eq!(a.particles.len(), b.particles.len());
    for (x, y) in a.particles.instances().iter().zip(b.particles.instances()) {
        assert_eq!(x.position.map(f32::to_bits), y.position.map(f32::to_bits));
        assert_eq!(x.size.to_bits(), y.size.to_bits());
    }
    // A different seed scatters differently.
    let c = Scene::new(SceneConfig { seed: 100, ..config() });
    assert!(a
        .particles
        .instances()
        .iter()
        .zip(c.particles.instances())
        .any(|(x, y)| x.position != y.position));
}

#[test]
fn narrow_viewports_get_the_reduced_budget() {
    let scene = Scene::new(SceneConfig {
        width: 480,
        height: 800,
        seed: 1,
    });
    assert_eq!(scene.particles.len(), 3000);
}

#[test]
fn degenerate_resizes_are_clamped() {
    let mut scene = Scene::new(config());
    scene.resize(0, 0);
    let m = scene.camera.projection_matrix() * scene.camera.view_matrix();
    assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
}
