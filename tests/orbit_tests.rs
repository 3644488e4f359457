//! Integration tests for the reference photon-sphere scenario and the
//! headless Bevy driver loop.
//!
//! The scenario test drives [`SimulationWorld`] directly with a fixed
//! 60 fps × 100 time-multiplier step, the same `dt` the windowed driver
//! produces, and asserts the canonical behaviour: the tuned photon winds a
//! full turn around the hole and is then captured, instead of escaping or
//! plunging immediately.

use bevy::prelude::*;
use lensing::config::SimConfig;
use lensing::simulation::{advance_simulation, SimulationStats};
use lensing::world::SimulationWorld;

/// The windowed driver's step at a steady 60 fps: `frame_time × time_mult`.
fn reference_dt(config: &SimConfig) -> f64 {
    1.0 / 60.0 * config.time_mult
}

/// Azimuth of `photon` as seen from the hole, wrapped to (-π, π].
fn azimuth(world: &SimulationWorld, index: usize) -> f32 {
    let delta = world.photons()[index].position() - world.black_hole().position();
    delta.y.atan2(delta.x)
}

/// Smallest signed angle from `from` to `to`.
fn angle_delta(from: f32, to: f32) -> f32 {
    let mut d = to - from;
    while d > std::f32::consts::PI {
        d -= std::f32::consts::TAU;
    }
    while d < -std::f32::consts::PI {
        d += std::f32::consts::TAU;
    }
    d
}

// ── Reference scenario ────────────────────────────────────────────────────────

/// The tuned launch offset produces the photon-sphere demonstration: the ray
/// sweeps at least a full revolution of azimuth around the hole within 1000
/// steps, never escapes past its starting radius, survives several hundred
/// steps, and is eventually captured.
#[test]
fn reference_photon_loops_before_capture() {
    let config = SimConfig::default();
    let mut world = SimulationWorld::new(&config).expect("default config is valid");
    world.seed_reference(1600.0, &config);
    let dt = reference_dt(&config);

    let start_radius = (world.photons()[0].position() - world.black_hole().position()).length();
    let mut prev_azimuth = azimuth(&world, 0);
    let mut swept = 0.0_f32;
    let mut max_radius = start_radius;
    let mut swept_full_turn_at: Option<u32> = None;
    let mut absorbed_at: Option<u32> = None;

    for step in 1..=1500_u32 {
        world.step(dt, &config);
        if world.photons()[0].is_absorbed() {
            absorbed_at = Some(step);
            break;
        }

        let current = azimuth(&world, 0);
        swept += angle_delta(prev_azimuth, current).abs();
        prev_azimuth = current;

        let radius = (world.photons()[0].position() - world.black_hole().position()).length();
        max_radius = max_radius.max(radius);

        if swept_full_turn_at.is_none() && swept >= std::f32::consts::TAU {
            swept_full_turn_at = Some(step);
        }
    }

    let full_turn = swept_full_turn_at.expect("photon must complete a full revolution");
    assert!(
        full_turn <= 1000,
        "full revolution took {full_turn} steps, expected well under 1000"
    );

    let capture = absorbed_at.expect("near-critical photon must eventually be captured");
    assert!(
        capture > 400,
        "captured after only {capture} steps; the orbit phase is missing"
    );
    assert!(
        capture > full_turn,
        "the full revolution must happen before capture"
    );

    assert!(
        max_radius < start_radius * 1.1,
        "max radius {max_radius} px suggests the photon escaped (start {start_radius} px)"
    );
}

/// Absorption freezes the trail: after capture the path length never changes
/// again no matter how long the world keeps stepping.
#[test]
fn captured_photon_trail_is_frozen() {
    let config = SimConfig::default();
    let mut world = SimulationWorld::new(&config).expect("default config is valid");
    world.seed_reference(1600.0, &config);
    let dt = reference_dt(&config);

    for _ in 0..1500 {
        world.step(dt, &config);
    }
    assert_eq!(world.absorbed_count(), 1);
    let frozen_len = world.photons()[0].path().len();

    for _ in 0..100 {
        world.step(dt, &config);
    }
    assert_eq!(world.photons()[0].path().len(), frozen_len);
}

// ── Headless driver loop ──────────────────────────────────────────────────────

/// A minimal headless app: the step system pulls `dt` from `Time`, advances
/// the world, and refreshes the stats resource.  No window, no rendering.
#[test]
fn headless_step_system_advances_world_and_stats() {
    let mut app = App::new();
    let config = SimConfig::default();
    let mut world = SimulationWorld::new(&config).expect("default config is valid");
    world.seed_reference(1600.0, &config);

    app.add_plugins(MinimalPlugins)
        .insert_resource(config)
        .insert_resource(world)
        .init_resource::<SimulationStats>()
        .add_systems(Update, advance_simulation);

    // First frame has a zero delta and is skipped by the driver; give the
    // clock something to measure for the following frames.
    for _ in 0..4 {
        std::thread::sleep(std::time::Duration::from_millis(2));
        app.update();
    }

    let world = app.world().resource::<SimulationWorld>();
    assert!(
        world.photons()[0].path().len() > 1,
        "photon must have taken at least one live step"
    );
    let stats = app.world().resource::<SimulationStats>();
    assert!(stats.total_steps >= 1);
    assert_eq!(stats.live_count, 1);
    assert_eq!(stats.absorbed_count, 0);
}
