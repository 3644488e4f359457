use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::env;

mod black_hole;
mod config;
mod constants;
mod error;
mod geodesic;
mod graphics;
mod photon;
mod rendering;
mod simulation;
mod world;

use config::SimConfig;
use constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use world::{Scenario, SimulationWorld};

/// Build the world resource and seed the selected startup scenario.
///
/// A bad mass override from `assets/sim.toml` falls back to the compiled
/// defaults rather than aborting, matching the tolerant config-load policy.
fn init_world(mut commands: Commands, config: Res<SimConfig>, scenario: Res<Scenario>) {
    let mut sim_world = match SimulationWorld::new(&config) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("⚠ {e}; falling back to compiled defaults");
            let defaults = SimConfig::default();
            SimulationWorld::new(&defaults).expect("compiled default mass is positive")
        }
    };

    let (width, height) = (SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
    match *scenario {
        Scenario::Reference => sim_world.seed_reference(width, &config),
        Scenario::Fan => sim_world.spawn_fan(width, height, &config),
        Scenario::Distant => sim_world.seed_distant(width, height),
    }

    commands.insert_resource(sim_world);
}

fn main() {
    let scenario = match env::var("LENSING_SCENARIO").ok().as_deref() {
        None | Some("reference") => Scenario::Reference,
        Some("fan") => Scenario::Fan,
        Some("distant") => Scenario::Distant,
        Some(other) => {
            eprintln!("⚠ Unknown LENSING_SCENARIO '{other}'; using reference");
            Scenario::Reference
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Lensing".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Insert SimConfig with compiled defaults; load_sim_config will
        // overwrite it from assets/sim.toml (if present) in the Startup schedule.
        .insert_resource(SimConfig::default())
        .insert_resource(scenario)
        .add_plugins(simulation::SimulationPlugin)
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the final values.
                config::load_sim_config,
                graphics::setup_camera.after(config::load_sim_config),
                init_world.after(config::load_sim_config),
                rendering::setup_horizon_disc.after(init_world),
                rendering::setup_stats_text.after(config::load_sim_config),
            ),
        )
        .add_systems(
            Update,
            (rendering::trail_gizmo_system, rendering::stats_display_system),
        )
        .run();
}
