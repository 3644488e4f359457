//! Simulation plugin and systems for Bevy ECS.
//!
//! The plugin is a thin driver around [`SimulationWorld`]: once per frame it
//! scales the wall-clock frame time by the configured multiplier and hands the
//! result to [`SimulationWorld::step`].  All physics lives in the library
//! modules; nothing here touches the geodesic equations.

use crate::config::SimConfig;
use crate::world::SimulationWorld;
use bevy::input::ButtonInput;
use bevy::prelude::*;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationStats>().add_systems(
            Update,
            (advance_simulation, photon_spawn_input_system),
        );
    }
}

/// Frame-to-frame counters shown in the HUD.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SimulationStats {
    /// Photons still integrating.
    pub live_count: usize,
    /// Photons frozen behind the horizon.
    pub absorbed_count: usize,
    /// Total world steps taken since startup.
    pub total_steps: u64,
}

/// Advance the world by one step of `frame_time × time_mult` coordinate
/// seconds and refresh the stats counters.
///
/// The first frame after startup reports a zero delta; skipping it here keeps
/// a degenerate zero-length step (and its duplicate path point) out of every
/// trail.  This is a driver-side choice — the world itself performs no `dt`
/// clamping.
pub fn advance_simulation(
    time: Res<Time>,
    config: Res<SimConfig>,
    mut world: ResMut<SimulationWorld>,
    mut stats: ResMut<SimulationStats>,
) {
    let dt = time.delta_secs() as f64 * config.time_mult;
    if dt <= 0.0 {
        return;
    }

    world.step(dt, &config);

    stats.live_count = world.live_count();
    stats.absorbed_count = world.absorbed_count();
    stats.total_steps += 1;
}

/// Handle user input for spawning photons.
///
/// Left click launches a single rightward ray from the cursor; Space launches
/// the configured fan from the left screen edge.
pub fn photon_spawn_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window>,
    config: Res<SimConfig>,
    mut world: ResMut<SimulationWorld>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(cursor_pos) = window.cursor_position() {
            // Convert from screen coordinates to world coordinates.
            let world_x = cursor_pos.x - window.width() / 2.0;
            let world_y = -(cursor_pos.y - window.height() / 2.0);
            world.spawn_photon(Vec2::new(world_x, world_y), Vec2::X);
        }
    }

    if keys.just_pressed(KeyCode::Space) {
        world.spawn_fan(window.width(), window.height(), &config);
    }
}
