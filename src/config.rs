//! Runtime simulation configuration loaded from `assets/sim.toml`.
//!
//! [`SimConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_sim_config`] reads
//! `assets/sim.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the constants you care about.
//!
//! Physics code receives the config by reference as a read-only context
//! object; nothing mutates it after startup.
//!
//! ## Tuning workflow
//!
//! 1. Edit `assets/sim.toml`.
//! 2. Restart the simulation — no recompilation required.
//! 3. `cargo test` validates that the reference trajectory still loops.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `SimConfig::default()`.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable physics and visualisation configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/sim.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── Physics ──────────────────────────────────────────────────────────────
    pub speed_of_light: f64,
    pub gravitational_const: f64,
    pub black_hole_mass: f64,

    // ── Visualisation Scaling ────────────────────────────────────────────────
    pub vis_scale: f64,
    pub time_mult: f64,

    // ── Scenario ─────────────────────────────────────────────────────────────
    pub photon_start_offset_y: f32,
    pub fan_count: usize,
    pub fan_spread: f32,
    pub fan_jitter: f32,

    // ── Rendering ────────────────────────────────────────────────────────────
    pub photon_head_radius: f32,
    pub horizon_disc_segments: u32,
    pub stats_font_size: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // Physics
            speed_of_light: SPEED_OF_LIGHT,
            gravitational_const: GRAVITATIONAL_CONST,
            black_hole_mass: BLACK_HOLE_MASS,
            // Visualisation Scaling
            vis_scale: VIS_SCALE,
            time_mult: TIME_MULT,
            // Scenario
            photon_start_offset_y: PHOTON_START_OFFSET_Y,
            fan_count: FAN_COUNT,
            fan_spread: FAN_SPREAD,
            fan_jitter: FAN_JITTER,
            // Rendering
            photon_head_radius: PHOTON_HEAD_RADIUS,
            horizon_disc_segments: HORIZON_DISC_SEGMENTS,
            stats_font_size: STATS_FONT_SIZE,
        }
    }
}

/// Startup system: attempt to load `assets/sim.toml` and overwrite the
/// `SimConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are printed
/// to stderr but do not abort the simulation.  A missing file is silently
/// ignored (defaults are already in place from `insert_resource`).
pub fn load_sim_config(mut config: ResMut<SimConfig>) {
    let path = "assets/sim.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<SimConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded sim config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = SimConfig::default();
        assert_eq!(config.speed_of_light, SPEED_OF_LIGHT);
        assert_eq!(config.black_hole_mass, BLACK_HOLE_MASS);
        assert_eq!(config.vis_scale, VIS_SCALE);
        assert_eq!(config.time_mult, TIME_MULT);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config: SimConfig = toml::from_str("time_mult = 250.0").expect("valid toml");
        assert_eq!(config.time_mult, 250.0);
        assert_eq!(config.vis_scale, VIS_SCALE, "unnamed keys keep defaults");
        assert_eq!(config.black_hole_mass, BLACK_HOLE_MASS);
    }
}
