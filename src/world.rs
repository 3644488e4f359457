//! The simulation world: one black hole and the photons orbiting it.
//!
//! [`SimulationWorld`] is the library's top-level owned state.  It has no
//! scheduling or rendering dependencies — the Bevy driver holds it as a
//! [`Resource`] and calls [`SimulationWorld::step`] once per frame, but the
//! struct is equally usable from a plain test harness.

use crate::black_hole::BlackHole;
use crate::config::SimConfig;
use crate::error::SimResult;
use crate::photon::Photon;
use bevy::prelude::*;
use rand::Rng;

/// Which startup scenario seeds the world.
///
/// Selected via the `LENSING_SCENARIO` environment variable in `main.rs`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    /// One photon tuned to wind around the photon sphere before capture.
    #[default]
    Reference,
    /// A vertical fan of parallel rays entering from the left edge.
    Fan,
    /// A single high-offset ray that passes with only mild deflection.
    Distant,
}

/// One black hole plus an ordered collection of photons.
///
/// Photons never interact with each other; iteration order only determines
/// draw order.  Absorbed photons stay in the collection, frozen.
#[derive(Resource, Debug, Clone)]
pub struct SimulationWorld {
    black_hole: BlackHole,
    photons: Vec<Photon>,
}

impl SimulationWorld {
    /// Build an empty world with the hole at the display origin.
    ///
    /// Fails only if the configured mass is non-positive (e.g. a bad
    /// `assets/sim.toml` override).
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        let black_hole = BlackHole::new(
            Vec2::ZERO,
            config.black_hole_mass,
            config.gravitational_const,
            config.speed_of_light,
        )?;
        Ok(Self {
            black_hole,
            photons: Vec::new(),
        })
    }

    /// The central compact object.
    pub fn black_hole(&self) -> &BlackHole {
        &self.black_hole
    }

    /// All photons, oldest spawn first.
    pub fn photons(&self) -> &[Photon] {
        &self.photons
    }

    /// Number of photons still integrating.
    pub fn live_count(&self) -> usize {
        self.photons.iter().filter(|p| !p.is_absorbed()).count()
    }

    /// Number of photons frozen behind the horizon.
    pub fn absorbed_count(&self) -> usize {
        self.photons.iter().filter(|p| p.is_absorbed()).count()
    }

    /// Append a photon at `position` heading along `direction`.
    pub fn spawn_photon(&mut self, position: Vec2, direction: Vec2) {
        self.photons.push(Photon::new(position, direction));
    }

    /// Seed the reference scenario: a single rightward photon at the left
    /// screen edge, offset vertically so its impact parameter sits just
    /// inside critical.  See
    /// [`PHOTON_START_OFFSET_Y`](crate::constants::PHOTON_START_OFFSET_Y).
    pub fn seed_reference(&mut self, screen_width: f32, config: &SimConfig) {
        self.spawn_photon(
            Vec2::new(-screen_width / 2.0, config.photon_start_offset_y),
            Vec2::X,
        );
    }

    /// Seed a single ray far above the hole; it crosses the screen with only
    /// mild deflection, the weak-field sanity scenario.
    pub fn seed_distant(&mut self, screen_width: f32, screen_height: f32) {
        self.spawn_photon(
            Vec2::new(-screen_width / 2.0, screen_height * 0.45),
            Vec2::X,
        );
    }

    /// Spawn a vertical fan of `config.fan_count` rightward rays along the
    /// left screen edge, spread over `fan_spread` of the window height with
    /// per-ray vertical jitter.
    pub fn spawn_fan(&mut self, screen_width: f32, screen_height: f32, config: &SimConfig) {
        let mut rng = rand::thread_rng();
        let x = -screen_width / 2.0;
        let half_span = screen_height * config.fan_spread / 2.0;
        let count = config.fan_count.max(2);

        for i in 0..count {
            let t = i as f32 / (count - 1) as f32;
            let jitter = if config.fan_jitter > 0.0 {
                rng.gen_range(-config.fan_jitter..config.fan_jitter)
            } else {
                0.0
            };
            let y = -half_span + t * (2.0 * half_span) + jitter;
            self.spawn_photon(Vec2::new(x, y), Vec2::X);
        }
    }

    /// Advance every photon by one global time step.
    ///
    /// `dt` is coordinate time in seconds, already scaled by the driver's
    /// time multiplier.  It is treated as an opaque positive real: no
    /// clamping happens here, and pathologically large values destabilise
    /// the explicit integrator (documented caller constraint).
    pub fn step(&mut self, dt: f64, config: &SimConfig) {
        for photon in &mut self.photons {
            photon.update(dt, &self.black_hole, config);
        }
    }
}
