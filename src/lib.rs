//! Schwarzschild photon geodesic simulation library.
//!
//! Integrates light-ray trajectories around a non-rotating black hole in the
//! equatorial plane and exposes the resulting state (positions, trails,
//! absorption) for a thin Bevy rendering driver.

pub mod black_hole;
pub mod config;
pub mod constants;
pub mod error;
pub mod geodesic;
pub mod graphics;
pub mod photon;
pub mod rendering;
pub mod simulation;
pub mod world;
