//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`WorldConfig`]    – coupling strength and the origin attractor switch
//! - [`DriverConfig`]   – simulation step and wall-clock tick period
//! - [`ViewConfig`]     – window size and visible model extent
//! - [`SpawnConfig`]    – how many particles a drag launches, and their spread
//! - [`ParticleConfig`] – initial state for each particle
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document is a valid scenario.
//!
//! # YAML format
//!
//! ```yaml
//! world:
//!   gamma: 100.0            # coupling strength
//!   vacuum: true            # implicit attractor at the origin
//!
//! driver:
//!   dt: 0.25                # simulation time per tick
//!   tick_ms: 40             # wall-clock period of a tick
//!
//! view:
//!   width: 500              # window size in pixels
//!   height: 500
//!   dimension: [50.0, 50.0] # visible model extent
//!
//! spawn:
//!   count: 10
//!   spread: 0.785398        # radians
//!
//! seed: 42                  # optional, random if absent
//!
//! masses:
//!   - [0.0, 0.0]
//!
//! particles:
//!   - x: [10.0, 0.0]
//!     p: [0.0, 1.0]
//! ```

use serde::Deserialize;

use crate::simulation::params::{DEFAULT_DT, DEFAULT_GAMMA};
use crate::simulation::spawn::{DEFAULT_SPAWN_COUNT, DEFAULT_SPAWN_SPREAD};

/// Physical configuration of the world
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub gamma: f64, // coupling strength
    pub vacuum: bool, // `true` - include the implicit mass at the origin
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            vacuum: true,
        }
    }
}

/// Fixed-cadence driver settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DriverConfig {
    pub dt: f64, // simulation time advanced per tick
    pub tick_ms: u64, // wall-clock period between ticks
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            tick_ms: 40,
        }
    }
}

/// Viewer window and the model-space rectangle it shows
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub width: u32, // window width in pixels
    pub height: u32, // window height in pixels
    pub dimension: Vec<f64>, // model extent [x, y], centred on the origin
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            dimension: vec![50.0, 50.0],
        }
    }
}

/// Particle launch settings for drag gestures
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SpawnConfig {
    pub count: usize, // particles per drag
    pub spread: f64, // full fan angle, radians
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SPAWN_COUNT,
            spread: DEFAULT_SPAWN_SPREAD,
        }
    }
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: Vec<f64>, // initial position in model units
    pub p: Vec<f64>, // initial momentum (velocity)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub world: WorldConfig,
    pub driver: DriverConfig,
    pub view: ViewConfig,
    pub spawn: SpawnConfig,
    pub seed: Option<u64>, // deterministic seed for spawning and randomization
    pub masses: Vec<Vec<f64>>, // initial mass positions
    pub particles: Vec<ParticleConfig>, // initial particles
}
