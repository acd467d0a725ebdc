//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - the `World` with its initial masses and particles
//! - driver settings (step size and tick period)
//! - the view transform used for drawing, input and culling
//! - spawn settings and the RNG seed
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! driver, input and drawing systems

use std::time::Duration;

use bevy::prelude::Resource;

use crate::configuration::config::{ParticleConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::params::{Parameters, DENOMINATOR_FLOOR};
use crate::simulation::spawn::SpawnSettings;
use crate::simulation::states::Vec2d;
use crate::simulation::world::World;
use crate::visualization::view::ViewTransform;

/// Fixed-cadence driver settings
#[derive(Debug, Clone)]
pub struct Driver {
    pub dt: f64, // simulation time per tick
    pub tick: Duration, // wall-clock period per tick
}

impl Driver {
    /// One tick: drop particles that left the view, then advance the rest
    pub fn tick(&self, world: &mut World, view: &ViewTransform) {
        world.retain_particles(|p| view.contains(&p.x));
        world.evolve(self.dt);
    }
}

/// Bevy resource representing a fully-initialized simulation scenario
#[derive(Resource)]
pub struct Scenario {
    pub world: World,
    pub driver: Driver,
    pub view: ViewTransform,
    pub spawn: SpawnSettings,
    pub seed: Option<u64>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let w_cfg = cfg.world;
        ensure_finite("world.gamma", w_cfg.gamma)?;

        let d_cfg = cfg.driver;
        ensure_finite("driver.dt", d_cfg.dt)?;
        if d_cfg.tick_ms == 0 {
            return Err(Error::InvalidParam("driver.tick_ms must be > 0".to_string()));
        }

        let v_cfg = cfg.view;
        if v_cfg.width == 0 || v_cfg.height == 0 {
            return Err(Error::InvalidParam("view.width and view.height must be > 0".to_string()));
        }
        let dimension = pair("view.dimension", &v_cfg.dimension)?;
        if !(dimension.a() > 0.0 && dimension.b() > 0.0) {
            return Err(Error::InvalidParam("view.dimension must be positive".to_string()));
        }

        ensure_finite("spawn.spread", cfg.spawn.spread)?;

        // Parameters (runtime) from WorldConfig
        let parameters = Parameters {
            gamma: w_cfg.gamma,
            dt: d_cfg.dt,
            floor: DENOMINATOR_FLOOR,
            vacuum: w_cfg.vacuum,
        };
        let mut world = World::with_parameters(&parameters);

        for (i, m) in cfg.masses.iter().enumerate() {
            world.add_mass(pair(&format!("masses[{i}]"), m)?);
        }
        for (i, pc) in cfg.particles.iter().enumerate() {
            let ParticleConfig { x, p } = pc;
            let x = pair(&format!("particles[{i}].x"), x)?;
            let p = pair(&format!("particles[{i}].p"), p)?;
            world.add_particle(x, p);
        }

        let driver = Driver {
            dt: parameters.dt,
            tick: Duration::from_millis(d_cfg.tick_ms),
        };

        let view = ViewTransform::new(
            v_cfg.width as f64,
            v_cfg.height as f64,
            [dimension.a(), dimension.b()],
        );

        let spawn = SpawnSettings {
            count: cfg.spawn.count,
            spread: cfg.spawn.spread,
        };

        Ok(Self {
            world,
            driver,
            view,
            spawn,
            seed: cfg.seed,
        })
    }
}

// helpers ===========================================================================

fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParam(format!("{name} must be finite, got {value}")))
    }
}

/// Read a 2-component finite vector from a YAML list
fn pair(name: &str, values: &[f64]) -> Result<Vec2d> {
    match values {
        [a, b] if a.is_finite() && b.is_finite() => Ok(Vec2d::new(*a, *b)),
        [_, _] => Err(Error::InvalidParam(format!("{name} must be finite"))),
        _ => Err(Error::InvalidParam(format!(
            "{name} must have 2 components, got {}",
            values.len()
        ))),
    }
}
