pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Vec2d, NVec2, Mass, Particle};
pub use simulation::forces::{Acceleration, AccelSet, SoftenedGravity, VacuumAttractor};
pub use simulation::integrator::{leapfrog_step, leapfrog_integrator};
pub use simulation::world::World;
pub use simulation::spawn::{spawn_fan, SpawnSettings};
pub use simulation::scenario::{Scenario, Driver};

pub use configuration::config::{WorldConfig, DriverConfig, ViewConfig, SpawnConfig, ParticleConfig, ScenarioConfig};

pub use visualization::{view::ViewTransform, vis2d::run_2d};

pub use benchmark::benchmark::{bench_field, bench_evolve};

pub use error::{Error, Result};
