pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod random;
pub mod world;
pub mod spawn;
pub mod scenario;
