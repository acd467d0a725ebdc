//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - coupling strength `gamma`,
//! - integration step size `dt`,
//! - denominator floor of the softened force law,
//! - whether the implicit origin attractor is active

/// Default coupling strength
pub const DEFAULT_GAMMA: f64 = 100.0;

/// Default simulation-time increment per tick
pub const DEFAULT_DT: f64 = 0.25;

/// Minimum value of |x - x_m|³ used by the force law
pub const DENOMINATOR_FLOOR: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gamma: f64, // coupling strength
    pub dt: f64, // step size
    pub floor: f64, // softening floor on |r|^3
    pub vacuum: bool, // implicit mass at the origin
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            dt: DEFAULT_DT,
            floor: DENOMINATOR_FLOOR,
            vacuum: true,
        }
    }
}
