//! The simulated world: fixed masses, mobile tracers and the field
//!
//! `World` is the sole mutator of particle state. Drivers call
//! [`World::evolve`] at their own cadence; the view layer reads
//! `masses`/`particles` and may filter or replace the particle list
//! between ticks.

use rand::Rng;

use super::forces::{AccelSet, SoftenedGravity, VacuumAttractor};
use super::integrator::leapfrog_integrator;
use super::params::Parameters;
use super::random::randn_bm;
use super::states::{Mass, Particle, Vec2d};

pub struct World {
    pub masses: Vec<Mass>, // fixed sources
    pub particles: Vec<Particle>, // tracers
    gamma: f64, // coupling strength, fixed at construction
    forces: AccelSet,
    t: f64, // accumulated simulation time
}

impl World {
    /// World with coupling `gamma`, default floor and the origin attractor
    pub fn new(gamma: f64) -> Self {
        Self::with_parameters(&Parameters {
            gamma,
            ..Parameters::default()
        })
    }

    pub fn with_parameters(params: &Parameters) -> Self {
        // Vacuum first, then placed masses: same summation order every call
        let mut forces = AccelSet::new();
        if params.vacuum {
            forces = forces.with(VacuumAttractor {
                gamma: params.gamma,
                floor: params.floor,
            });
        }
        forces = forces.with(SoftenedGravity {
            gamma: params.gamma,
            floor: params.floor,
        });

        Self {
            masses: Vec::new(),
            particles: Vec::new(),
            gamma: params.gamma,
            forces,
            t: 0.0,
        }
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Sum of every `dt` passed to `evolve` since creation or `clear`
    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn add_mass(&mut self, x: Vec2d) {
        self.masses.push(Mass::new(x));
    }

    pub fn add_particle(&mut self, x: Vec2d, p: Vec2d) {
        self.particles.push(Particle::new(x, p));
    }

    /// Gradient of the total potential at `x` (the negated acceleration)
    pub fn grad_u(&self, x: &Vec2d) -> Vec2d {
        self.forces.gradient(x, &self.masses)
    }

    /// Advance every particle by one leapfrog step of size `dt`.
    /// Large |dt| may make particles diverge; that is not checked.
    pub fn evolve(&mut self, dt: f64) {
        leapfrog_integrator(&mut self.particles, &self.forces, &self.masses, dt);
        self.t += dt;
    }

    /// Replace every momentum with independent N(0, 1) components
    pub fn randomize_momenta<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for particle in self.particles.iter_mut() {
            let a = randn_bm(rng);
            let b = randn_bm(rng);
            particle.p = Vec2d::new(a, b);
        }
    }

    /// Keep only the particles for which `keep` returns true
    pub fn retain_particles<F>(&mut self, keep: F)
    where
        F: FnMut(&Particle) -> bool,
    {
        self.particles.retain(keep);
    }

    pub fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    /// Drop every mass and particle and reset the clock
    pub fn clear(&mut self) {
        self.masses.clear();
        self.particles.clear();
        self.t = 0.0;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::with_parameters(&Parameters::default())
    }
}
