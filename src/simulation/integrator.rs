//! Fixed-step time integrator for the tracer particles
//!
//! Single-force-eval leapfrog in drift-kick-drift form, driven by an
//! `AccelSet` and the fixed mass sources

use super::forces::AccelSet;
use super::states::{Mass, Particle};

/// Advance one particle by `dt`, returning its new state.
/// Uses one field evaluation at the half-step position.
pub fn leapfrog_step(particle: &Particle, forces: &AccelSet, masses: &[Mass], dt: f64) -> Particle {
    let half_dt = 0.5 * dt; // half step dt/2

    // Drift: x_half = x_n + (dt/2) * p_n
    let x_half = particle.x.plus(&particle.p.mult(half_dt));

    // Kick: p_n+1 = p_n - dt * grad U(x_half)
    let p = particle.p.minus(&forces.gradient(&x_half, masses).mult(dt));

    // Second drift: x_n+1 = x_half + (dt/2) * p_n+1
    let x = x_half.plus(&p.mult(half_dt));

    Particle { x, p }
}

/// Advance every particle in place.
/// Masses are fixed, so each particle is independent of the others.
pub fn leapfrog_integrator(particles: &mut [Particle], forces: &AccelSet, masses: &[Mass], dt: f64) {
    for particle in particles.iter_mut() {
        *particle = leapfrog_step(particle, forces, masses, dt);
    }
}
