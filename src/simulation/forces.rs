//! Field contributors for the tracer engine
//!
//! Defines the acceleration trait and the two terms of the potential
//! gradient: the softened pull of every placed mass and the implicit
//! attractor at the origin

use crate::simulation::states::{Mass, Vec2d};

/// Collection of field terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single gradient per query point, in registration order
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total potential gradient at `x` given the current mass sources
    pub fn gradient(&self, x: &Vec2d, masses: &[Mass]) -> Vec2d {
        self.terms
            .iter()
            .fold(Vec2d::zeros(), |sum, term| term.gradient(x, masses, sum))
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for field sources
/// Implementations add their contribution at `x` onto `sum` and return it
pub trait Acceleration {
    fn gradient(&self, x: &Vec2d, masses: &[Mass], sum: Vec2d) -> Vec2d;
}

/// Gradient of -gamma/|y| at separation `y`, with |y|³ floored at `floor`
///
/// The floor bounds the contribution to |y| * gamma / floor as a particle
/// passes through a source, instead of letting it diverge.
pub fn softened_term(y: &Vec2d, gamma: f64, floor: f64) -> Vec2d {
    y.mult(gamma / (y.norm2() * y.norm()).max(floor))
}

/// Inverse-square pull of every registered mass
pub struct SoftenedGravity {
    pub gamma: f64, // coupling strength
    pub floor: f64, // minimum |r|^3
}

impl Acceleration for SoftenedGravity {
    fn gradient(&self, x: &Vec2d, masses: &[Mass], sum: Vec2d) -> Vec2d {
        masses.iter().fold(sum, |sum, m| {
            // y points from the mass to the query point
            let y = x.minus(&m.x);
            sum.plus(&softened_term(&y, self.gamma, self.floor))
        })
    }
}

/// Implicit, undrawn mass at the origin
/// Present even when no mass has been placed
pub struct VacuumAttractor {
    pub gamma: f64,
    pub floor: f64,
}

impl Acceleration for VacuumAttractor {
    fn gradient(&self, x: &Vec2d, _masses: &[Mass], sum: Vec2d) -> Vec2d {
        sum.plus(&softened_term(x, self.gamma, self.floor))
    }
}
