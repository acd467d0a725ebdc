//! Core state types for the field simulation.
//!
//! Defines the vector value type and the two kinds of entities:
//! - `Vec2d`     immutable 2D vector with cached norm (wraps `NVec2`)
//! - `Mass`      fixed point source of the field
//! - `Particle`  massless tracer with position `x` and momentum `p`

use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Immutable 2D vector.
///
/// The squared norm and the norm are computed once at construction and never
/// change; every operation returns a new vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2d {
    v: NVec2,
    norm2: f64,
    norm: f64,
}

impl Vec2d {
    pub fn new(a: f64, b: f64) -> Self {
        Self::from_nvec(NVec2::new(a, b))
    }

    pub fn zeros() -> Self {
        Self::from_nvec(NVec2::zeros())
    }

    fn from_nvec(v: NVec2) -> Self {
        let norm2 = v.norm_squared();
        Self {
            v,
            norm2,
            norm: norm2.sqrt(),
        }
    }

    /// First component
    pub fn a(&self) -> f64 {
        self.v.x
    }

    /// Second component
    pub fn b(&self) -> f64 {
        self.v.y
    }

    /// a² + b², cached
    pub fn norm2(&self) -> f64 {
        self.norm2
    }

    /// sqrt(a² + b²), cached
    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn as_nvec(&self) -> NVec2 {
        self.v
    }

    pub fn plus(&self, other: &Vec2d) -> Vec2d {
        Self::from_nvec(self.v + other.v)
    }

    pub fn minus(&self, other: &Vec2d) -> Vec2d {
        Self::from_nvec(self.v - other.v)
    }

    pub fn mult(&self, k: f64) -> Vec2d {
        Self::from_nvec(self.v * k)
    }

    /// Rotate counter-clockwise by `alpha` radians.
    pub fn rotate(&self, alpha: f64) -> Vec2d {
        let (sin, cos) = alpha.sin_cos();
        Self::new(self.a() * cos - self.b() * sin, self.a() * sin + self.b() * cos)
    }
}

impl Default for Vec2d {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<NVec2> for Vec2d {
    fn from(v: NVec2) -> Self {
        Self::from_nvec(v)
    }
}

impl From<[f64; 2]> for Vec2d {
    fn from(c: [f64; 2]) -> Self {
        Self::new(c[0], c[1])
    }
}

impl Add for Vec2d {
    type Output = Vec2d;
    fn add(self, rhs: Vec2d) -> Vec2d {
        self.plus(&rhs)
    }
}

impl Sub for Vec2d {
    type Output = Vec2d;
    fn sub(self, rhs: Vec2d) -> Vec2d {
        self.minus(&rhs)
    }
}

impl Mul<f64> for Vec2d {
    type Output = Vec2d;
    fn mul(self, k: f64) -> Vec2d {
        self.mult(k)
    }
}

impl Neg for Vec2d {
    type Output = Vec2d;
    fn neg(self) -> Vec2d {
        self.mult(-1.0)
    }
}

/// A fixed point source. Never moves once placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    pub x: Vec2d, // position
}

impl Mass {
    pub fn new(x: Vec2d) -> Self {
        Self { x }
    }
}

/// A massless tracer. `p` is treated as velocity (unit mass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: Vec2d, // position
    pub p: Vec2d, // momentum
}

impl Particle {
    pub fn new(x: Vec2d, p: Vec2d) -> Self {
        Self { x, p }
    }
}
