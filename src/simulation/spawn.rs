//! Particle creation from a drag gesture
//!
//! A drag from `from` to `to` launches a small fan of particles at `from`,
//! all with the speed of the drag vector and directions jittered around it.

use std::f64::consts::PI;

use rand::Rng;

use super::states::Vec2d;
use super::world::World;

pub const DEFAULT_SPAWN_COUNT: usize = 10;
pub const DEFAULT_SPAWN_SPREAD: f64 = PI / 4.0;

#[derive(Debug, Clone)]
pub struct SpawnSettings {
    pub count: usize, // particles per drag
    pub spread: f64, // full angular width of the fan, radians
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_SPAWN_COUNT,
            spread: DEFAULT_SPAWN_SPREAD,
        }
    }
}

/// Add `settings.count` particles at `from`, each with momentum `to - from`
/// rotated by an angle drawn uniformly from [-spread/2, spread/2).
pub fn spawn_fan<R: Rng + ?Sized>(world: &mut World, from: Vec2d, to: Vec2d, settings: &SpawnSettings, rng: &mut R) {
    let diff = to.minus(&from);
    for _ in 0..settings.count {
        let u: f64 = rng.random();
        let alpha = (u - 0.5) * settings.spread;
        world.add_particle(from, diff.rotate(alpha));
    }
}
