//! Standard-normal sampling via the Box–Muller transform

use std::f64::consts::PI;

use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// Draw a uniform sample strictly inside (0, 1).
fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.random();
        if u != 0.0 {
            return u;
        }
    }
}

/// One sample from N(0, 1): sqrt(-2 ln u) * cos(2 pi v)
pub fn randn_bm<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u = open_unit(rng);
    let v = open_unit(rng);
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// Seeded generator when `seed` is given, entropy-seeded otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => SeedableRng::seed_from_u64(rng().random()),
    }
}
