use std::time::Instant;

use crate::simulation::params::DEFAULT_DT;
use crate::simulation::states::Vec2d;
use crate::simulation::world::World;

/// Helper to build a world with `n_masses` masses and `n_particles` particles
/// deterministic positions, no rand needed
fn make_world(n_masses: usize, n_particles: usize) -> World {
    let mut world = World::default();

    for i in 0..n_masses {
        let i_f = i as f64;
        world.add_mass(Vec2d::new((i_f * 0.37).sin() * 15.0, (i_f * 0.13).cos() * 15.0));
    }

    for i in 0..n_particles {
        let i_f = i as f64;
        let x = Vec2d::new((i_f * 0.71).sin() * 20.0, (i_f * 0.29).cos() * 20.0);
        let p = Vec2d::new((i_f * 0.05).cos(), (i_f * 0.11).sin());
        world.add_particle(x, p);
    }

    world
}

/// Time the field evaluation for a growing number of masses
pub fn bench_field() {
    let ns = [1, 10, 100, 1000, 10000];
    let queries = 10_000;

    println!("masses,ns_per_query");

    for n in ns {
        let world = make_world(n, 0);

        // Warm up
        let mut acc = Vec2d::zeros();
        acc = acc.plus(&world.grad_u(&Vec2d::new(1.0, 1.0)));

        let t0 = Instant::now();
        for q in 0..queries {
            let q_f = q as f64;
            let x = Vec2d::new((q_f * 0.31).sin() * 25.0, (q_f * 0.17).cos() * 25.0);
            acc = acc.plus(&world.grad_u(&x));
        }
        let ns_per_query = t0.elapsed().as_secs_f64() * 1.0e9 / queries as f64;

        // Print the accumulator so the loop is not optimized away
        println!("{},{:.1},{:.3e}", n, ns_per_query, acc.norm());
    }
}

/// Time `evolve` for a growing number of particles
/// Paste output directly into excel to graph
pub fn bench_evolve() {
    let n_masses = 8;
    let steps = 20;

    println!("particles,ms_per_step");

    for n in [1000, 2000, 4000, 8000, 16000, 32000, 64000] {
        let mut world = make_world(n_masses, n);

        // Warm-up one step
        world.evolve(DEFAULT_DT);

        let t0 = Instant::now();
        for _ in 0..steps {
            world.evolve(DEFAULT_DT);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
