use std::f64::consts::PI;

use fieldsim::simulation::params::{Parameters, DENOMINATOR_FLOOR};
use fieldsim::simulation::random::{make_rng, randn_bm};
use fieldsim::visualization::vis2d::{mode_title, CreationMode};
use fieldsim::{leapfrog_step, spawn_fan, Error, Particle, Scenario, ScenarioConfig, SpawnSettings, Vec2d, ViewTransform, World};

const TOL: f64 = 1e-12;

/// Assert two vectors agree componentwise within `tol`
fn assert_close(got: Vec2d, want: Vec2d, tol: f64) {
    assert!(
        (got.a() - want.a()).abs() < tol && (got.b() - want.b()).abs() < tol,
        "expected ({}, {}), got ({}, {})",
        want.a(),
        want.b(),
        got.a(),
        got.b()
    );
}

/// World with gamma=100, one mass at the origin and one particle at (10, 0)
/// moving along +y
fn single_orbit_world() -> World {
    let mut world = World::new(100.0);
    world.add_mass(Vec2d::new(0.0, 0.0));
    world.add_particle(Vec2d::new(10.0, 0.0), Vec2d::new(0.0, 1.0));
    world
}

/// Build a scenario straight from a YAML string
fn scenario_from_yaml(yaml: &str) -> fieldsim::Result<Scenario> {
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml)?;
    Scenario::build_scenario(cfg)
}

// ==================================================================================
// Vector tests
// ==================================================================================

#[test]
fn vector_caches_norms() {
    let v = Vec2d::new(3.0, -4.0);
    assert_eq!(v.norm2(), 25.0);
    assert_eq!(v.norm(), 5.0);

    let w = v.plus(&Vec2d::new(-3.0, 4.0));
    assert_eq!(w.norm2(), 0.0);
    assert_eq!(w.norm(), 0.0);
}

#[test]
fn vector_plus_minus_round_trip() {
    let samples = [(1.5, -2.25), (-1e3, 7.0), (0.0, 0.0), (1e-8, 3e5)];
    for &(a, b) in &samples {
        for &(c, d) in &samples {
            let u = Vec2d::new(a, b);
            let v = Vec2d::new(c, d);
            assert_close(u.plus(&v).minus(&v), u, 1e-9 * (1.0 + u.norm() + v.norm()));
        }
    }
}

#[test]
fn vector_mult_scales_norm() {
    let u = Vec2d::new(-2.0, 7.5);
    for k in [-3.0, -0.5, 0.0, 1.0, 12.25] {
        let scaled = u.mult(k);
        assert!((scaled.norm() - u.norm() * f64::abs(k)).abs() < 1e-12, "k = {k}");
    }
}

#[test]
fn vector_operations_do_not_mutate() {
    let u = Vec2d::new(1.0, 2.0);
    let _ = u.plus(&Vec2d::new(5.0, 5.0));
    let _ = u.mult(10.0);
    let _ = u - Vec2d::new(1.0, 1.0);
    assert_eq!(u, Vec2d::new(1.0, 2.0));
    assert_eq!(u + u, u * 2.0);
    assert_eq!(-u, Vec2d::new(-1.0, -2.0));
}

#[test]
fn vector_rotation_preserves_norm() {
    let u = Vec2d::new(3.0, 4.0);
    let r = u.rotate(PI / 2.0);
    assert_close(r, Vec2d::new(-4.0, 3.0), TOL);
    assert!((u.rotate(0.3).norm() - 5.0).abs() < TOL);
}

// ==================================================================================
// Field tests
// ==================================================================================

#[test]
fn empty_world_field_is_vacuum_term() {
    let world = World::new(100.0);

    // |x|^3 = 125 >= 10
    let x = Vec2d::new(3.0, 4.0);
    assert_close(world.grad_u(&x), x.mult(100.0 / 125.0), TOL);

    // |x|^3 = 1 < 10: floored
    let x = Vec2d::new(1.0, 0.0);
    assert_close(world.grad_u(&x), Vec2d::new(10.0, 0.0), TOL);

    // The origin itself is harmless
    assert_close(world.grad_u(&Vec2d::zeros()), Vec2d::zeros(), TOL);
}

#[test]
fn mass_at_origin_doubles_vacuum_term() {
    let mut world = World::new(100.0);
    world.add_mass(Vec2d::zeros());

    for x in [Vec2d::new(5.0, 0.0), Vec2d::new(-3.0, 7.0), Vec2d::new(20.0, -20.0)] {
        let r3 = x.norm2() * x.norm();
        assert!(r3 >= DENOMINATOR_FLOOR);
        assert_close(world.grad_u(&x), x.mult(2.0 * 100.0 / r3), 1e-12);
    }
}

#[test]
fn field_points_away_from_mass() {
    let mut world = World::new(100.0);
    world.add_mass(Vec2d::new(20.0, 0.0));

    // Between origin and mass, the placed mass dominates: gradient points
    // away from it, so the kick p - grad*dt pulls toward it
    let x = Vec2d::new(17.0, 0.0);
    assert!(world.grad_u(&x).a() < 0.0, "gradient is not directed away from the mass");
}

#[test]
fn denominator_floor_bounds_close_encounters() {
    let mut world = World::new(100.0);
    world.add_mass(Vec2d::new(0.1, 0.0));

    // Vacuum term vanishes at the origin, mass term is (x - x_m) * gamma / 10
    let g = world.grad_u(&Vec2d::zeros());
    assert_close(g, Vec2d::new(-1.0, 0.0), TOL);

    // Unfloored the magnitude would be 0.1 * 100 / 0.001 = 1e4
    assert!(g.norm() < 2.0, "floor failed; gradient too large: {}", g.norm());
}

#[test]
fn field_sums_over_masses() {
    let mut world = World::new(50.0);
    let masses = [Vec2d::new(5.0, 5.0), Vec2d::new(-6.0, 1.0), Vec2d::new(0.0, -9.0)];
    for m in masses {
        world.add_mass(m);
    }

    let x = Vec2d::new(1.0, 2.0);
    let mut want = x.mult(50.0 / (x.norm2() * x.norm()).max(10.0));
    for m in masses {
        let y = x.minus(&m);
        want = want.plus(&y.mult(50.0 / (y.norm2() * y.norm()).max(10.0)));
    }
    assert_close(world.grad_u(&x), want, 1e-12);
}

#[test]
fn vacuum_term_can_be_disabled() {
    let world = World::with_parameters(&Parameters {
        vacuum: false,
        ..Parameters::default()
    });
    assert_close(world.grad_u(&Vec2d::new(4.0, -2.0)), Vec2d::zeros(), TOL);
    assert_eq!(world.gamma(), 100.0);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn single_step_moves_toward_mass() {
    let mut world = single_orbit_world();
    world.evolve(0.25);

    let p = world.particles[0];
    assert!(p.x.b() > 0.0, "no drift along y");
    assert!(p.x.a() < 10.0, "no pull toward the origin");
    assert!(p.p.a() < 0.0, "momentum not bent toward the origin");

    assert!((p.x.a() - 9.9375146).abs() < 1e-5, "x = {}", p.x.a());
    assert!((p.x.b() - 0.2492189).abs() < 1e-5, "y = {}", p.x.b());
    assert!((p.p.a() + 0.4998828).abs() < 1e-5, "px = {}", p.p.a());
    assert!((p.p.b() - 0.9937515).abs() < 1e-5, "py = {}", p.p.b());

    // Masses never move
    assert_eq!(world.masses[0].x, Vec2d::zeros());
    assert!((world.t() - 0.25).abs() < TOL);
}

#[test]
fn particles_evolve_independently() {
    let mut world = single_orbit_world();
    world.add_particle(Vec2d::new(-3.0, 8.0), Vec2d::new(1.0, -0.5));
    let before: Vec<Particle> = world.particles.clone();

    world.evolve(0.1);

    for (old, new) in before.iter().zip(world.particles.iter()) {
        let mut solo = World::new(100.0);
        solo.add_mass(Vec2d::zeros());
        solo.replace_particles(vec![*old]);
        solo.evolve(0.1);
        assert_eq!(solo.particles[0], *new, "particles interfere with each other");
    }
}

#[test]
fn leapfrog_is_time_reversible() {
    let mut world = World::new(100.0);
    world.add_mass(Vec2d::new(3.0, -2.0));
    world.add_mass(Vec2d::new(-5.0, 4.0));
    world.add_particle(Vec2d::new(10.0, 0.0), Vec2d::new(0.0, 1.0));
    world.add_particle(Vec2d::new(-1.0, 7.0), Vec2d::new(2.0, 0.5));
    let start = world.particles.clone();

    world.evolve(0.05);
    world.evolve(-0.05);

    for (a, b) in start.iter().zip(world.particles.iter()) {
        assert_close(b.x, a.x, 1e-9);
        assert_close(b.p, a.p, 1e-9);
    }
}

#[test]
fn circular_orbit_keeps_energy() {
    // Mass at origin plus vacuum term: effective coupling 2 * gamma
    let k: f64 = 200.0;
    let r0 = 10.0;
    let v0 = (k / r0).sqrt();

    let mut world = World::new(100.0);
    world.add_mass(Vec2d::zeros());
    world.add_particle(Vec2d::new(r0, 0.0), Vec2d::new(0.0, v0));

    let energy = |p: &Particle| 0.5 * p.p.norm2() - k / p.x.norm();
    let e0 = energy(&world.particles[0]);

    for _ in 0..2000 {
        world.evolve(0.01);
    }

    let p = world.particles[0];
    let rel = ((energy(&p) - e0) / e0).abs();
    assert!(rel < 1e-3, "relative energy drift {} too large", rel);
    assert!((p.x.norm() - r0).abs() < 0.5, "orbit radius drifted to {}", p.x.norm());
}

#[test]
fn pure_step_leaves_input_untouched() {
    let world = single_orbit_world();
    let before = world.particles[0];
    let after = leapfrog_step(&before, &fieldsim::AccelSet::new(), &world.masses, 1.0);

    // With no field terms the step is a straight drift
    assert_close(after.x, Vec2d::new(10.0, 1.0), TOL);
    assert_eq!(after.p, before.p);
    assert_eq!(world.particles[0], before);
}

#[test]
fn evolve_without_particles_only_advances_clock() {
    let mut world = World::default();
    world.add_mass(Vec2d::new(1.0, 1.0));
    world.evolve(0.25);
    world.evolve(0.25);
    assert!(world.particles.is_empty());
    assert!((world.t() - 0.5).abs() < TOL);

    world.clear();
    assert!(world.masses.is_empty());
    assert_eq!(world.t(), 0.0);
}

// ==================================================================================
// Randomization tests
// ==================================================================================

#[test]
fn randomized_momenta_are_standard_normal() {
    let n = 20_000;
    let mut world = World::default();
    for _ in 0..n {
        world.add_particle(Vec2d::new(1.0, 1.0), Vec2d::new(100.0, -100.0));
    }

    let mut rng = make_rng(Some(7));
    world.randomize_momenta(&mut rng);

    let n_f = n as f64;
    let mean_a = world.particles.iter().map(|p| p.p.a()).sum::<f64>() / n_f;
    let mean_b = world.particles.iter().map(|p| p.p.b()).sum::<f64>() / n_f;
    let var_a = world.particles.iter().map(|p| (p.p.a() - mean_a).powi(2)).sum::<f64>() / n_f;
    let var_b = world.particles.iter().map(|p| (p.p.b() - mean_b).powi(2)).sum::<f64>() / n_f;

    assert!(mean_a.abs() < 0.05 && mean_b.abs() < 0.05, "means ({mean_a}, {mean_b})");
    assert!((var_a - 1.0).abs() < 0.06 && (var_b - 1.0).abs() < 0.06, "variances ({var_a}, {var_b})");

    // Positions are untouched
    assert!(world.particles.iter().all(|p| p.x == Vec2d::new(1.0, 1.0)));
}

#[test]
fn box_muller_is_finite_and_seeded() {
    let mut r1 = make_rng(Some(99));
    let mut r2 = make_rng(Some(99));
    for _ in 0..1000 {
        let a = randn_bm(&mut r1);
        assert!(a.is_finite());
        assert_eq!(a, randn_bm(&mut r2));
    }
}

#[test]
fn randomize_on_empty_world_is_noop() {
    let mut world = World::default();
    world.randomize_momenta(&mut make_rng(Some(1)));
    assert!(world.particles.is_empty());
}

// ==================================================================================
// Spawn and view tests
// ==================================================================================

#[test]
fn spawn_fan_launches_within_spread() {
    let mut world = World::default();
    let settings = SpawnSettings::default();
    let from = Vec2d::new(2.0, -3.0);
    let to = Vec2d::new(5.0, 1.0);
    let diff = to.minus(&from);

    spawn_fan(&mut world, from, to, &settings, &mut make_rng(Some(3)));

    assert_eq!(world.particles.len(), settings.count);
    for p in &world.particles {
        assert_eq!(p.x, from);
        assert!((p.p.norm() - diff.norm()).abs() < 1e-12);

        let angle = p.p.b().atan2(p.p.a()) - diff.b().atan2(diff.a());
        assert!(angle.abs() <= settings.spread / 2.0 + 1e-12, "angle {angle} outside fan");
    }
}

#[test]
fn view_transform_round_trip() {
    let view = ViewTransform::default();

    // Canvas centre is the model origin
    assert_close(view.to_model([250.0, 250.0]), Vec2d::zeros(), TOL);
    assert_eq!(view.to_canvas(&Vec2d::new(25.0, 25.0)), [500.0, 0.0]);

    let x = Vec2d::new(-7.5, 12.0);
    assert_close(view.to_model(view.to_canvas(&x)), x, 1e-12);
    assert_eq!(view.to_centered(&x), view.canvas_to_centered(view.to_canvas(&x)));
}

#[test]
fn view_contains_visible_box_only() {
    let view = ViewTransform::default();
    assert!(view.contains(&Vec2d::zeros()));
    assert!(view.contains(&Vec2d::new(25.0, -25.0)));
    assert!(!view.contains(&Vec2d::new(25.1, 0.0)));
    assert!(!view.contains(&Vec2d::new(0.0, -30.0)));
}

#[test]
fn external_culling_between_ticks() {
    let view = ViewTransform::default();
    let mut world = single_orbit_world();
    world.add_particle(Vec2d::new(40.0, 0.0), Vec2d::zeros());

    world.retain_particles(|p| view.contains(&p.x));
    assert_eq!(world.particles.len(), 1);

    world.evolve(0.25);
    assert!(world.particles[0].x.a() < 10.0);
}

#[test]
fn creation_mode_toggles() {
    let mode = CreationMode::default();
    assert_eq!(mode, CreationMode::Mass);
    assert_eq!(mode.toggled(), CreationMode::Particle);
    assert_eq!(mode.toggled().toggled(), mode);
    assert_eq!(mode_title(mode.toggled()), "Creation Mode: particle");
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn empty_scenario_uses_defaults() -> fieldsim::Result<()> {
    let scenario = scenario_from_yaml("{}")?;

    assert_eq!(scenario.world.gamma(), 100.0);
    assert_eq!(scenario.driver.dt, 0.25);
    assert_eq!(scenario.driver.tick.as_millis(), 40);
    assert_eq!(scenario.spawn.count, 10);
    assert!((scenario.spawn.spread - PI / 4.0).abs() < TOL);
    assert_eq!(scenario.view.dimension, [50.0, 50.0]);
    assert!(scenario.world.masses.is_empty() && scenario.world.particles.is_empty());

    // Vacuum term is on by default
    assert_close(scenario.world.grad_u(&Vec2d::new(3.0, 4.0)), Vec2d::new(2.4, 3.2), TOL);
    Ok(())
}

#[test]
fn scenario_loads_bodies() -> fieldsim::Result<()> {
    let yaml = r#"
world:
  gamma: 60.0
  vacuum: false
driver:
  dt: 0.1
seed: 5
masses:
  - [-8.0, 0.0]
  - [8.0, 0.0]
particles:
  - x: [0.0, 12.0]
    p: [2.0, 0.0]
"#;
    let mut scenario = scenario_from_yaml(yaml)?;

    assert_eq!(scenario.world.gamma(), 60.0);
    assert_eq!(scenario.seed, Some(5));
    assert_eq!(scenario.world.masses.len(), 2);
    assert_eq!(scenario.world.particles[0].p, Vec2d::new(2.0, 0.0));

    // Symmetric masses, no vacuum: field vanishes at the origin
    assert_close(scenario.world.grad_u(&Vec2d::zeros()), Vec2d::zeros(), TOL);

    let Scenario { world, driver, view, .. } = &mut scenario;
    driver.tick(world, view);
    assert!((world.t() - 0.1).abs() < TOL);
    Ok(())
}

#[test]
fn driver_tick_culls_before_evolving() -> fieldsim::Result<()> {
    let yaml = r#"
particles:
  - x: [10.0, 0.0]
    p: [0.0, 1.0]
  - x: [30.0, 0.0]
    p: [-100.0, 0.0]
"#;
    let mut scenario = scenario_from_yaml(yaml)?;
    let Scenario { world, driver, view, .. } = &mut scenario;

    driver.tick(world, view);
    assert_eq!(world.particles.len(), 1, "out-of-view particle survived the tick");
    Ok(())
}

#[test]
fn invalid_scenarios_are_rejected() {
    let cases = [
        "world:\n  gamma: .nan\n",
        "driver:\n  tick_ms: 0\n",
        "view:\n  dimension: [50.0]\n",
        "view:\n  dimension: [0.0, 50.0]\n",
        "masses:\n  - [1.0, 2.0, 3.0]\n",
        "particles:\n  - x: [1.0, 2.0]\n    p: [.inf, 0.0]\n",
    ];
    for yaml in cases {
        match scenario_from_yaml(yaml) {
            Err(Error::InvalidParam(_)) => {}
            Err(e) => panic!("unexpected error for {yaml:?}: {e}"),
            Ok(_) => panic!("scenario {yaml:?} should be rejected"),
        }
    }
}

#[test]
fn malformed_yaml_is_reported() {
    match scenario_from_yaml("world: [not, a, map]") {
        Err(Error::Yaml(_)) => {}
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("malformed scenario accepted"),
    }
}
