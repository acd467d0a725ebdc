use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};
use rand::rngs::StdRng;

use crate::simulation::random::make_rng;
use crate::simulation::scenario::Scenario;
use crate::simulation::spawn::spawn_fan;
use crate::simulation::states::Vec2d;
use crate::visualization::view::ViewTransform;

/// Half the side of the square drawn for a mass, in pixels
const MASS_HALF_SIZE: f32 = 4.0;
/// Radius of the circle drawn for a particle, in pixels
const PARTICLE_RADIUS: f32 = 4.0;

/// What a mouse gesture creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreationMode {
    #[default]
    Mass,
    Particle,
}

impl CreationMode {
    pub fn toggled(self) -> Self {
        match self {
            CreationMode::Mass => CreationMode::Particle,
            CreationMode::Particle => CreationMode::Mass,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CreationMode::Mass => "mass",
            CreationMode::Particle => "particle",
        }
    }
}

pub fn mode_title(mode: CreationMode) -> String {
    format!("Creation Mode: {}", mode.label())
}

/// Input state carried between frames
#[derive(Resource, Default)]
struct Controller {
    mode: CreationMode,
    mouse_hold: bool,
    preview: Option<([f64; 2], [f64; 2])>, // drag start and current end, canvas pixels
}

#[derive(Resource)]
struct SpawnRng(StdRng);

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} masses, {} particles",
        scenario.world.masses.len(),
        scenario.world.particles.len()
    );

    let window = Window {
        title: mode_title(CreationMode::default()),
        resolution: WindowResolution::new(scenario.view.width as f32, scenario.view.height as f32),
        resizable: false,
        ..Default::default()
    };

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(Time::<Fixed>::from_duration(scenario.driver.tick))
        .insert_resource(SpawnRng(make_rng(scenario.seed)))
        .insert_resource(Controller::default())
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (toggle_mode_system, randomize_system, mouse_system, draw_system).chain())
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        world,
        driver,
        view,
        ..
    } = &mut *scenario;

    driver.tick(world, view);
}

fn toggle_mode_system(keys: Res<ButtonInput<KeyCode>>, mut controller: ResMut<Controller>, mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }

    controller.mode = controller.mode.toggled();
    if let Ok(mut window) = windows.get_single_mut() {
        window.title = mode_title(controller.mode);
    }
    info!("creation mode: {}", controller.mode.label());
}

fn randomize_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>, mut rng: ResMut<SpawnRng>) {
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.world.randomize_momenta(&mut rng.0);
        info!("randomized momenta of {} particles", scenario.world.particles.len());
    }
}

fn mouse_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut controller: ResMut<Controller>,
    mut scenario: ResMut<Scenario>,
    mut rng: ResMut<SpawnRng>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let c = [cursor.x as f64, cursor.y as f64];

    if buttons.just_pressed(MouseButton::Left) {
        controller.mouse_hold = true;
        if controller.mode == CreationMode::Particle {
            controller.preview = Some((c, c));
        }
    }

    if controller.mouse_hold {
        if let Some((_, end)) = controller.preview.as_mut() {
            *end = c;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        let preview = controller.preview.take();
        controller.mouse_hold = false;

        let Scenario { world, view, spawn, .. } = &mut *scenario;
        match (controller.mode, preview) {
            (CreationMode::Mass, _) => {
                let x = view.to_model(c);
                world.add_mass(x);
                info!("mass added at ({:.2}, {:.2})", x.a(), x.b());
            }
            (CreationMode::Particle, Some((start, end))) => {
                spawn_fan(world, view.to_model(start), view.to_model(end), spawn, &mut rng.0);
                info!("spawned {} particles, {} alive", spawn.count, world.particles.len());
            }
            // Press happened before the mode switched to particles
            (CreationMode::Particle, None) => {}
        }
    }
}

fn draw_system(scenario: Res<Scenario>, controller: Res<Controller>, mut gizmos: Gizmos) {
    let view = &scenario.view;

    for m in &scenario.world.masses {
        gizmos.rect_2d(centered(view, &m.x), 0.0, Vec2::splat(2.0 * MASS_HALF_SIZE), Color::BLACK);
    }

    let particle_color = Color::srgb(242.0 / 255.0, 218.0 / 255.0, 0.0);
    for p in &scenario.world.particles {
        gizmos.circle_2d(centered(view, &p.x), PARTICLE_RADIUS, particle_color);
    }

    if let Some((start, end)) = controller.preview {
        let [sx, sy] = view.canvas_to_centered(start);
        let [ex, ey] = view.canvas_to_centered(end);
        gizmos.line_2d(
            Vec2::new(sx as f32, sy as f32),
            Vec2::new(ex as f32, ey as f32),
            Color::srgb(0.0, 0.5, 0.0),
        );
    }
}

fn centered(view: &ViewTransform, x: &Vec2d) -> Vec2 {
    let [cx, cy] = view.to_centered(x);
    Vec2::new(cx as f32, cy as f32)
}
