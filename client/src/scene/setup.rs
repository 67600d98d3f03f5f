use bevy::math::primitives::Sphere;
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::weapon::Collider;
use super::Rendering;
use crate::menu::GameState;

const ASTEROID_COUNT: usize = 48;
const ASTEROID_SEED: u64 = 0x5eed_f1e1d;

#[derive(Component)]
pub struct Asteroid;

pub fn setup_lighting(mut commands: Commands, rendering: Res<Rendering>) {
    if !rendering.0 {
        return;
    }
    commands.insert_resource(ClearColor(Color::srgb(0.01, 0.01, 0.03)));
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.6, 0.65, 0.8),
        brightness: 120.0,
        affects_lightmapped_meshes: true,
    });
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 0.96, 0.9),
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..Default::default()
        },
        Transform::from_xyz(30.0, 50.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun Light"),
        StateScoped(GameState::Flight),
    ));
}

/// Scatter a fixed field of spherical rocks in a shell around the start.
pub fn spawn_asteroid_field(
    mut commands: Commands,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let mut rng = StdRng::seed_from_u64(ASTEROID_SEED);
    let mut assets = meshes.zip(materials);
    let rock = assets.as_mut().map(|(_, materials)| {
        materials.add(StandardMaterial {
            base_color: Color::srgb(0.42, 0.38, 0.35),
            perceptual_roughness: 0.95,
            ..Default::default()
        })
    });

    for i in 0..ASTEROID_COUNT {
        let direction = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-0.4..0.4),
            rng.gen_range(-1.0..1.0),
        )
        .normalize_or(Vec3::NEG_Z);
        let distance: f32 = rng.gen_range(40.0..220.0);
        let position = direction * distance;
        let radius = rng.gen_range(2.0..9.0);

        let mut asteroid = commands.spawn((
            Asteroid,
            Collider { radius },
            Transform::from_translation(position),
            Name::new(format!("Asteroid {i}")),
            StateScoped(GameState::Flight),
        ));
        if let (Some((meshes, _)), Some(rock)) = (assets.as_mut(), &rock) {
            asteroid.insert((
                Mesh3d(meshes.add(Mesh::from(Sphere::new(radius)))),
                MeshMaterial3d(rock.clone()),
            ));
        }
    }
}
