use bevy::math::primitives::Sphere;
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;
use flight_core::weapon::AimRay;
use flight_core::{Impact, NoDamage, Projectile, Shot};
use tracing::{debug, info};

use crate::config::FlightConfig;
use crate::menu::GameState;

/// Rounds that hit nothing are removed after this long.
pub const ROUND_LIFETIME_SECS: f32 = 6.0;
pub const EXPLOSION_SECS: f32 = 0.6;
const EXPLOSION_GROWTH: f32 = 6.0;

/// Sphere that rounds collide with and aim rays hit.
#[derive(Component, Debug, Clone, Copy)]
pub struct Collider {
    pub radius: f32,
}

/// What a fired round looks like; without it ships cannot fire.
#[derive(Resource, Debug, Clone, Default)]
pub struct ProjectileTemplate {
    pub radius: f32,
    pub mesh: Option<Handle<Mesh>>,
    pub material: Option<Handle<StandardMaterial>>,
    pub explosion_material: Option<Handle<StandardMaterial>>,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Round {
    pub projectile: Projectile,
    pub velocity: Vec3,
    pub radius: f32,
    pub age: f32,
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Explosion {
    pub age: f32,
}

pub fn setup_projectile_template(
    mut commands: Commands,
    cfg: Res<FlightConfig>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let radius = cfg.weapon.projectile_radius;
    let mut template = ProjectileTemplate {
        radius,
        ..Default::default()
    };
    if let (Some(mut meshes), Some(mut materials)) = (meshes, materials) {
        template.mesh = Some(meshes.add(Mesh::from(Sphere::new(radius))));
        template.material = Some(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.85, 0.3),
            emissive: LinearRgba::rgb(6.0, 4.0, 1.0),
            unlit: true,
            ..Default::default()
        }));
        template.explosion_material = Some(materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.45, 0.1, 0.8),
            emissive: LinearRgba::rgb(8.0, 3.0, 0.5),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..Default::default()
        }));
    }
    commands.insert_resource(template);
}

pub fn spawn_projectile(commands: &mut Commands, template: &ProjectileTemplate, shot: Shot) {
    let mut round = commands.spawn((
        Round {
            projectile: Projectile::default(),
            velocity: shot.velocity,
            radius: template.radius,
            age: 0.0,
        },
        Transform::from_translation(shot.position).with_rotation(shot.rotation),
        Name::new("Round"),
        StateScoped(GameState::Flight),
    ));
    if let (Some(mesh), Some(material)) = (&template.mesh, &template.material) {
        round.insert((Mesh3d(mesh.clone()), MeshMaterial3d(material.clone())));
    }
    info!(position = ?shot.position, velocity = ?shot.velocity, "round fired");
}

fn spawn_explosion(commands: &mut Commands, template: Option<&ProjectileTemplate>, at: Vec3) {
    let mut explosion = commands.spawn((
        Explosion::default(),
        Transform::from_translation(at),
        Name::new("Explosion"),
        StateScoped(GameState::Flight),
    ));
    if let Some(ProjectileTemplate {
        mesh: Some(mesh),
        explosion_material: Some(material),
        ..
    }) = template
    {
        explosion.insert((Mesh3d(mesh.clone()), MeshMaterial3d(material.clone())));
    }
}

/// Sweep each round along its velocity; the first collider crossed this
/// step detonates it at the contact point.
pub fn move_projectiles(
    time: Res<Time>,
    mut commands: Commands,
    template: Option<Res<ProjectileTemplate>>,
    mut rounds: Query<(Entity, &mut Round, &mut Transform), Without<Collider>>,
    colliders: Query<(&Transform, &Collider)>,
) {
    let dt = time.delta_secs();
    for (entity, mut round, mut transform) in &mut rounds {
        let step = round.velocity * dt;
        let reach = step.length();
        let contact = AimRay::new(transform.translation, step).and_then(|ray| {
            colliders
                .iter()
                .filter_map(|(t, c)| ray.hit_sphere(t.translation, c.radius + round.radius))
                .filter(|&hit| hit <= reach)
                .min_by(f32::total_cmp)
                .map(|hit| ray.at(hit))
        });

        if let Some(contact) = contact {
            if let Impact::Explode { at } = round.projectile.on_collision(contact, &mut NoDamage) {
                debug!(?at, "round detonated");
                spawn_explosion(&mut commands, template.as_deref(), at);
                commands.entity(entity).despawn();
            }
            continue;
        }

        transform.translation += step;
        round.age += dt;
        if round.age > ROUND_LIFETIME_SECS {
            commands.entity(entity).despawn();
        }
    }
}

pub fn expire_explosions(
    time: Res<Time>,
    mut commands: Commands,
    mut explosions: Query<(Entity, &mut Explosion, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (entity, mut explosion, mut transform) in &mut explosions {
        explosion.age += dt;
        if explosion.age >= EXPLOSION_SECS {
            commands.entity(entity).despawn();
        } else {
            transform.scale = Vec3::splat(1.0 + explosion.age * EXPLOSION_GROWTH);
        }
    }
}
