use bevy::prelude::*;
use flight_core::{ControlError, Dependency, FollowCamState, Pose, SkipLog};
use rand::Rng;

use super::ship::{Pilot, PlayerShip, ShipBody};
use crate::config::FlightConfig;
use crate::menu::GameState;

/// Chase camera; `state` is the smoothed pose the transform mirrors.
#[derive(Component, Debug, Clone, Copy)]
pub struct FlightCamera {
    pub state: FollowCamState,
}

pub fn spawn_flight_camera(mut commands: Commands, cfg: Res<FlightConfig>, rendering: Res<super::Rendering>) {
    let state = FollowCamState::behind(
        &cfg.camera,
        Pose {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        },
    );
    let transform = Transform::from_translation(state.position).with_rotation(state.rotation);
    let mut camera = commands.spawn((
        FlightCamera { state },
        transform,
        Name::new("Flight Camera"),
        StateScoped(GameState::Flight),
    ));
    if rendering.0 {
        camera.insert((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: cfg.camera.fov_y_degrees.to_radians(),
                far: 2_000.0,
                ..Default::default()
            }),
        ));
    }
}

/// Chase the player ship. Runs on the fixed step so the smoothing matches
/// the body it follows.
pub fn follow_ship(
    time: Res<Time>,
    cfg: Res<FlightConfig>,
    ships: Query<(&ShipBody, &Pilot), With<PlayerShip>>,
    mut cameras: Query<(&mut Transform, &mut FlightCamera)>,
    mut skips: Local<SkipLog>,
) {
    let target = ships
        .single()
        .map_err(|_| ControlError::MissingDependency(Dependency::CameraTarget));
    let Some((body, pilot)) = skips.record("follow_cam", target) else {
        return;
    };

    let afterburner = pilot
        .control
        .throttle()
        .is_some_and(|t| t.afterburner_active);
    let amount = FollowCamState::shake_amount(&cfg.camera, afterburner);
    let shake = if amount > 0.0 {
        let mut rng = rand::thread_rng();
        Vec3::new(
            rng.gen_range(-amount..=amount),
            rng.gen_range(-amount..=amount),
            rng.gen_range(-amount..=amount),
        )
    } else {
        Vec3::ZERO
    };

    let pose = Pose {
        position: body.position,
        rotation: body.rotation,
    };
    let yaw = pilot.control.command().yaw;
    let dt = time.delta_secs();
    for (mut transform, mut camera) in &mut cameras {
        camera.state.step(&cfg.camera, pose, yaw, shake, dt);
        transform.translation = camera.state.position;
        transform.rotation = camera.state.rotation;
    }
}
