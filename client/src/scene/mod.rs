use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystem};
use bevy::prelude::*;

use crate::menu::GameState;

pub mod camera;
pub mod pointer;
pub mod setup;
pub mod ship;
pub mod weapon;

/// Whether meshes, lights and the 3D camera are spawned.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Rendering(pub bool);

/// Per-frame work before the fixed loop: input, then the pointer, then the
/// ships that read it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightSet {
    Input,
    Pointer,
    Ships,
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Rendering>()
            .init_resource::<pointer::PointerPilot>()
            .configure_sets(
                RunFixedMainLoop,
                (FlightSet::Input, FlightSet::Pointer, FlightSet::Ships)
                    .chain()
                    .in_set(RunFixedMainLoopSystem::BeforeFixedMainLoop)
                    .run_if(in_state(GameState::Flight)),
            )
            .add_systems(
                OnEnter(GameState::Flight),
                (
                    weapon::setup_projectile_template,
                    setup::setup_lighting,
                    setup::spawn_asteroid_field,
                    ship::spawn_player_ship,
                    camera::spawn_flight_camera,
                    pointer::init_pointer,
                ),
            )
            .add_systems(
                RunFixedMainLoop,
                (
                    pointer::tick_pointer.in_set(FlightSet::Pointer),
                    (ship::init_pilots, ship::tick_ships)
                        .chain()
                        .in_set(FlightSet::Ships),
                ),
            )
            .add_systems(
                FixedUpdate,
                (
                    ship::fixed_tick_ships,
                    ship::integrate_bodies,
                    ship::sync_ship_transforms,
                    camera::follow_ship,
                    weapon::move_projectiles,
                    weapon::expire_explosions,
                )
                    .chain()
                    .run_if(in_state(GameState::Flight)),
            );
    }
}
