use bevy::ecs::system::SystemParam;
use bevy::math::primitives::Cuboid;
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;
use flight_core::{
    AttitudeCommand, BodyConfig, Controller, DescentController, FlightSimController,
    RigidBodyState, SkipLog, ThrottleOutput, Tick,
};
use tracing::debug;

use super::camera::FlightCamera;
use super::pointer::Pointer;
use super::weapon::{Collider, ProjectileTemplate};
use crate::config::{ControlScheme, FlightConfig};
use crate::host::{BevyHost, CursorState, HostRequests, ScreenSize};
use crate::input::InputState;
use crate::menu::GameState;

#[derive(Component)]
pub struct PlayerShip;

/// Physical state the controllers steer. The entity `Transform` mirrors it.
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct ShipBody(pub RigidBodyState);

#[derive(Component, Debug, Clone, Default)]
pub struct BodyParams(pub BodyConfig);

/// Separate entity carrying the rendered hull; banking rotates it alone.
#[derive(Component, Debug, Clone, Copy)]
pub struct VisualModel(pub Entity);

#[derive(Component)]
pub struct ShipVisual;

/// Muzzle position in ship-local space.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hardpoint {
    pub offset: Vec3,
}

#[derive(Debug, Clone)]
pub enum ShipControl {
    FlightSim(FlightSimController),
    Descent(DescentController),
}

impl ShipControl {
    pub fn from_config(cfg: &FlightConfig) -> Self {
        match cfg.scheme {
            ControlScheme::Pointer => Self::FlightSim(FlightSimController::new(
                cfg.ship.clone(),
                cfg.weapon.clone(),
            )),
            ControlScheme::Descent => Self::Descent(DescentController::new(cfg.ship.clone())),
        }
    }

    pub fn controller_mut(&mut self) -> &mut dyn Controller {
        match self {
            Self::FlightSim(c) => c,
            Self::Descent(c) => c,
        }
    }

    pub fn command(&self) -> AttitudeCommand {
        match self {
            Self::FlightSim(c) => c.command(),
            Self::Descent(c) => c.command(),
        }
    }

    pub fn throttle(&self) -> Option<ThrottleOutput> {
        match self {
            Self::FlightSim(c) => Some(c.throttle()),
            Self::Descent(_) => None,
        }
    }

    /// Whether the controller owns the visual model's rotation.
    pub fn banks(&self) -> bool {
        match self {
            Self::FlightSim(c) => c.config().use_banking,
            Self::Descent(_) => false,
        }
    }
}

#[derive(Component, Debug)]
pub struct Pilot {
    pub control: ShipControl,
    initialized: bool,
    tick_skips: SkipLog,
    fixed_skips: SkipLog,
}

impl Pilot {
    pub fn new(control: ShipControl) -> Self {
        Self {
            control,
            initialized: false,
            tick_skips: SkipLog::default(),
            fixed_skips: SkipLog::default(),
        }
    }

    /// Calls skipped in the current failure streaks.
    pub fn skipped(&self) -> u64 {
        self.tick_skips.skipped() + self.fixed_skips.skipped()
    }
}

/// Resources every controller call needs to build its [`BevyHost`].
#[derive(SystemParam)]
pub struct HostContext<'w> {
    screen: Res<'w, ScreenSize>,
    input: Res<'w, InputState>,
    cursor: ResMut<'w, CursorState>,
    requests: ResMut<'w, HostRequests>,
}

impl HostContext<'_> {
    pub fn host(&mut self) -> BevyHost<'_> {
        BevyHost::new(self.screen.0, &self.input, &mut self.cursor, &mut self.requests.0)
    }
}

pub fn spawn_player_ship(
    mut commands: Commands,
    cfg: Res<FlightConfig>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let visual = commands
        .spawn((
            ShipVisual,
            Transform::default(),
            Name::new("Ship Model"),
            StateScoped(GameState::Flight),
        ))
        .id();
    if let (Some(mut meshes), Some(mut materials)) = (meshes, materials) {
        let hull = meshes.add(Mesh::from(Cuboid::new(1.6, 0.3, 2.4)));
        let paint = materials.add(StandardMaterial {
            base_color: Color::srgb(0.75, 0.78, 0.82),
            perceptual_roughness: 0.5,
            metallic: 0.6,
            ..Default::default()
        });
        commands
            .entity(visual)
            .insert((Mesh3d(hull), MeshMaterial3d(paint)));
    }

    commands.spawn((
        PlayerShip,
        Pilot::new(ShipControl::from_config(&cfg)),
        ShipBody::default(),
        BodyParams(cfg.body.clone()),
        VisualModel(visual),
        Hardpoint {
            offset: Vec3::new(0.0, -0.3, -1.4),
        },
        Transform::default(),
        Name::new("Player Ship"),
        StateScoped(GameState::Flight),
    ));
}

pub fn init_pilots(
    mut ctx: HostContext,
    mut pointer: ResMut<Pointer>,
    mut ships: Query<(&mut Pilot, &mut ShipBody)>,
) {
    for (mut pilot, mut body) in &mut ships {
        if pilot.initialized {
            continue;
        }
        let mut host = ctx.host();
        host.body = Some(&mut body.0);
        let controller = pilot.control.controller_mut();
        controller.on_init(&mut host, &mut pointer.0);
        debug!(controller = controller.name(), "pilot initialised");
        pilot.initialized = true;
    }
}

/// Per-frame controller work: firing and quit handling.
#[allow(clippy::too_many_arguments)]
pub fn tick_ships(
    time: Res<Time>,
    cfg: Res<FlightConfig>,
    mut ctx: HostContext,
    mut pointer: ResMut<Pointer>,
    template: Option<Res<ProjectileTemplate>>,
    cameras: Query<(&Transform, &FlightCamera)>,
    colliders: Query<(&Transform, &Collider)>,
    mut ships: Query<(&mut Pilot, &mut ShipBody, Option<&Hardpoint>)>,
) {
    let dt = time.delta_secs();
    let camera = cameras.iter().next().map(|(t, _)| {
        let pose = flight_core::Pose {
            position: t.translation,
            rotation: t.rotation,
        };
        (pose, cfg.camera.fov_y_degrees.to_radians())
    });
    let obstacles: Vec<(Vec3, f32)> = colliders
        .iter()
        .map(|(t, c)| (t.translation, c.radius))
        .collect();

    for (mut pilot, mut body, hardpoint) in &mut ships {
        let mut host = ctx.host();
        host.hardpoint = hardpoint.map(|h| body.position + body.rotation * h.offset);
        host.body = Some(&mut body.0);
        host.projectile_template = template.is_some();
        host.camera = camera;
        host.obstacles = &obstacles;

        let Pilot { control, tick_skips, .. } = &mut *pilot;
        let controller = control.controller_mut();
        let result = controller.on_tick(&mut Tick {
            dt,
            pointer: &mut pointer.0,
            host: &mut host,
        });
        tick_skips.record(controller.name(), result);
    }
}

pub fn fixed_tick_ships(
    time: Res<Time>,
    mut ctx: HostContext,
    mut pointer: ResMut<Pointer>,
    mut ships: Query<(&mut Pilot, &mut ShipBody, Option<&VisualModel>)>,
    mut visuals: Query<&mut Transform, With<ShipVisual>>,
) {
    let dt = time.delta_secs();
    for (mut pilot, mut body, visual) in &mut ships {
        let mut host = ctx.host();
        host.body = Some(&mut body.0);
        host.visual = visual
            .and_then(|v| visuals.get_mut(v.0).ok())
            .map(|t| &mut t.into_inner().rotation);

        let Pilot { control, fixed_skips, .. } = &mut *pilot;
        let controller = control.controller_mut();
        let result = controller.on_fixed_tick(&mut Tick {
            dt,
            pointer: &mut pointer.0,
            host: &mut host,
        });
        fixed_skips.record(controller.name(), result);
    }
}

pub fn integrate_bodies(time: Res<Time>, mut bodies: Query<(&mut ShipBody, &BodyParams)>) {
    let dt = time.delta_secs();
    for (mut body, params) in &mut bodies {
        body.integrate(&params.0, dt);
    }
}

/// Mirror bodies onto transforms; the visual model follows the body's
/// position, and its rotation too unless the controller banks it.
#[allow(clippy::type_complexity)]
pub fn sync_ship_transforms(
    mut ships: Query<(&ShipBody, &Pilot, Option<&VisualModel>, &mut Transform), Without<ShipVisual>>,
    mut visuals: Query<&mut Transform, With<ShipVisual>>,
) {
    for (body, pilot, visual, mut transform) in &mut ships {
        transform.translation = body.position;
        transform.rotation = body.rotation;
        let Some(mut model) = visual.and_then(|v| visuals.get_mut(v.0).ok()) else {
            continue;
        };
        model.translation = body.position;
        if !pilot.control.banks() {
            model.rotation = body.rotation;
        }
    }
}
