use tracing::{debug, warn};

use crate::attitude::{self, AttitudeCommand};
use crate::controller::{Controller, Tick};
use crate::throttle::{throttle_percent, ThrottleOutput, ThrottleState};
use crate::weapon::{fire_solution, WeaponConfig};
use crate::{
    Axis, Button, ControlError, Dependency, FlightHost, HostRequest, PointerState, ShipConfig,
};

/// Pointer-steered ship: aim with the reticle, roll and throttle on axes,
/// bank the visual model into turns.
#[derive(Debug, Clone)]
pub struct FlightSimController {
    config: ShipConfig,
    weapon: WeaponConfig,
    throttle: ThrottleState,
    command: AttitudeCommand,
    thrust_axis: bool,
    roll_axis: bool,
}

impl FlightSimController {
    pub fn new(config: ShipConfig, weapon: WeaponConfig) -> Self {
        Self {
            config,
            weapon,
            throttle: ThrottleState::default(),
            command: AttitudeCommand::default(),
            thrust_axis: true,
            roll_axis: true,
        }
    }

    pub fn config(&self) -> &ShipConfig {
        &self.config
    }

    /// Command from the most recent fixed tick.
    pub fn command(&self) -> AttitudeCommand {
        self.command
    }

    pub fn throttle(&self) -> ThrottleOutput {
        self.throttle.output()
    }

    fn fire(&self, tick: &mut Tick<'_>) -> Result<(), ControlError> {
        let hardpoint = tick
            .host
            .hardpoint()
            .ok_or(ControlError::MissingDependency(Dependency::Hardpoint))?;
        if !tick.host.has_projectile_template() {
            return Err(ControlError::MissingDependency(Dependency::ProjectileTemplate));
        }
        let screen = tick.host.screen();
        screen.ensure()?;
        let ray = tick
            .host
            .screen_ray(tick.pointer.aim_point(screen))
            .ok_or(ControlError::MissingDependency(Dependency::Camera))?;
        let hit = tick.host.raycast(&ray);
        let shot = fire_solution(&self.weapon, hardpoint, ray, hit);
        debug!(position = ?shot.position, hit = hit.is_some(), "shot fired");
        tick.host.submit(HostRequest::SpawnProjectile(shot));
        Ok(())
    }
}

impl Controller for FlightSimController {
    fn name(&self) -> &'static str {
        "flight_sim"
    }

    fn on_init(&mut self, host: &mut dyn FlightHost, _pointer: &mut PointerState) {
        self.thrust_axis = host.has_axis(Axis::Thrust);
        if !self.thrust_axis {
            let err = ControlError::UnsupportedInputAxis(Axis::Thrust);
            warn!(%err, "ship will hold its current speed");
        }
        self.roll_axis = host.has_axis(Axis::Roll);
        if !self.roll_axis {
            let err = ControlError::UnsupportedInputAxis(Axis::Roll);
            warn!(%err, "ship will not roll");
        }
    }

    fn on_tick(&mut self, tick: &mut Tick<'_>) -> Result<(), ControlError> {
        if tick.host.pressed(Button::Quit) {
            tick.host.submit(HostRequest::Exit);
        }
        if tick.host.just_pressed(Button::Fire) {
            self.fire(tick)?;
        }
        Ok(())
    }

    fn on_fixed_tick(&mut self, tick: &mut Tick<'_>) -> Result<(), ControlError> {
        let dt = tick.dt;
        if tick.host.visual_rotation().is_none() {
            return Err(ControlError::MissingDependency(Dependency::VisualModel));
        }

        let screen = tick.host.screen();
        let offsets = tick.pointer.offsets(screen)?;
        let deadzone = tick.pointer.config.deadzone_radius;
        let roll = self.roll_axis.then(|| tick.host.axis(Axis::Roll));
        let thrust = self.thrust_axis.then(|| tick.host.axis(Axis::Thrust));

        let body = tick
            .host
            .body()
            .ok_or(ControlError::MissingDependency(Dependency::Body))?;

        let out = attitude::compute(
            &self.config,
            deadzone,
            offsets,
            roll,
            body.angular_velocity,
            body.rotation,
            dt,
        );
        body.angular_velocity = out.angular_velocity;
        body.add_torque(out.torque);
        self.command = out.command;

        // Speed memory follows the body so collisions and external pushes carry over.
        self.throttle.magnitude = body.linear_velocity.length();
        if let Some(axis) = thrust {
            self.throttle.update(&self.config, axis, dt);
        }
        body.linear_velocity = self.throttle.velocity(body.forward());
        let body_rotation = body.rotation;

        if let Some(axis) = thrust {
            tick.host.submit(HostRequest::ThrottleDisplay {
                axis,
                percent: throttle_percent(axis),
            });
        }

        if self.config.use_banking {
            if let Some(visual) = tick.host.visual_rotation() {
                *visual = attitude::bank_rotation(&self.config, body_rotation, *visual, self.command.yaw, dt);
            }
        }
        Ok(())
    }
}
