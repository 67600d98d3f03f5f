use crate::attitude::{self, AttitudeCommand, DigitalAxes};
use crate::controller::{Controller, Tick};
use crate::{Button, ControlError, Dependency, FlightHost, ShipConfig};

/// Key-steered six-axis craft. Arrow keys pitch and yaw, roll on a key pair.
#[derive(Debug, Clone)]
pub struct DescentController {
    config: ShipConfig,
    command: AttitudeCommand,
}

impl DescentController {
    pub fn new(config: ShipConfig) -> Self {
        Self {
            config,
            command: AttitudeCommand::default(),
        }
    }

    pub fn command(&self) -> AttitudeCommand {
        self.command
    }
}

fn held_keys(host: &dyn FlightHost) -> DigitalAxes {
    DigitalAxes {
        pitch_up: host.pressed(Button::PitchUp),
        pitch_down: host.pressed(Button::PitchDown),
        yaw_left: host.pressed(Button::YawLeft),
        yaw_right: host.pressed(Button::YawRight),
        roll_left: host.pressed(Button::RollLeft),
        roll_right: host.pressed(Button::RollRight),
    }
}

impl Controller for DescentController {
    fn name(&self) -> &'static str {
        "descent"
    }

    fn on_fixed_tick(&mut self, tick: &mut Tick<'_>) -> Result<(), ControlError> {
        let (raw, activity) = attitude::digital_command(held_keys(&*tick.host), &self.config.descent);
        let body = tick
            .host
            .body()
            .ok_or(ControlError::MissingDependency(Dependency::Body))?;
        let mapping = self.config.torque_mapping;
        let (command, angular_velocity) =
            attitude::apply_dead_band(mapping, raw, activity, body.angular_velocity, body.rotation);
        body.angular_velocity = angular_velocity;
        body.add_torque(attitude::torque(&self.config, mapping, command, tick.dt));
        self.command = command;
        Ok(())
    }
}
