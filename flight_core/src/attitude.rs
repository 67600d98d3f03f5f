use crate::math::step_factor;
use crate::pointer::PointerOffsets;
use crate::{DescentGains, EulerRot, Quat, ShipConfig, TorqueMapping, Vec3};

/// Angular speed (rad/s) below which an idle command's own axis is stopped.
/// The axis is the torque component that command drives, measured in the
/// mapping's torque frame.
pub const DEAD_BAND: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttitudeCommand {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Whether the player drove each axis this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisActivity {
    pub pitch: bool,
    pub yaw: bool,
    pub roll: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TorqueFrame {
    #[default]
    Body,
    World,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Torque {
    pub frame: TorqueFrame,
    pub value: Vec3,
}

/// Held keys for the six digital attitude directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitalAxes {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttitudeOutput {
    pub command: AttitudeCommand,
    pub activity: AxisActivity,
    pub torque: Torque,
    /// World-frame angular velocity with idle, near-still axes zeroed.
    pub angular_velocity: Vec3,
}

/// Pointer offsets and roll axis to a raw command.
///
/// `roll_axis` is `None` when the host has no roll axis; roll then stays zero.
pub fn pointer_command(
    cfg: &ShipConfig,
    deadzone: f32,
    offsets: PointerOffsets,
    roll_axis: Option<f32>,
) -> (AttitudeCommand, AxisActivity) {
    let limit = (cfg.screen_clamp + deadzone.max(0.0)).max(0.0);
    let pitch = offsets.from_vertical.clamp(-limit, limit) * cfg.pitch_yaw_strength;
    let yaw = offsets.from_horizontal.clamp(-limit, limit) * cfg.pitch_yaw_strength;
    let roll_in = roll_axis.unwrap_or(0.0);
    // Stick/keyboard roll axes are wound the opposite way to body roll.
    let roll = roll_in * -cfg.roll_speed_modifier;

    let activity = AxisActivity {
        pitch: offsets.from_vertical != 0.0,
        yaw: offsets.from_horizontal != 0.0,
        roll: roll_in != 0.0,
    };
    (AttitudeCommand { pitch, yaw, roll }, activity)
}

/// Held keys to a command. When both keys of a pair are held, up / left /
/// roll-left wins.
pub fn digital_command(keys: DigitalAxes, gains: &DescentGains) -> (AttitudeCommand, AxisActivity) {
    let k = gains.key_deflection;
    let pick = |first: bool, first_value: f32, second: bool| {
        if first {
            (first_value, true)
        } else if second {
            (-first_value, true)
        } else {
            (0.0, false)
        }
    };
    let (pitch, pitch_on) = pick(keys.pitch_up, k, keys.pitch_down);
    let (yaw, yaw_on) = pick(keys.yaw_left, -k, keys.yaw_right);
    let (roll, roll_on) = pick(keys.roll_left, k, keys.roll_right);
    (
        AttitudeCommand { pitch, yaw, roll },
        AxisActivity {
            pitch: pitch_on,
            yaw: yaw_on,
            roll: roll_on,
        },
    )
}

/// Torque frame a mapping applies its vector in.
pub fn torque_frame(mapping: TorqueMapping) -> TorqueFrame {
    match mapping {
        TorqueMapping::FlightSim | TorqueMapping::Descent => TorqueFrame::Body,
        TorqueMapping::FlightSimWorld => TorqueFrame::World,
    }
}

/// Torque component index driven by `[pitch, yaw, roll]` under `mapping`.
pub fn driven_components(mapping: TorqueMapping) -> [usize; 3] {
    match mapping {
        TorqueMapping::FlightSim | TorqueMapping::FlightSimWorld => [0, 1, 2],
        TorqueMapping::Descent => [1, 2, 0],
    }
}

/// Stop residual drift on axes the player let go of.
///
/// `angular_velocity` is world-frame and is returned world-frame; each idle
/// command is checked against the component its torque drives, taken in the
/// mapping's frame (body frames use `body_rotation`).
pub fn apply_dead_band(
    mapping: TorqueMapping,
    mut command: AttitudeCommand,
    activity: AxisActivity,
    angular_velocity: Vec3,
    body_rotation: Quat,
) -> (AttitudeCommand, Vec3) {
    let to_frame = match torque_frame(mapping) {
        TorqueFrame::Body => body_rotation.inverse(),
        TorqueFrame::World => Quat::IDENTITY,
    };
    let mut w = to_frame * angular_velocity;
    let [pitch_i, yaw_i, roll_i] = driven_components(mapping);
    let mut stopped = false;
    for (active, value, i) in [
        (activity.pitch, &mut command.pitch, pitch_i),
        (activity.yaw, &mut command.yaw, yaw_i),
        (activity.roll, &mut command.roll, roll_i),
    ] {
        if !active && w[i].abs() < DEAD_BAND {
            *value = 0.0;
            w[i] = 0.0;
            stopped = true;
        }
    }
    if !stopped {
        return (command, angular_velocity);
    }
    (command, to_frame.inverse() * w)
}

pub fn torque(cfg: &ShipConfig, mapping: TorqueMapping, command: AttitudeCommand, dt: f32) -> Torque {
    match mapping {
        TorqueMapping::Descent => {
            let g = &cfg.descent;
            let roll = command.roll * g.roll_sensitivity;
            let pitch = command.pitch * g.pitch_sensitivity;
            let yaw = command.yaw * g.yaw_sensitivity;
            Torque {
                frame: TorqueFrame::Body,
                value: Vec3::new(roll * g.roll_max, pitch * g.pitch_max, yaw * g.yaw_max) * dt,
            }
        }
        TorqueMapping::FlightSim | TorqueMapping::FlightSimWorld => {
            let turn = cfg.turn_speed;
            // Forward is -Z: negative pitch lifts the nose, positive yaw turns right.
            Torque {
                frame: torque_frame(mapping),
                value: Vec3::new(
                    -command.pitch * turn,
                    -command.yaw * turn,
                    command.roll * turn * (cfg.roll_speed_modifier / 2.0),
                ) * dt,
            }
        }
    }
}

/// Full pointer-driven step: command, dead band, torque under `cfg.torque_mapping`.
pub fn compute(
    cfg: &ShipConfig,
    deadzone: f32,
    offsets: PointerOffsets,
    roll_axis: Option<f32>,
    angular_velocity: Vec3,
    body_rotation: Quat,
    dt: f32,
) -> AttitudeOutput {
    let mapping = cfg.torque_mapping;
    let (raw, activity) = pointer_command(cfg, deadzone, offsets, roll_axis);
    let (command, angular_velocity) =
        apply_dead_band(mapping, raw, activity, angular_velocity, body_rotation);
    AttitudeOutput {
        command,
        activity,
        torque: torque(cfg, mapping, command, dt),
        angular_velocity,
    }
}

/// Bank target for the visual model: the body's rotation with its Euler roll
/// offset by the clamped, yaw-proportional bank angle (degrees in config).
pub fn bank_target(cfg: &ShipConfig, body_rotation: Quat, yaw: f32, dt: f32) -> Quat {
    let clamp = cfg.bank_angle_clamp.abs();
    let delta_deg =
        (-yaw * cfg.turn_speed * dt * cfg.bank_rotation_multiplier).clamp(-clamp, clamp);
    let (y, x, z) = body_rotation.to_euler(EulerRot::YXZ);
    Quat::from_euler(EulerRot::YXZ, y, x, z + delta_deg.to_radians())
}

/// One banking step of the visual model toward [`bank_target`].
pub fn bank_rotation(cfg: &ShipConfig, body_rotation: Quat, visual_rotation: Quat, yaw: f32, dt: f32) -> Quat {
    let target = bank_target(cfg, body_rotation, yaw, dt);
    visual_rotation
        .slerp(target, step_factor(cfg.bank_rotation_speed, dt))
        .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship_specs::presets;

    #[test]
    fn digital_pairs_prefer_first_key() {
        let gains = DescentGains::default();
        let keys = DigitalAxes {
            pitch_up: true,
            pitch_down: true,
            yaw_left: true,
            yaw_right: true,
            roll_right: true,
            ..Default::default()
        };
        let (cmd, act) = digital_command(keys, &gains);
        assert_eq!(cmd.pitch, 0.75);
        assert_eq!(cmd.yaw, -0.75);
        assert_eq!(cmd.roll, -0.75);
        assert!(act.pitch && act.yaw && act.roll);
    }

    #[test]
    fn roll_axis_is_inverted_and_scaled() {
        let cfg = presets::interceptor();
        let (cmd, act) = pointer_command(&cfg, 0.0, PointerOffsets::default(), Some(0.5));
        assert_eq!(cmd.roll, -3.5);
        assert!(act.roll && !act.pitch && !act.yaw);
        let (cmd, act) = pointer_command(&cfg, 0.0, PointerOffsets::default(), None);
        assert_eq!(cmd.roll, 0.0);
        assert!(!act.roll);
    }

    #[test]
    fn active_axes_keep_slow_spin() {
        let cmd = AttitudeCommand { pitch: 1.0, yaw: 1.0, roll: 1.0 };
        let act = AxisActivity { pitch: true, yaw: false, roll: true };
        let w = Vec3::new(0.001, 0.002, 0.5);
        let (out, w_out) = apply_dead_band(TorqueMapping::Descent, cmd, act, w, Quat::IDENTITY);
        assert_eq!(out, cmd);
        assert_eq!(w_out, w);
    }

    #[test]
    fn zero_yaw_bank_target_is_body_rotation() {
        let cfg = presets::interceptor();
        let body = Quat::from_rotation_y(0.4);
        let target = bank_target(&cfg, body, 0.0, 0.02);
        assert!(target.angle_between(body) < 1e-4);
    }

    #[test]
    fn bank_angle_respects_clamp() {
        let cfg = ShipConfig { bank_angle_clamp: 10.0, ..presets::interceptor() };
        let target = bank_target(&cfg, Quat::IDENTITY, 1.0e6, 0.02);
        let (_, _, z) = target.to_euler(EulerRot::YXZ);
        assert!((z + 10f32.to_radians()).abs() < 1e-4, "z = {z}");
    }
}
