use serde::{Deserialize, Serialize};

/// How attitude commands are turned into torque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TorqueMapping {
    /// Body-relative `(-pitch, -yaw, roll · roll_speed_modifier / 2) · turn_speed · dt`.
    #[default]
    FlightSim,
    /// The `FlightSim` vector applied on the world axes. Only steers as
    /// expected while the ship is near its starting orientation.
    FlightSimWorld,
    /// Body-relative `(roll · roll_max, pitch · pitch_max, yaw · yaw_max) · dt`,
    /// each command first scaled by its axis sensitivity.
    Descent,
}

/// Gains for the key-steered controller and the `Descent` torque mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescentGains {
    pub pitch_sensitivity: f32,
    pub yaw_sensitivity: f32,
    pub roll_sensitivity: f32,
    pub pitch_max: f32,
    pub yaw_max: f32,
    pub roll_max: f32,
    /// Axis value produced by a held key.
    pub key_deflection: f32,
}

impl Default for DescentGains {
    fn default() -> Self {
        Self {
            pitch_sensitivity: 1.0,
            yaw_sensitivity: 1.0,
            roll_sensitivity: 1.0,
            pitch_max: 45.0,
            yaw_max: 45.0,
            roll_max: 45.0,
            key_deflection: 0.75,
        }
    }
}

/// Static tunables for one ship hull. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    // Speeds
    pub cruise_speed: f32,
    pub afterburner_speed: f32,
    pub brake_speed: f32,
    /// Per-second blend rate toward the active speed preset.
    pub thrust_transition_speed: f32,
    // Turning
    pub turn_speed: f32,
    pub roll_speed_modifier: f32,
    pub pitch_yaw_strength: f32,
    /// Pointer offset (px) beyond which pitch/yaw input saturates.
    pub screen_clamp: f32,
    pub torque_mapping: TorqueMapping,
    pub descent: DescentGains,
    // Banking (visual model only)
    pub use_banking: bool,
    /// Degrees.
    pub bank_angle_clamp: f32,
    pub bank_rotation_speed: f32,
    pub bank_rotation_multiplier: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        presets::interceptor()
    }
}

pub mod presets {
    use super::*;

    /// Pointer-steered fighter with the body-relative flight-sim mapping.
    pub fn interceptor() -> ShipConfig {
        ShipConfig {
            cruise_speed: 20.0,
            afterburner_speed: 40.0,
            brake_speed: 4.0,
            thrust_transition_speed: 5.0,
            turn_speed: 15.0,
            roll_speed_modifier: 7.0,
            pitch_yaw_strength: 0.5,
            screen_clamp: 500.0,
            torque_mapping: TorqueMapping::FlightSim,
            descent: DescentGains::default(),
            use_banking: true,
            bank_angle_clamp: 360.0,
            bank_rotation_speed: 3.0,
            bank_rotation_multiplier: 1.0,
        }
    }

    /// Key-steered six-axis craft: body-relative torque, no banking.
    pub fn descent_craft() -> ShipConfig {
        ShipConfig {
            torque_mapping: TorqueMapping::Descent,
            use_banking: false,
            ..interceptor()
        }
    }
}
