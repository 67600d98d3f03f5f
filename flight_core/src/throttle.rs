use crate::math::{lerp, step_factor};
use crate::{ShipConfig, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThrottleMode {
    #[default]
    Cruise,
    Afterburner,
    Brake,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThrottleOutput {
    pub magnitude: f32,
    pub afterburner_active: bool,
    pub brake_active: bool,
}

/// Forward speed memory of one ship.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThrottleState {
    pub magnitude: f32,
    pub mode: ThrottleMode,
}

impl ThrottleState {
    pub fn new(magnitude: f32) -> Self {
        Self {
            magnitude,
            mode: ThrottleMode::Cruise,
        }
    }

    /// Blend the speed toward the preset selected by `thrust_axis`.
    pub fn update(&mut self, cfg: &ShipConfig, thrust_axis: f32, dt: f32) -> ThrottleOutput {
        let (mode, target) = if thrust_axis > 0.0 {
            (ThrottleMode::Afterburner, cfg.afterburner_speed)
        } else if thrust_axis < 0.0 {
            (ThrottleMode::Brake, cfg.brake_speed)
        } else {
            (ThrottleMode::Cruise, cfg.cruise_speed)
        };
        self.mode = mode;
        self.magnitude = lerp(self.magnitude, target, step_factor(cfg.thrust_transition_speed, dt));
        self.output()
    }

    pub fn output(&self) -> ThrottleOutput {
        ThrottleOutput {
            magnitude: self.magnitude,
            afterburner_active: self.mode == ThrottleMode::Afterburner,
            brake_active: self.mode == ThrottleMode::Brake,
        }
    }

    /// Velocity override for a body facing `forward` (unit length).
    pub fn velocity(&self, forward: Vec3) -> Vec3 {
        forward * self.magnitude
    }
}

/// Throttle gauge value in percent, 0 at full brake and 100 at full
/// afterburner. Halves round to even.
pub fn throttle_percent(thrust_axis: f32) -> i32 {
    let axis = if thrust_axis.is_nan() { 0.0 } else { thrust_axis.clamp(-1.0, 1.0) };
    ((axis + 1.0) / 2.0 * 100.0).round_ties_even() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship_specs::presets;

    #[test]
    fn neutral_axis_returns_to_cruise() {
        let cfg = presets::interceptor();
        let mut t = ThrottleState::new(40.0);
        t.mode = ThrottleMode::Afterburner;
        let out = t.update(&cfg, 0.0, 1.0);
        assert_eq!(out.magnitude, cfg.cruise_speed);
        assert!(!out.afterburner_active && !out.brake_active);
        assert_eq!(t.mode, ThrottleMode::Cruise);
    }

    #[test]
    fn zero_dt_holds_speed() {
        let cfg = presets::interceptor();
        let mut t = ThrottleState::new(12.0);
        let out = t.update(&cfg, 1.0, 0.0);
        assert_eq!(out.magnitude, 12.0);
        assert!(out.afterburner_active);
    }

    #[test]
    fn percent_maps_axis_range() {
        assert_eq!(throttle_percent(-1.0), 0);
        assert_eq!(throttle_percent(0.0), 50);
        assert_eq!(throttle_percent(1.0), 100);
        assert_eq!(throttle_percent(3.0), 100);
        // Exact halves round to the even neighbour.
        assert_eq!(throttle_percent(-0.75), 12);
        assert_eq!(throttle_percent(-0.25), 38);
        assert_eq!(throttle_percent(f32::NAN), 50);
    }
}
