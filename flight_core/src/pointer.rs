use serde::{Deserialize, Serialize};

use crate::math::step_factor;
use crate::{ControlError, Screen, Vec2};

/// Device driving the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    #[default]
    Mouse,
    Gamepad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    pub source: PointerSource,
    /// Half-size (px) of the square around the centre that produces no steering.
    pub deadzone_radius: f32,
    /// Drift back toward the centre when outside the deadzone (use for sticks).
    pub returns_to_center: bool,
    /// With `returns_to_center`, jump straight to the centre on idle input.
    pub instant_snap: bool,
    pub center_speed: f32,
    /// Aim (and draw) at the screen centre regardless of pointer position.
    pub center_lock: bool,
    pub invert_y: bool,
    pub mouse_sensitivity: f32,
    pub thumbstick_speed: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            source: PointerSource::Mouse,
            deadzone_radius: 0.0,
            returns_to_center: false,
            instant_snap: false,
            center_speed: 5.0,
            center_lock: false,
            invert_y: false,
            mouse_sensitivity: 15.0,
            thumbstick_speed: 1.0,
        }
    }
}

impl PointerConfig {
    /// Scale applied to raw deltas for the configured source.
    pub fn sensitivity(&self) -> f32 {
        match self.source {
            PointerSource::Mouse => self.mouse_sensitivity,
            PointerSource::Gamepad => self.thumbstick_speed,
        }
    }

    /// Raw device delta to screen-space displacement.
    pub fn shape(&self, raw: Vec2) -> Vec2 {
        let raw = if self.invert_y { Vec2::new(raw.x, -raw.y) } else { raw };
        match self.source {
            PointerSource::Mouse => raw * self.sensitivity(),
            // Cubic stick response, sign preserved.
            PointerSource::Gamepad => raw * raw * raw * self.sensitivity(),
        }
    }
}

/// Signed pixel offsets of the pointer from the screen centre lines, with the
/// deadzone already subtracted. Negative when left of / above the centre.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffsets {
    /// Vertical offset; drives pitch.
    pub from_vertical: f32,
    /// Horizontal offset; drives yaw.
    pub from_horizontal: f32,
}

/// On-screen aim reticle shared by every controller in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub config: PointerConfig,
}

impl PointerState {
    pub fn centered(screen: Screen, config: PointerConfig) -> Self {
        Self { position: screen.center(), config }
    }

    pub fn recenter(&mut self, screen: Screen) {
        self.position = screen.center();
    }

    /// Advance the pointer by one frame of raw input.
    ///
    /// A degenerate screen leaves the state untouched and reports the skip.
    pub fn update(&mut self, screen: Screen, raw: Vec2, dt: f32) -> Result<Vec2, ControlError> {
        screen.ensure()?;
        let cfg = &self.config;
        let mut pos = self.position + cfg.shape(raw);

        let center = screen.center();
        if cfg.returns_to_center && !screen.deadzone(cfg.deadzone_radius).contains(pos) {
            if raw == Vec2::ZERO && cfg.instant_snap {
                pos = center;
            } else {
                pos = pos.lerp(center, step_factor(cfg.center_speed, dt.max(0.0)));
            }
        }

        if !pos.is_finite() {
            pos = center;
        }
        self.position = screen.clamp(pos);
        Ok(self.position)
    }

    /// Offsets fed to the attitude model.
    pub fn offsets(&self, screen: Screen) -> Result<PointerOffsets, ControlError> {
        screen.ensure()?;
        let dz = self.config.deadzone_radius.max(0.0);
        let center = screen.center();

        let reduce = |d: f32| if d < dz { 0.0 } else { d - dz };
        let dist_v = reduce((self.position.y - center.y).abs()).clamp(0.0, screen.height);
        let dist_h = reduce((self.position.x - center.x).abs()).clamp(0.0, screen.width);

        let from_horizontal = if self.position.x < center.x && dist_h != 0.0 {
            -dist_h
        } else {
            dist_h
        };
        let from_vertical = if self.position.y >= center.y && dist_v != 0.0 {
            -dist_v
        } else {
            dist_v
        };
        Ok(PointerOffsets {
            from_vertical,
            from_horizontal,
        })
    }

    /// Screen point weapons aim through.
    pub fn aim_point(&self, screen: Screen) -> Vec2 {
        if self.config.center_lock {
            screen.center()
        } else {
            self.position
        }
    }
}
