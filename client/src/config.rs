use std::path::Path;

use anyhow::{Context, Result};
use bevy::prelude::Resource;
use clap::ValueEnum;
use flight_core::{
    presets, BodyConfig, FollowCamConfig, PointerConfig, ShipConfig, WeaponConfig,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Which controller flies the player ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ControlScheme {
    /// Reticle steering with throttle, roll and banking.
    #[default]
    Pointer,
    /// Arrow-key pitch/yaw with A/D roll.
    Descent,
}

/// Which raw axes the input layer provides. A disabled axis is reported as
/// unsupported to the controllers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBindings {
    pub thrust: bool,
    pub roll: bool,
    pub gamepad: bool,
    /// Mouse axis units per pixel of motion.
    pub mouse_axis_scale: f32,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            thrust: true,
            roll: true,
            gamepad: true,
            mouse_axis_scale: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct FlightConfig {
    pub scheme: ControlScheme,
    /// Fixed physics rate (Hz).
    pub fixed_hz: f64,
    pub ship: ShipConfig,
    pub pointer: PointerConfig,
    pub body: BodyConfig,
    pub weapon: WeaponConfig,
    pub camera: FollowCamConfig,
    pub input: InputBindings,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            scheme: ControlScheme::Pointer,
            fixed_hz: 50.0,
            ship: presets::interceptor(),
            pointer: PointerConfig::default(),
            body: BodyConfig::default(),
            weapon: WeaponConfig::default(),
            camera: FollowCamConfig::default(),
            input: InputBindings::default(),
        }
    }
}

impl FlightConfig {
    /// Switch scheme. A stock hull follows the scheme; a customised one is kept.
    pub fn with_scheme(mut self, scheme: ControlScheme) -> Self {
        let stock = [presets::interceptor(), presets::descent_craft()];
        if stock.contains(&self.ship) {
            self.ship = match scheme {
                ControlScheme::Pointer => presets::interceptor(),
                ControlScheme::Descent => presets::descent_craft(),
            };
        }
        self.scheme = scheme;
        self
    }
}

pub fn parse_config(text: &str) -> Result<FlightConfig> {
    let cfg: FlightConfig = toml::from_str(text).context("invalid flight config")?;
    anyhow::ensure!(
        cfg.fixed_hz.is_finite() && cfg.fixed_hz > 0.0,
        "fixed_hz must be positive, got {}",
        cfg.fixed_hz
    );
    let scheme = cfg.scheme;
    Ok(cfg.with_scheme(scheme))
}

/// Read the flight config at `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<FlightConfig> {
    if !path.exists() {
        info!(path = %path.display(), "no flight config found, using defaults");
        return Ok(FlightConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_config(&text).with_context(|| format!("loading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_core::TorqueMapping;

    #[test]
    fn defaults_round_trip_through_toml() {
        let cfg = FlightConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        assert_eq!(parse_config(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, FlightConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flight.toml");
        std::fs::write(
            &path,
            r#"
            fixed_hz = 60.0

            [pointer]
            source = "gamepad"
            returns_to_center = true

            [input]
            roll = false
            "#,
        )
        .unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.fixed_hz, 60.0);
        assert!(cfg.pointer.returns_to_center);
        assert!(!cfg.input.roll);
        assert!(cfg.input.thrust);
        assert_eq!(cfg.ship, presets::interceptor());
    }

    #[test]
    fn bad_files_report_their_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "fixed_hz = \"fast\"").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"), "{err:#}");

        assert!(parse_config("fixed_hz = 0.0").is_err());
    }

    #[test]
    fn descent_scheme_swaps_in_the_descent_hull() {
        let cfg = FlightConfig::default().with_scheme(ControlScheme::Descent);
        assert_eq!(cfg.ship.torque_mapping, TorqueMapping::Descent);
        assert!(!cfg.ship.use_banking);

        let cfg = parse_config("scheme = \"descent\"").unwrap();
        assert_eq!(cfg.ship, presets::descent_craft());

        let custom = parse_config("scheme = \"descent\"\n[ship]\nturn_speed = 2.0").unwrap();
        assert_eq!(custom.ship.turn_speed, 2.0);
        assert_eq!(custom.ship.torque_mapping, TorqueMapping::FlightSim);
    }
}
