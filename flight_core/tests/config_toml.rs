use flight_core::{
    presets, BodyConfig, FollowCamConfig, PointerConfig, PointerSource, ShipConfig, TorqueMapping,
    WeaponConfig,
};

#[test]
fn default_configs_survive_toml() {
    let ship = presets::descent_craft();
    let text = toml::to_string(&ship).unwrap();
    assert_eq!(toml::from_str::<ShipConfig>(&text).unwrap(), ship);

    let pointer = PointerConfig::default();
    let text = toml::to_string(&pointer).unwrap();
    assert_eq!(toml::from_str::<PointerConfig>(&text).unwrap(), pointer);

    let text = toml::to_string(&FollowCamConfig::default()).unwrap();
    assert_eq!(toml::from_str::<FollowCamConfig>(&text).unwrap(), FollowCamConfig::default());
}

#[test]
fn partial_tables_fill_in_defaults() {
    let ship: ShipConfig = toml::from_str(
        r#"
        turn_speed = 3.0
        torque_mapping = "descent"

        [descent]
        key_deflection = 1.0
        "#,
    )
    .unwrap();
    assert_eq!(ship.turn_speed, 3.0);
    assert_eq!(ship.torque_mapping, TorqueMapping::Descent);
    assert_eq!(ship.descent.key_deflection, 1.0);
    assert_eq!(ship.descent.pitch_max, 45.0);
    assert_eq!(ship.cruise_speed, 20.0);

    let pointer: PointerConfig = toml::from_str(r#"source = "gamepad""#).unwrap();
    assert_eq!(pointer.source, PointerSource::Gamepad);
    assert_eq!(pointer.center_speed, 5.0);

    let body: BodyConfig = toml::from_str("mass = 2.5").unwrap();
    assert_eq!(body.mass, 2.5);
    assert_eq!(body.inertia, flight_core::Vec3::ONE);

    let weapon: WeaponConfig = toml::from_str("").unwrap();
    assert_eq!(weapon, WeaponConfig::default());
}
