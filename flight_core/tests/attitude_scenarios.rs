use flight_core::attitude::{self, apply_dead_band, digital_command, pointer_command};
use flight_core::{
    presets, AttitudeCommand, AxisActivity, BodyConfig, DescentGains, DigitalAxes,
    PointerConfig, PointerOffsets, PointerState, Quat, RigidBodyState, Screen, ShipConfig,
    TorqueFrame, TorqueMapping, Vec2, Vec3,
};

const SCREEN: Screen = Screen::new(1280.0, 720.0);

#[test]
fn horizontal_offset_commands_pure_yaw() {
    let cfg = presets::interceptor();
    let mut pointer = PointerState::centered(SCREEN, PointerConfig::default());
    pointer.position = Vec2::new(640.0 + 250.0, 360.0);

    let offsets = pointer.offsets(SCREEN).unwrap();
    let (cmd, act) = pointer_command(&cfg, 0.0, offsets, Some(0.0));
    assert_eq!(cmd.yaw, 125.0);
    assert_eq!(cmd.pitch, 0.0);
    assert!(act.yaw && !act.pitch && !act.roll);
}

#[test]
fn offsets_saturate_at_screen_clamp() {
    let cfg = ShipConfig { screen_clamp: 100.0, ..presets::interceptor() };
    let mut pointer = PointerState::centered(SCREEN, PointerConfig::default());
    pointer.position = Vec2::new(1280.0, 0.0);
    let offsets = pointer.offsets(SCREEN).unwrap();
    let (cmd, _) = pointer_command(&cfg, 0.0, offsets, None);
    assert_eq!(cmd.yaw, 50.0);
    // Below centre pitches positive.
    assert_eq!(cmd.pitch, 50.0);
}

#[test]
fn slow_idle_roll_is_stopped() {
    let cfg = presets::interceptor();
    let offsets = PointerOffsets { from_vertical: 0.0, from_horizontal: 80.0 };
    // Flight-sim pairing: pitch drives x, yaw y, roll z.
    let w = Vec3::new(0.2, 0.3, 0.005);
    let out = attitude::compute(&cfg, 0.0, offsets, Some(0.0), w, Quat::IDENTITY, 0.02);
    assert_eq!(out.command.roll, 0.0);
    assert_eq!(out.angular_velocity.z, 0.0);
    // Pitch is idle but spinning fast enough to keep; yaw is driven.
    assert_eq!(out.angular_velocity.x, 0.2);
    assert_eq!(out.angular_velocity.y, 0.3);
    assert_eq!(out.command.yaw, 40.0);
}

#[test]
fn dead_band_threshold_is_strict() {
    let cmd = AttitudeCommand { pitch: 1.0, yaw: 1.0, roll: 1.0 };
    let (out, w) = apply_dead_band(
        TorqueMapping::Descent,
        cmd,
        AxisActivity::default(),
        Vec3::new(0.01, -0.009, 0.0),
        Quat::IDENTITY,
    );
    assert_eq!(out.roll, 1.0, "exactly at the threshold is kept");
    assert_eq!(w.x, 0.01);
    assert_eq!(out.pitch, 0.0);
    assert_eq!(w.y, 0.0);
    assert_eq!(out.yaw, 0.0);
}

#[test]
fn idle_roll_leaves_a_slow_pitch_rate_alone() {
    let cfg = presets::interceptor();
    let offsets = PointerOffsets { from_vertical: -2.0, from_horizontal: 0.0 };
    let out = attitude::compute(&cfg, 0.0, offsets, Some(0.0), Vec3::new(0.006, 0.0, 0.0), Quat::IDENTITY, 0.02);
    assert_eq!(out.command.pitch, -1.0);
    assert_eq!(out.angular_velocity.x, 0.006, "pitch is driven, its rate must survive");
    assert!(out.torque.value.x > 0.0);
}

#[test]
fn held_small_pitch_builds_a_rate() {
    let cfg = presets::interceptor();
    let body_cfg = BodyConfig::default();
    let offsets = PointerOffsets { from_vertical: -2.0, from_horizontal: 0.0 };
    let mut body = RigidBodyState::default();
    let mut max_pitch_rate = 0.0f32;
    for _ in 0..25 {
        let out = attitude::compute(&cfg, 0.0, offsets, Some(0.0), body.angular_velocity, body.rotation, 0.02);
        body.angular_velocity = out.angular_velocity;
        body.add_torque(out.torque);
        body.integrate(&body_cfg, 0.02);
        let local = body.rotation.inverse() * body.angular_velocity;
        max_pitch_rate = max_pitch_rate.max(local.x.abs());
    }
    assert!(max_pitch_rate > 0.05, "pitch rate never built: {max_pitch_rate}");
    assert!(body.forward().y > 0.0, "forward = {:?}", body.forward());
}

#[test]
fn pitch_stays_pitch_after_a_quarter_turn() {
    let cfg = presets::interceptor();
    let body_cfg = BodyConfig::default();
    let mut pointer = PointerState::centered(SCREEN, PointerConfig::default());
    pointer.position = Vec2::new(640.0, 360.0 + 100.0);
    let offsets = pointer.offsets(SCREEN).unwrap();

    let mut body = RigidBodyState::at(Vec3::ZERO, Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2));
    assert!((body.forward() - Vec3::X).length() < 1e-5);
    for _ in 0..10 {
        let out = attitude::compute(&cfg, 0.0, offsets, Some(0.0), body.angular_velocity, body.rotation, 0.02);
        body.angular_velocity = out.angular_velocity;
        body.add_torque(out.torque);
        body.integrate(&body_cfg, 0.02);
    }
    assert!(body.forward().y > 0.05, "nose should lift: forward = {:?}", body.forward());
    assert!(body.up().z.abs() < 1e-3, "no roll expected: up = {:?}", body.up());
}

#[test]
fn flight_sim_torque_is_body_relative_by_default() {
    let cfg = presets::interceptor();
    assert_eq!(cfg.torque_mapping, TorqueMapping::FlightSim);
    let cmd = AttitudeCommand { pitch: -10.0, yaw: 125.0, roll: -3.5 };
    let torque = attitude::torque(&cfg, TorqueMapping::FlightSim, cmd, 0.02);
    assert_eq!(torque.frame, TorqueFrame::Body);
    let expected = Vec3::new(10.0 * 15.0, -125.0 * 15.0, -3.5 * 15.0 * 3.5) * 0.02;
    assert!((torque.value - expected).length() < 1e-3, "torque = {:?}", torque.value);

    let world = attitude::torque(&cfg, TorqueMapping::FlightSimWorld, cmd, 0.02);
    assert_eq!(world.frame, TorqueFrame::World);
    assert_eq!(world.value, torque.value);
}

#[test]
fn world_frame_mapping_rolls_a_turned_ship_on_pitch() {
    // The world-axis variant is kept selectable; once turned it no longer pitches.
    let cfg = ShipConfig { torque_mapping: TorqueMapping::FlightSimWorld, ..presets::interceptor() };
    let offsets = PointerOffsets { from_vertical: -100.0, from_horizontal: 0.0 };
    let mut body = RigidBodyState::at(Vec3::ZERO, Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2));
    for _ in 0..10 {
        let out = attitude::compute(&cfg, 0.0, offsets, Some(0.0), body.angular_velocity, body.rotation, 0.02);
        body.angular_velocity = out.angular_velocity;
        body.add_torque(out.torque);
        body.integrate(&BodyConfig::default(), 0.02);
    }
    assert!(body.forward().y.abs() < 1e-3, "forward = {:?}", body.forward());
    assert!(body.up().z.abs() > 0.1, "up = {:?}", body.up());
}

#[test]
fn descent_torque_is_body_relative_roll_pitch_yaw() {
    let cfg = presets::descent_craft();
    let keys = DigitalAxes {
        roll_left: true,
        pitch_down: true,
        yaw_right: true,
        ..Default::default()
    };
    let (cmd, act) = digital_command(keys, &DescentGains::default());
    assert!(act.roll && act.pitch && act.yaw);
    let torque = attitude::torque(&cfg, cfg.torque_mapping, cmd, 0.1);
    assert_eq!(torque.frame, TorqueFrame::Body);
    let expected = Vec3::new(0.75 * 45.0, -0.75 * 45.0, 0.75 * 45.0) * 0.1;
    assert!((torque.value - expected).length() < 1e-4, "torque = {:?}", torque.value);
}

#[test]
fn descent_sensitivity_scales_each_axis() {
    let mut cfg = presets::descent_craft();
    cfg.descent.pitch_sensitivity = 0.5;
    cfg.descent.yaw_max = 10.0;
    let cmd = AttitudeCommand { pitch: 1.0, yaw: 1.0, roll: 0.0 };
    let torque = attitude::torque(&cfg, TorqueMapping::Descent, cmd, 1.0);
    assert_eq!(torque.value, Vec3::new(0.0, 22.5, 10.0));
}

#[test]
fn banking_converges_and_leaves_body_rotation_alone() {
    let cfg = presets::interceptor();
    let body = Quat::from_rotation_y(0.3);
    let target = attitude::bank_target(&cfg, body, 200.0, 0.02);
    let mut visual = body;
    for _ in 0..400 {
        visual = attitude::bank_rotation(&cfg, body, visual, 200.0, 0.02);
    }
    assert!(visual.angle_between(target) < 1e-3, "visual did not settle on the bank target");
    assert!(visual.angle_between(body) > 0.1, "expected a visible bank");
}
