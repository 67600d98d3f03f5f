use flight_core::{FollowCamConfig, FollowCamState, Pose, Quat, Vec3};

fn parked_target() -> Pose {
    Pose {
        position: Vec3::new(5.0, 0.0, -20.0),
        rotation: Quat::from_rotation_y(0.5),
    }
}

#[test]
fn camera_settles_behind_and_above_a_still_target() {
    let cfg = FollowCamConfig::default();
    let target = parked_target();
    let mut cam = FollowCamState {
        position: Vec3::new(40.0, 30.0, 10.0),
        rotation: Quat::IDENTITY,
    };
    for _ in 0..600 {
        cam.step(&cfg, target, 0.0, Vec3::ZERO, 0.02);
    }

    let rest = target.transform_point(Vec3::new(0.0, 3.0, 3.0));
    assert!((cam.position - rest).length() < 1e-3, "camera at {:?}", cam.position);

    let looking = cam.rotation * Vec3::NEG_Z;
    let to_target = (target.position - cam.position).normalize();
    assert!(looking.dot(to_target) > 0.9999, "looking along {looking:?}");
}

#[test]
fn behind_matches_the_settled_pose() {
    let cfg = FollowCamConfig::default();
    let target = parked_target();
    let mut cam = FollowCamState::behind(&cfg, target);
    let start = cam;
    cam.step(&cfg, target, 0.0, Vec3::ZERO, 0.02);
    assert!((cam.position - start.position).length() < 1e-4);
    assert!(cam.rotation.angle_between(start.rotation) < 1e-3);
}

#[test]
fn yaw_leads_the_camera_sideways() {
    let cfg = FollowCamConfig::default();
    let target = Pose { position: Vec3::ZERO, rotation: Quat::IDENTITY };
    let mut cam = FollowCamState::behind(&cfg, target);
    for _ in 0..600 {
        cam.step(&cfg, target, 100.0, Vec3::ZERO, 0.02);
    }
    assert!((cam.position.x - 0.5).abs() < 1e-3, "x = {}", cam.position.x);
}

#[test]
fn shake_only_with_afterburner() {
    let cfg = FollowCamConfig::default();
    assert_eq!(FollowCamState::shake_amount(&cfg, false), 0.0);
    assert_eq!(FollowCamState::shake_amount(&cfg, true), 2.0);
    let calm = FollowCamConfig { shake_on_afterburner: false, ..cfg };
    assert_eq!(FollowCamState::shake_amount(&calm, true), 0.0);
}
