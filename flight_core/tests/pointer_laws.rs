use flight_core::{PointerConfig, PointerSource, PointerState, Screen, Vec2};

const SCREEN: Screen = Screen::new(1280.0, 720.0);

/// Deterministic stream of deltas in roughly [-scale, scale].
fn deltas(seed: u32, count: usize, scale: f32) -> impl Iterator<Item = Vec2> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (state >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0
    };
    (0..count).map(move |_| Vec2::new(next(), next()) * scale)
}

fn inside(p: Vec2) -> bool {
    (0.0..=SCREEN.width).contains(&p.x) && (0.0..=SCREEN.height).contains(&p.y)
}

#[test]
fn pointer_never_leaves_the_screen() {
    let configs = [
        PointerConfig::default(),
        PointerConfig {
            source: PointerSource::Gamepad,
            thumbstick_speed: 900.0,
            returns_to_center: true,
            ..Default::default()
        },
        PointerConfig {
            deadzone_radius: 50.0,
            returns_to_center: true,
            instant_snap: true,
            invert_y: true,
            ..Default::default()
        },
    ];
    for cfg in configs {
        let mut p = PointerState::centered(SCREEN, cfg.clone());
        for raw in deltas(7, 2_000, 300.0) {
            let pos = p.update(SCREEN, raw, 1.0 / 60.0).unwrap();
            assert!(inside(pos), "pointer escaped to {pos:?} with {cfg:?}");
        }
    }
}

#[test]
fn non_finite_input_recovers_to_the_centre() {
    let mut p = PointerState::centered(SCREEN, PointerConfig::default());
    p.update(SCREEN, Vec2::new(f32::NAN, 3.0), 0.016).unwrap();
    assert_eq!(p.position, SCREEN.center());
    let pos = p.update(SCREEN, Vec2::new(f32::INFINITY, 0.0), 0.016).unwrap();
    assert!(inside(pos), "pos = {pos:?}");
}

#[test]
fn idle_input_without_recentering_holds_position() {
    let mut p = PointerState::centered(SCREEN, PointerConfig::default());
    p.position = Vec2::new(1000.0, 123.5);
    for _ in 0..120 {
        p.update(SCREEN, Vec2::ZERO, 1.0 / 60.0).unwrap();
    }
    assert_eq!(p.position, Vec2::new(1000.0, 123.5));
}

#[test]
fn instant_snap_lands_exactly_on_centre() {
    let cfg = PointerConfig {
        returns_to_center: true,
        instant_snap: true,
        ..Default::default()
    };
    let mut p = PointerState::centered(SCREEN, cfg);
    p.position = Vec2::new(1200.0, 40.0);
    p.update(SCREEN, Vec2::ZERO, 1.0 / 60.0).unwrap();
    assert_eq!(p.position, Vec2::new(640.0, 360.0));
}

#[test]
fn recentering_drifts_but_stays_put_inside_the_deadzone() {
    let cfg = PointerConfig {
        returns_to_center: true,
        deadzone_radius: 40.0,
        center_speed: 5.0,
        ..Default::default()
    };
    let mut p = PointerState::centered(SCREEN, cfg);

    p.position = Vec2::new(660.0, 350.0);
    p.update(SCREEN, Vec2::ZERO, 0.02).unwrap();
    assert_eq!(p.position, Vec2::new(660.0, 350.0), "inside the deadzone nothing pulls");

    p.position = Vec2::new(1040.0, 360.0);
    p.update(SCREEN, Vec2::ZERO, 0.02).unwrap();
    // One step of factor 0.1 toward x = 640.
    assert!((p.position.x - 1000.0).abs() < 1e-3, "x = {}", p.position.x);
}

#[test]
fn gamepad_moves_pointer_with_cubic_response() {
    let cfg = PointerConfig {
        source: PointerSource::Gamepad,
        thumbstick_speed: 100.0,
        ..Default::default()
    };
    let mut p = PointerState::centered(SCREEN, cfg);
    p.update(SCREEN, Vec2::new(0.5, 0.0), 0.016).unwrap();
    assert!((p.position.x - 652.5).abs() < 1e-4, "x = {}", p.position.x);
}
