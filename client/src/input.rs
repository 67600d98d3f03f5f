use std::collections::{HashMap, HashSet};

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use flight_core::{Axis, Button};

use crate::config::{FlightConfig, InputBindings};

/// Axis and button readings for the current frame, in the terms the
/// controllers use. Headless apps write this directly.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    /// Keys are the axes this session supports.
    pub axes: HashMap<Axis, f32>,
    pub held: HashSet<Button>,
    /// Pressed this frame; cleared at the end of every frame.
    pub fresh: HashSet<Button>,
}

impl InputState {
    pub fn from_bindings(bindings: &InputBindings) -> Self {
        let mut axes = HashMap::new();
        axes.insert(Axis::MouseX, 0.0);
        axes.insert(Axis::MouseY, 0.0);
        if bindings.gamepad {
            axes.insert(Axis::Horizontal, 0.0);
            axes.insert(Axis::Vertical, 0.0);
        }
        if bindings.thrust {
            axes.insert(Axis::Thrust, 0.0);
        }
        if bindings.roll {
            axes.insert(Axis::Roll, 0.0);
        }
        Self {
            axes,
            ..Default::default()
        }
    }

    pub fn axis(&self, axis: Axis) -> f32 {
        self.axes.get(&axis).copied().unwrap_or(0.0)
    }

    /// Write a reading; ignored for unsupported axes.
    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        if let Some(slot) = self.axes.get_mut(&axis) {
            *slot = value;
        }
    }

    pub fn press(&mut self, button: Button) {
        if self.held.insert(button) {
            self.fresh.insert(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
        self.fresh.remove(&button);
    }
}

fn key_axis(keys: &ButtonInput<KeyCode>, positive: KeyCode, negative: KeyCode) -> f32 {
    match (keys.pressed(positive), keys.pressed(negative)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

const KEY_BUTTONS: [(KeyCode, Button); 9] = [
    (KeyCode::F10, Button::Quit),
    (KeyCode::Escape, Button::ReleaseCursor),
    (KeyCode::KeyC, Button::CaptureCursor),
    (KeyCode::ArrowUp, Button::PitchUp),
    (KeyCode::ArrowDown, Button::PitchDown),
    (KeyCode::ArrowLeft, Button::YawLeft),
    (KeyCode::ArrowRight, Button::YawRight),
    (KeyCode::KeyA, Button::RollLeft),
    (KeyCode::KeyD, Button::RollRight),
];

/// Sample keyboard, mouse and the first gamepad into [`InputState`].
pub fn gather_input(
    cfg: Res<FlightConfig>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    gamepads: Query<&Gamepad>,
    mut state: ResMut<InputState>,
) {
    let mut delta = Vec2::ZERO;
    for ev in mouse_motion.read() {
        delta += ev.delta;
    }
    // Window y grows downward; the pointer is y-up.
    let scale = cfg.input.mouse_axis_scale;
    state.set_axis(Axis::MouseX, delta.x * scale);
    state.set_axis(Axis::MouseY, -delta.y * scale);

    let pad = gamepads.iter().next();
    let stick = |axis| pad.and_then(|p| p.get(axis)).unwrap_or(0.0);

    let thrust = key_axis(&keys, KeyCode::KeyW, KeyCode::KeyS) + stick(GamepadAxis::RightStickY);
    let roll = key_axis(&keys, KeyCode::KeyE, KeyCode::KeyQ) + stick(GamepadAxis::RightStickX);
    state.set_axis(Axis::Thrust, thrust.clamp(-1.0, 1.0));
    state.set_axis(Axis::Roll, roll.clamp(-1.0, 1.0));
    state.set_axis(Axis::Horizontal, stick(GamepadAxis::LeftStickX));
    state.set_axis(Axis::Vertical, stick(GamepadAxis::LeftStickY));

    let mut held = HashSet::new();
    let mut fresh = HashSet::new();
    for (key, button) in KEY_BUTTONS {
        if keys.pressed(key) {
            held.insert(button);
        }
        if keys.just_pressed(key) {
            fresh.insert(button);
        }
    }
    let fire_pad = pad.is_some_and(|p| p.pressed(GamepadButton::South));
    let fire_pad_fresh = pad.is_some_and(|p| p.just_pressed(GamepadButton::South));
    if mouse_buttons.pressed(MouseButton::Left) || fire_pad {
        held.insert(Button::Fire);
    }
    if mouse_buttons.just_pressed(MouseButton::Left) || fire_pad_fresh {
        fresh.insert(Button::Fire);
    }
    state.held = held;
    state.fresh = fresh;
}

pub fn end_input_frame(mut state: ResMut<InputState>) {
    state.fresh.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_bindings_are_unsupported_axes() {
        let bindings = InputBindings {
            roll: false,
            gamepad: false,
            ..Default::default()
        };
        let mut state = InputState::from_bindings(&bindings);
        assert!(state.axes.contains_key(&Axis::Thrust));
        assert!(!state.axes.contains_key(&Axis::Roll));
        assert!(!state.axes.contains_key(&Axis::Horizontal));

        state.set_axis(Axis::Roll, 1.0);
        assert_eq!(state.axis(Axis::Roll), 0.0);
        assert!(!state.axes.contains_key(&Axis::Roll));
    }

    #[test]
    fn press_marks_fresh_once() {
        let mut state = InputState::default();
        state.press(Button::Fire);
        assert!(state.fresh.contains(&Button::Fire));
        state.fresh.clear();
        state.press(Button::Fire);
        assert!(!state.fresh.contains(&Button::Fire));
        state.release(Button::Fire);
        assert!(!state.held.contains(&Button::Fire));
    }
}
