use std::fmt;

use serde::{Deserialize, Serialize};

/// Analog axes a host may expose. Not every host has every axis; see
/// `FlightHost::has_axis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Mouse motion this frame, device units, +X right.
    MouseX,
    /// Mouse motion this frame, device units, +Y up.
    MouseY,
    /// Stick deflection in [-1, 1], +X right.
    Horizontal,
    /// Stick deflection in [-1, 1], +Y up.
    Vertical,
    /// Signed thrust in [-1, 1]: positive = afterburner, negative = brake.
    Thrust,
    /// Signed roll in [-1, 1].
    Roll,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::MouseX => "Mouse X",
            Axis::MouseY => "Mouse Y",
            Axis::Horizontal => "Horizontal",
            Axis::Vertical => "Vertical",
            Axis::Thrust => "Thrust",
            Axis::Roll => "Roll",
        };
        f.write_str(name)
    }
}

/// Discrete buttons the controllers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Fire,
    Quit,
    ReleaseCursor,
    CaptureCursor,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}
