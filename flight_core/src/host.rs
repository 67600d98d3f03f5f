use crate::weapon::{AimRay, Shot};
use crate::{Axis, Button, Quat, RigidBodyState, Screen, Vec2, Vec3};

/// Scenes the menu can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Menu,
    Flight,
}

/// Commands a controller hands back to its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostRequest {
    SpawnProjectile(Shot),
    /// Raw thrust axis for the gauge and its percentage label.
    ThrottleDisplay { axis: f32, percent: i32 },
    /// `true` locks and hides the OS cursor.
    CaptureCursor(bool),
    LoadScene(SceneId),
    Exit,
}

/// Everything a controller reads from, or writes to, the engine hosting it.
///
/// Getters returning `Option` model references that may be unset; controllers
/// turn `None` into `ControlError::MissingDependency` and skip the frame.
pub trait FlightHost {
    fn screen(&self) -> Screen;

    /// Capability query for an input axis. Controllers call this once during
    /// `on_init` and cache the answer.
    fn has_axis(&self, axis: Axis) -> bool;

    /// Current reading; 0 for axes the host lacks.
    fn axis(&self, axis: Axis) -> f32;

    fn pressed(&self, button: Button) -> bool;

    /// Pressed since the previous render tick.
    fn just_pressed(&self, button: Button) -> bool;

    fn cursor_visible(&self) -> bool;

    fn body(&mut self) -> Option<&mut RigidBodyState>;

    /// World rotation of the visual-only ship model used for banking.
    fn visual_rotation(&mut self) -> Option<&mut Quat>;

    fn hardpoint(&self) -> Option<Vec3>;

    fn has_projectile_template(&self) -> bool;

    /// Ray from the main camera through a screen point (y-up pixels).
    fn screen_ray(&self, point: Vec2) -> Option<AimRay>;

    /// Nearest world-geometry hit along `ray`.
    fn raycast(&self, ray: &AimRay) -> Option<Vec3>;

    fn submit(&mut self, request: HostRequest);

    /// Runs after each fixed tick; hosts without a physics engine integrate here.
    fn step_physics(&mut self, _dt: f32) {}

    /// Runs after every render tick.
    fn end_frame(&mut self) {}
}
