//! Adapter between the ECS world and the controllers' [`FlightHost`] view.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use flight_core::weapon::AimRay;
use flight_core::{Axis, Button, FlightHost, HostRequest, Pose, RigidBodyState, Screen};
use tracing::{info, warn};

use crate::input::InputState;
use crate::menu::GameState;
use crate::scene::weapon::{spawn_projectile, ProjectileTemplate};

/// Screen size in pixels, tracked from the primary window when there is one.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ScreenSize(pub Screen);

#[derive(Resource, Debug, Clone, Copy)]
pub struct CursorState {
    pub visible: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Requests submitted by controllers this frame, applied in `Update`.
#[derive(Resource, Debug, Default)]
pub struct HostRequests(pub Vec<HostRequest>);

/// Latest throttle readout for the HUD.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ThrottleGauge {
    pub axis: f32,
    pub percent: i32,
}

impl Default for ThrottleGauge {
    fn default() -> Self {
        Self { axis: 0.0, percent: 50 }
    }
}

/// One controller's view of the world for a single call.
pub struct BevyHost<'a> {
    pub screen: Screen,
    pub input: &'a InputState,
    pub cursor: &'a mut CursorState,
    pub requests: &'a mut Vec<HostRequest>,
    pub body: Option<&'a mut RigidBodyState>,
    pub visual: Option<&'a mut Quat>,
    pub hardpoint: Option<Vec3>,
    pub projectile_template: bool,
    /// Camera pose and vertical field of view (radians).
    pub camera: Option<(Pose, f32)>,
    pub obstacles: &'a [(Vec3, f32)],
}

impl<'a> BevyHost<'a> {
    pub fn new(
        screen: Screen,
        input: &'a InputState,
        cursor: &'a mut CursorState,
        requests: &'a mut Vec<HostRequest>,
    ) -> Self {
        Self {
            screen,
            input,
            cursor,
            requests,
            body: None,
            visual: None,
            hardpoint: None,
            projectile_template: false,
            camera: None,
            obstacles: &[],
        }
    }
}

impl FlightHost for BevyHost<'_> {
    fn screen(&self) -> Screen {
        self.screen
    }

    fn has_axis(&self, axis: Axis) -> bool {
        self.input.axes.contains_key(&axis)
    }

    fn axis(&self, axis: Axis) -> f32 {
        self.input.axis(axis)
    }

    fn pressed(&self, button: Button) -> bool {
        self.input.held.contains(&button)
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.input.fresh.contains(&button)
    }

    fn cursor_visible(&self) -> bool {
        self.cursor.visible
    }

    fn body(&mut self) -> Option<&mut RigidBodyState> {
        self.body.as_deref_mut()
    }

    fn visual_rotation(&mut self) -> Option<&mut Quat> {
        self.visual.as_deref_mut()
    }

    fn hardpoint(&self) -> Option<Vec3> {
        self.hardpoint
    }

    fn has_projectile_template(&self) -> bool {
        self.projectile_template
    }

    fn screen_ray(&self, point: Vec2) -> Option<AimRay> {
        let (pose, fov_y) = self.camera?;
        pose.screen_ray(self.screen, fov_y, point)
    }

    fn raycast(&self, ray: &AimRay) -> Option<Vec3> {
        self.obstacles
            .iter()
            .filter_map(|&(center, radius)| ray.hit_sphere(center, radius))
            .min_by(f32::total_cmp)
            .map(|t| ray.at(t))
    }

    fn submit(&mut self, request: HostRequest) {
        // Cursor capture is visible to later controllers in the same frame.
        if let HostRequest::CaptureCursor(capture) = request {
            self.cursor.visible = !capture;
            return;
        }
        self.requests.push(request);
    }
}

pub fn apply_host_requests(
    mut commands: Commands,
    mut requests: ResMut<HostRequests>,
    mut gauge: ResMut<ThrottleGauge>,
    mut cursor: ResMut<CursorState>,
    template: Option<Res<ProjectileTemplate>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    for request in requests.0.drain(..) {
        match request {
            HostRequest::SpawnProjectile(shot) => match template.as_deref() {
                Some(template) => spawn_projectile(&mut commands, template, shot),
                None => warn!("projectile requested without a template"),
            },
            HostRequest::ThrottleDisplay { axis, percent } => {
                gauge.set_if_neq(ThrottleGauge { axis, percent });
            }
            HostRequest::CaptureCursor(capture) => cursor.visible = !capture,
            HostRequest::LoadScene(scene) => {
                info!(?scene, "loading scene");
                next_state.set(scene.into());
            }
            HostRequest::Exit => {
                info!("exit requested");
                exit.write(AppExit::Success);
            }
        }
    }
}

pub fn track_window_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut screen: ResMut<ScreenSize>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Screen::new(window.width(), window.height());
    if size != screen.0 {
        screen.0 = size;
    }
}

pub fn apply_cursor_grab(
    cursor: Res<CursorState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let grab_mode = if cursor.visible {
        CursorGrabMode::None
    } else {
        CursorGrabMode::Locked
    };
    // Only touch the window on a real change; it is synced to the OS when mutated.
    if window.cursor_options.visible != cursor.visible || window.cursor_options.grab_mode != grab_mode {
        window.cursor_options.visible = cursor.visible;
        window.cursor_options.grab_mode = grab_mode;
    }
}
