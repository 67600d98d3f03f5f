//! In-memory host for driving controllers without an engine.

use std::collections::{HashMap, HashSet};

use crate::camera::Pose;
use crate::weapon::AimRay;
use crate::{
    Axis, BodyConfig, Button, FlightHost, HostRequest, Quat, RigidBodyState, Screen, Vec2, Vec3,
};

/// A scripted [`FlightHost`]: tests set axes and buttons directly and read
/// back the body and every submitted request.
#[derive(Debug, Clone)]
pub struct ScriptedHost {
    pub screen: Screen,
    /// Present keys are the supported axes.
    pub axes: HashMap<Axis, f32>,
    held: HashSet<Button>,
    fresh: HashSet<Button>,
    pub cursor_visible: bool,
    pub body: Option<RigidBodyState>,
    pub body_config: BodyConfig,
    pub visual: Option<Quat>,
    pub hardpoint: Option<Vec3>,
    pub projectile_template: bool,
    pub camera: Option<Pose>,
    /// Vertical field of view of `camera`, radians.
    pub fov_y: f32,
    /// Sphere colliders for `raycast`: centre and radius.
    pub obstacles: Vec<(Vec3, f32)>,
    pub requests: Vec<HostRequest>,
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            axes: HashMap::new(),
            held: HashSet::new(),
            fresh: HashSet::new(),
            cursor_visible: true,
            body: None,
            body_config: BodyConfig::default(),
            visual: None,
            hardpoint: None,
            projectile_template: false,
            camera: None,
            fov_y: 60f32.to_radians(),
            obstacles: Vec::new(),
            requests: Vec::new(),
        }
    }
}

impl ScriptedHost {
    /// A complete ship: body, visual model, hardpoint, projectile template,
    /// camera behind the ship, and every axis bound at rest.
    pub fn ship() -> Self {
        let axes = [Axis::MouseX, Axis::MouseY, Axis::Thrust, Axis::Roll]
            .into_iter()
            .map(|a| (a, 0.0))
            .collect();
        Self {
            axes,
            body: Some(RigidBodyState::default()),
            visual: Some(Quat::IDENTITY),
            hardpoint: Some(Vec3::new(0.0, -0.5, -1.0)),
            projectile_template: true,
            camera: Some(Pose {
                position: Vec3::new(0.0, 0.0, 3.0),
                rotation: Quat::IDENTITY,
            }),
            ..Default::default()
        }
    }

    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        self.axes.insert(axis, value);
    }

    pub fn remove_axis(&mut self, axis: Axis) {
        self.axes.remove(&axis);
    }

    /// Hold `button`; it reads as just pressed until the next frame ends.
    pub fn press(&mut self, button: Button) {
        if self.held.insert(button) {
            self.fresh.insert(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
        self.fresh.remove(&button);
    }

    /// Take every request submitted so far.
    pub fn drain_requests(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl FlightHost for ScriptedHost {
    fn screen(&self) -> Screen {
        self.screen
    }

    fn has_axis(&self, axis: Axis) -> bool {
        self.axes.contains_key(&axis)
    }

    fn axis(&self, axis: Axis) -> f32 {
        self.axes.get(&axis).copied().unwrap_or(0.0)
    }

    fn pressed(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.fresh.contains(&button)
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn body(&mut self) -> Option<&mut RigidBodyState> {
        self.body.as_mut()
    }

    fn visual_rotation(&mut self) -> Option<&mut Quat> {
        self.visual.as_mut()
    }

    fn hardpoint(&self) -> Option<Vec3> {
        self.hardpoint
    }

    fn has_projectile_template(&self) -> bool {
        self.projectile_template
    }

    fn screen_ray(&self, point: Vec2) -> Option<AimRay> {
        self.camera?.screen_ray(self.screen, self.fov_y, point)
    }

    fn raycast(&self, ray: &AimRay) -> Option<Vec3> {
        self.obstacles
            .iter()
            .filter_map(|&(center, radius)| ray.hit_sphere(center, radius))
            .min_by(f32::total_cmp)
            .map(|t| ray.at(t))
    }

    fn submit(&mut self, request: HostRequest) {
        if let HostRequest::CaptureCursor(capture) = request {
            self.cursor_visible = !capture;
        }
        self.requests.push(request);
    }

    fn step_physics(&mut self, dt: f32) {
        if let Some(body) = self.body.as_mut() {
            body.integrate(&self.body_config, dt);
        }
    }

    fn end_frame(&mut self) {
        self.fresh.clear();
    }
}
