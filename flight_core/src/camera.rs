use serde::{Deserialize, Serialize};

use crate::math::{look_rotation, step_factor};
use crate::weapon::AimRay;
use crate::{Quat, Screen, Vec2, Vec3};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowCamConfig {
    pub follow_distance: f32,
    pub elevation: f32,
    /// Higher is snappier.
    pub follow_tightness: f32,
    pub rotation_tightness: f32,
    pub afterburner_shake: f32,
    /// Sideways lead per unit of yaw command. Keep small.
    pub yaw_multiplier: f32,
    pub shake_on_afterburner: bool,
    /// Vertical field of view used for rendering and aim rays.
    pub fov_y_degrees: f32,
}

impl Default for FollowCamConfig {
    fn default() -> Self {
        Self {
            follow_distance: 3.0,
            elevation: 3.0,
            follow_tightness: 5.0,
            rotation_tightness: 10.0,
            afterburner_shake: 2.0,
            yaw_multiplier: 0.005,
            shake_on_afterburner: true,
            fov_y_degrees: 60.0,
        }
    }
}

/// Position and orientation of something the camera can chase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Ray from a pinhole camera at this pose through `point` (y-up pixels).
    /// `fov_y` is the vertical field of view in radians.
    pub fn screen_ray(&self, screen: Screen, fov_y: f32, point: Vec2) -> Option<AimRay> {
        if screen.is_degenerate() {
            return None;
        }
        let ndc = point / screen.size() * 2.0 - Vec2::ONE;
        let half = (fov_y * 0.5).tan();
        let aspect = screen.width / screen.height;
        let local = Vec3::new(ndc.x * half * aspect, ndc.y * half, -1.0);
        AimRay::new(self.position, self.rotation * local)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamState {
    pub position: Vec3,
    pub rotation: Quat,
}

impl FollowCamState {
    /// Seat the camera at its resting spot behind `target`.
    pub fn behind(cfg: &FollowCamConfig, target: Pose) -> Self {
        let position = target.transform_point(Vec3::new(0.0, cfg.elevation, cfg.follow_distance));
        let rotation = look_rotation(target.position - position, target.up()).unwrap_or(target.rotation);
        Self { position, rotation }
    }

    /// Half-width of the per-axis shake offset this step.
    pub fn shake_amount(cfg: &FollowCamConfig, afterburner: bool) -> f32 {
        if afterburner && cfg.shake_on_afterburner {
            cfg.afterburner_shake
        } else {
            0.0
        }
    }

    /// Chase `target`, leading sideways by `yaw`. `shake` is a random offset
    /// within ±[`Self::shake_amount`] supplied by the host.
    pub fn step(&mut self, cfg: &FollowCamConfig, target: Pose, yaw: f32, shake: Vec3, dt: f32) {
        let desired = target.transform_point(Vec3::new(
            yaw * cfg.yaw_multiplier,
            cfg.elevation,
            cfg.follow_distance,
        ));
        // Aim from where the camera was, before it moves this step.
        let to_target = target.position - self.position;

        self.position = self.position.lerp(desired, step_factor(cfg.follow_tightness, dt));

        if let Some(look) = look_rotation(to_target + shake, target.up()) {
            self.rotation = self
                .rotation
                .slerp(look, step_factor(cfg.rotation_tightness, dt))
                .normalize();
        }
    }
}
