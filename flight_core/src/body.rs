use serde::{Deserialize, Serialize};

use crate::attitude::{Torque, TorqueFrame};
use crate::{Quat, Vec3};

/// Mass properties for hosts that integrate bodies themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub mass: f32,
    /// Principal moments, applied per world axis.
    pub inertia: Vec3,
    /// Per-second angular velocity decay.
    pub angular_drag: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            inertia: Vec3::ONE,
            angular_drag: 0.05,
        }
    }
}

/// Rigid body as the controllers see it. Velocities and the torque
/// accumulator are world-frame; body forward is local -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBodyState {
    pub position: Vec3,
    pub rotation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    pub torque: Vec3,
}

impl Default for RigidBodyState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            torque: Vec3::ZERO,
        }
    }
}

impl RigidBodyState {
    pub fn at(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Accumulate torque for the next integration step.
    pub fn add_torque(&mut self, torque: Torque) {
        self.torque += match torque.frame {
            TorqueFrame::Body => self.rotation * torque.value,
            TorqueFrame::World => torque.value,
        };
    }

    /// Semi-implicit Euler step; clears the torque accumulator.
    pub fn integrate(&mut self, cfg: &BodyConfig, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let inertia = cfg.inertia.max(Vec3::splat(1e-4));
        self.angular_velocity += self.torque / inertia * dt;
        self.angular_velocity *= 1.0 / (1.0 + cfg.angular_drag.max(0.0) * dt);
        let spin = Quat::from_scaled_axis(self.angular_velocity * dt);
        self.rotation = (spin * self.rotation).normalize();
        self.position += self.linear_velocity * dt;
        self.torque = Vec3::ZERO;
    }
}
