use serde::{Deserialize, Serialize};

use crate::math::look_rotation;
use crate::{Quat, Vec3};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Launch impulse (N·s). 90 kN held for one 50 Hz physics step.
    pub impulse: f32,
    pub projectile_mass: f32,
    pub projectile_radius: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            impulse: 90_000.0 * 0.02,
            projectile_mass: 1.0,
            projectile_radius: 0.1,
        }
    }
}

/// World-space ray through a screen point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimRay {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl AimRay {
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        Some(Self {
            origin,
            direction: direction.try_normalize()?,
        })
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first surface point of a sphere, if any.
    /// Origins inside the sphere hit at `t = 0`.
    pub fn hit_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let c = oc.length_squared() - radius * radius;
        if c <= 0.0 {
            return Some(0.0);
        }
        let b = oc.dot(self.direction);
        if b > 0.0 {
            return None;
        }
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        Some(-b - disc.sqrt())
    }
}

/// Spawn parameters for one projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
}

/// Aim a shot from `hardpoint`. With a raycast hit the round turns to face the
/// hit point and flies along its own forward; otherwise it follows the aim ray.
pub fn fire_solution(cfg: &WeaponConfig, hardpoint: Vec3, ray: AimRay, hit: Option<Vec3>) -> Shot {
    let speed = cfg.impulse / cfg.projectile_mass.max(1e-3);
    let facing = hit.and_then(|point| look_rotation(point - hardpoint, Vec3::Y));
    match facing {
        Some(rotation) => Shot {
            position: hardpoint,
            rotation,
            velocity: rotation * Vec3::NEG_Z * speed,
        },
        None => Shot {
            position: hardpoint,
            rotation: Quat::IDENTITY,
            velocity: ray.direction * speed,
        },
    }
}

/// Receives hits for damage bookkeeping.
pub trait DamageHook {
    fn apply(&mut self, contact: Vec3);
}

/// Shipped hook: projectiles deal no damage yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDamage;

impl DamageHook for NoDamage {
    fn apply(&mut self, _contact: Vec3) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Impact {
    /// Spawn an explosion at `at` and remove the projectile.
    Explode { at: Vec3 },
    /// Already spent; nothing to do.
    Ignored,
}

/// A fired round. Only its first collision counts.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Projectile {
    spent: bool,
}

impl Projectile {
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    pub fn on_collision(&mut self, contact: Vec3, damage: &mut dyn DamageHook) -> Impact {
        if self.spent {
            return Impact::Ignored;
        }
        self.spent = true;
        damage.apply(contact);
        Impact::Explode { at: contact }
    }
}
