//! Ship control laws shared by every host.
//!
//! This crate is engine-agnostic: it depends only on `bevy_math` for vector
//! types. Hosts implement [`FlightHost`]; controllers read input and body
//! state through it and hand back torques, velocity overrides, and
//! [`HostRequest`]s. [`Scheduler`] and [`sim::ScriptedHost`] drive the
//! controllers without an engine.

mod math;
pub use math::{look_rotation, step_factor, EulerRot, Mat3, Quat, Vec2, Vec3};

mod error;
pub use error::{ControlError, Dependency, SkipLog};

mod input;
pub use input::{Axis, Button};

mod screen;
pub use screen::{DeadzoneRect, Screen};

mod ship_specs;
pub use ship_specs::{presets, DescentGains, ShipConfig, TorqueMapping};

mod body;
pub use body::{BodyConfig, RigidBodyState};

pub mod pointer;
pub use pointer::{PointerConfig, PointerOffsets, PointerSource, PointerState};

pub mod attitude;
pub use attitude::{AttitudeCommand, AttitudeOutput, AxisActivity, DigitalAxes, Torque, TorqueFrame};

pub mod throttle;
pub use throttle::{throttle_percent, ThrottleMode, ThrottleOutput, ThrottleState};

pub mod weapon;
pub use weapon::{fire_solution, AimRay, DamageHook, Impact, NoDamage, Projectile, Shot, WeaponConfig};

pub mod camera;
pub use camera::{FollowCamConfig, FollowCamState, Pose};

mod host;
pub use host::{FlightHost, HostRequest, SceneId};

pub mod controller;
pub use controller::{Controller, Stage, Tick};

pub mod controllers;
pub use controllers::{DescentController, FlightSimController, PointerController};

mod scheduler;
pub use scheduler::{ControllerId, Scheduler, MAX_FIXED_STEPS};

pub mod sim;
