pub use bevy_math::{EulerRot, Mat3, Quat, Vec2, Vec3};

/// Blend factor for a per-second `rate` over a frame of `dt` seconds.
/// Clamped to [0, 1] so a long frame lands on the target instead of past it.
#[inline]
pub fn step_factor(rate: f32, dt: f32) -> f32 {
    let t = rate * dt;
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Rotation whose forward axis (-Z) points along `dir`, rolled so local +Y
/// lies as close to `up` as possible. `None` when `dir` is zero or parallel to `up`.
pub fn look_rotation(dir: Vec3, up: Vec3) -> Option<Quat> {
    let back = (-dir).try_normalize()?;
    let right = up.cross(back).try_normalize()?;
    let up = back.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, back)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_factor_clamps_large_frames() {
        assert_eq!(step_factor(5.0, 1.0), 1.0);
        assert_eq!(step_factor(5.0, 0.1), 0.5);
        assert_eq!(step_factor(5.0, -1.0), 0.0);
    }

    #[test]
    fn look_rotation_points_forward_axis_at_target() {
        let dir = Vec3::new(1.0, 0.0, 0.0);
        let q = look_rotation(dir, Vec3::Y).expect("valid basis");
        let fwd = q * Vec3::NEG_Z;
        assert!((fwd - dir).length() < 1e-5, "forward = {fwd:?}");
        assert!(look_rotation(Vec3::Y, Vec3::Y).is_none());
        assert!(look_rotation(Vec3::ZERO, Vec3::Y).is_none());
    }
}
