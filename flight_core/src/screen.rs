use serde::{Deserialize, Serialize};

use crate::{ControlError, Vec2};

/// Live screen size in pixels.
///
/// Screen space is y-up with the origin at the bottom-left corner. Hosts whose
/// cursor coordinates grow downwards flip `y` before handing points over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: f32,
    pub height: f32,
}

impl Screen {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Zero, negative or NaN extents.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn ensure(&self) -> Result<(), ControlError> {
        if self.is_degenerate() {
            return Err(ControlError::DegenerateScreen {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Clamp a point into `[0, width] × [0, height]`. Callers must have
    /// checked [`Screen::ensure`] first.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    pub fn deadzone(&self, radius: f32) -> DeadzoneRect {
        let r = radius.max(0.0);
        let c = self.center();
        DeadzoneRect {
            min: c - Vec2::splat(r),
            max: c + Vec2::splat(r),
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Square around the screen centre in which the pointer is left alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadzoneRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl DeadzoneRect {
    /// Half-open containment: min edges inclusive, max edges exclusive.
    /// A zero-radius zone therefore contains nothing.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_radius_deadzone_is_empty() {
        let screen = Screen::new(800.0, 600.0);
        assert!(!screen.deadzone(0.0).contains(screen.center()));
        assert!(screen.deadzone(10.0).contains(screen.center()));
    }

    #[test]
    fn degenerate_screens_are_rejected() {
        assert!(Screen::new(0.0, 600.0).ensure().is_err());
        assert!(Screen::new(800.0, f32::NAN).ensure().is_err());
        assert!(Screen::new(800.0, 600.0).ensure().is_ok());
    }
}
