use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::Axis;

/// References a controller needs from its host before it can run a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    Body,
    VisualModel,
    Hardpoint,
    ProjectileTemplate,
    Camera,
    CameraTarget,
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dependency::Body => "rigid body",
            Dependency::VisualModel => "ship visual model",
            Dependency::Hardpoint => "weapon hardpoint",
            Dependency::ProjectileTemplate => "projectile template",
            Dependency::Camera => "main camera",
            Dependency::CameraTarget => "camera target",
        };
        f.write_str(name)
    }
}

/// Per-frame control failures. None of these are fatal: the host skips the
/// affected frame and tries again on the next one.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ControlError {
    #[error("missing dependency: {0}")]
    MissingDependency(Dependency),
    #[error("input axis `{0}` is not configured on this host")]
    UnsupportedInputAxis(Axis),
    #[error("screen has degenerate size {width}x{height}")]
    DegenerateScreen { width: f32, height: f32 },
}

impl ControlError {
    /// Errors that clear up once the host provides the missing piece.
    pub fn is_missing_dependency(&self) -> bool {
        matches!(
            self,
            ControlError::MissingDependency(_) | ControlError::DegenerateScreen { .. }
        )
    }
}

/// Logs skipped frames once per distinct error instead of every frame.
#[derive(Debug, Default, Clone)]
pub struct SkipLog {
    last: Option<ControlError>,
    skipped: u64,
}

impl SkipLog {
    pub fn record<T>(&mut self, controller: &str, result: Result<T, ControlError>) -> Option<T> {
        match result {
            Ok(value) => {
                if self.last.take().is_some() {
                    debug!(controller, skipped = self.skipped, "controller recovered");
                    self.skipped = 0;
                }
                Some(value)
            }
            Err(err) => {
                if self.last != Some(err) {
                    warn!(controller, %err, "frame skipped");
                }
                self.last = Some(err);
                self.skipped += 1;
                None
            }
        }
    }

    pub fn last_error(&self) -> Option<ControlError> {
        self.last
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_log_counts_until_recovery() {
        let mut log = SkipLog::default();
        let err = ControlError::MissingDependency(Dependency::Body);
        assert_eq!(log.record::<()>("ship", Err(err)), None);
        assert_eq!(log.record::<()>("ship", Err(err)), None);
        assert_eq!(log.skipped(), 2);
        assert_eq!(log.last_error(), Some(err));
        assert_eq!(log.record("ship", Ok(3)), Some(3));
        assert_eq!(log.skipped(), 0);
        assert_eq!(log.last_error(), None);
    }

    #[test]
    fn degenerate_screen_counts_as_missing_dependency() {
        let err = ControlError::DegenerateScreen { width: 0.0, height: 0.0 };
        assert!(err.is_missing_dependency());
        assert!(!ControlError::UnsupportedInputAxis(Axis::Roll).is_missing_dependency());
    }
}
