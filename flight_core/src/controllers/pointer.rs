use tracing::warn;

use crate::controller::{Controller, Stage, Tick};
use crate::{Axis, Button, ControlError, FlightHost, HostRequest, PointerSource, PointerState, Vec2};

/// Moves the shared pointer from mouse or stick input.
#[derive(Debug, Default)]
pub struct PointerController;

impl Controller for PointerController {
    fn name(&self) -> &'static str {
        "pointer"
    }

    fn stage(&self) -> Stage {
        Stage::Input
    }

    fn on_init(&mut self, host: &mut dyn FlightHost, pointer: &mut PointerState) {
        let screen = host.screen();
        if !screen.is_degenerate() {
            pointer.recenter(screen);
        }
        match pointer.config.source {
            PointerSource::Mouse => {
                if !(host.has_axis(Axis::MouseX) && host.has_axis(Axis::MouseY)) {
                    warn!("pointer set to mouse input but the host has no mouse axes");
                }
                host.submit(HostRequest::CaptureCursor(true));
            }
            PointerSource::Gamepad => {
                if !(host.has_axis(Axis::Horizontal) && host.has_axis(Axis::Vertical)) {
                    warn!("pointer set to gamepad input but the host has no stick axes");
                }
            }
        }
    }

    fn on_tick(&mut self, tick: &mut Tick<'_>) -> Result<(), ControlError> {
        let host = &mut *tick.host;
        let raw = match tick.pointer.config.source {
            PointerSource::Mouse => {
                if host.pressed(Button::ReleaseCursor) {
                    host.submit(HostRequest::CaptureCursor(false));
                }
                if host.pressed(Button::CaptureCursor) {
                    host.submit(HostRequest::CaptureCursor(true));
                }
                // A free cursor belongs to the OS, not the reticle.
                if host.cursor_visible() {
                    Vec2::ZERO
                } else {
                    Vec2::new(host.axis(Axis::MouseX), host.axis(Axis::MouseY))
                }
            }
            PointerSource::Gamepad => Vec2::new(host.axis(Axis::Horizontal), host.axis(Axis::Vertical)),
        };
        tick.pointer.update(host.screen(), raw, tick.dt)?;
        Ok(())
    }
}
