use crate::{ControlError, FlightHost, PointerState};

/// Order in which controllers run within one render tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Samples input; finishes before anything reads the pointer.
    Input,
    Control,
}

/// Per-call context: frame time, the session pointer, and this controller's host.
pub struct Tick<'a> {
    pub dt: f32,
    pub pointer: &'a mut PointerState,
    pub host: &'a mut dyn FlightHost,
}

/// Behaviour attached to one host object, driven by an external loop.
///
/// `on_tick` runs once per rendered frame, `on_fixed_tick` once per fixed
/// physics step. An `Err` skips the rest of that call only; the controller is
/// called again next frame.
pub trait Controller {
    fn name(&self) -> &'static str;

    fn stage(&self) -> Stage {
        Stage::Control
    }

    fn on_init(&mut self, _host: &mut dyn FlightHost, _pointer: &mut PointerState) {}

    fn on_tick(&mut self, _tick: &mut Tick<'_>) -> Result<(), ControlError> {
        Ok(())
    }

    fn on_fixed_tick(&mut self, _tick: &mut Tick<'_>) -> Result<(), ControlError> {
        Ok(())
    }
}
