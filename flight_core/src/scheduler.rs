use tracing::{debug, trace};

use crate::controller::{Controller, Tick};
use crate::{FlightHost, PointerState, SkipLog};

/// Fixed steps run per `advance` before the backlog is dropped.
pub const MAX_FIXED_STEPS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(u32);

struct Slot<H> {
    id: ControllerId,
    controller: Box<dyn Controller>,
    host: H,
    tick_skips: SkipLog,
    fixed_skips: SkipLog,
}

/// Drives controllers the way a game engine would: one render tick per
/// `advance`, then zero or more fixed physics steps from an accumulator.
pub struct Scheduler<H> {
    fixed_dt: f32,
    accumulator: f32,
    pointer: PointerState,
    slots: Vec<Slot<H>>,
    next_id: u32,
}

impl<H: FlightHost> Scheduler<H> {
    pub fn new(fixed_dt: f32, pointer: PointerState) -> Self {
        Self {
            fixed_dt: fixed_dt.max(1e-4),
            accumulator: 0.0,
            pointer,
            slots: Vec::new(),
            next_id: 0,
        }
    }

    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Attach `controller` to `host` and run its `on_init`.
    ///
    /// Slots stay sorted by stage; within a stage, spawn order is kept.
    pub fn spawn<C: Controller + 'static>(&mut self, mut controller: C, mut host: H) -> ControllerId {
        controller.on_init(&mut host, &mut self.pointer);
        let id = ControllerId(self.next_id);
        self.next_id += 1;
        let stage = controller.stage();
        let at = self.slots.partition_point(|s| s.controller.stage() <= stage);
        debug!(controller = controller.name(), ?stage, "controller spawned");
        self.slots.insert(
            at,
            Slot {
                id,
                controller: Box::new(controller),
                host,
                tick_skips: SkipLog::default(),
                fixed_skips: SkipLog::default(),
            },
        );
        id
    }

    /// Detach a controller; it receives no further callbacks.
    pub fn remove(&mut self, id: ControllerId) -> Option<H> {
        let index = self.slots.iter().position(|s| s.id == id)?;
        let slot = self.slots.remove(index);
        debug!(controller = slot.controller.name(), "controller removed");
        Some(slot.host)
    }

    /// Run one frame of `frame_dt` seconds. Returns the number of fixed steps taken.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() { frame_dt.max(0.0) } else { 0.0 };

        for slot in self.slots.iter_mut() {
            let mut tick = Tick {
                dt: frame_dt,
                pointer: &mut self.pointer,
                host: &mut slot.host,
            };
            let result = slot.controller.on_tick(&mut tick);
            slot.tick_skips.record(slot.controller.name(), result);
        }
        for slot in self.slots.iter_mut() {
            slot.host.end_frame();
        }

        self.accumulator += frame_dt;
        let mut steps = 0;
        while self.accumulator >= self.fixed_dt && steps < MAX_FIXED_STEPS {
            self.accumulator -= self.fixed_dt;
            steps += 1;
            for slot in self.slots.iter_mut() {
                let mut tick = Tick {
                    dt: self.fixed_dt,
                    pointer: &mut self.pointer,
                    host: &mut slot.host,
                };
                let result = slot.controller.on_fixed_tick(&mut tick);
                slot.fixed_skips.record(slot.controller.name(), result);
                slot.host.step_physics(self.fixed_dt);
            }
        }
        if steps == MAX_FIXED_STEPS && self.accumulator >= self.fixed_dt {
            trace!(backlog = self.accumulator, "dropping fixed-step backlog");
            self.accumulator %= self.fixed_dt;
        }
        steps
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    pub fn host(&self, id: ControllerId) -> Option<&H> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.host)
    }

    pub fn host_mut(&mut self, id: ControllerId) -> Option<&mut H> {
        self.slots.iter_mut().find(|s| s.id == id).map(|s| &mut s.host)
    }

    /// Calls skipped by controller `id` in its current failure streaks,
    /// render and fixed ticks combined.
    pub fn skipped(&self, id: ControllerId) -> Option<u64> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.tick_skips.skipped() + s.fixed_skips.skipped())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
