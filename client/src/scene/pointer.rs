use bevy::prelude::*;
use flight_core::{Controller, PointerController, PointerState, SkipLog, Tick};

use super::ship::HostContext;
use crate::config::FlightConfig;
use crate::host::ScreenSize;

/// Aim reticle shared by the player's controllers.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct Pointer(pub PointerState);

impl Pointer {
    pub fn from_config(cfg: &FlightConfig, screen: &ScreenSize) -> Self {
        Self(PointerState::centered(screen.0, cfg.pointer.clone()))
    }
}

#[derive(Resource, Debug, Default)]
pub struct PointerPilot {
    controller: PointerController,
    skips: SkipLog,
}

impl PointerPilot {
    pub fn skipped(&self) -> u64 {
        self.skips.skipped()
    }
}

pub fn init_pointer(
    mut ctx: HostContext,
    mut pointer: ResMut<Pointer>,
    mut pilot: ResMut<PointerPilot>,
) {
    let mut host = ctx.host();
    pilot.controller.on_init(&mut host, &mut pointer.0);
}

pub fn tick_pointer(
    time: Res<Time>,
    mut ctx: HostContext,
    mut pointer: ResMut<Pointer>,
    mut pilot: ResMut<PointerPilot>,
) {
    let PointerPilot { controller, skips } = &mut *pilot;
    let mut host = ctx.host();
    let result = controller.on_tick(&mut Tick {
        dt: time.delta_secs(),
        pointer: &mut pointer.0,
        host: &mut host,
    });
    skips.record(controller.name(), result);
}
