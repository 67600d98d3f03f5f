use bevy::prelude::*;
use bevy::state::state::StateTransitionEvent;
use flight_core::{HostRequest, SceneId};
use tracing::info;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Menu,
    Flight,
}

impl From<SceneId> for GameState {
    fn from(scene: SceneId) -> Self {
        match scene {
            SceneId::Menu => GameState::Menu,
            SceneId::Flight => GameState::Flight,
        }
    }
}

/// Main menu actions, routed through the same request queue controllers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartSinglePlayer,
    Exit,
}

impl MenuAction {
    pub fn request(self) -> HostRequest {
        match self {
            MenuAction::StartSinglePlayer => HostRequest::LoadScene(SceneId::Flight),
            MenuAction::Exit => HostRequest::Exit,
        }
    }
}

pub fn log_state_change(mut transitions: EventReader<StateTransitionEvent<GameState>>) {
    for transition in transitions.read() {
        info!(from = ?transition.exited, to = ?transition.entered, "game state changed");
    }
}

#[cfg(feature = "windowing")]
pub use ui::MenuUiPlugin;

#[cfg(feature = "windowing")]
mod ui {
    use bevy::prelude::*;
    use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

    use super::{GameState, MenuAction};
    use crate::host::HostRequests;

    pub struct MenuUiPlugin;

    impl Plugin for MenuUiPlugin {
        fn build(&self, app: &mut App) {
            app.add_systems(OnEnter(GameState::Menu), spawn_menu_camera)
                .add_systems(
                    EguiPrimaryContextPass,
                    ui_main_menu.run_if(in_state(GameState::Menu)),
                );
        }
    }

    fn spawn_menu_camera(mut commands: Commands) {
        commands.spawn((
            Camera2d,
            Name::new("Menu Camera"),
            StateScoped(GameState::Menu),
        ));
    }

    fn ui_main_menu(mut egui_ctx: EguiContexts, mut requests: ResMut<HostRequests>) {
        let Ok(ctx) = egui_ctx.ctx_mut() else {
            return;
        };
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading("Skyward");
                ui.add_space(24.0);
                let size = egui::vec2(220.0, 36.0);
                if ui.add_sized(size, egui::Button::new("Start")).clicked() {
                    requests.0.push(MenuAction::StartSinglePlayer.request());
                }
                ui.add_space(8.0);
                if ui.add_sized(size, egui::Button::new("Exit")).clicked() {
                    requests.0.push(MenuAction::Exit.request());
                }
            });
        });
    }
}
