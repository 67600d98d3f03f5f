use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystem};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

pub mod args;
pub mod config;
#[cfg(feature = "windowing")]
pub mod hud_controls;
pub mod hud_reticle;
pub mod host;
pub mod input;
pub mod menu;
pub mod scene;

pub use args::Args;
pub use config::{load_config, ControlScheme, FlightConfig};
use host::{CursorState, HostRequests, ScreenSize, ThrottleGauge};
use input::InputState;
use menu::GameState;
use scene::pointer::Pointer;
use scene::{FlightSet, Rendering, ScenePlugin};

#[cfg(feature = "windowing")]
use bevy_egui::EguiPlugin;
#[cfg(feature = "windowing")]
use bevy_inspector_egui::quick::WorldInspectorPlugin;

#[derive(Clone, Copy)]
struct ClientAppConfig {
    include_rendering: bool,
    include_ui: bool,
    start_in_flight: bool,
}

impl ClientAppConfig {
    fn full(args: &Args) -> Self {
        Self {
            include_rendering: !args.headless,
            include_ui: !args.headless,
            start_in_flight: args.skip_menu || args.headless,
        }
    }

    const MINIMAL: Self = Self {
        include_rendering: false,
        include_ui: false,
        start_in_flight: true,
    };
}

pub fn build_client_app(args: Args, cfg: FlightConfig) -> App {
    let config = ClientAppConfig::full(&args);
    build_client_app_with_config(args, cfg, config)
}

/// Headless app without window, input devices or rendering. Starts in
/// flight; tests drive it by writing [`InputState`] directly.
pub fn build_minimal_client_app(args: Args, cfg: FlightConfig) -> App {
    build_client_app_with_config(args, cfg, ClientAppConfig::MINIMAL)
}

fn build_client_app_with_config(args: Args, cfg: FlightConfig, config: ClientAppConfig) -> App {
    let mut app = App::new();

    if config.include_rendering {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Skyward".into(),
                resolution: (args.width, args.height).into(),
                ..Default::default()
            }),
            ..Default::default()
        }));
        app.add_systems(PreUpdate, host::track_window_size)
            .add_systems(
                RunFixedMainLoop,
                input::gather_input.in_set(FlightSet::Input),
            )
            .add_systems(PostUpdate, host::apply_cursor_grab);
        #[cfg(feature = "windowing")]
        if config.include_ui {
            app.add_plugins(EguiPlugin::default());
            app.add_plugins(WorldInspectorPlugin::default());
            app.add_plugins(menu::MenuUiPlugin);
            app.add_plugins(hud_controls::HudControlsPlugin);
            app.add_plugins(hud_reticle::HudReticlePlugin);
        }
    } else {
        app.add_plugins((MinimalPlugins, StatesPlugin));
    }

    let screen = ScreenSize(flight_core::Screen::new(args.width, args.height));
    app.insert_resource(Time::<Fixed>::from_hz(cfg.fixed_hz))
        .insert_resource(InputState::from_bindings(&cfg.input))
        .insert_resource(Pointer::from_config(&cfg, &screen))
        .insert_resource(screen)
        .insert_resource(Rendering(config.include_rendering))
        .init_resource::<CursorState>()
        .init_resource::<HostRequests>()
        .init_resource::<ThrottleGauge>()
        .insert_resource(cfg)
        .insert_resource(args);

    if config.start_in_flight {
        app.insert_state(GameState::Flight);
    } else {
        app.init_state::<GameState>();
    }
    app.enable_state_scoped_entities::<GameState>();

    app.add_plugins(ScenePlugin)
        .add_systems(
            RunFixedMainLoop,
            input::end_input_frame
                .in_set(RunFixedMainLoopSystem::AfterFixedMainLoop)
                .run_if(in_state(GameState::Flight)),
        )
        .add_systems(Update, (host::apply_host_requests, menu::log_state_change));

    app
}
