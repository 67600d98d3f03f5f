use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::host::ThrottleGauge;
use crate::menu::GameState;
use crate::scene::ship::{Pilot, PlayerShip, ShipBody};

pub struct HudControlsPlugin;

impl Plugin for HudControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            ui_throttle_panel.run_if(in_state(GameState::Flight)),
        );
    }
}

/// Gauge label shown under the slider.
pub fn throttle_label(gauge: &ThrottleGauge) -> String {
    format!("Throttle: {}%", gauge.percent)
}

fn ui_throttle_panel(
    mut egui_ctx: EguiContexts,
    gauge: Res<ThrottleGauge>,
    ships: Query<(&ShipBody, &Pilot), With<PlayerShip>>,
) {
    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("throttle_panel")
        .exact_width(110.0)
        .show(ctx, |ui| {
            ui.heading("Throttle");
            ui.add_space(8.0);

            // Display only; the thrust axis drives it.
            let mut axis = gauge.axis;
            ui.add_enabled(
                false,
                egui::Slider::new(&mut axis, -1.0..=1.0)
                    .vertical()
                    .show_value(false),
            );
            ui.label(throttle_label(&gauge));

            let Ok((body, pilot)) = ships.single() else {
                return;
            };
            ui.add_space(8.0);
            ui.label(format!("Speed: {:.1} m/s", body.linear_velocity.length()));
            if let Some(throttle) = pilot.control.throttle() {
                if throttle.afterburner_active {
                    ui.colored_label(egui::Color32::from_rgb(255, 140, 40), "AFTERBURNER");
                } else if throttle.brake_active {
                    ui.colored_label(egui::Color32::LIGHT_BLUE, "BRAKE");
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shows_rounded_percent() {
        let gauge = ThrottleGauge {
            axis: -0.75,
            percent: flight_core::throttle_percent(-0.75),
        };
        assert_eq!(throttle_label(&gauge), "Throttle: 12%");
    }
}
