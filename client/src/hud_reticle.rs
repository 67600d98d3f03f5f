use bevy::prelude::*;

use crate::host::ScreenSize;
use crate::menu::GameState;
use crate::scene::pointer::Pointer;

const RETICLE_SIZE: f32 = 24.0; // px
const RETICLE_BORDER: f32 = 2.0; // px

#[derive(Component)]
struct Reticle;

pub struct HudReticlePlugin;

impl Plugin for HudReticlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Flight), spawn_reticle)
            .add_systems(Update, place_reticle.run_if(in_state(GameState::Flight)));
    }
}

fn spawn_reticle(mut commands: Commands) {
    commands.spawn((
        Reticle,
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(RETICLE_SIZE),
            height: Val::Px(RETICLE_SIZE),
            border: UiRect::all(Val::Px(RETICLE_BORDER)),
            ..Default::default()
        },
        BorderColor(Color::srgba(0.6, 1.0, 0.7, 0.9)),
        BorderRadius::MAX,
        Name::new("Reticle"),
        StateScoped(GameState::Flight),
    ));
}

/// Top-left corner of the reticle node for a y-up pointer position.
pub fn reticle_corner(screen_height: f32, aim: Vec2) -> Vec2 {
    let half = RETICLE_SIZE * 0.5;
    Vec2::new(aim.x - half, screen_height - aim.y - half)
}

fn place_reticle(
    screen: Res<ScreenSize>,
    pointer: Res<Pointer>,
    mut reticles: Query<&mut Node, With<Reticle>>,
) {
    let corner = reticle_corner(screen.0.height, pointer.aim_point(screen.0));
    for mut node in &mut reticles {
        node.left = Val::Px(corner.x);
        node.top = Val::Px(corner.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_flips_y_and_centres_the_node() {
        let corner = reticle_corner(720.0, Vec2::new(640.0, 360.0));
        assert_eq!(corner, Vec2::new(628.0, 348.0));
        // Pointer at the top edge lands at the top of the window.
        let corner = reticle_corner(720.0, Vec2::new(0.0, 720.0));
        assert_eq!(corner, Vec2::new(-12.0, -12.0));
    }
}
