//! Debug domain: overlay UI components and layout.

use bevy::prelude::*;

/// Marker for the overlay root node.
#[derive(Component, Debug)]
pub struct DebugOverlay;

/// Marker for the overlay text.
#[derive(Component, Debug)]
pub struct DebugOverlayText;

pub(crate) fn spawn_overlay(commands: &mut Commands) {
    let bg_color = Color::srgba(0.1, 0.1, 0.15, 0.85);
    let text_color = Color::srgb(0.9, 0.9, 0.9);

    commands
        .spawn((
            DebugOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(12.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(bg_color),
            Visibility::Hidden,
            ZIndex(500),
        ))
        .with_children(|parent| {
            parent.spawn((
                DebugOverlayText,
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(text_color),
            ));
        });
}
