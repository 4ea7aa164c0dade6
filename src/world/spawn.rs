//! World domain: player and test-room spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{
    CharacterConfig, CharacterVisual, ContactState, Locomotion, PlayerCharacter, ProbeRig,
};
use crate::world::GameLayer;

/// Player collider half extents in world units.
const PLAYER_HALF_EXTENTS: Vec2 = Vec2::new(0.45, 0.9);

pub(crate) fn spawn_player(mut commands: Commands, config: Res<CharacterConfig>) {
    let size = PLAYER_HALF_EXTENTS * 2.0;

    commands
        .spawn((
            PlayerCharacter,
            Locomotion::new(&config),
            ContactState::default(),
            ProbeRig::for_box(PLAYER_HALF_EXTENTS, &config),
            Transform::from_xyz(0.0, 2.0, 0.0),
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Solid]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                CharacterVisual,
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(size),
                    ..default()
                },
                Transform::default(),
            ));
        });

    info!("spawned player ({} x {})", size.x, size.y);
}

pub(crate) fn spawn_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let solid_layers = CollisionLayers::new(GameLayer::Solid, [GameLayer::Player]);

    let mut slab = |size: Vec2, position: Vec2, color: Color| {
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            solid_layers,
        ));
    };

    // Ground
    slab(Vec2::new(30.0, 1.0), Vec2::new(0.0, -0.5), ground_color);

    // Left and right walls
    slab(Vec2::new(1.0, 14.0), Vec2::new(-15.5, 6.0), wall_color);
    slab(Vec2::new(1.0, 14.0), Vec2::new(15.5, 6.0), wall_color);

    // Floating platforms for jump testing
    slab(Vec2::new(4.0, 0.5), Vec2::new(5.0, 2.5), platform_color);
    slab(Vec2::new(4.0, 0.5), Vec2::new(-6.0, 4.5), platform_color);
}
