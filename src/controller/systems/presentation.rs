//! Controller domain: facing flip and wall tilt on the visual child.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::controller::{CharacterVisual, Facing, Locomotion, PlayerCharacter, WallTilt};

/// Side-effect-only adapter: maps locomotion state onto the sprite child.
/// Never feeds back into physics decisions. The split onto a child entity
/// keeps the body's locked physics rotation untouched by the tilt.
pub(crate) fn apply_presentation(
    players: Query<(&Locomotion, &Children), With<PlayerCharacter>>,
    mut visuals: Query<(&mut Sprite, &mut Transform), With<CharacterVisual>>,
) {
    for (locomotion, children) in &players {
        for child in children.iter() {
            let Ok((mut sprite, mut transform)) = visuals.get_mut(child) else {
                continue;
            };

            sprite.flip_x = locomotion.facing == Facing::Left;
            transform.rotation = match locomotion.tilt {
                WallTilt::Neutral => Quat::IDENTITY,
                WallTilt::Left => Quat::from_rotation_z(FRAC_PI_2),
                WallTilt::Right => Quat::from_rotation_z(-FRAC_PI_2),
            };
        }
    }
}
