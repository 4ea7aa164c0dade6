//! Controller domain: variable-rate input sampling.

use bevy::prelude::*;

use crate::controller::ControllerInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<ControllerInput>,
) {
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }
    input.axis = axis;

    // Latched until the next fixed tick consumes it, so a press landing
    // between fixed steps is never dropped.
    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        input.jump_pressed = true;
    }
}
