//! Controller domain: the fixed-tick locomotion driver.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{
    CharacterConfig, ContactState, ControllerInput, InputSample, Locomotion, PlayerCharacter,
};

/// Advance every controlled character by one fixed tick and write the
/// resulting velocity back to the rigid body. Sole writer of the
/// character's velocity; runs after contact sensing in the same schedule.
pub(crate) fn step_locomotion(
    time: Res<Time>,
    config: Res<CharacterConfig>,
    mut input: ResMut<ControllerInput>,
    mut query: Query<(&ContactState, &mut Locomotion, &mut LinearVelocity), With<PlayerCharacter>>,
) {
    let now = time.elapsed_secs_f64();
    let dt = time.delta_secs();

    let sample = InputSample {
        axis: input.axis,
        jump_pressed: input.jump_pressed,
    };
    input.jump_pressed = false;

    for (contacts, mut locomotion, mut velocity) in &mut query {
        let before = locomotion.mode;
        velocity.0 = locomotion.step(&config, contacts, &sample, velocity.0, now, dt);
        if locomotion.mode != before {
            debug!("locomotion {:?} -> {:?}", before, locomotion.mode);
        }
    }
}
