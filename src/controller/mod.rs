//! Controller domain: locomotion state machine, contact sensing, and
//! presentation wiring for the player character.

mod config;
mod contact;
mod locomotion;
mod systems;
mod timing;


pub use config::{CharacterConfig, ConfigError};
pub use contact::{ContactState, ProbeRig, WallSide};
pub use locomotion::{Facing, InputSample, Locomotion, Mode, WallTilt};
pub use timing::TimingState;

use bevy::prelude::*;
use std::path::Path;

const CONFIG_PATH: &str = "assets/config/character.ron";

/// Marker for the controlled character's physics body.
#[derive(Component, Debug)]
pub struct PlayerCharacter;

/// Marker for the character's child sprite. Facing flip and wall tilt are
/// applied here so the body's locked physics rotation stays untouched.
#[derive(Component, Debug)]
pub struct CharacterVisual;

/// Raw input latched between fixed ticks. The axis holds the most recent
/// sample; the jump edge stays set until a fixed tick consumes it.
#[derive(Resource, Debug, Default)]
pub struct ControllerInput {
    pub axis: f32,
    pub jump_pressed: bool,
}

pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerInput>()
            .add_systems(PreStartup, load_config)
            .add_systems(Update, systems::read_input)
            .add_systems(
                FixedUpdate,
                (
                    systems::sense_contacts,
                    systems::step_locomotion,
                    systems::apply_presentation,
                )
                    .chain(),
            );
    }
}

/// Invalid configuration is fatal here: the controller refuses to activate
/// rather than running with broken tuning or an unusable probe rig.
fn load_config(mut commands: Commands) {
    match CharacterConfig::load_or_default(Path::new(CONFIG_PATH)) {
        Ok(config) => {
            info!("character config ready: {config:?}");
            commands.insert_resource(config);
        }
        Err(err) => panic!("refusing to start: {err}"),
    }
}
