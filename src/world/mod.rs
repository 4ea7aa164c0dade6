//! World domain: physics layers and the demo room.

mod spawn;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering. All level geometry lives on a
/// single Solid layer, which is also the mask the contact probes filter on.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground and wall surfaces
    Solid,
    /// Player character
    Player,
}

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn::spawn_room, spawn::spawn_player));
    }
}
