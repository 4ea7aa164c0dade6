mod controller;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod world;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Wallkick".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Gravity is engine-owned; the controller only writes velocity.
    .insert_resource(Gravity(Vec2::NEG_Y * 20.0))
    .add_plugins((
        core::CorePlugin,
        controller::ControllerPlugin,
        world::WorldPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
