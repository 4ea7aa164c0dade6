//! Core domain: camera and simulation timing glue.

use bevy::prelude::*;

/// Fixed simulation rate in Hz. The locomotion core is advanced once per
/// fixed tick; input is sampled at render rate and latched in between.
const FIXED_HZ: f64 = 60.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    // World units are meters; zoom the default 2D projection out so the
    // whole test room fits the window.
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 0.025,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 5.0, 0.0),
    ));
}
