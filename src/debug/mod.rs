//! Debug overlay for tuning the probe rig: draws each contact probe as a
//! gizmo circle, solid when it currently reports a hit.

use bevy::color::palettes::css::{BLUE, RED, YELLOW};
use bevy::prelude::*;

use crate::controller::{ContactState, PlayerCharacter, ProbeRig};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_probe_gizmos);
    }
}

/// Yellow ground probes, red left-wall probe, blue right-wall probe.
fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &ProbeRig, &ContactState), With<PlayerCharacter>>,
) {
    for (transform, rig, contacts) in &query {
        let origin = transform.translation.truncate();
        let mut probe = |offset: Vec2, radius: f32, hit: bool, color: Srgba| {
            let color = if hit { color } else { color.with_alpha(0.35) };
            gizmos.circle_2d(origin + offset, radius, color);
        };

        probe(rig.ground_center, rig.ground_radius, contacts.ground_center, YELLOW);
        probe(rig.ground_left, rig.ground_radius, contacts.ground_left, YELLOW);
        probe(rig.ground_right, rig.ground_radius, contacts.ground_right, YELLOW);
        probe(rig.wall_left, rig.wall_radius, contacts.wall_left, RED);
        probe(rig.wall_right, rig.wall_radius, contacts.wall_right, BLUE);
    }
}
