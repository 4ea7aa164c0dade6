//! Controller domain: contact probing against the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{ContactState, PlayerCharacter, ProbeRig};
use crate::world::GameLayer;

/// Overlap-test each named probe against solid geometry. Pure query: the
/// result is written fresh every tick, and an empty intersection list
/// reads as "no contact", which fails safe toward airborne.
pub(crate) fn sense_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &ProbeRig, &mut ContactState), With<PlayerCharacter>>,
) {
    let filter = SpatialQueryFilter::from_mask(GameLayer::Solid);

    for (transform, rig, mut contacts) in &mut query {
        let origin = transform.translation.truncate();
        let overlaps = |offset: Vec2, radius: f32| -> bool {
            !spatial_query
                .shape_intersections(&Collider::circle(radius), origin + offset, 0.0, &filter)
                .is_empty()
        };

        *contacts = ContactState {
            ground_center: overlaps(rig.ground_center, rig.ground_radius),
            ground_left: overlaps(rig.ground_left, rig.ground_radius),
            ground_right: overlaps(rig.ground_right, rig.ground_radius),
            wall_left: overlaps(rig.wall_left, rig.wall_radius),
            wall_right: overlaps(rig.wall_right, rig.wall_radius),
        };
    }
}
