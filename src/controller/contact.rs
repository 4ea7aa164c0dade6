//! Controller domain: contact probing types.

use bevy::prelude::*;

use super::config::CharacterConfig;

/// Which wall the character is touching. Cleared immediately when all
/// wall contact is lost; never sticky across airborne frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSide {
    #[default]
    None,
    Left,
    Right,
}

impl WallSide {
    /// Sign of the wall's direction from the character: -1 left, +1 right.
    pub fn direction(self) -> f32 {
        match self {
            WallSide::None => 0.0,
            WallSide::Left => -1.0,
            WallSide::Right => 1.0,
        }
    }
}

/// Per-probe contact booleans, recomputed every fixed tick from the
/// physics world. Holds no history.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactState {
    pub ground_center: bool,
    pub ground_left: bool,
    pub ground_right: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl ContactState {
    pub fn is_grounded(&self) -> bool {
        self.ground_center || self.ground_left || self.ground_right
    }

    pub fn is_touching_wall(&self) -> bool {
        self.wall_left || self.wall_right
    }

    /// Right wins when both probes report a hit on the same tick.
    pub fn wall_side(&self) -> WallSide {
        if self.wall_right {
            WallSide::Right
        } else if self.wall_left {
            WallSide::Left
        } else {
            WallSide::None
        }
    }
}

/// Named probe points in the character's local space. Built once at spawn
/// from the collider extents and the configured radii; an invalid radius is
/// rejected before this rig can exist.
#[derive(Component, Debug, Clone)]
pub struct ProbeRig {
    pub ground_center: Vec2,
    pub ground_left: Vec2,
    pub ground_right: Vec2,
    pub wall_left: Vec2,
    pub wall_right: Vec2,
    pub ground_radius: f32,
    pub wall_radius: f32,
}

impl ProbeRig {
    /// Probe layout for a box body of the given half extents: three foot
    /// probes just below the collider, one wall probe per side at hip
    /// height.
    pub fn for_box(half_extents: Vec2, config: &CharacterConfig) -> Self {
        let foot = -half_extents.y - config.check_radius * 0.5;
        Self {
            ground_center: Vec2::new(0.0, foot),
            ground_left: Vec2::new(-half_extents.x * 0.8, foot),
            ground_right: Vec2::new(half_extents.x * 0.8, foot),
            wall_left: Vec2::new(-half_extents.x - config.wall_check_radius * 0.5, 0.0),
            wall_right: Vec2::new(half_extents.x + config.wall_check_radius * 0.5, 0.0),
            ground_radius: config.check_radius,
            wall_radius: config.wall_check_radius,
        }
    }
}
