//! Controller domain: the locomotion state machine.
//!
//! `Locomotion::step` is a pure function of its explicit fields plus the
//! per-tick snapshot (contacts, input, velocity, clock). All engine access
//! lives in the systems layer, which keeps the machine deterministic and
//! unit-testable without a physics world.

use bevy::prelude::*;

use super::config::CharacterConfig;
use super::contact::{ContactState, WallSide};
use super::timing::TimingState;

/// Below this magnitude an axis value counts as "no input".
const INPUT_DEADZONE: f32 = 0.01;

/// Mutually exclusive locomotion modes. `WallJumping` takes precedence
/// while its lock timer runs so the launch velocity is never fought by
/// horizontal control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Grounded,
    Airborne,
    WallSliding,
    WallJumping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Presentation tilt target while sliding down a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallTilt {
    #[default]
    Neutral,
    Left,
    Right,
}

/// Raw input captured for one fixed tick: axis in [-1, 1] plus the jump
/// edge latched since the previous tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    pub axis: f32,
    pub jump_pressed: bool,
}

#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    pub mode: Mode,
    /// Remaining air jumps, in [0, max_jumps]. Refilled only on the
    /// false-to-true grounded edge while not wall-jump locked.
    pub jumps_left: u32,
    pub wall_jump_lock: f32,
    pub wall_side: WallSide,
    pub facing: Facing,
    pub tilt: WallTilt,
    pub timing: TimingState,
    was_grounded: bool,
}

impl Locomotion {
    /// Initial state assumes a spawn on solid ground with full charges.
    pub fn new(config: &CharacterConfig) -> Self {
        Self {
            mode: Mode::Grounded,
            jumps_left: config.max_jumps,
            wall_jump_lock: 0.0,
            wall_side: WallSide::None,
            facing: Facing::Right,
            tilt: WallTilt::Neutral,
            timing: TimingState::default(),
            was_grounded: true,
        }
    }

    /// Advance one fixed tick. Returns the velocity to write back to the
    /// rigid body; mode, facing, and tilt are updated in place for the
    /// presentation layer to consume.
    pub fn step(
        &mut self,
        config: &CharacterConfig,
        contacts: &ContactState,
        input: &InputSample,
        mut velocity: Vec2,
        now: f64,
        dt: f32,
    ) -> Vec2 {
        let grounded = contacts.is_grounded();
        self.wall_side = contacts.wall_side();

        // Grounded bookkeeping. The charge refill is edge-triggered and
        // suppressed while the wall-jump lock runs, so landing mid-lock
        // cannot erase a wall jump's cost.
        if grounded {
            self.timing.record_grounded(now);
            if !self.was_grounded && self.wall_jump_lock <= 0.0 {
                self.jumps_left = config.max_jumps;
                debug!("landed, jump charges refilled to {}", self.jumps_left);
            }
        }

        if input.jump_pressed {
            self.timing.record_jump_press(now);
        }

        // Wall slide: airborne, touching a wall, and falling. Only the
        // downward component is clamped; upward motion into a wall is
        // left alone.
        let sliding = !grounded && contacts.is_touching_wall() && velocity.y < 0.0;
        if sliding {
            velocity.y = velocity.y.max(-config.wall_slide_speed);
        }

        velocity = self.resolve_jump(config, grounded, sliding, velocity, now);

        // Lock countdown; horizontal control resumes the tick it expires.
        if self.wall_jump_lock > 0.0 {
            self.wall_jump_lock -= dt;
        }

        self.mode = if self.wall_jump_lock > 0.0 {
            Mode::WallJumping
        } else if grounded {
            Mode::Grounded
        } else if sliding {
            Mode::WallSliding
        } else {
            Mode::Airborne
        };

        if self.mode != Mode::WallJumping {
            velocity.x += horizontal_impulse(config, grounded, input.axis, velocity.x, dt);

            // Facing follows the input sign, not velocity, so deceleration
            // never flickers the sprite. Frozen while wall-jump locked.
            if input.axis > INPUT_DEADZONE {
                self.facing = Facing::Right;
            } else if input.axis < -INPUT_DEADZONE {
                self.facing = Facing::Left;
            }
        }

        // Tilt tracks wall contact while airborne, not just while sliding;
        // orientation is suspended with everything else during the lock.
        let tilting =
            !grounded && contacts.is_touching_wall() && self.mode != Mode::WallJumping;
        self.tilt = if tilting {
            match self.wall_side {
                WallSide::Left => WallTilt::Left,
                WallSide::Right => WallTilt::Right,
                WallSide::None => WallTilt::Neutral,
            }
        } else {
            WallTilt::Neutral
        };

        self.was_grounded = grounded;
        velocity
    }

    /// Decide whether a buffered press fires a jump this tick, and which
    /// kind. First match wins; at most one jump per tick, and the buffer
    /// is consumed only on success so an unmatched press keeps pending
    /// until its window expires naturally.
    fn resolve_jump(
        &mut self,
        config: &CharacterConfig,
        grounded: bool,
        sliding: bool,
        mut velocity: Vec2,
        now: f64,
    ) -> Vec2 {
        if !self.timing.jump_buffered(now, config.jump_buffer_time) {
            return velocity;
        }

        if sliding {
            // Wall jump: any prior downward motion is discarded, replaced
            // wholesale by the launch vector away from the wall.
            velocity = Vec2::new(
                -self.wall_side.direction() * config.wall_jump_angle.x * config.wall_jump_force,
                config.wall_jump_angle.y * config.wall_jump_force,
            );
            self.wall_jump_lock = config.wall_jump_duration;
            self.jumps_left = self.jumps_left.saturating_sub(1);
            self.timing.consume_jump_buffer();
            debug!(
                "wall jump off {:?}, {} charges left",
                self.wall_side, self.jumps_left
            );
        } else if (grounded || self.timing.coyote_eligible(now, config.coyote_time))
            && self.jumps_left == config.max_jumps
        {
            // Ground or coyote jump. Free: charges count air jumps only,
            // and none has been spent since the last ground contact.
            velocity.y = config.jump_force;
            self.timing.consume_jump_buffer();
            self.timing.consume_coyote();
            debug!("ground jump (grounded={grounded})");
        } else if !grounded && self.jumps_left > 0 {
            velocity.y = config.jump_force;
            self.jumps_left -= 1;
            self.timing.consume_jump_buffer();
            debug!("air jump, {} charges left", self.jumps_left);
        }

        velocity
    }
}

/// Horizontal control as an impulse proportional to the velocity error,
/// so convergence toward `axis * move_speed` is exponential rather than
/// instant. Low accel values read as a heavier character.
fn horizontal_impulse(
    config: &CharacterConfig,
    grounded: bool,
    axis: f32,
    vx: f32,
    dt: f32,
) -> f32 {
    let target = axis * config.move_speed;
    let rate = if target.abs() > INPUT_DEADZONE {
        config.ground_accel
    } else {
        config.ground_decel
    };
    let rate = if grounded {
        rate
    } else {
        rate * config.air_control
    };
    (target - vx) * rate * dt
}
