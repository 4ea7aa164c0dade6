//! Controller domain: coyote-time and jump-buffer bookkeeping.

/// Sentinel timestamp meaning "never happened" or "consumed". Far enough
/// in the past that no window test can ever succeed against it.
const NEVER: f64 = f64::NEG_INFINITY;

/// Monotonic-clock samples backing the two grace windows. Grounded time is
/// overwritten on every grounded tick, not edge-triggered, so the coyote
/// window always measures time since the ground was last under the feet.
#[derive(Debug, Clone, Copy)]
pub struct TimingState {
    last_grounded: f64,
    last_jump_press: f64,
}

impl Default for TimingState {
    fn default() -> Self {
        Self {
            last_grounded: NEVER,
            last_jump_press: NEVER,
        }
    }
}

impl TimingState {
    pub fn record_grounded(&mut self, now: f64) {
        self.last_grounded = now;
    }

    pub fn record_jump_press(&mut self, now: f64) {
        self.last_jump_press = now;
    }

    pub fn coyote_eligible(&self, now: f64, window: f32) -> bool {
        now - self.last_grounded <= window as f64
    }

    pub fn jump_buffered(&self, now: f64, window: f32) -> bool {
        now - self.last_jump_press <= window as f64
    }

    /// Must be called exactly once per resolved jump; a consumed press can
    /// never satisfy the buffer test again until a new press is recorded.
    pub fn consume_jump_buffer(&mut self) {
        self.last_jump_press = NEVER;
    }

    /// Spend the coyote window. A ground jump calls this so the same
    /// window cannot grant a second free jump; while actually grounded the
    /// timestamp is re-recorded on the next tick anyway.
    pub fn consume_coyote(&mut self) {
        self.last_grounded = NEVER;
    }
}
