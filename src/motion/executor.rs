//! Move execution - phase transition scheduling.
//!
//! [`MoveExecutor`] holds the runtime state of one relative move: how many
//! phase transitions remain and when the next one is due. It is pure
//! bookkeeping; pin writes stay in the motor driver.

/// Direction of motor rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Forward (positive step count). Phase index increments.
    Forward,
    /// Reverse (negative step count). Phase index decrements.
    Reverse,
}

impl Direction {
    /// Get direction from a nonzero signed step count.
    ///
    /// Returns `None` for zero, which by contract leaves the motor's
    /// previous direction untouched.
    #[inline]
    pub fn from_steps(steps: i64) -> Option<Self> {
        match steps {
            0 => None,
            s if s > 0 => Some(Direction::Forward),
            _ => Some(Direction::Reverse),
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Runtime state during move execution.
///
/// Transition `k` (zero-based) becomes due once `k * step_delay_us`
/// microseconds have elapsed since the move started, so the first
/// transition fires immediately and the rest follow at the configured
/// interval. Scheduling against the move's start time instead of the
/// previous transition keeps the average rate exact even when the caller
/// polls late.
#[derive(Debug, Clone)]
pub struct MoveExecutor {
    /// Direction of this move.
    direction: Direction,

    /// Total phase transitions to perform.
    total_transitions: u64,

    /// Transitions performed so far.
    taken: u64,

    /// Clock value when the move started (microseconds).
    started_at: u64,

    /// Minimum interval between transitions (microseconds).
    step_delay_us: f32,
}

impl MoveExecutor {
    /// Create a new executor.
    ///
    /// `started_at` is the clock sample taken when the move was requested.
    pub fn new(
        total_transitions: u64,
        direction: Direction,
        step_delay_us: f32,
        started_at: u64,
    ) -> Self {
        Self {
            direction,
            total_transitions,
            taken: 0,
            started_at,
            step_delay_us,
        }
    }

    /// Check if the move is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.taken >= self.total_transitions
    }

    /// Check whether the next transition is due at clock value `now`.
    ///
    /// Always `false` once the move is complete. Uses wrapping subtraction
    /// so a counter wrap within the move does not stall the gate.
    pub fn is_due(&self, now: u64) -> bool {
        if self.is_complete() {
            return false;
        }
        let elapsed = now.wrapping_sub(self.started_at);
        elapsed as f32 >= self.step_delay_us * self.taken as f32
    }

    /// Record that one phase transition has been performed.
    pub fn record_transition(&mut self) {
        debug_assert!(!self.is_complete());
        self.taken += 1;
    }

    /// Direction of this move.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Total phase transitions in this move.
    #[inline]
    pub fn total_transitions(&self) -> u64 {
        self.total_transitions
    }

    /// Transitions performed so far.
    #[inline]
    pub fn transitions_taken(&self) -> u64 {
        self.taken
    }

    /// Transitions still to perform.
    #[inline]
    pub fn transitions_remaining(&self) -> u64 {
        self.total_transitions - self.taken
    }

    /// Minimum interval between transitions in microseconds.
    #[inline]
    pub fn step_delay_us(&self) -> f32 {
        self.step_delay_us
    }

    /// Get progress as a fraction (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.total_transitions == 0 {
            1.0
        } else {
            self.taken as f32 / self.total_transitions as f32
        }
    }
}
