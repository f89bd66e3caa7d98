//! Wave-drive phase sequencing.
//!
//! A unipolar motor's "native" sequence energizes two coils at a time, but
//! the driver board this crate targets (the common ULN2003 breakout) wants
//! one input high at a time. Each full motor step is realized as four of
//! these single-coil patterns.

use embedded_hal::digital::PinState;

use crate::motion::Direction;

/// Phase combinations per full motor step.
pub const PHASES_PER_STEP: u32 = 4;

/// Index into the fixed wave-drive sequence.
///
/// Always in `[0, 3]`; advancing wraps modulo 4 in the direction of
/// travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Phase(u8);

/// Wave-drive table: exactly one input asserted per phase.
const WAVE_TABLE: [[PinState; 4]; 4] = [
    [PinState::High, PinState::Low, PinState::Low, PinState::Low],
    [PinState::Low, PinState::High, PinState::Low, PinState::Low],
    [PinState::Low, PinState::Low, PinState::High, PinState::Low],
    [PinState::Low, PinState::Low, PinState::Low, PinState::High],
];

impl Phase {
    /// The initial phase.
    pub const ZERO: Self = Self(0);

    /// Get the phase index (0 to 3).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The next phase in the given direction.
    ///
    /// Forward wraps 3 back to 0; reverse wraps 0 back to 3.
    #[inline]
    #[must_use]
    pub fn advanced(self, direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self((self.0 + 1) % 4),
            Direction::Reverse => Self((self.0 + 3) % 4),
        }
    }

    /// Pin levels for this phase, in `(in1, in2, in3, in4)` order.
    #[inline]
    pub fn levels(self) -> [PinState; 4] {
        WAVE_TABLE[self.0 as usize]
    }
}
