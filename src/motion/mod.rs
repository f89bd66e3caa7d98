//! Motion module for stepper-wave.
//!
//! Provides the monotonic clock abstraction and move scheduling.

mod clock;
mod executor;

pub use clock::Clock;
pub use executor::{Direction, MoveExecutor};

#[cfg(feature = "std")]
pub use clock::StdClock;
