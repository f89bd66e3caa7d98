//! Motor state type-state markers.
//!
//! Uses Rust's type system to enforce valid state transitions at compile time.

/// Motor is idle and ready for commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

/// Motor is currently executing a move.
#[derive(Debug, Clone, Copy)]
pub struct Moving;

/// Trait for motor states.
pub trait MotorState: private::Sealed {}

impl MotorState for Idle {}
impl MotorState for Moving {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Idle {}
    impl Sealed for super::Moving {}
}

/// State name for display/debugging.
pub trait StateName {
    /// Get the state name as a static string.
    fn name() -> &'static str;
}

impl StateName for Idle {
    fn name() -> &'static str {
        "Idle"
    }
}

impl StateName for Moving {
    fn name() -> &'static str {
        "Moving"
    }
}
