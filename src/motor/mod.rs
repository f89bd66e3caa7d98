//! Motor module for stepper-wave.
//!
//! Provides the wave-drive stepper motor driver with type-state safety.

mod builder;
mod driver;
mod phase;
pub mod state;

pub use builder::StepperMotorBuilder;
pub use driver::StepperMotor;
pub use phase::{Phase, PHASES_PER_STEP};
pub use state::{Idle, MotorState, Moving, StateName};
