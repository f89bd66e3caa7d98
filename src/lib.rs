//! # stepper-wave
//!
//! Wave-drive control for 4-wire unipolar stepper motors on ULN2003-style
//! driver boards, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Wave drive**: fixed 4-phase single-coil-on sequence, matching the
//!   input pattern the common ULN2003 breakout expects
//! - **embedded-hal 1.0**: four `OutputPin`s, one per driver input
//! - **Monotonic timing**: step pacing gated against a microsecond clock
//!   with wraparound-safe arithmetic
//! - **no_std compatible**: core library works without the standard library
//! - **Cooperative moves**: type-state `Idle`/`Moving` split lets the caller
//!   poll one phase transition at a time or run a move to completion
//! - **Configuration-driven**: optional TOML motor definitions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_wave::{Rpm, StdClock, StepperMotor};
//!
//! let mut motor = StepperMotor::builder()
//!     .pins(in1, in2, in3, in4)
//!     .clock(StdClock::new())
//!     .steps_per_revolution(200)
//!     .build()?;
//!
//! motor.set_speed(Rpm::new(60.0)?);
//!
//! // One full revolution forward, blocking until done
//! let motor = motor.move_blocking(200)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and [`StdClock`]
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, SystemConfig};
pub use error::{Error, Result};
pub use motion::{Clock, Direction, MoveExecutor};
pub use motor::{state, Phase, StepperMotor, StepperMotorBuilder};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Std monotonic clock (std only)
#[cfg(feature = "std")]
pub use motion::StdClock;

// Unit types
pub use config::units::Rpm;
