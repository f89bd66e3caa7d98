//! Stepper motor driver.
//!
//! Generic over embedded-hal 1.0 pin types with type-state safety. The
//! four pins map to the IN1..IN4 inputs of a ULN2003-style driver board;
//! moving the pins into the driver gives it exclusive ownership of the
//! lines for its lifetime.

use core::marker::PhantomData;

use embedded_hal::digital::OutputPin;

use crate::config::units::Rpm;
use crate::error::{MotorError, Result};
use crate::motion::{Clock, Direction, MoveExecutor};

use super::phase::{Phase, PHASES_PER_STEP};
use super::state::{Idle, MotorState, Moving, StateName};

/// Stepper motor driver with type-state safety.
///
/// Generic over:
/// - `IN1`..`IN4`: driver board input pins (must implement `OutputPin`)
/// - `CLK`: monotonic microsecond clock (must implement [`Clock`])
/// - `STATE`: type-state marker (defaults to `Idle`)
pub struct StepperMotor<IN1, IN2, IN3, IN4, CLK, STATE = Idle>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    CLK: Clock,
    STATE: MotorState,
{
    /// Driver board inputs, one per motor coil.
    in1: IN1,
    in2: IN2,
    in3: IN3,
    in4: IN4,

    /// Monotonic clock for step pacing.
    clock: CLK,

    /// Current phase in the wave-drive sequence.
    phase: Phase,

    /// Direction of the last nonzero move. A zero-length move leaves
    /// this untouched.
    direction: Option<Direction>,

    /// Minimum interval between phase transitions (microseconds).
    ///
    /// Zero until a speed is set, which makes moves run unpaced.
    step_delay_us: f32,

    /// Phase transitions per revolution (steps per revolution times 4).
    transitions_per_revolution: u32,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Executor for the current move (if any).
    executor: Option<MoveExecutor>,

    /// Type-state marker.
    _state: PhantomData<STATE>,
}

impl<IN1, IN2, IN3, IN4, CLK, STATE> StepperMotor<IN1, IN2, IN3, IN4, CLK, STATE>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    CLK: Clock,
    STATE: MotorState + StateName,
{
    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the current phase in the wave-drive sequence.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the direction of the last nonzero move, if any.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Get the configured interval between phase transitions in
    /// microseconds (zero if no speed has been set).
    #[inline]
    pub fn step_delay_us(&self) -> f32 {
        self.step_delay_us
    }

    /// Get the number of phase transitions per revolution.
    #[inline]
    pub fn transitions_per_revolution(&self) -> u32 {
        self.transitions_per_revolution
    }

    /// Full steps per revolution for this motor.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.transitions_per_revolution / PHASES_PER_STEP
    }

    /// Get the current state name.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        STATE::name()
    }

    /// Drive all four outputs to match the current phase.
    fn write_phase(&mut self) -> Result<()> {
        let [l1, l2, l3, l4] = self.phase.levels();
        self.in1.set_state(l1).map_err(|_| MotorError::PinError)?;
        self.in2.set_state(l2).map_err(|_| MotorError::PinError)?;
        self.in3.set_state(l3).map_err(|_| MotorError::PinError)?;
        self.in4.set_state(l4).map_err(|_| MotorError::PinError)?;
        Ok(())
    }
}

impl<IN1, IN2, IN3, IN4, CLK> StepperMotor<IN1, IN2, IN3, IN4, CLK, Idle>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    CLK: Clock,
{
    /// Create a new motor in the Idle state.
    pub(crate) fn new(
        in1: IN1,
        in2: IN2,
        in3: IN3,
        in4: IN4,
        clock: CLK,
        transitions_per_revolution: u32,
        step_delay_us: f32,
        name: heapless::String<32>,
    ) -> Self {
        Self {
            in1,
            in2,
            in3,
            in4,
            clock,
            phase: Phase::ZERO,
            direction: None,
            step_delay_us,
            transitions_per_revolution,
            name,
            executor: None,
            _state: PhantomData,
        }
    }

    /// Set the rotation speed.
    ///
    /// Takes effect on the next move; an in-progress move is unaffected.
    /// `step_delay_us = 60_000_000 / (transitions_per_revolution * rpm)`.
    pub fn set_speed(&mut self, rpm: Rpm) {
        self.step_delay_us = rpm.step_delay_us(self.transitions_per_revolution);
    }

    /// Start a relative move.
    ///
    /// Positive `steps` is forward, negative is reverse, zero is a no-op
    /// move that completes without touching the pins. Each full step is
    /// executed as four phase transitions. The move's start time is
    /// sampled here; the first transition is due immediately.
    ///
    /// Returns the motor in the `Moving` state. Call
    /// [`poll`](StepperMotor::poll) to execute transitions cooperatively,
    /// or [`run_to_completion`](StepperMotor::run_to_completion) to block.
    pub fn move_relative(
        mut self,
        steps: i32,
    ) -> StepperMotor<IN1, IN2, IN3, IN4, CLK, Moving> {
        let transitions = steps as i64 * PHASES_PER_STEP as i64;

        // Zero-length move keeps the previous direction.
        let direction = match Direction::from_steps(transitions) {
            Some(d) => {
                self.direction = Some(d);
                d
            }
            None => self.direction.unwrap_or(Direction::Forward),
        };

        let started_at = self.clock.now_us();
        let executor = MoveExecutor::new(
            transitions.unsigned_abs(),
            direction,
            self.step_delay_us,
            started_at,
        );

        StepperMotor {
            in1: self.in1,
            in2: self.in2,
            in3: self.in3,
            in4: self.in4,
            clock: self.clock,
            phase: self.phase,
            direction: self.direction,
            step_delay_us: self.step_delay_us,
            transitions_per_revolution: self.transitions_per_revolution,
            name: self.name,
            executor: Some(executor),
            _state: PhantomData,
        }
    }

    /// Execute a relative move to completion (blocking busy-wait).
    ///
    /// Convenience wrapper combining [`move_relative`](Self::move_relative)
    /// and [`run_to_completion`](StepperMotor::run_to_completion). The call
    /// occupies the calling thread for the whole move duration.
    pub fn move_blocking(self, steps: i32) -> Result<Self> {
        self.move_relative(steps).run_to_completion()
    }
}

impl<IN1, IN2, IN3, IN4, CLK> StepperMotor<IN1, IN2, IN3, IN4, CLK, Moving>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    CLK: Clock,
{
    /// Execute at most one phase transition.
    ///
    /// Samples the clock once; if the next transition is due, advances the
    /// phase index and drives all four outputs from the wave table.
    /// Returns `true` once the move is complete. Non-blocking: the caller
    /// decides whether to spin, sleep, or abandon the move between calls.
    pub fn poll(&mut self) -> Result<bool> {
        let now = self.clock.now_us();

        let executor = self.executor.as_mut().ok_or(MotorError::NotInitialized)?;

        if executor.is_complete() {
            return Ok(true);
        }
        if !executor.is_due(now) {
            return Ok(false);
        }

        let direction = executor.direction();
        executor.record_transition();
        let complete = executor.is_complete();

        self.phase = self.phase.advanced(direction);
        self.write_phase()?;

        Ok(complete)
    }

    /// Check if the move is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.executor
            .as_ref()
            .map(|e| e.is_complete())
            .unwrap_or(true)
    }

    /// Get move progress (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        self.executor.as_ref().map(|e| e.progress()).unwrap_or(1.0)
    }

    /// Phase transitions still to perform in this move.
    #[inline]
    pub fn transitions_remaining(&self) -> u64 {
        self.executor
            .as_ref()
            .map(|e| e.transitions_remaining())
            .unwrap_or(0)
    }

    /// Complete the move and return to Idle state.
    ///
    /// This should be called after [`poll`](Self::poll) reports completion,
    /// or to abandon a move in progress. The outputs are left at the
    /// current phase.
    pub fn finish(self) -> StepperMotor<IN1, IN2, IN3, IN4, CLK, Idle> {
        StepperMotor {
            in1: self.in1,
            in2: self.in2,
            in3: self.in3,
            in4: self.in4,
            clock: self.clock,
            phase: self.phase,
            direction: self.direction,
            step_delay_us: self.step_delay_us,
            transitions_per_revolution: self.transitions_per_revolution,
            name: self.name,
            executor: None,
            _state: PhantomData,
        }
    }

    /// Run the move to completion (blocking busy-wait).
    ///
    /// Spins on [`poll`](Self::poll) without yielding or sleeping until
    /// every transition has executed, then returns the motor in the Idle
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::PinError`] if a pin write fails mid-move; the
    /// motor is consumed in that case, matching the unrecoverable nature
    /// of a dead output line.
    pub fn run_to_completion(mut self) -> Result<StepperMotor<IN1, IN2, IN3, IN4, CLK, Idle>> {
        loop {
            if self.poll()? {
                return Ok(self.finish());
            }
        }
    }
}

impl<IN1, IN2, IN3, IN4, CLK> StepperMotor<IN1, IN2, IN3, IN4, CLK, Idle>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    CLK: Clock,
{
    /// Create a builder for a new motor.
    pub fn builder() -> super::builder::StepperMotorBuilder<IN1, IN2, IN3, IN4, CLK> {
        super::builder::StepperMotorBuilder::new()
    }
}
