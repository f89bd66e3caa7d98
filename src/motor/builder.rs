//! Builder pattern for StepperMotor.

use embedded_hal::digital::OutputPin;

use crate::config::units::Rpm;
use crate::config::{MotorConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::motion::Clock;

use super::driver::StepperMotor;
use super::phase::PHASES_PER_STEP;
use super::state::Idle;

/// Builder for creating StepperMotor instances.
pub struct StepperMotorBuilder<IN1, IN2, IN3, IN4, CLK>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    CLK: Clock,
{
    pins: Option<(IN1, IN2, IN3, IN4)>,
    clock: Option<CLK>,
    name: Option<heapless::String<32>>,
    steps_per_revolution: Option<u16>,
    speed: Option<Rpm>,
}

impl<IN1, IN2, IN3, IN4, CLK> Default for StepperMotorBuilder<IN1, IN2, IN3, IN4, CLK>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    CLK: Clock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<IN1, IN2, IN3, IN4, CLK> StepperMotorBuilder<IN1, IN2, IN3, IN4, CLK>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    CLK: Clock,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            pins: None,
            clock: None,
            name: None,
            steps_per_revolution: None,
            speed: None,
        }
    }

    /// Set the four driver board input pins, in IN1..IN4 order.
    ///
    /// The pins are moved into the motor; it owns the lines for its
    /// lifetime.
    pub fn pins(mut self, in1: IN1, in2: IN2, in3: IN3, in4: IN4) -> Self {
        self.pins = Some((in1, in2, in3, in4));
        self
    }

    /// Set the monotonic clock used for step pacing.
    pub fn clock(mut self, clock: CLK) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set full steps per revolution.
    pub fn steps_per_revolution(mut self, steps: u16) -> Self {
        self.steps_per_revolution = Some(steps);
        self
    }

    /// Set the initial rotation speed.
    ///
    /// Optional; without it the motor starts unpaced (zero step delay)
    /// until [`set_speed`](StepperMotor::set_speed) is called.
    pub fn speed(mut self, rpm: Rpm) -> Self {
        self.speed = Some(rpm);
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.steps_per_revolution = Some(config.steps_per_revolution);
        self.speed = Some(config.speed);
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the StepperMotor.
    ///
    /// # Errors
    ///
    /// Returns an error if pins, clock, or steps per revolution are
    /// missing, or if steps per revolution is zero.
    pub fn build(self) -> Result<StepperMotor<IN1, IN2, IN3, IN4, CLK, Idle>> {
        let (in1, in2, in3, in4) = self.pins.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("pins are required").unwrap(),
            ))
        })?;

        let clock = self.clock.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("clock is required").unwrap(),
            ))
        })?;

        let steps = self.steps_per_revolution.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("steps_per_revolution is required").unwrap(),
            ))
        })?;

        if steps == 0 {
            return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)));
        }

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("motor").unwrap());

        let transitions_per_revolution = steps as u32 * PHASES_PER_STEP;

        let step_delay_us = self
            .speed
            .map(|rpm| rpm.step_delay_us(transitions_per_revolution))
            .unwrap_or(0.0);

        Ok(StepperMotor::new(
            in1,
            in2,
            in3,
            in4,
            clock,
            transitions_per_revolution,
            step_delay_us,
            name,
        ))
    }
}
