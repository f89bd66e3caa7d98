//! Basic motor control example.
//!
//! Builds a wave-drive motor over mock pins, sets a speed, and runs a few
//! relative moves both blocking and cooperatively.
//!
//! This example uses simple mock pins so it runs without real hardware.

use stepper_wave::{Rpm, StdClock, StepperMotor};

/// Mock output pin for demonstration.
struct MockPin {
    label: &'static str,
    state: bool,
}

impl MockPin {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            state: false,
        }
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.state {
            println!("  {} energized", self.label);
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Basic Motor Control Example ===\n");

    let mut motor = StepperMotor::builder()
        .pins(
            MockPin::new("IN1"),
            MockPin::new("IN2"),
            MockPin::new("IN3"),
            MockPin::new("IN4"),
        )
        .clock(StdClock::new())
        .name("demo")
        .steps_per_revolution(200)
        .build()?;

    motor.set_speed(Rpm::new(120.0)?);
    println!(
        "Motor '{}': {} transitions/rev, {} us between transitions\n",
        motor.name(),
        motor.transitions_per_revolution(),
        motor.step_delay_us()
    );

    println!("Moving 4 steps forward (blocking)...");
    let motor = motor.move_blocking(4)?;
    println!("Settled at phase {}\n", motor.phase().index());

    println!("Moving 4 steps back, one poll at a time...");
    let mut moving = motor.move_relative(-4);
    while !moving.poll()? {
        // A real caller could sleep or do other work here.
        std::thread::yield_now();
    }
    let motor = moving.finish();

    println!(
        "Settled at phase {}, direction {:?}, state {}",
        motor.phase().index(),
        motor.direction(),
        motor.state_name()
    );

    Ok(())
}
