//! Configuration-driven example.
//!
//! Parses a TOML motor definition and builds a motor from it by name.

use stepper_wave::{StdClock, StepperMotor};

const CONFIG: &str = r#"
[motors.turntable]
name = "Turntable"
steps_per_revolution = 2048
speed_rpm = 12.0

[motors.feeder]
name = "Feeder"
steps_per_revolution = 200
speed_rpm = 120.0
"#;

/// Mock output pin for demonstration.
struct MockPin;

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Configuration-Driven Example ===\n");

    let config = stepper_wave::config::parse_config(CONFIG)?;

    println!("Configured motors:");
    for name in config.motor_names() {
        let motor = config.motor(name).unwrap();
        println!(
            "  {} -> '{}', {} steps/rev, {} RPM ({:.1} us/transition)",
            name,
            motor.name,
            motor.steps_per_revolution,
            motor.speed.value(),
            motor.step_delay_us(),
        );
    }

    let motor = StepperMotor::builder()
        .pins(MockPin, MockPin, MockPin, MockPin)
        .clock(StdClock::new())
        .from_config(&config, "feeder")?
        .build()?;

    println!("\nRunning '{}' 10 steps forward...", motor.name());
    let motor = motor.move_blocking(10)?;
    println!("Done, settled at phase {}", motor.phase().index());

    Ok(())
}
