//! Configuration validation.
//!
//! Checks constraints that the serde layer cannot express on its own.

use crate::error::{ConfigError, Result};

use super::SystemConfig;

/// Validate a parsed configuration.
///
/// Speed values are already validated by the [`Rpm`](super::units::Rpm)
/// deserializer; this pass covers the remaining numeric constraints.
///
/// # Errors
///
/// Returns `ConfigError::InvalidStepsPerRevolution` if any motor declares
/// a zero step count.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, motor) in config.motors.iter() {
        if motor.steps_per_revolution == 0 {
            return Err(ConfigError::InvalidStepsPerRevolution(0).into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Rpm;
    use crate::config::MotorConfig;

    fn config_with_steps(steps: u16) -> SystemConfig {
        let mut config = SystemConfig::default();
        let motor = MotorConfig {
            name: heapless::String::try_from("test").unwrap(),
            steps_per_revolution: steps,
            speed: Rpm::new(10.0).unwrap(),
        };
        config
            .motors
            .insert(heapless::String::try_from("test").unwrap(), motor)
            .unwrap();
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&config_with_steps(200)).is_ok());
    }

    #[test]
    fn test_zero_steps_rejected() {
        let result = validate_config(&config_with_steps(0));
        assert_eq!(
            result,
            Err(ConfigError::InvalidStepsPerRevolution(0).into())
        );
    }
}
