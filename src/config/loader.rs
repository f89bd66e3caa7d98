//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_wave::load_config;
///
/// let config = load_config("motors.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motors.turntable]
name = "Turntable"
steps_per_revolution = 2048
speed_rpm = 12.0
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("turntable").unwrap();
        assert_eq!(motor.steps_per_revolution, 2048);
        assert!((motor.speed.value() - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_multiple_motors() {
        let toml = r#"
[motors.feeder]
name = "Feeder"
steps_per_revolution = 200
speed_rpm = 60.0

[motors.agitator]
name = "Agitator"
steps_per_revolution = 2048
speed_rpm = 5.0
"#;

        let config = parse_config(toml).unwrap();
        let names: Vec<_> = config.motor_names().collect();
        assert!(names.contains(&"feeder"));
        assert!(names.contains(&"agitator"));
    }

    #[test]
    fn test_parse_rejects_zero_rpm() {
        let toml = r#"
[motors.bad]
name = "Bad"
steps_per_revolution = 200
speed_rpm = 0.0
"#;

        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_parse_rejects_zero_steps() {
        let toml = r#"
[motors.bad]
name = "Bad"
steps_per_revolution = 0
speed_rpm = 10.0
"#;

        assert!(parse_config(toml).is_err());
    }
}
