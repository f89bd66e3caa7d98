//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::Rpm;
use crate::motor::PHASES_PER_STEP;

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Full steps per revolution (e.g. 2048 for a geared 28BYJ-48,
    /// 200 for a 1.8-degree motor).
    pub steps_per_revolution: u16,

    /// Rotation speed in revolutions per minute.
    #[serde(rename = "speed_rpm")]
    pub speed: Rpm,
}

impl MotorConfig {
    /// Phase transitions per revolution (each full step is realized as
    /// four wave-drive transitions).
    pub fn transitions_per_revolution(&self) -> u32 {
        self.steps_per_revolution as u32 * PHASES_PER_STEP
    }

    /// Microseconds between consecutive phase transitions at the
    /// configured speed.
    pub fn step_delay_us(&self) -> f32 {
        self.speed.step_delay_us(self.transitions_per_revolution())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_per_revolution() {
        let config = MotorConfig {
            name: String::try_from("test").unwrap(),
            steps_per_revolution: 200,
            speed: Rpm::new(60.0).unwrap(),
        };

        // 200 * 4 = 800
        assert_eq!(config.transitions_per_revolution(), 800);
        assert!((config.step_delay_us() - 1250.0).abs() < 0.01);
    }
}
