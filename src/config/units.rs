//! Unit types for physical quantities.
//!
//! Provides a validated rotation-speed type so a zero or negative RPM can
//! never reach the step-delay division.

use serde::Deserialize;

use crate::error::ConfigError;

/// Rotation speed in revolutions per minute.
///
/// Validated at construction: the value must be finite and strictly
/// positive. This guarantees the derived step delay is always a positive,
/// finite number of microseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rpm(f32);

impl Rpm {
    /// Create a new Rpm value with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRpm` if the value is not finite or
    /// not strictly positive.
    pub fn new(value: f32) -> Result<Self, ConfigError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidRpm(value))
        }
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Microseconds between consecutive phase transitions at this speed,
    /// for a motor with the given number of transitions per revolution.
    #[inline]
    pub fn step_delay_us(self, transitions_per_revolution: u32) -> f32 {
        60_000_000.0 / (transitions_per_revolution as f32 * self.0)
    }
}

impl TryFrom<f32> for Rpm {
    type Error = ConfigError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Rpm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = f32::deserialize(deserializer)?;
        Rpm::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
