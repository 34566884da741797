//! Unified error types for the Hothouse controller.
//!
//! A small surface: configuration problems are the only fatal condition in
//! the system, and sensor trouble is tracked as a latched fault bitmask
//! rather than a `Result` — the loop must keep running through it.

use core::fmt;

// ---------------------------------------------------------------------------
// Configuration errors (fatal at startup)
// ---------------------------------------------------------------------------

/// A configuration field failed range validation.
/// The `&'static str` describes which field and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Sensor faults
// ---------------------------------------------------------------------------

/// Sensor faults are accumulated in a bitfield by the fault monitor so that
/// multiple simultaneous faults can be tracked and individually cleared.
/// While any fault is latched the service holds its last good valve command
/// and flags the condition on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorFault {
    /// Temperature read back NaN/∞ from the DHT22.
    TemperatureInvalid = 0b0000_0001,
    /// Humidity read back NaN/∞ from the DHT22.
    HumidityInvalid = 0b0000_0010,
}

impl SensorFault {
    /// Return the bitmask for this fault.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for SensorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemperatureInvalid => write!(f, "temperature reading invalid"),
            Self::HumidityInvalid => write!(f, "humidity reading invalid"),
        }
    }
}
