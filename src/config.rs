//! System configuration parameters
//!
//! All tunable parameters for the Hothouse controller. A single immutable
//! [`GreenhouseConfig`] is built at startup, validated once, and shared with
//! every component for the lifetime of the process.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreenhouseConfig {
    // --- Thermal control ---
    /// Setpoint temperature (Celsius)
    pub target_temp_c: f32,
    /// Half-width of the idle band around the setpoint (Celsius).
    /// Below `target - dead_zone` the valve heats; above `target + dead_zone`
    /// it cools; inside the band (bounds inclusive) it rests.
    pub dead_zone_c: f32,

    // --- Light sensing (LDR voltage divider) ---
    /// Full-scale ADC count of the light input
    pub adc_max: u16,
    /// Divider supply rail (volts)
    pub supply_voltage: f32,
    /// Fixed series resistor of the divider (ohms)
    pub series_resistance_ohms: f32,
    /// LDR resistance at 10 lux (kilo-ohms) — datasheet calibration point
    pub rl10_kohm: f32,
    /// LDR gamma exponent — datasheet calibration point
    pub gamma: f32,

    // --- Lighting policy ---
    /// Ascending lux thresholds separating the six grow-light bands.
    /// Ambient light below `lux_thresholds[0]` lights the whole bank.
    pub lux_thresholds: [f32; 5],

    // --- Timing ---
    /// Sampling cycle period (milliseconds)
    pub sample_period_ms: u32,
}

impl Default for GreenhouseConfig {
    fn default() -> Self {
        Self {
            // Thermal
            target_temp_c: 25.0,
            dead_zone_c: 2.0,

            // LDR divider (10-bit ADC, 5 V rail, 10 kOhm series resistor)
            adc_max: 1024,
            supply_voltage: 5.0,
            series_resistance_ohms: 10_000.0,
            rl10_kohm: 50.0,
            gamma: 0.7,

            // Lighting bands
            lux_thresholds: [100.0, 500.0, 2_000.0, 10_000.0, 50_000.0],

            // Timing
            sample_period_ms: 2_000, // 0.5 Hz
        }
    }
}

impl GreenhouseConfig {
    /// Validate the configuration once at startup.
    ///
    /// A bad threshold ladder or a non-positive dead zone would make the
    /// control branches undefined, so the process must refuse to run rather
    /// than start with it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target_temp_c.is_finite() {
            return Err(ConfigError::Invalid("target temperature must be finite"));
        }
        if !(self.dead_zone_c.is_finite() && self.dead_zone_c > 0.0) {
            return Err(ConfigError::Invalid("dead zone half-width must be > 0"));
        }
        if self.adc_max == 0 {
            return Err(ConfigError::Invalid("ADC full scale must be > 0"));
        }
        if !(self.supply_voltage.is_finite() && self.supply_voltage > 0.0) {
            return Err(ConfigError::Invalid("supply voltage must be > 0"));
        }
        if !(self.series_resistance_ohms.is_finite() && self.series_resistance_ohms > 0.0) {
            return Err(ConfigError::Invalid("series resistance must be > 0"));
        }
        if !(self.rl10_kohm.is_finite() && self.rl10_kohm > 0.0) {
            return Err(ConfigError::Invalid("RL10 reference resistance must be > 0"));
        }
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(ConfigError::Invalid("gamma exponent must be > 0"));
        }
        if self.lux_thresholds.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(ConfigError::Invalid("lux thresholds must be positive"));
        }
        if !self.lux_thresholds.windows(2).all(|w| w[0] < w[1]) {
            return Err(ConfigError::Invalid(
                "lux thresholds must be strictly ascending",
            ));
        }
        if self.sample_period_ms == 0 {
            return Err(ConfigError::Invalid("sample period must be > 0"));
        }
        Ok(())
    }
}
