//! LDR ambient-light sensor.
//!
//! A photoresistor in a voltage divider, read through the ADC and converted
//! to lux with the standard RL10/gamma power-law characterization. The two
//! ADC extremes are singularities of the divider algebra and come back as
//! tagged sentinels instead of NaN or infinity.
//!
//! ## Bench-rig design
//!
//! The raw count comes from a static atomic so the environment simulator
//! (and the unit tests) can inject values.

use core::sync::atomic::{AtomicU16, Ordering};

use crate::config::GreenhouseConfig;

static SIM_LIGHT_RAW: AtomicU16 = AtomicU16::new(512);

/// Inject the raw ADC count the next [`LightSensor::read`] returns.
pub fn sim_set_light_raw(raw: u16) {
    SIM_LIGHT_RAW.store(raw, Ordering::Relaxed);
}

/// Estimated illuminance, or the reason it could not be computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Illuminance {
    /// Estimated lux from the divider model. Always finite and >= 0.
    Measured(f32),
    /// ADC pinned at full scale: the LDR is effectively open — deeper
    /// darkness than the divider can resolve.
    Dark,
    /// ADC read zero: the LDR resistance collapsed — brighter than the
    /// divider can resolve.
    Saturated,
}

impl Illuminance {
    /// Lux value substituted for a saturated-bright sensor. Sits above
    /// anything the divider can resolve (raw count 1 reads ~2e6 lux with
    /// the default curve), so lux stays monotone in the ADC count.
    pub const SATURATED_LUX: f32 = 1.0e7;

    /// Collapse to a finite lux value for the policy and the display.
    pub fn lux(self) -> f32 {
        match self {
            Self::Measured(lux) => lux,
            Self::Dark => 0.0,
            Self::Saturated => Self::SATURATED_LUX,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LightReading {
    pub raw: u16,
    pub illuminance: Illuminance,
}

pub struct LightSensor {
    adc_max: u16,
    supply_voltage: f32,
    series_resistance_ohms: f32,
    rl10_kohm: f32,
    gamma: f32,
    _adc_channel: i32,
}

impl LightSensor {
    pub fn new(config: &GreenhouseConfig, adc_channel: i32) -> Self {
        Self {
            adc_max: config.adc_max,
            supply_voltage: config.supply_voltage,
            series_resistance_ohms: config.series_resistance_ohms,
            rl10_kohm: config.rl10_kohm,
            gamma: config.gamma,
            _adc_channel: adc_channel,
        }
    }

    pub fn read(&self) -> LightReading {
        let raw = SIM_LIGHT_RAW.load(Ordering::Relaxed);
        LightReading {
            raw,
            illuminance: self.illuminance(raw),
        }
    }

    /// Convert a raw ADC count to illuminance.
    ///
    /// `raw == 0` collapses the lux formula (zero LDR resistance) and
    /// `raw >= adc_max` collapses the divider formula (division by zero),
    /// so both extremes short-circuit to their sentinels before any
    /// arithmetic runs.
    pub fn illuminance(&self, raw: u16) -> Illuminance {
        if raw == 0 {
            return Illuminance::Saturated;
        }
        if raw >= self.adc_max {
            return Illuminance::Dark;
        }
        let voltage = f32::from(raw) / f32::from(self.adc_max) * self.supply_voltage;
        let r_ohms = self.series_resistance_ohms * voltage / (self.supply_voltage - voltage);
        let lux = (self.rl10_kohm * 1_000.0 * 10.0f32.powf(self.gamma) / r_ohms)
            .powf(1.0 / self.gamma);
        Illuminance::Measured(lux)
    }
}
