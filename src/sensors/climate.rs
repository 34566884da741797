//! DHT22 temperature/humidity sensor.
//!
//! The DHT22 driver contract reports NaN on a failed read rather than an
//! error; the fault monitor downstream treats any non-finite value as a
//! latched sensor fault.
//!
//! ## Bench-rig design
//!
//! Readings come from a pair of static atomics so the environment simulator
//! (and the unit tests) can inject values. On a physical rig this is where
//! the single-wire protocol driver would sit.

use core::sync::atomic::{AtomicU32, Ordering};

static SIM_TEMP_BITS: AtomicU32 = AtomicU32::new(25.0f32.to_bits());
static SIM_HUMIDITY_BITS: AtomicU32 = AtomicU32::new(60.0f32.to_bits());

/// Inject the climate values the next [`ClimateSensor::read`] returns.
/// Pass NaN to emulate a failed sensor transaction.
pub fn sim_set_climate(temperature_c: f32, humidity_pct: f32) {
    SIM_TEMP_BITS.store(temperature_c.to_bits(), Ordering::Relaxed);
    SIM_HUMIDITY_BITS.store(humidity_pct.to_bits(), Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

pub struct ClimateSensor {
    _data_pin: i32,
}

impl ClimateSensor {
    pub fn new(data_pin: i32) -> Self {
        Self {
            _data_pin: data_pin,
        }
    }

    pub fn read(&self) -> ClimateReading {
        ClimateReading {
            temperature_c: f32::from_bits(SIM_TEMP_BITS.load(Ordering::Relaxed)),
            humidity_pct: f32::from_bits(SIM_HUMIDITY_BITS.load(Ordering::Relaxed)),
        }
    }
}
