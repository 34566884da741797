//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns both sensor drivers and produces a [`SensorSnapshot`] each
//! cycle. Raw readings pass through unfiltered: validity is judged by the
//! fault monitor, not here.

pub mod climate;
pub mod light;

use climate::ClimateSensor;
use light::{Illuminance, LightSensor};

/// A point-in-time snapshot of every sensor on the rig.
#[derive(Debug, Clone, Copy)]
pub struct SensorSnapshot {
    /// Air temperature (°C); NaN on a DHT22 read failure.
    pub temperature_c: f32,
    /// Relative humidity (%RH); NaN on a DHT22 read failure.
    pub humidity_pct: f32,
    /// Raw LDR ADC count (0 to full scale).
    pub light_raw: u16,
    /// Illuminance derived from `light_raw`.
    pub illuminance: Illuminance,
}

/// Aggregates the sensor drivers and produces a unified snapshot.
pub struct SensorHub {
    climate: ClimateSensor,
    light: LightSensor,
}

impl SensorHub {
    pub fn new(climate: ClimateSensor, light: LightSensor) -> Self {
        Self { climate, light }
    }

    /// Read every sensor once. Never fails: a bad reading is carried as
    /// NaN (climate) or a sentinel (light) for downstream handling.
    pub fn read_all(&mut self) -> SensorSnapshot {
        let climate = self.climate.read();
        let light = self.light.read();

        SensorSnapshot {
            temperature_c: climate.temperature_c,
            humidity_pct: climate.humidity_pct,
            light_raw: light.raw,
            illuminance: light.illuminance,
        }
    }
}
