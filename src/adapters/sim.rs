//! Deterministic greenhouse environment model for the bench binary.
//!
//! Feeds the sensor injection points with a compressed diurnal cycle and a
//! first-order thermal model, and reads actuator state back from the rig so
//! the valve and the lamp bank visibly influence the readings. No RNG — a
//! demo run is reproducible end to end.

use std::f64::consts::TAU;

use crate::adapters::hardware::HardwareAdapter;
use crate::config::GreenhouseConfig;
use crate::drivers::valve::ValvePosition;
use crate::sensors::{climate, light};

/// Compressed day length so a short demo run walks every lighting band.
const DAY_PERIOD_S: f64 = 240.0;
/// Baseline night-time illuminance.
const MOON_LUX: f64 = 5.0;
/// Peak midday illuminance.
const SUN_PEAK_LUX: f64 = 60_000.0;
/// Outdoor temperature the shell leaks toward, mean and diurnal swing.
const AMBIENT_MEAN_C: f64 = 18.0;
const AMBIENT_SWING_C: f64 = 6.0;
/// Shell leak rate toward ambient (fraction per second).
const LEAK_RATE: f64 = 0.02;
/// Valve authority at full heat/cool (°C per second).
const VALVE_RATE_C_PER_S: f64 = 0.08;
/// Waste heat per lit grow lamp (°C per second).
const LAMP_HEAT_C_PER_S: f64 = 0.002;
const HUMIDITY_MEAN_PCT: f64 = 60.0;
const HUMIDITY_SWING_PCT: f64 = 15.0;

pub struct GreenhouseSim {
    adc_max: f64,
    series_resistance_ohms: f64,
    rl10_kohm: f64,
    gamma: f64,
    elapsed_s: f64,
    air_temp_c: f64,
}

impl GreenhouseSim {
    pub fn new(config: &GreenhouseConfig) -> Self {
        Self {
            adc_max: f64::from(config.adc_max),
            series_resistance_ohms: f64::from(config.series_resistance_ohms),
            rl10_kohm: f64::from(config.rl10_kohm),
            gamma: f64::from(config.gamma),
            elapsed_s: 0.0,
            // Start below the dead zone so a demo run opens with heating.
            air_temp_c: 16.0,
        }
    }

    /// Advance the environment by `dt_s` seconds and refresh the sensor
    /// injection points.
    pub fn step(&mut self, dt_s: f64, hw: &HardwareAdapter) {
        self.elapsed_s += dt_s;
        let phase = (self.elapsed_s / DAY_PERIOD_S).fract();
        let elevation = (TAU * phase).sin();

        // Shell leaks toward the diurnal ambient; the valve fights it.
        let ambient = AMBIENT_MEAN_C + AMBIENT_SWING_C * elevation;
        self.air_temp_c += (ambient - self.air_temp_c) * LEAK_RATE * dt_s;
        match hw.valve_position() {
            ValvePosition::Heat => self.air_temp_c += VALVE_RATE_C_PER_S * dt_s,
            ValvePosition::Cool => self.air_temp_c -= VALVE_RATE_C_PER_S * dt_s,
            ValvePosition::Idle => {}
        }
        self.air_temp_c += LAMP_HEAT_C_PER_S * hw.lamps_lit() as f64 * dt_s;

        // Warm daylight hours read drier, nights damper.
        let humidity = (HUMIDITY_MEAN_PCT - HUMIDITY_SWING_PCT * elevation).clamp(0.0, 100.0);

        let lux = if elevation > 0.0 {
            MOON_LUX + SUN_PEAK_LUX * elevation * elevation
        } else {
            MOON_LUX
        };

        climate::sim_set_climate(self.air_temp_c as f32, humidity as f32);
        light::sim_set_light_raw(self.lux_to_raw(lux));
    }

    /// Invert the divider model: lux → LDR resistance → ADC count.
    ///
    /// Clamped one count inside both rails; the modelled sky never reaches
    /// the sensor's singular extremes.
    fn lux_to_raw(&self, lux: f64) -> u16 {
        let r_ohms = self.rl10_kohm * 1_000.0 * 10.0f64.powf(self.gamma) / lux.powf(self.gamma);
        let raw = self.adc_max * r_ohms / (r_ohms + self.series_resistance_ohms);
        raw.round().clamp(1.0, self.adc_max - 1.0) as u16
    }
}
