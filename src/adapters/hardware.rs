//! Rig adapter — bridges the bench drivers to the domain port traits.
//!
//! Owns the [`SensorHub`] and every actuator/display driver, exposing them
//! through [`SensorPort`], [`ActuatorPort`] and [`DisplayPort`]. This is
//! the only module in the system that touches the drivers directly.

use crate::app::ports::{ActuatorPort, DisplayPort, SensorPort};
use crate::control::thermal::ThermalState;
use crate::drivers::display::StatusPanel;
use crate::drivers::indicators::IndicatorDriver;
use crate::drivers::light_bank::LightBank;
use crate::drivers::valve::{ValveDriver, ValvePosition};
use crate::sensors::{SensorHub, SensorSnapshot};

/// Concrete adapter that combines the whole rig behind port traits.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
    valve: ValveDriver,
    indicators: IndicatorDriver,
    light_bank: LightBank,
    panel: StatusPanel,
}

impl HardwareAdapter {
    pub fn new(
        sensor_hub: SensorHub,
        valve: ValveDriver,
        indicators: IndicatorDriver,
        light_bank: LightBank,
        panel: StatusPanel,
    ) -> Self {
        Self {
            sensor_hub,
            valve,
            indicators,
            light_bank,
            panel,
        }
    }

    // ── State feedback for the environment simulator ──────────

    pub fn valve_position(&self) -> ValvePosition {
        self.valve.position()
    }

    pub fn lamps_lit(&self) -> usize {
        self.light_bank.lit_count()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_all(&mut self) -> SensorSnapshot {
        self.sensor_hub.read_all()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_valve(&mut self, demand: ThermalState) {
        let position = match demand {
            ThermalState::Heating => ValvePosition::Heat,
            ThermalState::Idle => ValvePosition::Idle,
            ThermalState::Cooling => ValvePosition::Cool,
        };
        self.valve.set_position(position);
    }

    fn set_heat_indicator(&mut self, on: bool) {
        self.indicators.set_heat(on);
    }

    fn set_cool_indicator(&mut self, on: bool) {
        self.indicators.set_cool(on);
    }

    fn set_grow_lamp(&mut self, index: usize, on: bool) {
        self.light_bank.set_lamp(index, on);
    }

    fn all_off(&mut self) {
        self.valve.set_position(ValvePosition::Idle);
        self.indicators.set_heat(false);
        self.indicators.set_cool(false);
        self.light_bank.all_off();
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl DisplayPort for HardwareAdapter {
    fn clear(&mut self) {
        self.panel.clear();
    }

    fn write_line(&mut self, row: usize, text: &str) {
        self.panel.write_line(row, text);
    }
}
