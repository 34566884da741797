//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the control policies and the fault monitor and runs
//! one full sampling cycle per [`tick`](AppService::tick). All I/O flows
//! through port traits injected at call sites, making the entire service
//! testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!                 │         AppService          │
//! ActuatorPort ◀──│  thermal · lighting · fault │──▶ DisplayPort
//!                 └────────────────────────────┘
//! ```

use log::info;

use crate::config::GreenhouseConfig;
use crate::control::lighting::{bank_states, light_level};
use crate::control::thermal::{ThermalController, ThermalState};
use crate::safety::FaultMonitor;

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates one sampling cycle at a time.
///
/// The controller is deliberately memoryless apart from the fault-hold
/// state: the valve command and last good readings survive across cycles
/// only so a faulted sensor leaves the rig where the previous cycle put it.
pub struct AppService {
    config: GreenhouseConfig,
    thermal: ThermalController,
    monitor: FaultMonitor,
    /// Applied valve demand; held across faulted readings. `Idle` before
    /// the first valid cycle — the defined safe state.
    commanded: ThermalState,
    /// Last temperature that passed validation, kept for the panel while
    /// the live reading is faulted.
    last_temp_c: Option<f32>,
    /// Same, for humidity (display only).
    last_humidity_pct: Option<f32>,
    last_lux: f32,
    last_level: u8,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from validated configuration.
    pub fn new(config: GreenhouseConfig) -> Self {
        let thermal = ThermalController::new(config.target_temp_c, config.dead_zone_c);
        Self {
            config,
            thermal,
            monitor: FaultMonitor::new(),
            commanded: ThermalState::Idle,
            last_temp_c: None,
            last_humidity_pct: None,
            last_lux: 0.0,
            last_level: 0,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Rest every actuator and announce startup.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.all_off();
        sink.emit(&AppEvent::Started);
        info!(
            "AppService started: target {:.1}°C ± {:.1}°C",
            self.config.target_temp_c, self.config.dead_zone_c
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full sampling cycle: read sensors → fault check → thermal
    /// decision → lighting decision → actuate → render the panel.
    ///
    /// The `hw` parameter satisfies all three rig-facing ports — this
    /// avoids a double mutable borrow while keeping the boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort + DisplayPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Read sensors via SensorPort
        let snap = hw.read_all();

        // 2. Fault evaluation
        let prev_faults = self.monitor.faults();
        let faults = self.monitor.evaluate(&snap);
        if faults != prev_faults {
            if faults == 0 {
                sink.emit(&AppEvent::FaultCleared);
            } else {
                sink.emit(&AppEvent::FaultDetected(faults));
            }
        }

        // 3. Thermal decision. A non-classifiable reading (NaN fault)
        //    holds the previous command rather than drifting to Idle.
        let prev_commanded = self.commanded;
        if let Some(state) = self.thermal.classify(snap.temperature_c) {
            self.commanded = state;
            self.last_temp_c = Some(snap.temperature_c);
        }
        if snap.humidity_pct.is_finite() {
            self.last_humidity_pct = Some(snap.humidity_pct);
        }
        if self.commanded != prev_commanded {
            sink.emit(&AppEvent::ThermalChanged {
                from: prev_commanded,
                to: self.commanded,
            });
        }

        // 4. Lighting decision (sentinels already collapsed to finite lux)
        self.last_lux = snap.illuminance.lux();
        self.last_level = light_level(self.last_lux, &self.config.lux_thresholds);

        // 5. Apply actuator commands via ActuatorPort
        self.apply_actuators(hw);

        // 6. Render the status panel
        self.render_display(hw);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current cycle.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            thermal: self.commanded,
            temperature_c: self.last_temp_c.unwrap_or(f32::NAN),
            humidity_pct: self.last_humidity_pct.unwrap_or(f32::NAN),
            lux: self.last_lux,
            light_level: self.last_level,
            fault_flags: self.monitor.faults(),
        }
    }

    /// Currently applied valve demand.
    pub fn thermal_state(&self) -> ThermalState {
        self.commanded
    }

    /// Grow-light level applied this cycle.
    pub fn light_level(&self) -> u8 {
        self.last_level
    }

    /// Current active fault bitmask (0 = no faults).
    pub fn fault_flags(&self) -> u8 {
        self.monitor.faults()
    }

    /// Total sampling cycles executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate the cycle's decisions into port calls. The indicator pair
    /// is mutually exclusive by construction of the three-way match.
    fn apply_actuators(&self, hw: &mut impl ActuatorPort) {
        hw.set_valve(self.commanded);
        hw.set_heat_indicator(self.commanded == ThermalState::Heating);
        hw.set_cool_indicator(self.commanded == ThermalState::Cooling);

        for (i, on) in bank_states(self.last_level).iter().enumerate() {
            hw.set_grow_lamp(i + 1, *on);
        }
    }

    fn render_display(&self, hw: &mut impl DisplayPort) {
        let temp = match self.last_temp_c {
            Some(t) => format!("{t:.1}"),
            None => "--.-".to_string(),
        };
        let humidity = match self.last_humidity_pct {
            Some(h) => format!("{h:.1}"),
            None => "--.-".to_string(),
        };
        let mut action = format!("Action:{}", self.commanded.label());
        if self.monitor.has_faults() {
            action.push_str(" FAULT");
        }

        hw.clear();
        hw.write_line(0, &format!("Temp:{temp}C Hum:{humidity}%"));
        hw.write_line(
            1,
            &format!("Lux:{:.0} Level:{}", self.last_lux, self.last_level),
        );
        hw.write_line(2, &action);
        hw.write_line(
            3,
            &format!(
                "Heat:{} Cool:{}",
                indicator_label(self.commanded == ThermalState::Heating),
                indicator_label(self.commanded == ThermalState::Cooling)
            ),
        );
    }
}

const fn indicator_label(on: bool) -> &'static str {
    if on { "ON " } else { "OFF" }
}
