//! Port traits — the hexagonal boundary between domain logic and the rig.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, the panel, event sinks) implement
//! these traits. The [`AppService`](super::service::AppService) consumes
//! them via generics, so the domain core never touches hardware directly.

use crate::control::thermal::ThermalState;
use crate::sensors::SensorSnapshot;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
pub trait SensorPort {
    /// Read every sensor and return a unified snapshot.
    fn read_all(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Route the thermal valve for the given demand.
    fn set_valve(&mut self, demand: ThermalState);

    /// Drive the heat pilot indicator.
    fn set_heat_indicator(&mut self, on: bool);

    /// Drive the cool pilot indicator.
    fn set_cool_indicator(&mut self, on: bool);

    /// Drive one grow lamp. `index` is 1-based (`1..=5`), matching the
    /// rig labels.
    fn set_grow_lamp(&mut self, index: usize, on: bool);

    /// Kill all outputs and rest the valve — safe startup/shutdown state.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → status panel)
// ───────────────────────────────────────────────────────────────

/// Presentational only: the panel accepts text and feeds nothing back
/// into control.
pub trait DisplayPort {
    fn clear(&mut self);
    fn write_line(&mut self, row: usize, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
