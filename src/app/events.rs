//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — today that is the serial log.

use crate::control::thermal::ThermalState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The controller has started and rested all actuators.
    Started,

    /// The valve demand changed between cycles.
    ThermalChanged {
        from: ThermalState,
        to: ThermalState,
    },

    /// One or more sensor faults were raised.
    FaultDetected(u8),

    /// All sensor faults have been cleared.
    FaultCleared,

    /// Per-cycle telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    pub thermal: ThermalState,
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub lux: f32,
    pub light_level: u8,
    pub fault_flags: u8,
}
