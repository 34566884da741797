//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! process log. A future network or MQTT adapter would implement the same
//! trait.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                debug!(
                    "TELEM | {:?} | T={:.1}°C RH={:.1}% | lux={:.0} level={} | faults=0b{:02b}",
                    t.thermal, t.temperature_c, t.humidity_pct, t.lux, t.light_level, t.fault_flags,
                );
            }
            AppEvent::ThermalChanged { from, to } => {
                info!("VALVE | {:?} -> {:?}", from, to);
            }
            AppEvent::FaultDetected(flags) => {
                warn!("FAULT | detected, flags=0b{:02b}", flags);
            }
            AppEvent::FaultCleared => {
                info!("FAULT | all cleared");
            }
            AppEvent::Started => {
                info!("START | actuators rested, control loop armed");
            }
        }
    }
}
