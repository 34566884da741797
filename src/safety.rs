//! Sensor-fault supervision.
//!
//! The monitor runs **every cycle before the control decisions** and
//! accumulates a fault bitmask from the latest snapshot. A faulted reading
//! must neither crash the loop nor silently command an unsafe valve
//! position: while a fault is latched the service holds its last good
//! command and flags the condition on the display.
//!
//! ## Fault lifecycle
//!
//! 1. A reading comes back non-finite (DHT22 transaction failure).
//! 2. The monitor sets the corresponding bit and logs the edge.
//! 3. Each subsequent cycle re-evaluates; a good reading clears the bit.
//! 4. The service resumes normal classification once the mask is empty.

use log::{error, info};

use crate::error::SensorFault;
use crate::sensors::SensorSnapshot;

/// Latched sensor-fault monitor.
pub struct FaultMonitor {
    faults: u8,
}

impl FaultMonitor {
    pub fn new() -> Self {
        Self { faults: 0 }
    }

    /// Evaluate all fault conditions against the latest snapshot.
    /// Returns the updated fault bitmask.
    pub fn evaluate(&mut self, snap: &SensorSnapshot) -> u8 {
        self.eval_fault(
            SensorFault::TemperatureInvalid,
            !snap.temperature_c.is_finite(),
        );
        self.eval_fault(SensorFault::HumidityInvalid, !snap.humidity_pct.is_finite());
        self.faults
    }

    /// Current fault bitmask.
    pub fn faults(&self) -> u8 {
        self.faults
    }

    /// True if **any** fault is active.
    pub fn has_faults(&self) -> bool {
        self.faults != 0
    }

    /// Check if a specific fault is active.
    pub fn has_fault(&self, fault: SensorFault) -> bool {
        self.faults & fault.mask() != 0
    }

    // ── Internal ──────────────────────────────────────────────────

    /// Set or clear a fault bit based on a boolean condition.
    fn eval_fault(&mut self, fault: SensorFault, condition: bool) {
        if condition {
            if self.faults & fault.mask() == 0 {
                error!("SENSOR FAULT SET: {fault}");
            }
            self.faults |= fault.mask();
        } else {
            if self.faults & fault.mask() != 0 {
                info!("SENSOR FAULT CLEARED: {fault}");
            }
            self.faults &= !fault.mask();
        }
    }
}

impl Default for FaultMonitor {
    fn default() -> Self {
        Self::new()
    }
}
