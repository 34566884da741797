//! Heat/cool pilot indicator outputs.
//!
//! Two discrete outputs mirroring the valve demand for at-a-glance rig
//! status. Mutual exclusion is enforced upstream by the three-way thermal
//! branch; the driver just latches what it is told.

use log::debug;

pub struct IndicatorDriver {
    heat_on: bool,
    cool_on: bool,
    heat_pin: i32,
    cool_pin: i32,
}

impl IndicatorDriver {
    pub fn new(heat_pin: i32, cool_pin: i32) -> Self {
        Self {
            heat_on: false,
            cool_on: false,
            heat_pin,
            cool_pin,
        }
    }

    pub fn set_heat(&mut self, on: bool) {
        if on != self.heat_on {
            debug!("heat indicator (pin {}): {}", self.heat_pin, on);
        }
        self.heat_on = on;
    }

    pub fn set_cool(&mut self, on: bool) {
        if on != self.cool_on {
            debug!("cool indicator (pin {}): {}", self.cool_pin, on);
        }
        self.cool_on = on;
    }

    pub fn heat_on(&self) -> bool {
        self.heat_on
    }

    pub fn cool_on(&self) -> bool {
        self.cool_on
    }
}
