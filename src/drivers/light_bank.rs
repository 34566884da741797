//! Five-lamp grow-light bank.
//!
//! The lamps are independent outputs on the rig, but the policy drives them
//! cumulatively (lamp `i` lit iff level >= `i`), so the bank never shows a
//! gap in the cascade.

use log::{debug, warn};

use crate::control::lighting::BANK_SIZE;

pub struct LightBank {
    lit: [bool; BANK_SIZE],
    pins: [i32; BANK_SIZE],
}

impl LightBank {
    pub fn new(pins: [i32; BANK_SIZE]) -> Self {
        Self {
            lit: [false; BANK_SIZE],
            pins,
        }
    }

    /// Drive a single lamp. `index` is 1-based, matching the rig labels.
    pub fn set_lamp(&mut self, index: usize, on: bool) {
        if index == 0 || index > BANK_SIZE {
            warn!("light bank: lamp index {index} out of range, ignored");
            return;
        }
        let slot = index - 1;
        if self.lit[slot] != on {
            debug!("lamp {} (pin {}): {}", index, self.pins[slot], on);
        }
        self.lit[slot] = on;
    }

    pub fn all_off(&mut self) {
        for index in 1..=BANK_SIZE {
            self.set_lamp(index, false);
        }
    }

    pub fn states(&self) -> [bool; BANK_SIZE] {
        self.lit
    }

    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|on| **on).count()
    }
}
