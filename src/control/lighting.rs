//! Stepped grow-light policy.
//!
//! Five ascending lux thresholds split ambient light into six bands; darker
//! ambient light maps to a higher level and more of the bank lit. The bank
//! is driven cumulatively — lamp `i` is lit iff `level >= i` — so a level
//! fully determines the on/off pattern.

/// Number of lamps in the bank, and the maximum level.
pub const BANK_SIZE: usize = 5;

/// Map estimated lux to a grow-light level in `0..=5`.
///
/// First match wins, scanning from the darkest band upward; `lux` at or
/// above the top threshold needs no artificial light at all.
pub fn light_level(lux: f32, thresholds: &[f32; BANK_SIZE]) -> u8 {
    if lux < thresholds[0] {
        5
    } else if lux < thresholds[1] {
        4
    } else if lux < thresholds[2] {
        3
    } else if lux < thresholds[3] {
        2
    } else if lux < thresholds[4] {
        1
    } else {
        0
    }
}

/// Expand a level into the cascaded lamp pattern (index 0 = lamp 1).
pub fn bank_states(level: u8) -> [bool; BANK_SIZE] {
    let mut lamps = [false; BANK_SIZE];
    for (i, lamp) in lamps.iter_mut().enumerate() {
        *lamp = usize::from(level) > i;
    }
    lamps
}
