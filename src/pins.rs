//! Rig pin map.
//!
//! Matches the bench wiring diagram. The simulated drivers carry these so
//! their log lines name the same pins the physical rig uses.

/// DHT22 single-wire data pin.
pub const DHT_PIN: i32 = 2;

/// LDR analog input (A0).
pub const LDR_CHANNEL: i32 = 0;

/// Grow-light bank, lamp 1 through lamp 5.
pub const GROW_LAMP_PINS: [i32; 5] = [3, 4, 5, 6, 7];

/// Thermal valve servo PWM pin.
pub const SERVO_PIN: i32 = 9;

/// Heat pilot indicator output.
pub const HEAT_INDICATOR_PIN: i32 = 10;

/// Cool pilot indicator output.
pub const COOL_INDICATOR_PIN: i32 = 11;
