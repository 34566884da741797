//! Thermal valve servo driver.
//!
//! The valve is a hobby servo on the rig: 0° routes full heat, 90° is the
//! neutral rest position, 180° routes full cooling. The driver is a dumb
//! actuator — deciding *when* to move is the service's job.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValvePosition {
    Heat,
    Idle,
    Cool,
}

impl ValvePosition {
    /// Servo angle commanded for this position.
    pub const fn angle_deg(self) -> u16 {
        match self {
            Self::Heat => 0,
            Self::Idle => 90,
            Self::Cool => 180,
        }
    }
}

pub struct ValveDriver {
    position: ValvePosition,
    servo_pin: i32,
}

impl ValveDriver {
    /// Starts at the neutral rest position, matching rig power-up.
    pub fn new(servo_pin: i32) -> Self {
        Self {
            position: ValvePosition::Idle,
            servo_pin,
        }
    }

    pub fn set_position(&mut self, position: ValvePosition) {
        if position != self.position {
            debug!(
                "valve (pin {}): {:?} -> {:?} ({}°)",
                self.servo_pin,
                self.position,
                position,
                position.angle_deg()
            );
        }
        self.position = position;
    }

    pub fn position(&self) -> ValvePosition {
        self.position
    }

    pub fn angle_deg(&self) -> u16 {
        self.position.angle_deg()
    }
}
