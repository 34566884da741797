//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the Hothouse controller:
//! per-cycle orchestration, fault handling, and the translation of control
//! decisions into actuator commands. All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without the rig.

pub mod events;
pub mod ports;
pub mod service;
