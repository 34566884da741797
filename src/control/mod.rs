//! Control policies — pure decision logic, zero I/O.
//!
//! Both policies are plain functions of the current reading and the fixed
//! configuration; neither keeps history. The service layer translates their
//! outputs into actuator port calls.

pub mod lighting;
pub mod thermal;
