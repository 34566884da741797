//! Hothouse controller library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. The binary in `main.rs` wires them to the simulated bench
//! rig and runs the sampling loop.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod safety;

pub mod adapters;
pub mod drivers;
pub mod sensors;

pub mod pins;
