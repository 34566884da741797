//! Hothouse controller — main entry point.
//!
//! Hexagonal architecture around a fixed-period sampling loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  HardwareAdapter            LogEventSink   GreenhouseSim │
//! │  (Sensor+Actuator+Display)  (EventSink)    (environment) │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)             │      │
//! │  │  thermal dead zone · lux ladder · fault hold   │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! One cycle per period: read → decide → actuate → report → sleep.
#![deny(unused_must_use)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use hothouse::adapters::hardware::HardwareAdapter;
use hothouse::adapters::log_sink::LogEventSink;
use hothouse::adapters::sim::GreenhouseSim;
use hothouse::app::events::AppEvent;
use hothouse::app::ports::EventSink;
use hothouse::app::service::AppService;
use hothouse::config::GreenhouseConfig;
use hothouse::drivers::display::StatusPanel;
use hothouse::drivers::indicators::IndicatorDriver;
use hothouse::drivers::light_bank::LightBank;
use hothouse::drivers::valve::ValveDriver;
use hothouse::pins;
use hothouse::sensors::climate::ClimateSensor;
use hothouse::sensors::light::LightSensor;
use hothouse::sensors::SensorHub;

/// Raised to end the sampling loop. Nothing raises it in the bench binary
/// today — the rig runs until power-down — but the loop contract keeps an
/// explicit stop signal rather than an unbreakable `loop`.
static STOP: AtomicBool = AtomicBool::new(false);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Hothouse v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Configuration (fixed constants, validated once) ────
    let config = GreenhouseConfig::default();
    config
        .validate()
        .context("refusing to start with an invalid configuration")?;

    // ── 2. Construct the rig ──────────────────────────────────
    let sensor_hub = SensorHub::new(
        ClimateSensor::new(pins::DHT_PIN),
        LightSensor::new(&config, pins::LDR_CHANNEL),
    );
    let mut hw = HardwareAdapter::new(
        sensor_hub,
        ValveDriver::new(pins::SERVO_PIN),
        IndicatorDriver::new(pins::HEAT_INDICATOR_PIN, pins::COOL_INDICATOR_PIN),
        LightBank::new(pins::GROW_LAMP_PINS),
        StatusPanel::new(),
    );

    let mut sink = LogEventSink::new();
    let mut sim = GreenhouseSim::new(&config);

    // ── 3. Construct and start the service ────────────────────
    let mut app = AppService::new(config.clone());
    app.start(&mut hw, &mut sink);

    info!("System ready. Entering sampling loop.");
    run_loop(&config, &mut app, &mut hw, &mut sim, &mut sink, &STOP);

    info!("Stop signal received after {} cycles.", app.tick_count());
    Ok(())
}

/// The sampling loop: advance the environment, run one control cycle, emit
/// telemetry, sleep one period. Runs until `stop` is raised.
fn run_loop(
    config: &GreenhouseConfig,
    app: &mut AppService,
    hw: &mut HardwareAdapter,
    sim: &mut GreenhouseSim,
    sink: &mut LogEventSink,
    stop: &AtomicBool,
) {
    let period = Duration::from_millis(u64::from(config.sample_period_ms));

    while !stop.load(Ordering::Relaxed) {
        sim.step(period.as_secs_f64(), hw);
        app.tick(hw, sink);
        sink.emit(&AppEvent::Telemetry(app.build_telemetry()));
        std::thread::sleep(period);
    }
}
