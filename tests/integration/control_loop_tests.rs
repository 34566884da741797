//! Integration tests for the AppService → policies → actuators pipeline.
//!
//! These run on the host and verify the full sensing-to-actuation chain
//! against the recording mock rig, including the display output and the
//! fault-hold behaviour.

use crate::mock_hw::{ActuatorCall, LogSink, MockHardware};

use hothouse::app::service::AppService;
use hothouse::config::GreenhouseConfig;
use hothouse::control::thermal::ThermalState;
use hothouse::pins;
use hothouse::sensors::light::{Illuminance, LightSensor};

fn make_app() -> (AppService, MockHardware, LogSink) {
    let config = GreenhouseConfig::default();
    let mut app = AppService::new(config);
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_rests_every_actuator() {
    let (_app, hw, sink) = make_app();
    assert!(hw.calls.contains(&ActuatorCall::AllOff));
    assert!(sink.contains("Started"));
}

// ── Thermal scenarios ─────────────────────────────────────────

#[test]
fn cold_reading_heats() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_climate(22.5, 60.0);
    app.tick(&mut hw, &mut sink);

    assert_eq!(app.thermal_state(), ThermalState::Heating);
    assert_eq!(hw.valve(), Some(ThermalState::Heating));
    assert!(hw.heat_on());
    assert!(!hw.cool_on());
    assert!(sink.contains("ThermalChanged"));
}

#[test]
fn hot_reading_cools() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_climate(27.5, 60.0);
    app.tick(&mut hw, &mut sink);

    assert_eq!(app.thermal_state(), ThermalState::Cooling);
    assert!(hw.cool_on());
    assert!(!hw.heat_on());
}

#[test]
fn setpoint_reading_idles() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_climate(25.0, 60.0);
    app.tick(&mut hw, &mut sink);

    assert_eq!(app.thermal_state(), ThermalState::Idle);
    assert!(!hw.heat_on());
    assert!(!hw.cool_on());
}

#[test]
fn band_bounds_idle_inclusively() {
    for boundary in [23.0, 27.0] {
        let (mut app, mut hw, mut sink) = make_app();
        hw.set_climate(boundary, 60.0);
        app.tick(&mut hw, &mut sink);
        assert_eq!(
            app.thermal_state(),
            ThermalState::Idle,
            "boundary {boundary}"
        );
    }
}

#[test]
fn indicators_are_never_both_on() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut temperature = -40.0f32;
    while temperature <= 60.0 {
        hw.set_climate(temperature, 60.0);
        app.tick(&mut hw, &mut sink);
        assert!(
            !(hw.heat_on() && hw.cool_on()),
            "both indicators on at {temperature}°C"
        );
        temperature += 0.5;
    }
}

// ── Lighting scenarios ────────────────────────────────────────

#[test]
fn dim_morning_lights_the_whole_bank() {
    let (mut app, mut hw, mut sink) = make_app();

    // Raw count 633 sits near 50 lux on the default curve — below the
    // bottom threshold, so the full bank comes on.
    let sensor = LightSensor::new(&GreenhouseConfig::default(), pins::LDR_CHANNEL);
    hw.snapshot.light_raw = 633;
    hw.snapshot.illuminance = sensor.illuminance(633);

    app.tick(&mut hw, &mut sink);
    assert_eq!(app.light_level(), 5);
    assert_eq!(hw.lamp_states(), [true; 5]);
}

#[test]
fn mid_lux_lights_three_lamps() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_lux(1_500.0);
    app.tick(&mut hw, &mut sink);

    assert_eq!(app.light_level(), 3);
    assert_eq!(hw.lamp_states(), [true, true, true, false, false]);
}

#[test]
fn bright_noon_turns_the_bank_off() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_lux(60_000.0);
    app.tick(&mut hw, &mut sink);

    assert_eq!(app.light_level(), 0);
    assert_eq!(hw.lamp_states(), [false; 5]);
}

#[test]
fn dark_sentinel_lights_the_whole_bank() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.snapshot.light_raw = 1024;
    hw.snapshot.illuminance = Illuminance::Dark;
    app.tick(&mut hw, &mut sink);
    assert_eq!(app.light_level(), 5);
}

#[test]
fn saturated_sentinel_turns_the_bank_off() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.snapshot.light_raw = 0;
    hw.snapshot.illuminance = Illuminance::Saturated;
    app.tick(&mut hw, &mut sink);
    assert_eq!(app.light_level(), 0);
}

// ── Display ───────────────────────────────────────────────────

#[test]
fn panel_rows_render_the_cycle() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_climate(25.0, 60.0);
    hw.set_lux(1_500.0);
    app.tick(&mut hw, &mut sink);

    assert_eq!(hw.line(0), "Temp:25.0C Hum:60.0%");
    assert_eq!(hw.line(1), "Lux:1500 Level:3");
    assert_eq!(hw.line(2), "Action:IDLE");
    assert_eq!(hw.line(3), "Heat:OFF Cool:OFF");
    assert_eq!(hw.clears, 1);
}

#[test]
fn heating_cycle_shows_on_the_panel() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_climate(21.0, 55.0);
    app.tick(&mut hw, &mut sink);

    assert_eq!(hw.line(2), "Action:HEAT");
    assert_eq!(hw.line(3), "Heat:ON  Cool:OFF");
}

// ── Fault handling ────────────────────────────────────────────

#[test]
fn nan_temperature_holds_the_previous_command() {
    let (mut app, mut hw, mut sink) = make_app();

    hw.set_climate(22.0, 60.0);
    app.tick(&mut hw, &mut sink);
    assert_eq!(app.thermal_state(), ThermalState::Heating);

    hw.set_climate(f32::NAN, 60.0);
    app.tick(&mut hw, &mut sink);

    // Valve stays where the last good cycle put it.
    assert_eq!(app.thermal_state(), ThermalState::Heating);
    assert_eq!(hw.valve(), Some(ThermalState::Heating));
    assert!(hw.heat_on());
    assert_ne!(app.fault_flags(), 0);
    assert!(sink.contains("FaultDetected"));
    assert_eq!(hw.line(2), "Action:HEAT FAULT");
    // Last good reading stays on the panel.
    assert_eq!(hw.line(0), "Temp:22.0C Hum:60.0%");
}

#[test]
fn recovery_clears_the_fault_and_reclassifies() {
    let (mut app, mut hw, mut sink) = make_app();

    hw.set_climate(22.0, 60.0);
    app.tick(&mut hw, &mut sink);
    hw.set_climate(f32::NAN, 60.0);
    app.tick(&mut hw, &mut sink);

    hw.set_climate(26.0, 60.0);
    app.tick(&mut hw, &mut sink);

    assert_eq!(app.fault_flags(), 0);
    assert_eq!(app.thermal_state(), ThermalState::Idle);
    assert!(sink.contains("FaultCleared"));
    assert_eq!(hw.line(2), "Action:IDLE");
}

#[test]
fn first_cycle_fault_lands_in_the_safe_state() {
    let (mut app, mut hw, mut sink) = make_app();

    hw.set_climate(f32::NAN, f32::NAN);
    app.tick(&mut hw, &mut sink);

    assert_eq!(app.thermal_state(), ThermalState::Idle);
    assert!(!hw.heat_on());
    assert!(!hw.cool_on());
    assert_eq!(hw.line(0), "Temp:--.-C Hum:--.-%");
    assert_eq!(hw.line(2), "Action:IDLE FAULT");
}

#[test]
fn lighting_keeps_running_through_a_climate_fault() {
    let (mut app, mut hw, mut sink) = make_app();

    hw.set_climate(f32::NAN, 60.0);
    hw.set_lux(1_500.0);
    app.tick(&mut hw, &mut sink);

    // The light path is independent of the climate sensor.
    assert_eq!(app.light_level(), 3);
    assert_eq!(hw.lamp_states(), [true, true, true, false, false]);
}

// ── Telemetry ─────────────────────────────────────────────────

#[test]
fn telemetry_reflects_the_cycle() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_climate(27.5, 48.0);
    hw.set_lux(250.0);
    app.tick(&mut hw, &mut sink);

    let t = app.build_telemetry();
    assert_eq!(t.thermal, ThermalState::Cooling);
    assert!((t.temperature_c - 27.5).abs() < f32::EPSILON);
    assert!((t.humidity_pct - 48.0).abs() < f32::EPSILON);
    assert_eq!(t.light_level, 4);
    assert_eq!(t.fault_flags, 0);
    assert_eq!(app.tick_count(), 1);
}
