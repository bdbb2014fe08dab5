#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use cpu_bomber::domain::{CycleConfig, CycleController, Phase};
use std::str::FromStr;
use std::time::Duration;

fn config() -> CycleConfig {
    CycleConfig {
        work: Duration::from_millis(1500),
        rest: Duration::from_secs(2),
        matrix_size: 64,
    }
}

#[test]
fn phase_display_roundtrip() {
    for p in [Phase::Working, Phase::Resting, Phase::Stopped] {
        assert_eq!(Phase::from_str(&p.to_string()).expect("parse"), p);
    }
}

#[test]
fn phase_unknown_rejected() {
    assert!(Phase::from_str("SLEEPING").is_err());
}

#[test]
fn controller_starts_from_config() {
    let ctrl = CycleController::new(&config());
    let st = ctrl.snapshot();
    assert_eq!(st.phase, Phase::Working);
    assert_eq!(st.matrix_size, 64);
    assert!((st.work_seconds - 1.5).abs() < f64::EPSILON);
    assert!((st.rest_seconds - 2.0).abs() < f64::EPSILON);
    assert_eq!(st.cycles_completed, 0);
}

#[test]
fn controller_tracks_phase_and_counters() {
    let ctrl = CycleController::new(&config());
    ctrl.enter(Phase::Resting, 1000);
    ctrl.record_compute_call();
    ctrl.record_compute_call();
    ctrl.record_cycle();
    let st = ctrl.snapshot();
    assert_eq!(st.phase, Phase::Resting);
    assert_eq!(st.phase_started_ts_seconds, 1000);
    assert_eq!(st.compute_calls, 2);
    assert_eq!(st.cycles_completed, 1);
}

#[test]
fn state_serializes_phase_as_screaming_case() {
    let ctrl = CycleController::new(&config());
    let v = serde_json::to_value(ctrl.snapshot()).expect("json");
    assert_eq!(v["phase"], "WORKING");
}
