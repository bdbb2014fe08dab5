#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{bail, Result as AnyResult};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    Working,
    Resting,
    Stopped,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Working => f.write_str("WORKING"),
            Phase::Resting => f.write_str("RESTING"),
            Phase::Stopped => f.write_str("STOPPED"),
        }
    }
}

impl FromStr for Phase {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> AnyResult<Self> {
        match s {
            "WORKING" => Ok(Self::Working),
            "RESTING" => Ok(Self::Resting),
            "STOPPED" => Ok(Self::Stopped),
            other => bail!(format!("unsupported phase: {other}")),
        }
    }
}

/// Parameters fixed at process start.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleConfig {
    pub work: Duration,
    pub rest: Duration,
    pub matrix_size: usize,
}

impl CycleConfig {
    pub fn work_seconds(&self) -> f64 {
        self.work.as_secs_f64()
    }

    pub fn rest_seconds(&self) -> f64 {
        self.rest.as_secs_f64()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CycleState {
    pub phase: Phase,
    pub cycles_completed: u64,
    pub compute_calls: u64,
    pub phase_started_ts_seconds: i64,
    pub work_seconds: f64,
    pub rest_seconds: f64,
    pub matrix_size: usize,
}

#[derive(Clone, Default)]
pub struct CycleController {
    pub state: Arc<Mutex<CycleState>>,
}

impl CycleController {
    pub fn new(config: &CycleConfig) -> Self {
        let state = CycleState {
            work_seconds: config.work_seconds(),
            rest_seconds: config.rest_seconds(),
            matrix_size: config.matrix_size,
            ..CycleState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn enter(&self, phase: Phase, now_ts: i64) {
        let mut st = self.state.lock();
        st.phase = phase;
        st.phase_started_ts_seconds = now_ts;
    }

    pub fn record_compute_call(&self) {
        self.state.lock().compute_calls += 1;
    }

    pub fn record_cycle(&self) {
        self.state.lock().cycles_completed += 1;
    }

    pub fn snapshot(&self) -> CycleState {
        self.state.lock().clone()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub ctrl: CycleController,
    pub metrics: crate::metrics::Metrics,
}
