#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::Result as AnyResult;
use clap::Parser;
use std::net::SocketAddr;

use crate::domain::CycleConfig;
use crate::validation::seconds_to_duration;

pub const DEFAULT_MATRIX_SIZE: usize = 1000;

/// Alternate between matrix-multiplication load and idle rest.
#[derive(Parser, Debug, Clone)]
#[command(name = "cpu-bomber", version, about, long_about = None)]
pub struct Args {
    /// Work phase length in seconds
    #[arg(
        long = "praca",
        visible_alias = "work",
        env = "CPU_BOMBER_WORK",
        allow_negative_numbers = true
    )]
    pub work_seconds: f64,

    /// Rest phase length in seconds
    #[arg(
        long = "odpoczynek",
        visible_alias = "rest",
        env = "CPU_BOMBER_REST",
        allow_negative_numbers = true
    )]
    pub rest_seconds: f64,

    /// Matrix side length (e.g. 1000, 5000)
    #[arg(
        long = "rozmiar",
        visible_alias = "size",
        env = "CPU_BOMBER_SIZE",
        default_value_t = DEFAULT_MATRIX_SIZE
    )]
    pub matrix_size: usize,

    /// Serve /healthz, /status and /metrics on this address
    #[arg(long, env = "CPU_BOMBER_METRICS_BIND")]
    pub metrics_bind: Option<SocketAddr>,
}

impl Args {
    pub fn cycle_config(&self) -> AnyResult<CycleConfig> {
        Ok(CycleConfig {
            work: seconds_to_duration("praca", self.work_seconds)?,
            rest: seconds_to_duration("odpoczynek", self.rest_seconds)?,
            matrix_size: self.matrix_size,
        })
    }
}
