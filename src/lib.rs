#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod domain;
pub mod http;
pub mod lib_matrix;
pub mod metrics;
pub mod service;
pub mod shutdown;
pub mod validation;

pub use config::{Args, DEFAULT_MATRIX_SIZE};
pub use domain::{AppState, CycleConfig, CycleController, CycleState, Phase};
pub use http::serve;
pub use http::{healthz, scrape_metrics, status};
pub use lib_matrix::{run_load, Matrix};
pub use metrics::Metrics;
pub use service::{CycleDriver, CycleOutcome, CycleSummary};
pub use shutdown::Shutdown;
pub use validation::seconds_to_duration;
