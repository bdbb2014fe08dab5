#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result as AnyResult};
use prometheus::{Encoder, Gauge, IntCounter, IntGauge, Opts, Registry, TextEncoder};

use crate::domain::CycleConfig;

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,
    pub phase_working: IntGauge,
    pub cycles_total: IntCounter,
    pub compute_calls_total: IntCounter,
    pub matrix_size: IntGauge,
    pub work_seconds: Gauge,
    pub rest_seconds: Gauge,
}

impl Metrics {
    pub fn new() -> AnyResult<Self> {
        let registry = Registry::new();
        let phase_working = IntGauge::with_opts(Opts::new(
            "bomber_phase_working",
            "1 while the work phase is running",
        ))
        .context("create phase_working")?;
        let cycles_total =
            IntCounter::with_opts(Opts::new("bomber_cycles_total", "completed cycles"))
                .context("create cycles_total")?;
        let compute_calls_total = IntCounter::with_opts(Opts::new(
            "bomber_compute_calls_total",
            "matrix multiplications performed",
        ))
        .context("create compute_calls_total")?;
        registry
            .register(Box::new(phase_working.clone()))
            .context("register phase_working")?;
        registry
            .register(Box::new(cycles_total.clone()))
            .context("register cycles_total")?;
        registry
            .register(Box::new(compute_calls_total.clone()))
            .context("register compute_calls_total")?;
        let matrix_size =
            IntGauge::with_opts(Opts::new("bomber_matrix_size", "configured matrix side"))
                .context("create matrix_size")?;
        let work_seconds =
            Gauge::with_opts(Opts::new("bomber_work_seconds", "configured work seconds"))
                .context("create work_seconds")?;
        let rest_seconds =
            Gauge::with_opts(Opts::new("bomber_rest_seconds", "configured rest seconds"))
                .context("create rest_seconds")?;
        registry
            .register(Box::new(matrix_size.clone()))
            .context("register matrix_size")?;
        registry
            .register(Box::new(work_seconds.clone()))
            .context("register work_seconds")?;
        registry
            .register(Box::new(rest_seconds.clone()))
            .context("register rest_seconds")?;
        Ok(Self {
            registry,
            phase_working,
            cycles_total,
            compute_calls_total,
            matrix_size,
            work_seconds,
            rest_seconds,
        })
    }

    pub fn set_config(&self, config: &CycleConfig) {
        self.matrix_size
            .set(i64::try_from(config.matrix_size).unwrap_or(i64::MAX));
        self.work_seconds.set(config.work_seconds());
        self.rest_seconds.set(config.rest_seconds());
    }

    pub fn encode_text(&self) -> AnyResult<Vec<u8>> {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        let mf = self.registry.gather();
        encoder.encode(&mf, &mut buf).context("encode metrics")?;
        Ok(buf)
    }
}
