#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result as AnyResult};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

use crate::domain::{CycleConfig, CycleController, Phase};
use crate::lib_matrix::run_load;
use crate::metrics::Metrics;
use crate::shutdown::Shutdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    Completed,
    Interrupted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub cycles_completed: u64,
    pub compute_calls: u64,
}

/// Working/Resting loop around [`run_load`].
#[derive(Clone)]
pub struct CycleDriver {
    config: CycleConfig,
    ctrl: CycleController,
    metrics: Metrics,
    shutdown: Shutdown,
}

impl CycleDriver {
    pub fn new(
        config: CycleConfig,
        ctrl: CycleController,
        metrics: Metrics,
        shutdown: Shutdown,
    ) -> Self {
        metrics.set_config(&config);
        Self {
            config,
            ctrl,
            metrics,
            shutdown,
        }
    }

    /// Runs cycles until shutdown fires, then writes the termination line.
    pub fn run<W: Write>(&self, out: &mut W) -> AnyResult<CycleSummary> {
        let n = self.config.matrix_size;
        writeln!(
            out,
            "Cycle: {}s work, {}s rest | Matrix: {n}x{n}",
            self.config.work_seconds(),
            self.config.rest_seconds()
        )
        .context("write banner")?;
        writeln!(out, "Press Ctrl+C to stop...").context("write banner")?;
        info!(
            work_seconds = self.config.work_seconds(),
            rest_seconds = self.config.rest_seconds(),
            matrix_size = n,
            "load cycle started"
        );
        while self.run_cycle(out)? == CycleOutcome::Completed {}
        self.stop(out)
    }

    pub fn run_cycle<W: Write>(&self, out: &mut W) -> AnyResult<CycleOutcome> {
        if self.shutdown.is_triggered() {
            return Ok(CycleOutcome::Interrupted);
        }
        writeln!(
            out,
            "[work] Loading CPU and RAM for {}s...",
            self.config.work_seconds()
        )
        .context("write work line")?;
        self.enter(Phase::Working);
        if self.work()? == CycleOutcome::Interrupted {
            return Ok(CycleOutcome::Interrupted);
        }

        writeln!(
            out,
            "[rest] Waiting {}s (RAM released)...",
            self.config.rest_seconds()
        )
        .context("write rest line")?;
        self.enter(Phase::Resting);
        if self.shutdown.wait_timeout(self.config.rest) {
            return Ok(CycleOutcome::Interrupted);
        }

        self.ctrl.record_cycle();
        self.metrics.cycles_total.inc();
        Ok(CycleOutcome::Completed)
    }

    fn work(&self) -> AnyResult<CycleOutcome> {
        let started = Instant::now();
        while started.elapsed() < self.config.work {
            if self.shutdown.is_triggered() {
                return Ok(CycleOutcome::Interrupted);
            }
            let product = run_load(self.config.matrix_size)?;
            std::hint::black_box(product);
            self.ctrl.record_compute_call();
            self.metrics.compute_calls_total.inc();
        }
        if self.shutdown.is_triggered() {
            return Ok(CycleOutcome::Interrupted);
        }
        debug!(elapsed_ms = started.elapsed().as_millis(), "work phase finished");
        Ok(CycleOutcome::Completed)
    }

    fn enter(&self, phase: Phase) {
        self.ctrl.enter(phase, chrono::Utc::now().timestamp());
        self.metrics
            .phase_working
            .set(i64::from(phase == Phase::Working));
        let seconds = match phase {
            Phase::Working => self.config.work_seconds(),
            Phase::Resting => self.config.rest_seconds(),
            Phase::Stopped => 0.0,
        };
        info!(phase = %phase, seconds, "phase entered");
    }

    fn stop<W: Write>(&self, out: &mut W) -> AnyResult<CycleSummary> {
        self.enter(Phase::Stopped);
        let st = self.ctrl.snapshot();
        info!(
            cycles = st.cycles_completed,
            compute_calls = st.compute_calls,
            "load cycle stopped"
        );
        writeln!(out, "\nProgram terminated.").context("write termination line")?;
        out.flush().context("flush output")?;
        Ok(CycleSummary {
            cycles_completed: st.cycles_completed,
            compute_calls: st.compute_calls,
        })
    }
}
