#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result as AnyResult};
use clap::Parser;
use cpu_bomber::{serve, AppState, Args, CycleController, CycleDriver, Metrics, Shutdown};
use tracing::{info, warn};

fn init_tracing() {
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    fmt.json().init();
}

/// Signal streams registered up front so a signal sent as soon as the load
/// loop starts is never handled by the default disposition.
struct SignalWatcher {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl SignalWatcher {
    #[cfg(unix)]
    fn install() -> AnyResult<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self {
            interrupt: signal(SignalKind::interrupt()).context("install SIGINT handler")?,
            terminate: signal(SignalKind::terminate()).context("install SIGTERM handler")?,
        })
    }

    #[cfg(not(unix))]
    fn install() -> AnyResult<Self> {
        Ok(Self {})
    }

    #[cfg(unix)]
    async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "interrupt",
            _ = self.terminate.recv() => "terminate",
        }
    }

    #[cfg(not(unix))]
    async fn recv(&mut self) -> &'static str {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error=%e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
        "interrupt"
    }
}

/// First signal stops the loop after the in-flight multiplication; a second
/// one exits at once.
async fn watch_signals(mut signals: SignalWatcher, shutdown: Shutdown) {
    let kind = signals.recv().await;
    info!(signal = kind, "shutdown requested");
    shutdown.trigger();
    let kind = signals.recv().await;
    warn!(signal = kind, "second signal, exiting without waiting for the load loop");
    std::process::exit(130);
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    let args = Args::parse();
    init_tracing();
    let config = args.cycle_config()?;
    let metrics = Metrics::new().context("metrics init")?;
    let ctrl = CycleController::new(&config);
    let shutdown = Shutdown::new();

    let server = match args.metrics_bind {
        Some(bind) => {
            let state = AppState {
                ctrl: ctrl.clone(),
                metrics: metrics.clone(),
            };
            let srv = serve(bind, state).context("bind status endpoint")?;
            let handle = srv.handle();
            Some((handle, tokio::spawn(srv)))
        }
        None => None,
    };

    let signals = SignalWatcher::install()?;
    tokio::spawn(watch_signals(signals, shutdown.clone()));

    let driver = CycleDriver::new(config, ctrl, metrics, shutdown);
    let summary = tokio::task::spawn_blocking(move || driver.run(&mut std::io::stdout().lock()))
        .await
        .context("load loop aborted")??;

    if let Some((handle, task)) = server {
        handle.stop(true).await;
        match task.await {
            Ok(Err(e)) => warn!(error=%e, "status endpoint exited with error"),
            Err(e) => warn!(error=%e, "status endpoint task failed"),
            Ok(Ok(())) => {}
        }
    }
    info!(
        cycles = summary.cycles_completed,
        compute_calls = summary.compute_calls,
        "exiting"
    );
    Ok(())
}
