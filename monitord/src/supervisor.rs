use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::bpf::SharedEbpf;
use crate::capability::CapabilityReport;
use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::monitor::{FailureReason, Monitor, MonitorState};
use crate::output::OutputController;
use crate::registry::MonitorRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    New,
    Loaded,
    Running,
    Stopping,
    Stopped,
    Failed,
}

/// Drives every monitor through load -> attach -> poll loop -> stop, and
/// owns the shutdown signal every poll task selects against. One
/// supervisor per process; `run` blocks until `shutdown` is called or
/// every poll task exits.
pub struct Supervisor {
    state: SupervisorState,
    entries: Vec<(Box<dyn Monitor>, u64)>,
    bpf: SharedEbpf,
    output: Arc<OutputController>,
    metrics: Arc<Metrics>,
    cancel_tx: watch::Sender<bool>,
    cancel_rx: watch::Receiver<bool>,
    stop_timeout: Duration,
    flush_interval: Duration,
}

impl Supervisor {
    pub fn new(config: &AppConfig, bpf: SharedEbpf, output: OutputController, metrics: Arc<Metrics>) -> Self {
        let registry = MonitorRegistry::from_config(&config.monitors);
        let entries = registry.into_entries();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        Self {
            state: SupervisorState::New,
            entries,
            bpf,
            output: Arc::new(output),
            metrics,
            cancel_tx,
            cancel_rx,
            stop_timeout: Duration::from_secs(config.output.stop_timeout_secs),
            flush_interval: Duration::from_secs(config.output.flush_interval_secs),
        }
    }

    pub fn state(&self) -> SupervisorState {
        self.state
    }

    /// Loads and attaches every monitor in sequence. A single monitor
    /// failing to load is fatal (it means the BPF object is missing
    /// programs the binary expects); a single monitor failing to attach
    /// is logged and that monitor is dropped from the run so the rest of
    /// the collector still starts.
    ///
    /// Header registration (and the console-echo mode decision) happens
    /// here, after attach, because a monitor's final header shape can
    /// depend on which AttachPoint variant won (the exec monitor's
    /// tracepoint-vs-kprobe header split).
    pub async fn prepare(&mut self, caps: &CapabilityReport) -> anyhow::Result<()> {
        let mut ready = Vec::new();
        for (mut monitor, interval_ms) in std::mem::take(&mut self.entries) {
            if let Err(err) = monitor.load(&self.bpf).await {
                anyhow::bail!("failed to load monitor {}: {err}", monitor.name());
            }
            match monitor.attach(&self.bpf, caps).await {
                Ok(()) => ready.push((monitor, interval_ms)),
                Err(err) => {
                    log::error!("failed to attach monitor {}: {err}, disabling", monitor.name());
                }
            }
        }

        let active_names: Vec<&str> = ready.iter().map(|(m, _)| m.name()).collect();
        self.output.configure_console_mode(&active_names).await;
        for (monitor, _) in &ready {
            if let Err(err) = self.output.register_header(monitor.name(), monitor.csv_header()).await {
                anyhow::bail!("failed to open CSV sink for monitor {}: {err}", monitor.name());
            }
        }

        self.entries = ready;
        self.state = SupervisorState::Loaded;
        Ok(())
    }

    /// Spawns one poll task per attached monitor and waits for shutdown.
    /// Each task ticks on its own interval and stops as soon as the
    /// shared cancel signal fires.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.state = SupervisorState::Running;
        let mut handles = Vec::new();
        for (monitor, interval_ms) in self.entries.drain(..) {
            let output = self.output.clone();
            let metrics = self.metrics.clone();
            let cancel_rx = self.cancel_rx.clone();
            let stop_timeout = self.stop_timeout;
            let handle = tokio::spawn(run_monitor_loop(monitor, output, metrics, interval_ms, cancel_rx, stop_timeout));
            handles.push(handle);
        }

        let flush_handle = tokio::spawn(run_flush_loop(
            self.output.clone(),
            self.flush_interval,
            self.cancel_rx.clone(),
        ));

        for handle in handles {
            if let Err(err) = handle.await {
                log::error!("monitor poll task panicked: {err}");
            }
        }
        let _ = flush_handle.await;
        self.state = SupervisorState::Stopped;
        Ok(())
    }

    /// Signals every poll task to stop, then waits up to `stop_timeout`
    /// for them to drain and close their writers before returning.
    /// Called from the signal handler in main.
    pub async fn shutdown(&mut self) {
        self.state = SupervisorState::Stopping;
        let _ = self.cancel_tx.send(true);
        let _ = tokio::time::timeout(self.stop_timeout, self.output.close_all()).await;
    }
}

async fn run_monitor_loop(
    mut monitor: Box<dyn Monitor>,
    output: Arc<OutputController>,
    metrics: Arc<Metrics>,
    interval_ms: u64,
    mut cancel_rx: watch::Receiver<bool>,
    stop_timeout: Duration,
) {
    let handle = metrics.for_monitor(monitor.name());
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match monitor.tick(&output).await {
                    Ok(rows) => handle.inc_rows_written(rows),
                    Err(err) => {
                        log::warn!("monitor {} tick failed: {err}", monitor.name());
                        handle.inc_poll_error();
                    }
                }
                handle.inc_dropped_rows(output.dropped_rows(monitor.name()).await.saturating_sub(handle.dropped_rows()));
            }
            _ = cancel_rx.changed() => {
                if *cancel_rx.borrow() {
                    break;
                }
            }
        }
    }

    // One last sweep so the interval in flight when cancellation fired
    // isn't silently lost.
    if let Err(err) = monitor.tick(&output).await {
        log::warn!("monitor {} final drain tick failed: {err}", monitor.name());
    }

    match tokio::time::timeout(stop_timeout, monitor.stop()).await {
        Ok(()) => {
            debug_assert_eq!(monitor.state(), MonitorState::Stopped);
        }
        Err(_) => {
            log::error!("monitor {} did not stop within {stop_timeout:?}, forcing failure", monitor.name());
            monitor.fail(FailureReason::StopTimeout).await;
        }
    }
}

/// Flushes every CSV sink on a fixed interval so rows reach disk well
/// before the process exits, independent of the final flush `shutdown`
/// performs.
async fn run_flush_loop(output: Arc<OutputController>, interval: Duration, mut cancel_rx: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(1)));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(err) = output.flush_all().await {
                    log::warn!("periodic flush failed: {err}");
                }
            }
            _ = cancel_rx.changed() => {
                if *cancel_rx.borrow() {
                    break;
                }
            }
        }
    }
}
