mod exec;
mod stats;

pub use exec::ExecMonitor;
pub use stats::StatsMonitorDriver;

use async_trait::async_trait;
use chrono::Local;

use crate::bpf::SharedEbpf;
use crate::capability::CapabilityReport;
use crate::config::MonitorConfig;
use crate::errors::{AttachError, DrainError, LoadError};
use crate::output::OutputController;

/// Why a monitor ended up in `Failed` rather than `Stopped`. Distinct from
/// [`crate::errors`] types because it survives past the call that caused
/// it, recorded on the monitor's state for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    StopTimeout,
    DrainErrors,
    AttachFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    New,
    Loaded,
    Running,
    Stopping,
    Stopped,
    Failed(FailureReason),
}

/// The start-of-tick timestamp every row of a periodic drain carries,
/// shared by every aggregating monitor and by the exec monitor for its
/// per-event rows so both report in the same two-column shape.
#[derive(Debug, Clone, Copy)]
pub struct TickStamp {
    epoch_millis: i64,
}

impl TickStamp {
    pub fn now() -> Self {
        Self {
            epoch_millis: Local::now().timestamp_millis(),
        }
    }

    /// Seconds since epoch, fixed 3 decimal places.
    pub fn epoch_str(&self) -> String {
        format!("{:.3}", self.epoch_millis as f64 / 1000.0)
    }

    /// `[YYYY-MM-DD HH:MM:SS.mmm]`.
    pub fn time_str(&self) -> String {
        let secs = self.epoch_millis.div_euclid(1000);
        let millis = self.epoch_millis.rem_euclid(1000);
        let dt = chrono::DateTime::from_timestamp(secs, 0).unwrap_or_default();
        let local = dt.with_timezone(&Local);
        format!("[{}.{millis:03}]", local.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// One kernel telemetry source: owns its BPF maps, knows how to attach
/// its programs, and knows how to turn one polling tick into CSV rows.
/// Implementations are either a [`StatsMonitorDriver`] (aggregated
/// counters, read-and-reset every tick) or the event-streamed
/// [`ExecMonitor`].
#[async_trait]
pub trait Monitor: Send + Sync {
    fn name(&self) -> &'static str;

    fn csv_header(&self) -> &[&'static str];

    fn state(&self) -> MonitorState;

    /// Header for the console mirror used when this monitor is the sole
    /// active one. Defaults to the CSV header; monitors whose console
    /// encoding diverges from their CSV encoding override it.
    fn console_header(&self) -> &[&'static str] {
        self.csv_header()
    }

    /// Formats a CSV row for console display. Default just joins with
    /// commas; monitors may pad columns for readability instead.
    fn console_format(&self, row: &[String]) -> String {
        row.join(",")
    }

    /// Takes ownership of this monitor's maps out of the shared `Ebpf`.
    async fn load(&mut self, bpf: &SharedEbpf) -> Result<(), LoadError>;

    /// Attaches this monitor's kernel programs. Caps are passed so a
    /// monitor can skip an attach point the host doesn't support.
    async fn attach(&mut self, bpf: &SharedEbpf, caps: &CapabilityReport) -> Result<(), AttachError>;

    /// Drains whatever is ready (map entries or perf-ring events) and
    /// writes rows through `output`. Returns the row count written.
    async fn tick(&mut self, output: &OutputController) -> Result<u64, DrainError>;

    async fn stop(&mut self);

    /// Forces the monitor into `Failed(reason)`, releasing whatever
    /// `stop` would release. Used when `stop` itself does not return
    /// within the configured stop timeout.
    async fn fail(&mut self, reason: FailureReason);
}

/// Builds the concrete monitor for a configured name. Unknown names are
/// rejected at config-load time, not here, so this only needs to cover
/// the fixed set of monitor kinds the collector knows about.
pub fn build_monitor(cfg: &MonitorConfig) -> Option<Box<dyn Monitor>> {
    match cfg.name.as_str() {
        "exec" => Some(Box::new(ExecMonitor::new())),
        "func" => Some(Box::new(stats::func_monitor(cfg))),
        "syscall" => Some(Box::new(stats::syscall_monitor(cfg))),
        "bio" => Some(Box::new(stats::bio_monitor(cfg))),
        "open" => Some(Box::new(stats::open_monitor(cfg))),
        "interrupt" => Some(Box::new(stats::interrupt_monitor(cfg))),
        "page_fault" => Some(Box::new(stats::page_fault_monitor(cfg))),
        "context_switch" => Some(Box::new(stats::context_switch_monitor(cfg))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(name: &str) -> MonitorConfig {
        MonitorConfig {
            name: name.to_string(),
            enabled: true,
            poll_interval_ms: 1000,
            symbols: vec!["do_sys_openat2".to_string()],
            probe_limit: 64,
            filter_pids: vec![],
            filter_uids: vec![],
            category_filter: vec![],
            min_latency_us: 0,
            min_switches: 0,
        }
    }

    #[test]
    fn builds_every_known_monitor_kind_with_a_nonempty_header() {
        for name in [
            "exec",
            "func",
            "syscall",
            "bio",
            "open",
            "interrupt",
            "page_fault",
            "context_switch",
        ] {
            let monitor = build_monitor(&config_for(name)).unwrap_or_else(|| panic!("{name} should build"));
            assert_eq!(monitor.name(), name);
            assert!(!monitor.csv_header().is_empty(), "{name} header should not be empty");
            assert_eq!(monitor.state(), MonitorState::New);
        }
    }

    #[test]
    fn unknown_name_builds_nothing() {
        assert!(build_monitor(&config_for("does_not_exist")).is_none());
    }

    #[test]
    fn tick_stamp_formats_epoch_with_three_decimals() {
        let stamp = TickStamp::now();
        let epoch = stamp.epoch_str();
        assert_eq!(epoch.split('.').nth(1).map(str::len), Some(3));
    }

    #[test]
    fn tick_stamp_time_str_is_bracketed() {
        let stamp = TickStamp::now();
        let text = stamp.time_str();
        assert!(text.starts_with('['));
        assert!(text.ends_with(']'));
    }
}
