use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "/etc/ebpf-monitor/monitor.yaml";
const ENV_CONFIG_PATH: &str = "EBPF_MONITOR_CONFIG";

/// Top-level configuration tree. Loaded once at startup and handed to the
/// application context; nothing downstream mutates it.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "default_monitors")]
    pub monitors: Vec<MonitorConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            monitors: default_monitors(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file. The path can be overridden with the
    /// `EBPF_MONITOR_CONFIG` environment variable. If the file is missing
    /// or fails to parse, defaults are returned rather than failing
    /// startup outright; `ensure_environment` is what actually gates
    /// whether the daemon can run.
    pub fn load() -> Self {
        let path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&PathBuf::from(path))
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => serde_yaml::from_str(&contents).unwrap_or_default(),
            Err(_) => AppConfig::default(),
        }
    }

    pub fn enabled_monitors(&self) -> impl Iterator<Item = &MonitorConfig> {
        self.monitors.iter().filter(|m| m.enabled)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_flush_interval_secs")]
    pub flush_interval_secs: u64,
    #[serde(default = "default_stop_timeout_secs")]
    pub stop_timeout_secs: u64,
    /// Rows buffered before a sink writes a batch even if `flush_interval`
    /// hasn't elapsed yet.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Buffered row count that triggers an immediate flush bypassing the
    /// interval entirely.
    #[serde(default = "default_large_batch_threshold")]
    pub large_batch_threshold: usize,
    /// Bounded channel capacity per monitor sink; a producer blocked on a
    /// full channel for `flush_interval / 2` drops the row instead.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Hostname used for the output directory layout
    /// (`{dir}/{host}/{monitor}_{timestamp}.csv`). Defaults to the
    /// machine's hostname, resolved once at startup.
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            flush_interval_secs: default_flush_interval_secs(),
            stop_timeout_secs: default_stop_timeout_secs(),
            batch_size: default_batch_size(),
            large_batch_threshold: default_large_batch_threshold(),
            channel_capacity: default_channel_capacity(),
            host: default_host(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("/var/log/ebpf-monitor")
}
fn default_flush_interval_secs() -> u64 {
    5
}
fn default_stop_timeout_secs() -> u64 {
    10
}
fn default_batch_size() -> usize {
    200
}
fn default_large_batch_threshold() -> usize {
    20
}
fn default_channel_capacity() -> usize {
    2_000
}
fn default_host() -> String {
    let mut buf = [0u8; 256];
    nix::unistd::gethostname(&mut buf)
        .ok()
        .and_then(|cstr| cstr.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown-host".to_string())
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    #[serde(default = "default_log_retention_days")]
    pub retention_days: u32,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            retention_days: default_log_retention_days(),
            level: default_log_level(),
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("/var/log/ebpf-monitor/logs/monitor.log")
}
fn default_log_retention_days() -> u32 {
    365
}
fn default_log_level() -> String {
    "info".to_string()
}

/// Per-monitor configuration. Most fields only matter for a subset of
/// monitor kinds (`symbols`/`probe_limit` are Func-only, `filter_*` apply
/// to any monitor but default to "disabled" per the decision recorded in
/// DESIGN.md).
#[derive(Debug, Deserialize, Clone)]
pub struct MonitorConfig {
    pub name: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub symbols: Vec<String>,
    #[serde(default = "default_probe_limit")]
    pub probe_limit: u32,
    #[serde(default)]
    pub filter_pids: Vec<u32>,
    #[serde(default)]
    pub filter_uids: Vec<u32>,
    /// Syscall-monitor only: categories to exclude from the encoded row
    /// post-drain (e.g. `["net", "ipc"]`). Empty means no filtering.
    #[serde(default)]
    pub category_filter: Vec<String>,
    /// Bio-monitor only: rows with `avg_latency_us` below this are
    /// suppressed post-drain.
    #[serde(default)]
    pub min_latency_us: u64,
    /// ContextSwitch-monitor only: rows whose total switch count is below
    /// this are suppressed post-drain.
    #[serde(default)]
    pub min_switches: u64,
}

fn default_true() -> bool {
    true
}
fn default_poll_interval_ms() -> u64 {
    1000
}
fn default_probe_limit() -> u32 {
    64
}

fn default_monitors() -> Vec<MonitorConfig> {
    const NAMES: &[&str] = &[
        "exec",
        "func",
        "syscall",
        "bio",
        "open",
        "interrupt",
        "page_fault",
        "context_switch",
    ];
    NAMES
        .iter()
        .map(|name| MonitorConfig {
            name: name.to_string(),
            enabled: *name != "page_fault" && *name != "func",
            poll_interval_ms: default_poll_interval_ms(),
            symbols: Vec::new(),
            probe_limit: default_probe_limit(),
            filter_pids: Vec::new(),
            filter_uids: Vec::new(),
            category_filter: Vec::new(),
            min_latency_us: 0,
            min_switches: 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_config_defaults() {
        let yaml = r#"
output:
  dir: /var/log/ebpf-monitor
  flush_interval_secs: 5
  stop_timeout_secs: 10
logging:
  file: /var/log/ebpf-monitor/logs/monitor.log
  retention_days: 365
monitors:
  - name: exec
  - name: func
    symbols: ["vfs_read", "vfs_write"]
    probe_limit: 16
"#;
        let cfg: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.output.flush_interval_secs, 5);
        assert_eq!(cfg.logging.retention_days, 365);
        assert_eq!(cfg.monitors.len(), 2);
        assert!(cfg.monitors[0].enabled);
        assert_eq!(cfg.monitors[1].symbols, vec!["vfs_read", "vfs_write"]);
        assert_eq!(cfg.monitors[1].probe_limit, 16);
    }

    #[test]
    fn default_monitor_set_disables_high_overhead_ones() {
        let cfg = AppConfig::default();
        let names: Vec<&str> = cfg
            .enabled_monitors()
            .map(|m| m.name.as_str())
            .collect();
        assert!(names.contains(&"exec"));
        assert!(!names.contains(&"page_fault"));
    }

    #[test]
    fn env_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output:\n  flush_interval_secs: 2").unwrap();
        unsafe {
            std::env::set_var(ENV_CONFIG_PATH, file.path());
        }
        let cfg = AppConfig::load();
        assert_eq!(cfg.output.flush_interval_secs, 2);
        unsafe {
            std::env::remove_var(ENV_CONFIG_PATH);
        }
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = AppConfig::load_from(std::path::Path::new("/nonexistent/monitor.yaml"));
        assert_eq!(cfg.monitors.len(), 8);
    }
}
