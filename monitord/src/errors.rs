use thiserror::Error;

/// Failure while loading the compiled BPF object into the kernel (before
/// any program is attached).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read BPF object at {path}: {source}")]
    ReadObject {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("BPF object not found in any candidate path (checked {checked} locations)")]
    ObjectNotFound { checked: usize },
    #[error("failed to load BPF program: {0}")]
    Ebpf(#[from] aya::EbpfError),
    #[error("BTF discovery failed: {0}")]
    Btf(String),
    #[error("map {name} has the wrong type for this monitor: {reason}")]
    MapConvert { name: String, reason: String },
}

/// Failure attaching a loaded program to its kernel attach point.
#[derive(Debug, Error)]
pub enum AttachError {
    #[error("program {name} not found in BPF object")]
    ProgramNotFound { name: String },
    #[error("failed to attach program {name}: {source}")]
    Attach {
        name: String,
        #[source]
        source: aya::programs::ProgramError,
    },
    #[error("required attach point {name} unavailable: {reason}")]
    RequiredUnavailable { name: String, reason: String },
}

/// Failure draining a monitor's maps or perf ring during a tick.
#[derive(Debug, Error)]
pub enum DrainError {
    #[error("map lookup failed for monitor {monitor}: {source}")]
    MapLookup {
        monitor: String,
        #[source]
        source: aya::maps::MapError,
    },
    #[error("perf buffer read failed for monitor {monitor}: {source}")]
    PerfRead {
        monitor: String,
        #[source]
        source: aya::maps::perf::PerfBufferError,
    },
    #[error("poll deadline exceeded for monitor {monitor}")]
    PollTimeout { monitor: String },
    #[error("failed to write drained row: {0}")]
    Sink(#[from] SinkError),
}

/// Failure in the output controller while writing a sink row.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to open CSV file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write CSV row to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("failed to flush CSV writer for {path}: {source}")]
    Flush {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failure loading or parsing `AppConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Failure during the capability probe / environment check.
#[derive(Debug, Error)]
pub enum PermissionError {
    #[error("missing required capability {0}; try: setcap cap_bpf,cap_perfmon,cap_sys_admin+eip <binary>")]
    MissingCapability(String),
    #[error("kernel version {found} is older than the minimum required {min}")]
    KernelTooOld { found: String, min: String },
    #[error("failed to read /proc/sys/kernel/osrelease: {0}")]
    OsReleaseUnreadable(String),
}
