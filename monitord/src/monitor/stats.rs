use std::sync::OnceLock;

use async_trait::async_trait;
use aya::maps::{MapData, MapError};
use bytemuck::{Pod, Zeroable};
use ebpf_monitor_common::{
    bio_type_str, fault_type_str, irq_type_str, open_op, BioStatsKey, BioStatsValue,
    ContextSwitchKey, ContextSwitchValue, FuncKey, FuncValue, InterruptKey, InterruptValue,
    OpenStatsKey, OpenStatsValue, PageFaultKey, PageFaultValue, SyscallKey, SyscallValue,
};

use crate::bpf::{self, SharedEbpf};
use crate::capability::CapabilityReport;
use crate::config::MonitorConfig;
use crate::errors::{AttachError, DrainError, LoadError};
use crate::monitor::{FailureReason, Monitor, MonitorState, TickStamp};
use crate::output::OutputController;

/// Encodes one drained (key, value) pair into CSV columns, or `None` if
/// the monitor's post-drain filter (category/min-latency/min-switches)
/// suppresses this row. The key is still removed from the map either
/// way; only the CSV emission is conditional.
type RowFn<K, V> = Box<dyn Fn(&K, &V, &TickStamp) -> Option<Vec<String>> + Send + Sync>;
type AttachFn = Box<
    dyn for<'a> Fn(
            &'a SharedEbpf,
            &'a CapabilityReport,
        ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), AttachError>> + Send + 'a>>
        + Send
        + Sync,
>;

/// Drains a single aggregating BPF hash map on every tick: every entry
/// becomes one CSV row (unless filtered post-drain), then is removed, so
/// counts reported are deltas since the previous tick rather than
/// monotonic totals.
pub struct StatsMonitorDriver<K, V> {
    name: &'static str,
    header: Vec<&'static str>,
    map_name: &'static str,
    row_fn: RowFn<K, V>,
    attach_fn: AttachFn,
    map: Option<aya::maps::HashMap<MapData, K, V>>,
    state: MonitorState,
    console_header_printed: bool,
}

impl<K, V> StatsMonitorDriver<K, V>
where
    K: Pod + Zeroable + Send + Sync + 'static,
    V: Pod + Zeroable + Send + Sync + 'static,
{
    fn new(
        name: &'static str,
        header: Vec<&'static str>,
        map_name: &'static str,
        row_fn: RowFn<K, V>,
        attach_fn: AttachFn,
    ) -> Self {
        Self {
            name,
            header,
            map_name,
            row_fn,
            attach_fn,
            map: None,
            state: MonitorState::New,
            console_header_printed: false,
        }
    }
}

#[async_trait]
impl<K, V> Monitor for StatsMonitorDriver<K, V>
where
    K: Pod + Zeroable + Send + Sync + 'static,
    V: Pod + Zeroable + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn csv_header(&self) -> &[&'static str] {
        &self.header
    }

    fn state(&self) -> MonitorState {
        self.state
    }

    async fn load(&mut self, bpf: &SharedEbpf) -> Result<(), LoadError> {
        let mut guard = bpf.lock().await;
        let raw = guard
            .take_map(self.map_name)
            .ok_or_else(|| LoadError::Btf(format!("map {} missing from BPF object", self.map_name)))?;
        let typed: aya::maps::HashMap<MapData, K, V> = raw.try_into().map_err(|e: aya::maps::MapError| {
            LoadError::MapConvert {
                name: self.map_name.to_string(),
                reason: e.to_string(),
            }
        })?;
        self.map = Some(typed);
        self.state = MonitorState::Loaded;
        Ok(())
    }

    async fn attach(&mut self, bpf: &SharedEbpf, caps: &CapabilityReport) -> Result<(), AttachError> {
        (self.attach_fn)(bpf, caps).await?;
        self.state = MonitorState::Running;
        Ok(())
    }

    async fn tick(&mut self, output: &OutputController) -> Result<u64, DrainError> {
        let map = match &mut self.map {
            Some(m) => m,
            None => return Ok(0),
        };
        let keys: Vec<K> = map
            .iter()
            .filter_map(|entry: Result<(K, V), MapError>| entry.ok().map(|(k, _)| k))
            .collect();

        let stamp = TickStamp::now();
        let console = output.is_console_monitor(self.name).await;
        if console && !self.console_header_printed {
            println!("{}", self.header.join(","));
            self.console_header_printed = true;
        }

        let mut rows_written = 0u64;
        for key in keys {
            let value = match map.get(&key, 0) {
                Ok(v) => v,
                Err(_) => continue,
            };
            if let Some(row) = (self.row_fn)(&key, &value, &stamp) {
                if console {
                    println!("{}", row.join(","));
                }
                output.write_row(self.name, &row).await?;
                rows_written += 1;
            }
            let _ = map.remove(&key);
        }
        Ok(rows_written)
    }

    async fn stop(&mut self) {
        self.state = MonitorState::Stopped;
    }

    async fn fail(&mut self, reason: FailureReason) {
        self.state = MonitorState::Failed(reason);
    }
}

fn comm_str(comm: &[u8; 16]) -> String {
    ebpf_monitor_common::comm_to_string(comm)
}

/// 3 decimal places, the fixed format for latencies in microseconds.
fn fmt_us(value_ns: u64, count: u64) -> String {
    if count == 0 {
        return format!("{:.3}", 0.0);
    }
    format!("{:.3}", value_ns as f64 / count as f64 / 1000.0)
}

fn fmt_us_raw(value_ns: u64) -> String {
    format!("{:.3}", value_ns as f64 / 1000.0)
}

/// 2 decimal places, the fixed format for throughput in MB/s.
fn fmt_mbps(total_bytes: u64, total_ns: u64) -> String {
    if total_ns == 0 {
        return format!("{:.2}", 0.0);
    }
    format!("{:.2}", total_bytes as f64 / total_ns as f64 * 1e3)
}

fn fmt_mb(total_bytes: u64) -> String {
    format!("{:.2}", total_bytes as f64 / 1_000_000.0)
}

/// 4 decimal places, the fixed format for error rates.
fn fmt_error_rate(errors: u64, count: u64) -> String {
    if count == 0 {
        return format!("{:.4}", 0.0);
    }
    format!("{:.4}", errors as f64 / count as f64)
}

/// Small curated syscall-number -> (name, category) table for the common
/// x86_64 syscalls this collector is likely to see; numbers outside the
/// table fall back to a generic name and the "other" category.
fn syscall_info(nr: u32) -> (&'static str, &'static str) {
    match nr {
        0 => ("read", "file_io"),
        1 => ("write", "file_io"),
        2 => ("open", "file_io"),
        3 => ("close", "file_io"),
        4 => ("stat", "file_io"),
        5 => ("fstat", "file_io"),
        8 => ("lseek", "file_io"),
        9 => ("mmap", "mem"),
        10 => ("mprotect", "mem"),
        11 => ("munmap", "mem"),
        12 => ("brk", "mem"),
        17 => ("pread64", "file_io"),
        18 => ("pwrite64", "file_io"),
        21 => ("access", "file_io"),
        22 => ("pipe", "ipc"),
        32 => ("dup", "file_io"),
        33 => ("dup2", "file_io"),
        41 => ("socket", "net"),
        42 => ("connect", "net"),
        43 => ("accept", "net"),
        44 => ("sendto", "net"),
        45 => ("recvfrom", "net"),
        46 => ("sendmsg", "net"),
        47 => ("recvmsg", "net"),
        49 => ("bind", "net"),
        50 => ("listen", "net"),
        56 => ("clone", "process"),
        57 => ("fork", "process"),
        58 => ("vfork", "process"),
        59 => ("execve", "process"),
        60 => ("exit", "process"),
        61 => ("wait4", "process"),
        62 => ("kill", "process"),
        72 => ("fcntl", "file_io"),
        78 => ("getdents", "file_io"),
        79 => ("getcwd", "file_io"),
        80 => ("chdir", "file_io"),
        82 => ("rename", "file_io"),
        83 => ("mkdir", "file_io"),
        84 => ("rmdir", "file_io"),
        87 => ("unlink", "file_io"),
        89 => ("readlink", "file_io"),
        90 => ("chmod", "file_io"),
        92 => ("chown", "file_io"),
        95 => ("umask", "file_io"),
        102 => ("getuid", "process"),
        186 => ("gettid", "process"),
        202 => ("futex", "ipc"),
        217 => ("getdents64", "file_io"),
        231 => ("exit_group", "process"),
        257 => ("openat", "file_io"),
        262 => ("newfstatat", "file_io"),
        273 => ("set_robust_list", "ipc"),
        435 => ("clone3", "process"),
        _ => ("", "other"),
    }
}

fn syscall_name(nr: u32) -> String {
    let (name, _) = syscall_info(nr);
    if name.is_empty() {
        format!("syscall_{nr}")
    } else {
        name.to_string()
    }
}

fn syscall_category(nr: u32) -> &'static str {
    syscall_info(nr).1
}

static NUMA_MAP: OnceLock<std::collections::HashMap<u32, u32>> = OnceLock::new();

/// Builds (and caches) a cpu -> NUMA node map from
/// `/sys/devices/system/node/node*/cpulist`. Falls back to node 0 for any
/// cpu not found (e.g. on single-node or non-NUMA hosts).
fn numa_node_for_cpu(cpu: u32) -> u32 {
    let map = NUMA_MAP.get_or_init(build_numa_map);
    map.get(&cpu).copied().unwrap_or(0)
}

fn build_numa_map() -> std::collections::HashMap<u32, u32> {
    let mut map = std::collections::HashMap::new();
    let Ok(entries) = std::fs::read_dir("/sys/devices/system/node") else {
        return map;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(node_str) = name.strip_prefix("node") else { continue };
        let Ok(node) = node_str.parse::<u32>() else { continue };
        let cpulist_path = entry.path().join("cpulist");
        let Ok(cpulist) = std::fs::read_to_string(&cpulist_path) else { continue };
        for cpu in parse_cpulist(cpulist.trim()) {
            map.insert(cpu, node);
        }
    }
    map
}

/// Parses a Linux cpulist like `0-3,8,10-11` into individual cpu ids.
fn parse_cpulist(text: &str) -> Vec<u32> {
    let mut cpus = Vec::new();
    for part in text.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some((lo, hi)) = part.split_once('-') {
            if let (Ok(lo), Ok(hi)) = (lo.parse::<u32>(), hi.parse::<u32>()) {
                cpus.extend(lo..=hi);
            }
        } else if let Ok(cpu) = part.parse::<u32>() {
            cpus.push(cpu);
        }
    }
    cpus
}

pub fn func_monitor(cfg: &MonitorConfig) -> StatsMonitorDriver<FuncKey, FuncValue> {
    let symbols = cfg.symbols.clone();
    let probe_limit = cfg.probe_limit;
    let row_symbols = symbols.clone();
    StatsMonitorDriver::new(
        "func",
        vec!["timestamp", "time_str", "comm", "func_name", "count"],
        "FUNC_STATS",
        Box::new(move |k: &FuncKey, v: &FuncValue, stamp: &TickStamp| {
            let func_name = row_symbols
                .get(k.func_id as usize)
                .cloned()
                .unwrap_or_else(|| format!("func_{}", k.func_id));
            Some(vec![
                stamp.epoch_str(),
                stamp.time_str(),
                comm_str(&k.comm),
                func_name,
                v.count.to_string(),
            ])
        }),
        Box::new(move |bpf, _caps| {
            let symbols = symbols.clone();
            Box::pin(async move {
                if symbols.is_empty() {
                    log::warn!("func monitor enabled with no symbols configured, attaching nothing");
                    return Ok(());
                }
                let mut guard = bpf.lock().await;
                let raw = guard
                    .take_map("FUNC_TARGETS")
                    .ok_or_else(|| AttachError::RequiredUnavailable {
                        name: "FUNC_TARGETS".to_string(),
                        reason: "map missing".to_string(),
                    })?;
                drop(guard);
                let mut targets: aya::maps::HashMap<MapData, u64, u32> = raw
                    .try_into()
                    .map_err(|e: aya::maps::MapError| AttachError::RequiredUnavailable {
                        name: "FUNC_TARGETS".to_string(),
                        reason: e.to_string(),
                    })?;
                bpf::attach_func_targets(bpf, "trace_func", &symbols, probe_limit, &mut targets).await?;
                Ok(())
            })
        }),
    )
}

pub fn syscall_monitor(cfg: &MonitorConfig) -> StatsMonitorDriver<SyscallKey, SyscallValue> {
    let excluded: Vec<String> = cfg.category_filter.clone();
    StatsMonitorDriver::new(
        "syscall",
        vec![
            "timestamp",
            "time_str",
            "monitor_type",
            "comm",
            "syscall_nr",
            "syscall_name",
            "category",
            "count",
            "error_count",
            "error_rate",
        ],
        "SYSCALL_STATS",
        Box::new(move |k: &SyscallKey, v: &SyscallValue, stamp: &TickStamp| {
            let category = syscall_category(k.syscall_nr);
            if excluded.iter().any(|c| c == category) {
                return None;
            }
            Some(vec![
                stamp.epoch_str(),
                stamp.time_str(),
                "syscall".to_string(),
                comm_str(&k.comm),
                k.syscall_nr.to_string(),
                syscall_name(k.syscall_nr),
                category.to_string(),
                v.count.to_string(),
                v.error_count.to_string(),
                fmt_error_rate(v.error_count, v.count),
            ])
        }),
        Box::new(|bpf, _caps| {
            Box::pin(async move {
                bpf::attach_tracepoint(bpf, "trace_sys_enter", "raw_syscalls", "sys_enter").await?;
                bpf::attach_tracepoint(bpf, "trace_sys_exit", "raw_syscalls", "sys_exit").await?;
                Ok(())
            })
        }),
    )
}

pub fn bio_monitor(cfg: &MonitorConfig) -> StatsMonitorDriver<BioStatsKey, BioStatsValue> {
    let min_latency_us = cfg.min_latency_us;
    StatsMonitorDriver::new(
        "bio",
        vec![
            "timestamp",
            "time_str",
            "comm",
            "io_type",
            "io_type_str",
            "count",
            "total_bytes",
            "size_mb",
            "avg_latency_us",
            "min_latency_us",
            "max_latency_us",
            "throughput_mbps",
        ],
        "BIO_STATS",
        Box::new(move |k: &BioStatsKey, v: &BioStatsValue, stamp: &TickStamp| {
            let avg_us = v.total_ns as f64 / v.count.max(1) as f64 / 1000.0;
            if (avg_us as u64) < min_latency_us {
                return None;
            }
            Some(vec![
                stamp.epoch_str(),
                stamp.time_str(),
                comm_str(&k.comm),
                k.bio_type.to_string(),
                bio_type_str(k.bio_type).to_string(),
                v.count.to_string(),
                v.total_bytes.to_string(),
                fmt_mb(v.total_bytes),
                fmt_us(v.total_ns, v.count),
                fmt_us_raw(v.min_ns),
                fmt_us_raw(v.max_ns),
                fmt_mbps(v.total_bytes, v.total_ns),
            ])
        }),
        Box::new(|bpf, _caps| {
            Box::pin(async move {
                bpf::attach_tracepoint(bpf, "trace_bio_queue", "block", "block_bio_queue").await?;
                bpf::attach_tracepoint(bpf, "trace_bio_complete", "block", "block_rq_complete").await?;
                Ok(())
            })
        }),
    )
}

pub fn open_monitor(_cfg: &MonitorConfig) -> StatsMonitorDriver<OpenStatsKey, OpenStatsValue> {
    StatsMonitorDriver::new(
        "open",
        vec![
            "timestamp",
            "time_str",
            "comm",
            "operation",
            "filename",
            "count",
            "errors",
            "error_rate",
            "avg_lat_us",
            "min_lat_us",
            "max_lat_us",
            "flags",
        ],
        "OPEN_STATS",
        Box::new(|k: &OpenStatsKey, v: &OpenStatsValue, stamp: &TickStamp| {
            let filename_len = k.filename.iter().position(|&b| b == 0).unwrap_or(k.filename.len());
            let filename = String::from_utf8_lossy(&k.filename[..filename_len]).to_string();
            let operation = if k.operation == open_op::OPENAT { "OPENAT" } else { "OPEN" };
            Some(vec![
                stamp.epoch_str(),
                stamp.time_str(),
                comm_str(&k.comm),
                operation.to_string(),
                filename,
                v.count.to_string(),
                v.error_count.to_string(),
                fmt_error_rate(v.error_count, v.count),
                fmt_us(v.total_lat, v.count),
                fmt_us_raw(v.min_lat),
                fmt_us_raw(v.max_lat),
                v.flags_summary.to_string(),
            ])
        }),
        Box::new(|bpf, _caps| {
            Box::pin(async move {
                bpf::attach_kprobe(bpf, "trace_open_entry", "do_sys_openat2").await?;
                bpf::attach_kprobe(bpf, "trace_open_exit", "do_sys_openat2").await?;
                Ok(())
            })
        }),
    )
}

pub fn interrupt_monitor(_cfg: &MonitorConfig) -> StatsMonitorDriver<InterruptKey, InterruptValue> {
    StatsMonitorDriver::new(
        "interrupt",
        vec!["timestamp", "time_str", "comm", "irq_type", "irq_type_str", "cpu", "count"],
        "INTERRUPT_STATS",
        Box::new(|k: &InterruptKey, v: &InterruptValue, stamp: &TickStamp| {
            Some(vec![
                stamp.epoch_str(),
                stamp.time_str(),
                comm_str(&k.comm),
                k.irq_type.to_string(),
                irq_type_str(k.irq_type).to_string(),
                k.cpu.to_string(),
                v.count.to_string(),
            ])
        }),
        Box::new(|bpf, _caps| {
            Box::pin(async move {
                bpf::attach_tracepoint(bpf, "trace_irq_hardware", "irq", "irq_handler_entry").await?;
                bpf::attach_tracepoint(bpf, "trace_irq_softirq", "irq", "softirq_entry").await?;
                Ok(())
            })
        }),
    )
}

pub fn page_fault_monitor(_cfg: &MonitorConfig) -> StatsMonitorDriver<PageFaultKey, PageFaultValue> {
    StatsMonitorDriver::new(
        "page_fault",
        vec![
            "timestamp",
            "time_str",
            "comm",
            "fault_type",
            "fault_type_str",
            "cpu",
            "numa_node",
            "count",
        ],
        "PAGE_FAULT_STATS",
        Box::new(|k: &PageFaultKey, v: &PageFaultValue, stamp: &TickStamp| {
            Some(vec![
                stamp.epoch_str(),
                stamp.time_str(),
                comm_str(&k.comm),
                k.fault_type.to_string(),
                fault_type_str(k.fault_type).to_string(),
                k.cpu.to_string(),
                numa_node_for_cpu(k.cpu).to_string(),
                v.count.to_string(),
            ])
        }),
        Box::new(|bpf, _caps| {
            Box::pin(async move {
                bpf::attach_btf_tracepoint_optional(bpf, "trace_page_fault_user", "page_fault_user").await;
                bpf::attach_btf_tracepoint_optional(bpf, "trace_page_fault_kernel", "page_fault_kernel").await;
                Ok(())
            })
        }),
    )
}

pub fn context_switch_monitor(cfg: &MonitorConfig) -> StatsMonitorDriver<ContextSwitchKey, ContextSwitchValue> {
    let min_switches = cfg.min_switches;
    StatsMonitorDriver::new(
        "context_switch",
        vec![
            "timestamp",
            "time_str",
            "comm",
            "cpu",
            "switch_in",
            "switch_out",
            "voluntary",
            "involuntary",
        ],
        "CONTEXT_SWITCH_STATS",
        Box::new(move |k: &ContextSwitchKey, v: &ContextSwitchValue, stamp: &TickStamp| {
            let total = v.switch_in_count + v.switch_out_count;
            if total < min_switches {
                return None;
            }
            Some(vec![
                stamp.epoch_str(),
                stamp.time_str(),
                comm_str(&k.comm),
                k.cpu.to_string(),
                v.switch_in_count.to_string(),
                v.switch_out_count.to_string(),
                v.voluntary_count.to_string(),
                v.involuntary_count.to_string(),
            ])
        }),
        Box::new(|bpf, _caps| {
            Box::pin(async move {
                bpf::attach_tracepoint(bpf, "trace_context_switch", "sched", "sched_switch").await?;
                Ok(())
            })
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> TickStamp {
        TickStamp::now()
    }

    #[test]
    fn fmt_us_handles_zero_count() {
        assert_eq!(fmt_us(0, 0), "0.000");
    }

    #[test]
    fn fmt_error_rate_has_four_decimals() {
        assert_eq!(fmt_error_rate(1, 4), "0.2500");
    }

    #[test]
    fn fmt_mbps_has_two_decimals() {
        assert_eq!(fmt_mbps(2_000_000, 1_000_000), "2.00");
    }

    #[test]
    fn parse_cpulist_expands_ranges_and_singles() {
        let mut cpus = parse_cpulist("0-2,5");
        cpus.sort();
        assert_eq!(cpus, vec![0, 1, 2, 5]);
    }

    #[test]
    fn syscall_category_known_and_unknown() {
        assert_eq!(syscall_category(59), "process");
        assert_eq!(syscall_category(999_999), "other");
    }

    #[test]
    fn func_monitor_row_uses_configured_symbol_name() {
        let cfg = MonitorConfig {
            name: "func".to_string(),
            enabled: true,
            poll_interval_ms: 1000,
            symbols: vec!["vfs_read".to_string(), "vfs_write".to_string()],
            probe_limit: 64,
            filter_pids: vec![],
            filter_uids: vec![],
            category_filter: vec![],
            min_latency_us: 0,
            min_switches: 0,
        };
        let monitor = func_monitor(&cfg);
        let key = FuncKey { comm: *b"sh\0\0\0\0\0\0\0\0\0\0\0\0\0\0", func_id: 1 };
        let value = FuncValue { count: 4 };
        let row = (monitor.row_fn)(&key, &value, &stamp()).unwrap();
        assert_eq!(row[3], "vfs_write");
        assert_eq!(row[4], "4");
    }

    #[test]
    fn syscall_monitor_filters_excluded_category() {
        let mut cfg_base = MonitorConfig {
            name: "syscall".to_string(),
            enabled: true,
            poll_interval_ms: 1000,
            symbols: vec![],
            probe_limit: 64,
            filter_pids: vec![],
            filter_uids: vec![],
            category_filter: vec!["net".to_string()],
            min_latency_us: 0,
            min_switches: 0,
        };
        let monitor = syscall_monitor(&cfg_base);
        let key = SyscallKey { comm: *b"curl\0\0\0\0\0\0\0\0\0\0\0\0", syscall_nr: 41 };
        let value = SyscallValue { count: 3, error_count: 0 };
        assert!((monitor.row_fn)(&key, &value, &stamp()).is_none());

        cfg_base.category_filter.clear();
        let monitor = syscall_monitor(&cfg_base);
        assert!((monitor.row_fn)(&key, &value, &stamp()).is_some());
    }

    #[test]
    fn bio_monitor_filters_below_min_latency() {
        let cfg = MonitorConfig {
            name: "bio".to_string(),
            enabled: true,
            poll_interval_ms: 1000,
            symbols: vec![],
            probe_limit: 64,
            filter_pids: vec![],
            filter_uids: vec![],
            category_filter: vec![],
            min_latency_us: 1_000,
            min_switches: 0,
        };
        let monitor = bio_monitor(&cfg);
        let key = BioStatsKey { comm: *b"dd\0\0\0\0\0\0\0\0\0\0\0\0\0\0", bio_type: 1 };
        let value = BioStatsValue { count: 1, total_bytes: 4096, total_ns: 500_000, min_ns: 500_000, max_ns: 500_000 };
        assert!((monitor.row_fn)(&key, &value, &stamp()).is_none());
    }

    #[test]
    fn context_switch_monitor_filters_below_min_switches() {
        let cfg = MonitorConfig {
            name: "context_switch".to_string(),
            enabled: true,
            poll_interval_ms: 1000,
            symbols: vec![],
            probe_limit: 64,
            filter_pids: vec![],
            filter_uids: vec![],
            category_filter: vec![],
            min_latency_us: 0,
            min_switches: 10,
        };
        let monitor = context_switch_monitor(&cfg);
        let key = ContextSwitchKey { comm: *b"sh\0\0\0\0\0\0\0\0\0\0\0\0\0\0", cpu: 0 };
        let value = ContextSwitchValue { switch_in_count: 2, switch_out_count: 3, voluntary_count: 1, involuntary_count: 4 };
        assert!((monitor.row_fn)(&key, &value, &stamp()).is_none());
    }
}
