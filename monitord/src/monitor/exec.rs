use async_trait::async_trait;
use aya::maps::perf::AsyncPerfEventArray;
use aya::util::online_cpus;
use bytes::BytesMut;
use ebpf_monitor_common::ExecEvent;

use crate::bpf::{self, SharedEbpf};
use crate::capability::CapabilityReport;
use crate::errors::{AttachError, DrainError, LoadError};
use crate::monitor::{FailureReason, Monitor, MonitorState, TickStamp};
use crate::output::OutputController;

const PERF_BUFFER_PAGES: usize = 64;
const BUFFERS_PER_CPU: usize = 10;

/// Kprobe symbol candidates tried in order until one attaches. Kernel
/// version and architecture determine which of these exist.
const KPROBE_CANDIDATES: &[&str] = &["__x64_sys_execve", "__ia32_sys_execve", "sys_execve"];

/// Which attach path produced the events this run, fixed for the life of
/// the process once `attach` succeeds. Determines the CSV header/row
/// shape: the tracepoint path carries argv and a real return code, the
/// kprobe fallback does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttachPath {
    Tracepoint,
    Kprobe,
}

const TRACEPOINT_HEADER: &[&str] = &["timestamp", "time_str", "comm", "uid", "pid", "ppid", "ret", "argv"];
const KPROBE_HEADER: &[&str] = &["timestamp", "time_str", "uid", "pid", "comm", "filename"];

/// Drains exec events off a per-CPU perf ring buffer. One task per online
/// CPU reads its buffer and forwards decoded events on an internal
/// channel; `tick` drains whatever has accumulated since the last call.
pub struct ExecMonitor {
    state: MonitorState,
    events: Option<tokio::sync::mpsc::UnboundedReceiver<ExecEvent>>,
    readers: Vec<tokio::task::JoinHandle<()>>,
    path: AttachPath,
    console_header_printed: bool,
}

impl ExecMonitor {
    pub fn new() -> Self {
        Self {
            state: MonitorState::New,
            events: None,
            readers: Vec::new(),
            path: AttachPath::Tracepoint,
            console_header_printed: false,
        }
    }

    fn row_from_event(&self, event: &ExecEvent) -> Vec<String> {
        let stamp = TickStamp::now();
        let comm = ebpf_monitor_common::comm_to_string(&event.comm);
        let argv_len = event
            .argv_or_filename
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(event.argv_or_filename.len());
        let argv_or_filename = String::from_utf8_lossy(&event.argv_or_filename[..argv_len]).to_string();

        match self.path {
            AttachPath::Tracepoint => vec![
                stamp.epoch_str(),
                stamp.time_str(),
                comm,
                event.uid.to_string(),
                event.pid.to_string(),
                event.ppid.to_string(),
                event.ret.to_string(),
                argv_or_filename,
            ],
            AttachPath::Kprobe => vec![
                stamp.epoch_str(),
                stamp.time_str(),
                event.uid.to_string(),
                event.pid.to_string(),
                comm,
                argv_or_filename,
            ],
        }
    }

    fn header(&self) -> &'static [&'static str] {
        match self.path {
            AttachPath::Tracepoint => TRACEPOINT_HEADER,
            AttachPath::Kprobe => KPROBE_HEADER,
        }
    }
}

#[async_trait]
impl Monitor for ExecMonitor {
    fn name(&self) -> &'static str {
        "exec"
    }

    fn csv_header(&self) -> &[&'static str] {
        self.header()
    }

    fn state(&self) -> MonitorState {
        self.state
    }

    async fn load(&mut self, bpf: &SharedEbpf) -> Result<(), LoadError> {
        let mut guard = bpf.lock().await;
        let raw = guard
            .take_map("EVENTS")
            .ok_or_else(|| LoadError::Btf("map EVENTS missing from BPF object".to_string()))?;
        let mut perf_array: AsyncPerfEventArray<_> =
            raw.try_into().map_err(|e: aya::maps::MapError| LoadError::MapConvert {
                name: "EVENTS".to_string(),
                reason: e.to_string(),
            })?;
        drop(guard);

        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let cpus = online_cpus().map_err(|(msg, err)| LoadError::Btf(format!("{msg}: {err}")))?;
        for cpu_id in cpus {
            let mut buf = perf_array.open(cpu_id, Some(PERF_BUFFER_PAGES)).map_err(|e| {
                LoadError::MapConvert {
                    name: "EVENTS".to_string(),
                    reason: e.to_string(),
                }
            })?;
            let tx = tx.clone();
            let handle = tokio::spawn(async move {
                let mut buffers = (0..BUFFERS_PER_CPU)
                    .map(|_| BytesMut::with_capacity(std::mem::size_of::<ExecEvent>()))
                    .collect::<Vec<_>>();
                loop {
                    let events = match buf.read_events(&mut buffers).await {
                        Ok(events) => events,
                        Err(_) => break,
                    };
                    if events.lost > 0 {
                        log::warn!("exec monitor: lost {} perf events on cpu {cpu_id}", events.lost);
                    }
                    for item in buffers.iter().take(events.read) {
                        if item.len() < std::mem::size_of::<ExecEvent>() {
                            continue;
                        }
                        let event: ExecEvent = *bytemuck::from_bytes(&item[..std::mem::size_of::<ExecEvent>()]);
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                }
            });
            self.readers.push(handle);
        }
        self.events = Some(rx);
        self.state = MonitorState::Loaded;
        Ok(())
    }

    async fn attach(&mut self, bpf: &SharedEbpf, caps: &CapabilityReport) -> Result<(), AttachError> {
        let tracepoints_ok = bpf::attach_tracepoint(bpf, "trace_exec_enter", "syscalls", "sys_enter_execve")
            .await
            .and(
                bpf::attach_tracepoint(bpf, "trace_exec_exit", "syscalls", "sys_exit_execve").await,
            );

        match tracepoints_ok {
            Ok(()) => {
                self.path = AttachPath::Tracepoint;
            }
            Err(err) => {
                log::warn!("exec monitor: execve tracepoints unavailable ({err}), falling back to kprobe");
                let mut attached = false;
                for function in KPROBE_CANDIDATES {
                    if bpf::attach_kprobe(bpf, "trace_exec_kprobe", function).await.is_ok() {
                        attached = true;
                        break;
                    }
                }
                if !attached {
                    return Err(AttachError::RequiredUnavailable {
                        name: "trace_exec_kprobe".to_string(),
                        reason: format!(
                            "none of {KPROBE_CANDIDATES:?} attached and btf_available={}",
                            caps.btf_available
                        ),
                    });
                }
                self.path = AttachPath::Kprobe;
            }
        }
        self.state = MonitorState::Running;
        Ok(())
    }

    async fn tick(&mut self, output: &OutputController) -> Result<u64, DrainError> {
        let Some(rx) = self.events.as_mut() else {
            return Ok(0);
        };
        let console = output.is_console_monitor(self.name()).await;
        if console && !self.console_header_printed {
            println!("{}", self.header().join(","));
            self.console_header_printed = true;
        }

        let mut rows_written = 0u64;
        while let Ok(event) = rx.try_recv() {
            let row = self.row_from_event(&event);
            if console {
                println!("{}", row.join(","));
            }
            output.write_row(self.name(), &row).await?;
            rows_written += 1;
        }
        Ok(rows_written)
    }

    async fn stop(&mut self) {
        for handle in self.readers.drain(..) {
            handle.abort();
        }
        self.state = MonitorState::Stopped;
    }

    async fn fail(&mut self, reason: FailureReason) {
        for handle in self.readers.drain(..) {
            handle.abort();
        }
        self.state = MonitorState::Failed(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with(comm: &[u8]) -> ExecEvent {
        let mut event = ExecEvent::zeroed();
        event.ts_ns = 42;
        event.uid = 1000;
        event.pid = 123;
        event.ppid = 1;
        event.ret = 0;
        event.comm[..comm.len()].copy_from_slice(comm);
        event.argv_or_filename[..4].copy_from_slice(b"/bin");
        event
    }

    fn monitor_with_path(path: AttachPath) -> ExecMonitor {
        let mut monitor = ExecMonitor::new();
        monitor.path = path;
        monitor
    }

    #[test]
    fn tracepoint_header_matches_spec_columns() {
        let monitor = monitor_with_path(AttachPath::Tracepoint);
        assert_eq!(
            monitor.csv_header(),
            &["timestamp", "time_str", "comm", "uid", "pid", "ppid", "ret", "argv"]
        );
    }

    #[test]
    fn kprobe_header_matches_spec_columns() {
        let monitor = monitor_with_path(AttachPath::Kprobe);
        assert_eq!(monitor.csv_header(), &["timestamp", "time_str", "uid", "pid", "comm", "filename"]);
    }

    #[test]
    fn tracepoint_row_carries_ppid_ret_and_argv() {
        let monitor = monitor_with_path(AttachPath::Tracepoint);
        let event = event_with(b"sh");
        let row = monitor.row_from_event(&event);
        assert_eq!(row.len(), 8);
        assert_eq!(row[2], "sh");
        assert_eq!(row[3], "1000");
        assert_eq!(row[5], "1");
        assert_eq!(row[7], "/bin");
    }

    #[test]
    fn kprobe_row_omits_ppid_and_ret() {
        let monitor = monitor_with_path(AttachPath::Kprobe);
        let event = event_with(b"init");
        let row = monitor.row_from_event(&event);
        assert_eq!(row.len(), 6);
        assert_eq!(row[4], "init");
        assert_eq!(row[5], "/bin");
    }
}
