use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::sync::{mpsc, oneshot, Mutex};

use crate::config::OutputConfig;
use crate::errors::SinkError;

/// Lifecycle of one monitor's sink. `Idle` only exists before
/// registration; every registered sink is `Open` immediately (its file
/// exists, header written if new) and moves to `Draining` on its first
/// buffered row, `Closed` once its writer task has exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    Idle,
    Open,
    Draining,
    Closed,
}

impl SinkState {
    fn from_code(code: u8) -> Self {
        match code {
            1 => SinkState::Open,
            2 => SinkState::Draining,
            3 => SinkState::Closed,
            _ => SinkState::Idle,
        }
    }

    fn code(self) -> u8 {
        match self {
            SinkState::Idle => 0,
            SinkState::Open => 1,
            SinkState::Draining => 2,
            SinkState::Closed => 3,
        }
    }
}

enum SinkMsg {
    Row(Vec<String>),
    Flush(oneshot::Sender<()>),
    Close(oneshot::Sender<()>),
}

/// One CSV file per monitor, opened once and appended to for the life of
/// the process. Buffered and flushed on `batch_size`/`large_batch_threshold`/
/// `flush_interval` rather than per row, matching how the rest of the
/// collector batches work per tick instead of per event.
struct CsvSink {
    path: PathBuf,
    writer: csv::Writer<std::fs::File>,
}

impl CsvSink {
    fn open(path: PathBuf, header: &[&'static str]) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let write_header = !path.exists();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Open {
                path: path.display().to_string(),
                source,
            })?;
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        if write_header {
            writer.write_record(header).map_err(|source| SinkError::Write {
                path: path.display().to_string(),
                source,
            })?;
            writer.flush().map_err(|source| SinkError::Flush {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(Self { path, writer })
    }

    fn write_row(&mut self, row: &[String]) -> Result<(), SinkError> {
        self.writer.write_record(row).map_err(|source| SinkError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(|source| SinkError::Flush {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Background task owning one `CsvSink`. Buffers rows until `batch_size`
/// or `large_batch_threshold` is reached, or `flush_interval` elapses,
/// then writes the batch in one go. Exits (after a final flush) when the
/// channel closes or a `Close` message arrives.
async fn run_sink_writer(
    mut rx: mpsc::Receiver<SinkMsg>,
    mut sink: CsvSink,
    batch_size: usize,
    large_batch_threshold: usize,
    flush_interval: Duration,
    state: Arc<AtomicU8>,
) {
    let mut buffer: Vec<Vec<String>> = Vec::new();
    let mut ticker = tokio::time::interval(flush_interval.max(Duration::from_millis(1)));
    ticker.tick().await; // first tick fires immediately; consume it

    let flush_buffer = |buffer: &mut Vec<Vec<String>>, sink: &mut CsvSink| {
        for row in buffer.drain(..) {
            if let Err(err) = sink.write_row(&row) {
                log::warn!("sink write failed for {}: {err}", sink.path.display());
            }
        }
        if let Err(err) = sink.flush() {
            log::warn!("sink flush failed for {}: {err}", sink.path.display());
        }
    };

    loop {
        tokio::select! {
            msg = rx.recv() => {
                match msg {
                    Some(SinkMsg::Row(row)) => {
                        buffer.push(row);
                        state.store(SinkState::Draining.code(), Ordering::Relaxed);
                        if buffer.len() >= large_batch_threshold || buffer.len() >= batch_size {
                            flush_buffer(&mut buffer, &mut sink);
                        }
                    }
                    Some(SinkMsg::Flush(ack)) => {
                        flush_buffer(&mut buffer, &mut sink);
                        let _ = ack.send(());
                    }
                    Some(SinkMsg::Close(ack)) => {
                        flush_buffer(&mut buffer, &mut sink);
                        state.store(SinkState::Closed.code(), Ordering::Relaxed);
                        let _ = ack.send(());
                        return;
                    }
                    None => {
                        flush_buffer(&mut buffer, &mut sink);
                        state.store(SinkState::Closed.code(), Ordering::Relaxed);
                        return;
                    }
                }
            }
            _ = ticker.tick() => {
                if !buffer.is_empty() {
                    flush_buffer(&mut buffer, &mut sink);
                }
            }
        }
    }
}

struct SinkHandle {
    tx: mpsc::Sender<SinkMsg>,
    dropped_rows: Arc<AtomicU64>,
    state: Arc<AtomicU8>,
    writer_task: tokio::task::JoinHandle<()>,
}

/// Owns one buffered CSV sink per active monitor and the single-active-
/// monitor console mirror switch. Rows are sent over a bounded channel so
/// transient I/O slowness in the writer task can't stall a monitor's
/// drain loop; a producer blocked on a full channel for `flush_interval /
/// 2` drops the row instead of blocking indefinitely.
pub struct OutputController {
    dir: PathBuf,
    host: String,
    run_stamp: String,
    batch_size: usize,
    large_batch_threshold: usize,
    channel_capacity: usize,
    flush_interval: Duration,
    sinks: Mutex<HashMap<String, SinkHandle>>,
    console_monitor: Mutex<Option<String>>,
}

impl OutputController {
    pub fn new(config: &OutputConfig) -> std::io::Result<Self> {
        let run_stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let host_dir = config.dir.join(&config.host);
        std::fs::create_dir_all(&host_dir)?;
        Ok(Self {
            dir: config.dir.clone(),
            host: config.host.clone(),
            run_stamp,
            batch_size: config.batch_size,
            large_batch_threshold: config.large_batch_threshold,
            channel_capacity: config.channel_capacity,
            flush_interval: Duration::from_secs(config.flush_interval_secs),
            sinks: Mutex::new(HashMap::new()),
            console_monitor: Mutex::new(None),
        })
    }

    fn path_for(&self, monitor: &str) -> PathBuf {
        self.dir.join(&self.host).join(format!("{monitor}_{}.csv", self.run_stamp))
    }

    /// Opens this monitor's CSV file (writing the header if new) and
    /// spawns its background writer task. Must be called once per
    /// monitor, after the monitor's final header shape is known (for
    /// exec, that means after `attach` has picked a kprobe/tracepoint
    /// path), and before the monitor's first `tick`.
    pub async fn register_header(&self, monitor: &str, header: &[&'static str]) -> Result<(), SinkError> {
        let sink = CsvSink::open(self.path_for(monitor), header)?;
        let (tx, rx) = mpsc::channel(self.channel_capacity.max(1));
        let state = Arc::new(AtomicU8::new(SinkState::Open.code()));
        let writer_task = tokio::spawn(run_sink_writer(
            rx,
            sink,
            self.batch_size.max(1),
            self.large_batch_threshold.max(1),
            self.flush_interval,
            state.clone(),
        ));
        let mut sinks = self.sinks.lock().await;
        sinks.insert(
            monitor.to_string(),
            SinkHandle {
                tx,
                dropped_rows: Arc::new(AtomicU64::new(0)),
                state,
                writer_task,
            },
        );
        Ok(())
    }

    /// Sets the console-echo mode switch: console mirroring is enabled
    /// iff exactly one monitor is active this run.
    pub async fn configure_console_mode(&self, active_monitors: &[&str]) {
        let mut console = self.console_monitor.lock().await;
        *console = match active_monitors {
            [only] => Some(only.to_string()),
            _ => None,
        };
    }

    pub async fn is_console_monitor(&self, monitor: &str) -> bool {
        self.console_monitor.lock().await.as_deref() == Some(monitor)
    }

    /// Sends a row to `monitor`'s sink. Blocks up to `flush_interval / 2`
    /// if the channel is full; if it's still full, drops the row and
    /// increments that monitor's `dropped_rows` counter rather than
    /// propagating backpressure into the drain loop.
    pub async fn write_row(&self, monitor: &str, row: &[String]) -> Result<(), SinkError> {
        let sinks = self.sinks.lock().await;
        let Some(handle) = sinks.get(monitor) else {
            log::warn!("write_row for unregistered monitor {monitor}, dropping row");
            return Ok(());
        };
        let send_timeout = self.flush_interval / 2;
        match tokio::time::timeout(send_timeout, handle.tx.send(SinkMsg::Row(row.to_vec()))).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(_)) => {
                log::warn!("sink writer for {monitor} gone, dropping row");
                handle.dropped_rows.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(_) => {
                handle.dropped_rows.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
        }
    }

    pub async fn dropped_rows(&self, monitor: &str) -> u64 {
        let sinks = self.sinks.lock().await;
        sinks.get(monitor).map(|h| h.dropped_rows.load(Ordering::Relaxed)).unwrap_or(0)
    }

    pub async fn sink_state(&self, monitor: &str) -> Option<SinkState> {
        let sinks = self.sinks.lock().await;
        sinks.get(monitor).map(|h| SinkState::from_code(h.state.load(Ordering::Relaxed)))
    }

    /// Forces every sink to write its current buffer now, without
    /// closing. Used by the periodic flush loop.
    pub async fn flush_all(&self) -> Result<(), SinkError> {
        let acks: Vec<_> = {
            let sinks = self.sinks.lock().await;
            let mut acks = Vec::with_capacity(sinks.len());
            for handle in sinks.values() {
                let (ack_tx, ack_rx) = oneshot::channel();
                if handle.tx.send(SinkMsg::Flush(ack_tx)).await.is_ok() {
                    acks.push(ack_rx);
                }
            }
            acks
        };
        for ack in acks {
            let _ = ack.await;
        }
        Ok(())
    }

    /// Flushes and closes every sink, then waits for their writer tasks
    /// to exit. Called once, at shutdown; no further `write_row` calls
    /// are expected afterward.
    pub async fn close_all(&self) -> Result<(), SinkError> {
        let handles: Vec<_> = {
            let mut sinks = self.sinks.lock().await;
            sinks.drain().collect()
        };
        for (_, handle) in handles {
            let (ack_tx, ack_rx) = oneshot::channel();
            if handle.tx.send(SinkMsg::Close(ack_tx)).await.is_ok() {
                let _ = ack_rx.await;
            }
            let _ = handle.writer_task.await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OutputConfig {
        let dir = tempfile::tempdir().unwrap().into_path();
        OutputConfig {
            dir,
            flush_interval_secs: 5,
            stop_timeout_secs: 10,
            batch_size: 200,
            large_batch_threshold: 20,
            channel_capacity: 2_000,
            host: "testhost".to_string(),
        }
    }

    #[tokio::test]
    async fn writes_header_once_then_appends_rows() {
        let config = test_config();
        let controller = OutputController::new(&config).unwrap();
        controller.register_header("exec", &["pid", "comm"]).await.unwrap();

        controller.write_row("exec", &["1".to_string(), "init".to_string()]).await.unwrap();
        controller.write_row("exec", &["2".to_string(), "sh".to_string()]).await.unwrap();
        controller.flush_all().await.unwrap();

        let path = config.dir.join("testhost").read_dir().unwrap().next().unwrap().unwrap().path();
        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "pid,comm");
        assert_eq!(lines.len(), 3);
    }

    #[tokio::test]
    async fn csv_path_is_host_scoped_and_timestamped() {
        let config = test_config();
        let controller = OutputController::new(&config).unwrap();
        controller.register_header("bio", &["comm"]).await.unwrap();
        controller.write_row("bio", &["x".to_string()]).await.unwrap();
        controller.flush_all().await.unwrap();

        let host_dir = config.dir.join("testhost");
        let entry = host_dir.read_dir().unwrap().next().unwrap().unwrap();
        let name = entry.file_name().into_string().unwrap();
        assert!(name.starts_with("bio_"));
        assert!(name.ends_with(".csv"));
    }

    #[tokio::test]
    async fn console_mode_enabled_only_for_exactly_one_active_monitor() {
        let config = test_config();
        let controller = OutputController::new(&config).unwrap();

        controller.configure_console_mode(&["exec"]).await;
        assert!(controller.is_console_monitor("exec").await);

        controller.configure_console_mode(&["exec", "bio"]).await;
        assert!(!controller.is_console_monitor("exec").await);
        assert!(!controller.is_console_monitor("bio").await);
    }

    #[tokio::test]
    async fn unregistered_monitor_write_is_a_noop_not_an_error() {
        let config = test_config();
        let controller = OutputController::new(&config).unwrap();
        controller.write_row("mystery", &["x".to_string()]).await.unwrap();
        assert!(!config.dir.join("testhost").join("mystery").exists());
    }

    #[tokio::test]
    async fn close_all_transitions_sinks_to_closed() {
        let config = test_config();
        let controller = OutputController::new(&config).unwrap();
        controller.register_header("func", &["comm"]).await.unwrap();
        assert_eq!(controller.sink_state("func").await, Some(SinkState::Open));
        controller.close_all().await.unwrap();
    }
}
