use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{Local, NaiveDate};
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LoggingConfig;

/// Appends to `{stem}.{date}.{ext}` and swaps to a new file the first time
/// a log call crosses midnight. Files older than `retention_days` are
/// deleted on rotation rather than on a timer, so a daemon that logs
/// rarely doesn't accumulate stale state between writes.
struct RotatingFile {
    dir: PathBuf,
    stem: String,
    extension: Option<String>,
    retention_days: i64,
    current_date: NaiveDate,
    file: fs::File,
}

impl RotatingFile {
    fn open(base_path: &Path, retention_days: u32) -> std::io::Result<Self> {
        let dir = base_path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        fs::create_dir_all(&dir)?;
        let stem = base_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "monitor".to_string());
        let extension = base_path.extension().map(|e| e.to_string_lossy().to_string());
        let today = Local::now().date_naive();
        let file = Self::open_for_date(&dir, &stem, extension.as_deref(), today)?;
        let mut rotating = Self {
            dir,
            stem,
            extension,
            retention_days: retention_days as i64,
            current_date: today,
            file,
        };
        rotating.prune_expired();
        Ok(rotating)
    }

    fn path_for_date(dir: &Path, stem: &str, extension: Option<&str>, date: NaiveDate) -> PathBuf {
        let stamp = date.format("%Y-%m-%d");
        match extension {
            Some(ext) => dir.join(format!("{stem}.{stamp}.{ext}")),
            None => dir.join(format!("{stem}.{stamp}")),
        }
    }

    fn open_for_date(dir: &Path, stem: &str, extension: Option<&str>, date: NaiveDate) -> std::io::Result<fs::File> {
        let path = Self::path_for_date(dir, stem, extension, date);
        fs::OpenOptions::new().create(true).append(true).open(path)
    }

    fn roll_if_needed(&mut self) {
        let today = Local::now().date_naive();
        if today == self.current_date {
            return;
        }
        match Self::open_for_date(&self.dir, &self.stem, self.extension.as_deref(), today) {
            Ok(file) => {
                self.file = file;
                self.current_date = today;
                self.prune_expired();
            }
            Err(err) => {
                eprintln!("monitord: failed to roll log file: {err}");
            }
        }
    }

    fn prune_expired(&self) {
        if self.retention_days <= 0 {
            return;
        }
        let cutoff = self.current_date - chrono::Duration::days(self.retention_days);
        let prefix = format!("{}.", self.stem);
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return;
        };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            let Some(rest) = name.strip_prefix(&prefix) else {
                continue;
            };
            let date_part = rest.split('.').next().unwrap_or("");
            let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") else {
                continue;
            };
            if date < cutoff {
                let _ = fs::remove_file(entry.path());
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        self.roll_if_needed();
        let _ = writeln!(self.file, "{line}");
    }

    fn flush(&mut self) {
        let _ = self.file.flush();
    }
}

/// Pairs `env_logger`'s stderr formatter (the default text sink) with the
/// rotating file appender above, so both fire for every record instead of
/// picking one or the other.
pub struct RotatingFileLogger {
    level: LevelFilter,
    console: env_logger::Logger,
    file: Mutex<Option<RotatingFile>>,
}

impl RotatingFileLogger {
    pub fn init(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
        let level = parse_level(&config.level);
        let console = env_logger::Builder::new().filter_level(level).build();
        let file = RotatingFile::open(&config.file, config.retention_days)
            .map_err(|err| {
                eprintln!("monitord: failed to open log file {}: {err}, logging to stderr only", config.file.display());
            })
            .ok();
        let logger = RotatingFileLogger {
            level,
            console,
            file: Mutex::new(file),
        };
        log::set_max_level(level);
        log::set_boxed_logger(Box::new(logger))
    }
}

impl Log for RotatingFileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.console.log(record);
        let line = format_record(record);
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                file.write_line(&line);
            }
        }
    }

    fn flush(&self) {
        self.console.flush();
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                file.flush();
            }
        }
    }
}

fn format_record(record: &Record) -> String {
    let now = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");
    format!("[{now} {:<5} {}] {}", record.level(), record.target(), record.args())
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Raises the global filter to `Debug` for `-v`/`--verbose`, without
/// touching anything else about the installed logger.
pub fn raise_to_debug() {
    if log::max_level() < LevelFilter::Debug {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }

    #[test]
    fn rotating_file_writes_to_dated_path() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("monitor.log");
        let mut file = RotatingFile::open(&base, 365).unwrap();
        file.write_line("hello");
        file.flush();

        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let expected = dir.path().join(format!("monitor.{today}.log"));
        let contents = fs::read_to_string(expected).unwrap();
        assert!(contents.contains("hello"));
    }

    #[test]
    fn prune_removes_files_older_than_retention() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("monitor.log");
        let stale = dir.path().join("monitor.2000-01-01.log");
        fs::write(&stale, "old").unwrap();

        let _file = RotatingFile::open(&base, 1).unwrap();
        assert!(!stale.exists());
    }
}
