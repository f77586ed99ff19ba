use std::path::Path;

use nix::sys::signal::{self, Signal};
use nix::unistd::{ForkResult, Pid};

/// Forks and exits the parent, detaching the child from the controlling
/// terminal so it keeps running after the launching shell exits. Used
/// only when `--daemon` is passed; the foreground path never calls this.
pub fn daemonize() -> std::io::Result<()> {
    match unsafe { nix::unistd::fork() } {
        Ok(ForkResult::Parent { child, .. }) => {
            log::info!("forked daemon child pid {child}");
            std::process::exit(0);
        }
        Ok(ForkResult::Child) => {
            nix::unistd::setsid().map_err(|e| std::io::Error::other(e.to_string()))?;
            Ok(())
        }
        Err(e) => Err(std::io::Error::other(e.to_string())),
    }
}

/// Writes the current process id to `path`, truncating any previous
/// contents. Called after daemonizing so the pid file reflects the
/// detached child, not the short-lived parent.
pub fn write_pid_file(path: &Path) -> std::io::Result<()> {
    std::fs::write(path, format!("{}\n", std::process::id()))
}

/// Reads a pid file and sends it SIGTERM, used by `--stop`.
pub fn stop_from_pid_file(path: &Path) -> std::io::Result<()> {
    let contents = std::fs::read_to_string(path)?;
    let pid: i32 = contents
        .trim()
        .parse()
        .map_err(|_| std::io::Error::other(format!("malformed pid file {}", path.display())))?;
    signal::kill(Pid::from_raw(pid), Signal::SIGTERM).map_err(|e| std::io::Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pid_file_round_trips_current_pid() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_pid_file(file.path()).unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents.trim().parse::<u32>().unwrap(), std::process::id());
    }
}
