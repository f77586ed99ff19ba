use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use monitord::{capability, config::AppConfig, daemon, logging, ApplicationContext, Supervisor};

/// Exit codes with distinct meanings, checked by the systemd unit and by
/// operators running the binary by hand.
mod exit_code {
    pub const OK: u8 = 0;
    pub const CONFIG: u8 = 1;
    pub const PERMISSION: u8 = 2;
    pub const LOAD: u8 = 3;
    pub const RUNTIME: u8 = 4;
}

#[derive(Parser, Debug)]
#[command(name = "monitord", about = "eBPF kernel telemetry collector")]
struct Cli {
    /// Path to the YAML config file, overriding EBPF_MONITOR_CONFIG and
    /// the built-in default.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Detach from the controlling terminal and run in the background.
    #[arg(long)]
    daemon: bool,

    /// Write the daemon's pid to this file after daemonizing.
    #[arg(long, default_value = "/run/ebpf-monitor.pid")]
    pid_file: PathBuf,

    /// Send SIGTERM to the pid in --pid-file and exit.
    #[arg(long)]
    stop: bool,

    /// Run the environment capability/kernel checks and exit without
    /// loading any BPF program.
    #[arg(long)]
    check: bool,

    /// Raise the log level to debug regardless of the configured level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.stop {
        return match daemon::stop_from_pid_file(&cli.pid_file) {
            Ok(()) => ExitCode::from(exit_code::OK),
            Err(err) => {
                eprintln!("failed to stop daemon: {err}");
                ExitCode::from(exit_code::RUNTIME)
            }
        };
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("failed to start tokio runtime: {err}");
            return ExitCode::from(exit_code::RUNTIME);
        }
    };

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> ExitCode {
    let config = load_config(cli.config.as_deref());
    init_logging(&config.logging);
    if cli.verbose {
        logging::raise_to_debug();
    }

    let caps = match capability::ensure_environment() {
        Ok(report) => report,
        Err(err) => {
            error!("environment check failed: {err}");
            return ExitCode::from(exit_code::PERMISSION);
        }
    };
    info!(
        "kernel {} (btf: {}), capabilities satisfied",
        caps.kernel_version_raw, caps.btf_available
    );

    if cli.check {
        info!("environment check passed");
        return ExitCode::from(exit_code::OK);
    }

    if cli.daemon {
        if let Err(err) = daemon::daemonize() {
            eprintln!("failed to daemonize: {err}");
            return ExitCode::from(exit_code::RUNTIME);
        }
        if let Err(err) = daemon::write_pid_file(&cli.pid_file) {
            error!("failed to write pid file: {err}");
            return ExitCode::from(exit_code::RUNTIME);
        }
    }

    let context = match ApplicationContext::build(config, caps) {
        Ok(ctx) => ctx,
        Err(err) => {
            error!("failed to load BPF object: {err}");
            return ExitCode::from(exit_code::LOAD);
        }
    };

    let output = match context.build_output() {
        Ok(o) => o,
        Err(err) => {
            error!("failed to initialize output directory: {err}");
            return ExitCode::from(exit_code::RUNTIME);
        }
    };

    let mut supervisor = Supervisor::new(&context.config, context.bpf.clone(), output, context.metrics.clone());
    if let Err(err) = supervisor.prepare(&context.capabilities).await {
        error!("failed to prepare monitors: {err}");
        return ExitCode::from(exit_code::LOAD);
    }

    let shutdown = wait_for_shutdown_signal();
    tokio::select! {
        result = supervisor.run() => {
            if let Err(err) = result {
                error!("supervisor exited with error: {err}");
                return ExitCode::from(exit_code::RUNTIME);
            }
        }
        _ = shutdown => {
            info!("shutdown signal received, draining monitors");
            supervisor.shutdown().await;
        }
    }

    ExitCode::from(exit_code::OK)
}

fn load_config(explicit: Option<&std::path::Path>) -> AppConfig {
    match explicit {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
}

fn init_logging(config: &monitord::config::LoggingConfig) {
    let _ = logging::RotatingFileLogger::init(config);
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to register SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("failed to register SIGINT handler");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
