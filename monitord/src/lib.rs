pub mod bpf;
pub mod capability;
pub mod config;
pub mod context;
pub mod daemon;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod monitor;
pub mod output;
pub mod registry;
pub mod supervisor;

pub use config::{AppConfig, LoggingConfig, MonitorConfig, OutputConfig};
pub use context::ApplicationContext;
pub use metrics::Metrics;
pub use supervisor::Supervisor;
