use std::sync::Arc;

use ebpf_monitor_common::TaskOffsets;

use crate::bpf::{self, SharedEbpf};
use crate::capability::CapabilityReport;
use crate::config::AppConfig;
use crate::errors::LoadError;
use crate::metrics::Metrics;
use crate::output::OutputController;

/// Dependency container built once at startup: config, capability
/// report, the shared loaded BPF object, metrics, and the output
/// controller. Everything downstream (registry, supervisor, monitors)
/// borrows from this instead of reaching for process-wide state.
pub struct ApplicationContext {
    pub config: AppConfig,
    pub capabilities: CapabilityReport,
    pub bpf: SharedEbpf,
    pub metrics: Arc<Metrics>,
}

impl ApplicationContext {
    pub fn build(config: AppConfig, capabilities: CapabilityReport) -> Result<Self, LoadError> {
        let offsets = TaskOffsets::zeroed();
        let bpf = bpf::load(offsets)?;
        Ok(Self {
            config,
            capabilities,
            bpf,
            metrics: Arc::new(Metrics::new()),
        })
    }

    pub fn build_output(&self) -> std::io::Result<OutputController> {
        OutputController::new(&self.config.output)
    }
}
