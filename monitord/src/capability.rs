use crate::errors::PermissionError;
use caps::{CapSet, Capability};

/// Kernel BTF is expected at this path on most distributions; can be
/// overridden for testing or unusual kernel packaging.
const ENV_BTF_PATH: &str = "EBPF_MONITOR_KERNEL_BTF";
const DEFAULT_BTF_PATH: &str = "/sys/kernel/btf/vmlinux";

const REQUIRED_CAPS: &[Capability] = &[
    Capability::CAP_BPF,
    Capability::CAP_PERFMON,
    Capability::CAP_SYS_ADMIN,
];

const MIN_KERNEL_MAJOR: u32 = 5;
const MIN_KERNEL_MINOR: u32 = 8;

/// Snapshot of what the host actually supports, gathered once at startup
/// and consulted by the loader when deciding which optional attach points
/// to skip.
#[derive(Debug, Clone)]
pub struct CapabilityReport {
    pub capabilities: Vec<(Capability, bool)>,
    pub kernel_version: (u32, u32),
    pub kernel_version_raw: String,
    pub btf_available: bool,
}

impl CapabilityReport {
    pub fn missing_capabilities(&self) -> Vec<Capability> {
        self.capabilities
            .iter()
            .filter(|(_, present)| !present)
            .map(|(cap, _)| *cap)
            .collect()
    }

    pub fn kernel_satisfies_minimum(&self) -> bool {
        self.kernel_version >= (MIN_KERNEL_MAJOR, MIN_KERNEL_MINOR)
    }
}

/// Gathers capability bits, kernel version, and BTF availability without
/// failing on any single check — callers decide what's fatal.
pub fn probe() -> Result<CapabilityReport, PermissionError> {
    let capabilities = REQUIRED_CAPS
        .iter()
        .map(|cap| {
            let present = caps::has_cap(None, CapSet::Effective, *cap).unwrap_or(false);
            (*cap, present)
        })
        .collect();

    let kernel_version_raw = read_osrelease()?;
    let kernel_version = parse_kernel_version(&kernel_version_raw);
    let btf_available = btf_path().is_some();

    Ok(CapabilityReport {
        capabilities,
        kernel_version,
        kernel_version_raw,
        btf_available,
    })
}

/// Fails the caller if any required capability is missing or the kernel
/// is older than supported. Called once during startup before any BPF
/// object is loaded.
pub fn ensure_environment() -> Result<CapabilityReport, PermissionError> {
    let report = probe()?;

    let missing = report.missing_capabilities();
    if let Some(cap) = missing.first() {
        return Err(PermissionError::MissingCapability(cap.to_string()));
    }

    if !report.kernel_satisfies_minimum() {
        return Err(PermissionError::KernelTooOld {
            found: report.kernel_version_raw.clone(),
            min: format!("{MIN_KERNEL_MAJOR}.{MIN_KERNEL_MINOR}"),
        });
    }

    Ok(report)
}

fn read_osrelease() -> Result<String, PermissionError> {
    procfs::sys::kernel::osrelease().map_err(|e| PermissionError::OsReleaseUnreadable(e.to_string()))
}

fn parse_kernel_version(raw: &str) -> (u32, u32) {
    let mut parts = raw.split(['.', '-']);
    let major = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let minor = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    (major, minor)
}

/// Returns the BTF path to use, checking the env override first, then the
/// conventional kernel path. Mirrors the candidate-path search the loader
/// uses for the compiled BPF object itself.
pub fn btf_path() -> Option<std::path::PathBuf> {
    if let Ok(path) = std::env::var(ENV_BTF_PATH) {
        let path = std::path::PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }
    let default = std::path::PathBuf::from(DEFAULT_BTF_PATH);
    if default.exists() {
        Some(default)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_osrelease_strings() {
        assert_eq!(parse_kernel_version("6.8.0-40-generic"), (6, 8));
        assert_eq!(parse_kernel_version("5.15.0"), (5, 15));
    }

    #[test]
    fn parses_malformed_string_as_zero() {
        assert_eq!(parse_kernel_version("not-a-version"), (0, 0));
    }

    #[test]
    fn report_flags_missing_minimum() {
        let report = CapabilityReport {
            capabilities: vec![],
            kernel_version: (4, 19),
            kernel_version_raw: "4.19.0".to_string(),
            btf_available: false,
        };
        assert!(!report.kernel_satisfies_minimum());
    }

    #[test]
    fn report_accepts_current_kernels() {
        let report = CapabilityReport {
            capabilities: vec![],
            kernel_version: (6, 8),
            kernel_version_raw: "6.8.0".to_string(),
            btf_available: true,
        };
        assert!(report.kernel_satisfies_minimum());
    }
}
