use crate::config::MonitorConfig;
use crate::monitor::{build_monitor, Monitor};

/// Holds the set of monitors the supervisor will drive, built once from
/// config at startup. Unknown monitor names are skipped with a warning
/// rather than failing the whole daemon. Each monitor is paired with its
/// configured poll interval so later filtering (e.g. attach failures
/// during `prepare`) can't desynchronize the two lists.
pub struct MonitorRegistry {
    entries: Vec<(Box<dyn Monitor>, u64)>,
}

impl MonitorRegistry {
    pub fn from_config(configs: &[MonitorConfig]) -> Self {
        let mut entries = Vec::new();
        for cfg in configs {
            if !cfg.enabled {
                continue;
            }
            match build_monitor(cfg) {
                Some(monitor) => entries.push((monitor, cfg.poll_interval_ms)),
                None => log::warn!("unknown monitor '{}' in config, skipping", cfg.name),
            }
        }
        Self { entries }
    }

    pub fn into_entries(self) -> Vec<(Box<dyn Monitor>, u64)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn bare_config(name: &str) -> MonitorConfig {
        MonitorConfig {
            name: name.to_string(),
            enabled: true,
            poll_interval_ms: 1000,
            symbols: vec![],
            probe_limit: 64,
            filter_pids: vec![],
            filter_uids: vec![],
            category_filter: vec![],
            min_latency_us: 0,
            min_switches: 0,
        }
    }

    #[test]
    fn builds_one_monitor_per_enabled_config_entry() {
        let config = AppConfig::default();
        let enabled_count = config.monitors.iter().filter(|m| m.enabled).count();
        let registry = MonitorRegistry::from_config(&config.monitors);
        assert_eq!(registry.len(), enabled_count);
    }

    #[test]
    fn unknown_monitor_name_is_skipped_not_fatal() {
        let configs = vec![bare_config("does_not_exist")];
        let registry = MonitorRegistry::from_config(&configs);
        assert!(registry.is_empty());
    }

    #[test]
    fn pairs_each_monitor_with_its_configured_interval() {
        let mut cfg = bare_config("exec");
        cfg.poll_interval_ms = 2500;
        let registry = MonitorRegistry::from_config(&[cfg]);
        let entries = registry.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1, 2500);
    }
}
