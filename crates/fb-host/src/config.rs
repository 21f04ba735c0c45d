//! Host configuration.

use serde::{Deserialize, Serialize};

use fb_diag::MemoryJournal;

/// Options controlling how the reference host is wired.
///
/// The `grant_*` flags decide which capabilities appear in the simulation
/// context handed to plugins; a flag off means plugins observe absence,
/// not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    pub journal_capacity: usize,
    pub grant_diagnostics: bool,
    pub grant_named_values: bool,
    pub grant_material_templates: bool,
    pub grant_monitoring: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            journal_capacity: MemoryJournal::DEFAULT_CAPACITY,
            grant_diagnostics: true,
            grant_named_values: true,
            grant_material_templates: true,
            grant_monitoring: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grants_everything() {
        let config = HostConfig::default();
        assert!(config.grant_diagnostics);
        assert!(config.grant_named_values);
        assert!(config.grant_material_templates);
        assert!(config.grant_monitoring);
    }

    #[test]
    fn loads_from_json() {
        let config: HostConfig = serde_json::from_str(
            r#"{
                "journal_capacity": 16,
                "grant_diagnostics": true,
                "grant_named_values": false,
                "grant_material_templates": false,
                "grant_monitoring": false
            }"#,
        )
        .unwrap();
        assert_eq!(config.journal_capacity, 16);
        assert!(!config.grant_monitoring);
    }
}
