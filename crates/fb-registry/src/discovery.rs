//! Plugin discovery seam.
//!
//! How a process finds installed plugins (filesystem layout, registry
//! store, environment) lives behind this trait, outside the bridge. The
//! bridge consumes only the result: descriptors that can be matched
//! against registry names.

use serde::{Deserialize, Serialize};

use fb_core::Identification;

/// Broad class of an installed plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginKind {
    PropertyPackage,
    Monitoring,
    UnitOperation,
}

/// What discovery knows about an installed plugin before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub identification: Identification,
    pub kind: PluginKind,
}

impl PluginDescriptor {
    pub fn new(identification: Identification, kind: PluginKind) -> Self {
        Self {
            identification,
            kind,
        }
    }
}

/// Enumerates plugins installed on this machine.
pub trait PluginDiscovery: Send + Sync {
    fn enumerate_installed(&self) -> Vec<PluginDescriptor>;
}

/// Discovery backed by a list assembled at startup.
#[derive(Debug, Default)]
pub struct StaticDiscovery {
    installed: Vec<PluginDescriptor>,
}

impl StaticDiscovery {
    pub fn new(installed: Vec<PluginDescriptor>) -> Self {
        Self { installed }
    }

    /// Descriptors of one kind only.
    pub fn of_kind(&self, kind: PluginKind) -> Vec<PluginDescriptor> {
        self.installed
            .iter()
            .filter(|d| d.kind == kind)
            .cloned()
            .collect()
    }
}

impl PluginDiscovery for StaticDiscovery {
    fn enumerate_installed(&self) -> Vec<PluginDescriptor> {
        self.installed.clone()
    }
}
