//! Property package handle and registry contracts.

use fb_core::{BridgeResult, Identification, Identified};

/// A resolved thermodynamic property package.
///
/// The full property-evaluation surface belongs to the package
/// implementation and is out of scope for the bridge; what the bridge
/// needs is an identifiable handle plus a cheap capability probe, the same
/// way a fluid backend advertises which compositions it supports before
/// anyone asks it to compute.
///
/// Ownership transfers to whoever resolved the handle. The registry keeps
/// nothing after resolution.
pub trait PropertyPackage: Identified + Send + Sync + std::fmt::Debug {
    /// Compounds this package can describe.
    fn compounds(&self) -> Vec<String>;

    /// Whether the package can evaluate the named property ("density",
    /// "enthalpy", ...). A probe, never a calculation.
    fn supports_property(&self, property: &str) -> bool;
}

/// Enumerates available packages and resolves a chosen name to a live
/// handle.
pub trait PropertyPackageRegistry: Send + Sync {
    /// Names currently resolvable. Empty when none are available, never a
    /// panic; safe to call at any time.
    fn list_packages(&self) -> Vec<String>;

    /// Resolve a name to a live package handle.
    ///
    /// Fails with `InvalidArgument` when `name` is empty or not in
    /// `list_packages()`; with `FailedInitialization` when the package is
    /// recognized but cannot be brought up; with `Unknown` for any other
    /// internal failure. Repeated resolutions of the same name may return
    /// distinct instances.
    fn resolve(&self, name: &str) -> BridgeResult<Box<dyn PropertyPackage>>;
}

/// Descriptive package handle for hosts and tests.
///
/// Carries an identification, a compound list, and the set of properties
/// it claims to evaluate. No numerics live here.
#[derive(Debug, Clone)]
pub struct BasicPropertyPackage {
    ident: Identification,
    compounds: Vec<String>,
    properties: Vec<String>,
}

impl BasicPropertyPackage {
    pub fn new(
        ident: Identification,
        compounds: Vec<String>,
        properties: Vec<String>,
    ) -> Self {
        Self {
            ident,
            compounds,
            properties,
        }
    }

    /// Rename the package. The only sanctioned way to change its name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.ident.rename(name);
    }
}

impl Identified for BasicPropertyPackage {
    fn identification(&self) -> &Identification {
        &self.ident
    }
}

impl PropertyPackage for BasicPropertyPackage {
    fn compounds(&self) -> Vec<String> {
        self.compounds.clone()
    }

    fn supports_property(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p == property)
    }
}
