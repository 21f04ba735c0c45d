//! Map-backed package catalog.

use std::collections::BTreeMap;

use crate::package::{PropertyPackage, PropertyPackageRegistry};
use fb_core::{BridgeError, BridgeResult};

/// Constructs a fresh package handle on each resolution.
pub type PackageFactory = Box<dyn Fn() -> BridgeResult<Box<dyn PropertyPackage>> + Send + Sync>;

/// Reference registry: an explicit name -> factory map populated at
/// startup.
///
/// No module scanning, no reflection; whoever wires the host registers
/// every package it wants resolvable. A `BTreeMap` keeps the listing
/// deterministic.
#[derive(Default)]
pub struct PackageCatalog {
    factories: BTreeMap<String, PackageFactory>,
}

impl PackageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package factory under a unique name.
    ///
    /// Fails with `InvalidArgument` on an empty or already-taken name;
    /// name uniqueness within one registry is a contract requirement.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: PackageFactory,
    ) -> BridgeResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(BridgeError::invalid_argument("package name is empty"));
        }
        if self.factories.contains_key(&name) {
            return Err(BridgeError::invalid_argument(format!(
                "package name already registered: {name}"
            )));
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl PropertyPackageRegistry for PackageCatalog {
    fn list_packages(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    fn resolve(&self, name: &str) -> BridgeResult<Box<dyn PropertyPackage>> {
        if name.is_empty() {
            return Err(BridgeError::invalid_argument("package name is empty"));
        }

        let factory = self.factories.get(name).ok_or_else(|| {
            BridgeError::invalid_argument(format!("package not registered: {name}"))
        })?;

        tracing::debug!(target: "flowbridge::registry", package = name, "resolving package");

        // A listed name must never surface InvalidArgument: a factory that
        // reports one is misclassifying its own internal failure.
        match factory() {
            Ok(handle) => Ok(handle),
            Err(BridgeError::InvalidArgument { what }) => Err(BridgeError::unknown(format!(
                "package factory for {name} failed: {what}"
            ))),
            Err(other) => Err(other),
        }
    }
}
