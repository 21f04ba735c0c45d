//! fb-registry: name-based resolution of pluggable components.
//!
//! Provides:
//! - `PropertyPackageRegistry` trait and the `PackageCatalog` reference
//!   implementation (explicit name -> factory map, populated at startup)
//! - `MaterialTemplateRegistry` mirroring the resolver shape
//! - `PluginDiscovery` seam for enumerating installed plugins
//!
//! # Architecture
//!
//! Resolution turns a name into a live handle and nothing more. How a
//! plugin is packaged, found on disk, or loaded is an external
//! collaborator's concern; this crate only consumes the result of
//! discovery (a name plus something that can construct the handle).
//! Registries promise nothing about handle identity: a resolver may hand
//! out a fresh instance per call, so callers compare handles by name.

pub mod catalog;
pub mod discovery;
pub mod material;
pub mod package;

pub use catalog::{PackageCatalog, PackageFactory};
pub use discovery::{PluginDescriptor, PluginDiscovery, PluginKind, StaticDiscovery};
pub use material::{BasicMaterial, Material, MaterialTemplateRegistry, TemplateCatalog, TemplateFactory};
pub use package::{BasicPropertyPackage, PropertyPackage, PropertyPackageRegistry};
