//! fb-core: stable foundation for flowbridge.
//!
//! Contains:
//! - identification (name + description carried by every bridge entity)
//! - error (shared error taxonomy used across all capability crates)
//! - units (uom SI types + constructors for material-state quantities)

pub mod error;
pub mod identification;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BridgeError, BridgeResult};
pub use identification::{Identification, Identified};
pub use units::*;
