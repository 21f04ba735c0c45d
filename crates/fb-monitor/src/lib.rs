//! fb-monitor: read-only view over a running flowsheet.
//!
//! Provides:
//! - `SolutionStatus` / `ValidationStatus` snapshot enums
//! - stream and unit-operation snapshot types with runtime capability
//!   probes (material state vs. named parameters)
//! - `FlowsheetMonitoring` trait for monitoring-class plugins
//!
//! The defining safety property of this crate is that nothing reachable
//! from it can mutate the flowsheet: every collection handed out is an
//! owned snapshot, and the status getters are pure reads. Solve and
//! validate transitions are host actions that live elsewhere.

pub mod snapshot;
pub mod status;
pub mod view;

pub use snapshot::{
    MaterialState, NamedParameter, ParameterValue, StreamKind, StreamSnapshot,
    UnitOperationSnapshot,
};
pub use status::{SolutionStatus, ValidationStatus};
pub use view::FlowsheetMonitoring;
