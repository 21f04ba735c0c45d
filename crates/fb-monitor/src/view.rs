//! Monitoring view contract.

use crate::snapshot::{StreamSnapshot, UnitOperationSnapshot};
use crate::status::{SolutionStatus, ValidationStatus};

/// Read-only view over a running simulation, granted to monitoring-class
/// plugins through the simulation context.
///
/// # Non-mutation invariant
///
/// Nothing reachable from this trait may change solution status,
/// validation status, stream values, or unit-operation parameters. The
/// snapshot return types enforce this structurally: they are owned copies
/// with no path back to the live flowsheet.
///
/// # Concurrency
///
/// Reads are safe between host solve/validate cycles. During an active
/// solve an implementation must pick one policy — block until the solve
/// finishes, or reject the call — and apply it consistently; returning a
/// torn snapshot is never allowed. The reference host blocks.
pub trait FlowsheetMonitoring: Send + Sync {
    /// All streams currently in the flowsheet.
    fn streams(&self) -> Vec<StreamSnapshot>;

    /// All unit operations currently in the flowsheet.
    fn unit_operations(&self) -> Vec<UnitOperationSnapshot>;

    /// Outcome of the host's last solve attempt. Pure read, idempotent.
    fn solution_status(&self) -> SolutionStatus;

    /// Outcome of the host's last validation attempt. Pure read,
    /// idempotent.
    fn validation_status(&self) -> ValidationStatus;

    /// Legacy boolean shape of the solution axis, derived so it cannot
    /// drift from `solution_status`.
    fn is_solved(&self) -> bool {
        self.solution_status() == SolutionStatus::Solved
    }
}
