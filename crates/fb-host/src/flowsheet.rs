//! Host-side flowsheet model.

use fb_core::{BridgeError, BridgeResult, Identified};
use fb_monitor::{
    MaterialState, SolutionStatus, StreamSnapshot, UnitOperationSnapshot, ValidationStatus,
};

/// The live graph of streams and unit operations under simulation.
///
/// This is the mutable side of the monitoring contract: the host edits it
/// and drives its statuses, the monitoring view only clones snapshots out.
/// Any structural edit drops both statuses back to their initial values —
/// a changed flowsheet is neither validated nor solved.
#[derive(Debug, Default)]
pub struct Flowsheet {
    streams: Vec<StreamSnapshot>,
    unit_operations: Vec<UnitOperationSnapshot>,
    solution: Option<SolutionStatus>,
    validation: Option<ValidationStatus>,
}

impl Flowsheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stream(&mut self, stream: StreamSnapshot) -> BridgeResult<()> {
        if stream.name().is_empty() {
            return Err(BridgeError::invalid_argument("stream name is empty"));
        }
        if self.streams.iter().any(|s| s.name() == stream.name()) {
            return Err(BridgeError::invalid_argument(format!(
                "stream name already in flowsheet: {}",
                stream.name()
            )));
        }
        self.streams.push(stream);
        self.reset_statuses();
        Ok(())
    }

    pub fn add_unit_operation(&mut self, unit_op: UnitOperationSnapshot) -> BridgeResult<()> {
        if unit_op.name().is_empty() {
            return Err(BridgeError::invalid_argument("unit operation name is empty"));
        }
        if self.unit_operations.iter().any(|u| u.name() == unit_op.name()) {
            return Err(BridgeError::invalid_argument(format!(
                "unit operation name already in flowsheet: {}",
                unit_op.name()
            )));
        }
        self.unit_operations.push(unit_op);
        self.reset_statuses();
        Ok(())
    }

    /// Overwrite the state of a named material stream (solver write-back).
    pub fn set_material_state(&mut self, name: &str, state: MaterialState) -> BridgeResult<()> {
        let stream = self
            .streams
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| {
                BridgeError::invalid_argument(format!("no stream named {name} in flowsheet"))
            })?;
        match &mut stream.kind {
            fb_monitor::StreamKind::Material { state: current } => {
                *current = state;
                Ok(())
            }
            fb_monitor::StreamKind::Signal { .. } => Err(BridgeError::invalid_argument(format!(
                "stream {name} is not a material stream"
            ))),
        }
    }

    pub fn streams(&self) -> &[StreamSnapshot] {
        &self.streams
    }

    pub fn unit_operations(&self) -> &[UnitOperationSnapshot] {
        &self.unit_operations
    }

    /// Status of the last solve attempt; `NotSolved` before any attempt.
    pub fn solution_status(&self) -> SolutionStatus {
        self.solution.unwrap_or(SolutionStatus::NotSolved)
    }

    /// Status of the last validation attempt; `NotValidated` before any.
    pub fn validation_status(&self) -> ValidationStatus {
        self.validation.unwrap_or(ValidationStatus::NotValidated)
    }

    pub fn record_solve_outcome(&mut self, status: SolutionStatus) {
        self.solution = Some(status);
    }

    pub fn record_validation_outcome(&mut self, status: ValidationStatus) {
        self.validation = Some(status);
    }

    /// Structural checks: every entity named, names unique across the
    /// flowsheet, at least one stream present.
    pub fn validate(&mut self) -> ValidationStatus {
        let mut names: Vec<&str> = self
            .streams
            .iter()
            .map(|s| s.name())
            .chain(self.unit_operations.iter().map(|u| u.name()))
            .collect();
        names.sort_unstable();

        let empty_name = names.iter().any(|n| n.is_empty());
        let duplicate = names.windows(2).any(|w| w[0] == w[1]);

        let status = if self.streams.is_empty() || empty_name || duplicate {
            ValidationStatus::Invalid
        } else {
            ValidationStatus::Valid
        };
        self.validation = Some(status);
        status
    }

    fn reset_statuses(&mut self) {
        self.solution = None;
        self.validation = None;
    }
}
