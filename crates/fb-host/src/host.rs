//! Reference host implementation.

use std::sync::{Arc, RwLock, Weak};

use fb_context::{ChannelAllocator, SimulationContext};
use fb_core::BridgeResult;
use fb_diag::MemoryJournal;
use fb_monitor::{
    FlowsheetMonitoring, MaterialState, SolutionStatus, StreamSnapshot, UnitOperationSnapshot,
    ValidationStatus,
};
use fb_registry::{PackageCatalog, PropertyPackageRegistry, TemplateCatalog};

use crate::config::HostConfig;
use crate::flowsheet::Flowsheet;

/// In-memory simulation environment.
///
/// Owns the flowsheet behind one `RwLock`: solve and validate take the
/// write lock, monitoring reads take the read lock. A monitoring call
/// issued during an active solve therefore blocks until the solve
/// finishes — the host's documented policy; it never observes a
/// half-written flowsheet.
pub struct SimulationHost {
    config: HostConfig,
    flowsheet: RwLock<Flowsheet>,
    journal: Arc<MemoryJournal>,
    channels: Arc<ChannelAllocator>,
    templates: Arc<TemplateCatalog>,
    packages: PackageCatalog,
    // Handle back to the owning Arc so contexts can carry the host as
    // their monitoring capability.
    self_ref: Weak<SimulationHost>,
}

impl SimulationHost {
    /// Build a host from startup-registered catalogs. Registration is
    /// closed once the host exists; the resolvable set does not grow
    /// mid-session.
    pub fn new(
        config: HostConfig,
        packages: PackageCatalog,
        templates: TemplateCatalog,
    ) -> Arc<Self> {
        let journal = Arc::new(MemoryJournal::with_capacity(config.journal_capacity));
        Arc::new_cyclic(|weak| Self {
            config,
            flowsheet: RwLock::new(Flowsheet::new()),
            journal,
            channels: Arc::new(ChannelAllocator::new()),
            templates: Arc::new(templates),
            packages,
            self_ref: weak.clone(),
        })
    }

    pub fn with_defaults(packages: PackageCatalog) -> Arc<Self> {
        Self::new(HostConfig::default(), packages, TemplateCatalog::new())
    }

    /// The host-owned journal, for inspection and UI rendering.
    pub fn journal(&self) -> &Arc<MemoryJournal> {
        &self.journal
    }

    /// Name-based property package resolution.
    pub fn package_registry(&self) -> &dyn PropertyPackageRegistry {
        &self.packages
    }

    /// Assemble the capability bundle for one plugin, honoring the
    /// configured grants. Built once per plugin; read-only after handoff.
    pub fn create_context(&self) -> Arc<SimulationContext> {
        let mut builder = SimulationContext::builder();
        if self.config.grant_diagnostics {
            builder = builder.diagnostics(self.journal.clone());
        }
        if self.config.grant_named_values {
            builder = builder.named_values(self.channels.clone());
        }
        if self.config.grant_material_templates {
            builder = builder.material_templates(self.templates.clone());
        }
        if self.config.grant_monitoring {
            if let Some(host) = self.self_ref.upgrade() {
                builder = builder.monitoring(host as Arc<dyn FlowsheetMonitoring>);
            }
        }
        Arc::new(builder.build())
    }

    // ----- flowsheet edits (host control thread) -----

    pub fn add_stream(&self, stream: StreamSnapshot) -> BridgeResult<()> {
        self.write_lock().add_stream(stream)
    }

    pub fn add_unit_operation(&self, unit_op: UnitOperationSnapshot) -> BridgeResult<()> {
        self.write_lock().add_unit_operation(unit_op)
    }

    pub fn set_material_state(&self, name: &str, state: MaterialState) -> BridgeResult<()> {
        self.write_lock().set_material_state(name, state)
    }

    // ----- solve / validate actions -----

    /// Run structural validation and record the outcome.
    pub fn validate(&self) -> ValidationStatus {
        let mut sheet = self.write_lock();
        let status = sheet.validate();
        tracing::info!(target: "flowbridge::host", ?status, "validation finished");
        status
    }

    /// Run the built-in solve: validate, then mark the flowsheet solved.
    ///
    /// The write lock is held for the whole attempt. An invalid flowsheet
    /// records `InvalidOperation`; real numerics belong to an external
    /// engine, which reports through [`record_solve_outcome`].
    ///
    /// [`record_solve_outcome`]: SimulationHost::record_solve_outcome
    pub fn solve(&self) -> SolutionStatus {
        let mut sheet = self.write_lock();
        let validation = sheet.validate();
        let status = if validation == ValidationStatus::Valid {
            SolutionStatus::Solved
        } else {
            SolutionStatus::InvalidOperation
        };
        sheet.record_solve_outcome(status);
        tracing::info!(target: "flowbridge::host", ?status, "solve finished");
        status
    }

    /// Record the outcome an external solve engine reported.
    pub fn record_solve_outcome(&self, status: SolutionStatus) {
        self.write_lock().record_solve_outcome(status);
    }

    /// Record the outcome an external validation pass reported.
    pub fn record_validation_outcome(&self, status: ValidationStatus) {
        self.write_lock().record_validation_outcome(status);
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Flowsheet> {
        self.flowsheet
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, Flowsheet> {
        self.flowsheet
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FlowsheetMonitoring for SimulationHost {
    fn streams(&self) -> Vec<StreamSnapshot> {
        self.read_lock().streams().to_vec()
    }

    fn unit_operations(&self) -> Vec<UnitOperationSnapshot> {
        self.read_lock().unit_operations().to_vec()
    }

    fn solution_status(&self) -> SolutionStatus {
        self.read_lock().solution_status()
    }

    fn validation_status(&self) -> ValidationStatus {
        self.read_lock().validation_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_core::Identification;

    fn host_with_feed() -> Arc<SimulationHost> {
        let host = SimulationHost::with_defaults(PackageCatalog::new());
        host.add_stream(StreamSnapshot::material(
            Identification::new("S-01", "Feed"),
            MaterialState {
                p_pa: Some(101_325.0),
                t_k: Some(300.0),
                mdot_kg_s: Some(1.0),
                h_j_per_kg: None,
            },
        ))
        .unwrap();
        host
    }

    #[test]
    fn solve_transitions_not_solved_to_solved() {
        let host = host_with_feed();
        assert_eq!(host.solution_status(), SolutionStatus::NotSolved);
        assert_eq!(host.solve(), SolutionStatus::Solved);
        assert_eq!(host.solution_status(), SolutionStatus::Solved);
        assert_eq!(host.validation_status(), ValidationStatus::Valid);
    }

    #[test]
    fn solve_on_empty_flowsheet_is_invalid_operation() {
        let host = SimulationHost::with_defaults(PackageCatalog::new());
        assert_eq!(host.solve(), SolutionStatus::InvalidOperation);
        assert_eq!(host.validation_status(), ValidationStatus::Invalid);
    }

    #[test]
    fn external_engine_outcome_is_observable() {
        let host = host_with_feed();
        host.record_solve_outcome(SolutionStatus::FailedToConverge);
        assert_eq!(host.solution_status(), SolutionStatus::FailedToConverge);
        assert!(!host.is_solved());
    }

    #[test]
    fn context_grants_follow_config() {
        let config = HostConfig {
            grant_monitoring: false,
            ..HostConfig::default()
        };
        let host = SimulationHost::new(config, PackageCatalog::new(), TemplateCatalog::new());
        let ctx = host.create_context();
        assert!(ctx.monitoring().is_none());
        assert!(ctx.diagnostics().is_some());
        assert!(ctx.named_values().is_some());
        assert!(ctx.material_templates().is_some());
    }

    #[test]
    fn monitoring_reads_block_until_writer_releases() {
        let host = host_with_feed();
        // Edits reset statuses; a reader after the edit sees the reset
        // value, not an intermediate one.
        host.add_unit_operation(UnitOperationSnapshot::new(
            Identification::new("MIX-1", "Mixer"),
            None,
        ))
        .unwrap();
        assert_eq!(host.solution_status(), SolutionStatus::NotSolved);
    }
}
