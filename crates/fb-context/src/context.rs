//! Simulation context bundle.

use std::sync::Arc;

use fb_diag::DiagnosticChannel;
use fb_monitor::FlowsheetMonitoring;
use fb_registry::MaterialTemplateRegistry;

use crate::named_value::NamedValueExchange;

/// Host capabilities granted to one plugin for one simulation session.
///
/// Each capability is optional: `None` means the host does not support
/// that service, which is normal operation and never an error. The bundle
/// is inert — it aggregates and does nothing else — and has no setters, so
/// a capability absent at construction is absent for the life of the
/// context.
#[derive(Clone)]
pub struct SimulationContext {
    diagnostics: Option<Arc<dyn DiagnosticChannel>>,
    named_values: Option<Arc<dyn NamedValueExchange>>,
    material_templates: Option<Arc<dyn MaterialTemplateRegistry>>,
    monitoring: Option<Arc<dyn FlowsheetMonitoring>>,
}

impl SimulationContext {
    pub fn builder() -> SimulationContextBuilder {
        SimulationContextBuilder::default()
    }

    /// Plugin-to-host diagnostic channel, if granted.
    pub fn diagnostics(&self) -> Option<&Arc<dyn DiagnosticChannel>> {
        self.diagnostics.as_ref()
    }

    /// Named-value lookup service, if granted.
    pub fn named_values(&self) -> Option<&Arc<dyn NamedValueExchange>> {
        self.named_values.as_ref()
    }

    /// Material template creation, if granted.
    pub fn material_templates(&self) -> Option<&Arc<dyn MaterialTemplateRegistry>> {
        self.material_templates.as_ref()
    }

    /// Flowsheet monitoring view, if granted (monitoring-class plugins
    /// only, at the host's discretion).
    pub fn monitoring(&self) -> Option<&Arc<dyn FlowsheetMonitoring>> {
        self.monitoring.as_ref()
    }
}

impl std::fmt::Debug for SimulationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationContext")
            .field("diagnostics", &self.diagnostics.is_some())
            .field("named_values", &self.named_values.is_some())
            .field("material_templates", &self.material_templates.is_some())
            .field("monitoring", &self.monitoring.is_some())
            .finish()
    }
}

/// One-shot builder; the host grants capabilities, builds, and hands off.
#[derive(Default)]
pub struct SimulationContextBuilder {
    diagnostics: Option<Arc<dyn DiagnosticChannel>>,
    named_values: Option<Arc<dyn NamedValueExchange>>,
    material_templates: Option<Arc<dyn MaterialTemplateRegistry>>,
    monitoring: Option<Arc<dyn FlowsheetMonitoring>>,
}

impl SimulationContextBuilder {
    pub fn diagnostics(mut self, channel: Arc<dyn DiagnosticChannel>) -> Self {
        self.diagnostics = Some(channel);
        self
    }

    pub fn named_values(mut self, exchange: Arc<dyn NamedValueExchange>) -> Self {
        self.named_values = Some(exchange);
        self
    }

    pub fn material_templates(mut self, registry: Arc<dyn MaterialTemplateRegistry>) -> Self {
        self.material_templates = Some(registry);
        self
    }

    pub fn monitoring(mut self, view: Arc<dyn FlowsheetMonitoring>) -> Self {
        self.monitoring = Some(view);
        self
    }

    pub fn build(self) -> SimulationContext {
        SimulationContext {
            diagnostics: self.diagnostics,
            named_values: self.named_values,
            material_templates: self.material_templates,
            monitoring: self.monitoring,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_diag::MemoryJournal;

    #[test]
    fn empty_context_reports_absence_everywhere() {
        let ctx = SimulationContext::builder().build();
        assert!(ctx.diagnostics().is_none());
        assert!(ctx.named_values().is_none());
        assert!(ctx.material_templates().is_none());
        assert!(ctx.monitoring().is_none());
    }

    #[test]
    fn granted_capability_is_present() {
        let journal = Arc::new(MemoryJournal::new());
        let ctx = SimulationContext::builder().diagnostics(journal).build();
        assert!(ctx.diagnostics().is_some());
        assert!(ctx.monitoring().is_none());
    }

    #[test]
    fn clones_share_the_same_capability() {
        let journal = Arc::new(MemoryJournal::new());
        let ctx = SimulationContext::builder()
            .diagnostics(journal.clone())
            .build();
        let ctx2 = ctx.clone();

        ctx.diagnostics().unwrap().log_message("from ctx").unwrap();
        ctx2.diagnostics().unwrap().log_message("from ctx2").unwrap();
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn debug_shows_capability_presence_only() {
        let ctx = SimulationContext::builder()
            .diagnostics(Arc::new(MemoryJournal::new()))
            .build();
        let rendered = format!("{ctx:?}");
        assert!(rendered.contains("diagnostics: true"));
        assert!(rendered.contains("monitoring: false"));
    }
}
