//! Plugin lifecycle contract.

use std::sync::Arc;

use fb_core::{BridgeResult, Identified};

use crate::context::SimulationContext;

/// Lifecycle of a pluggable component inside one simulation session.
///
/// The host drives the sequence: `set_simulation_context` first, then
/// `initialize`, then normal operation, then `terminate`. The context
/// reference stays valid for the plugin's lifetime within the session;
/// plugins drop it on `terminate`.
pub trait PluginComponent: Identified {
    /// Receive the host's capability bundle. Called exactly once, before
    /// `initialize`.
    fn set_simulation_context(&mut self, context: Arc<SimulationContext>);

    /// Bring the plugin into a usable state.
    ///
    /// Called after the context handoff; implementations should fail with
    /// `InvalidArgument` when invoked without a context, and with
    /// `FailedInitialization` when setup cannot complete.
    fn initialize(&mut self) -> BridgeResult<()>;

    /// Release session resources. The plugin must not use the context
    /// after this returns.
    fn terminate(&mut self) -> BridgeResult<()>;
}
