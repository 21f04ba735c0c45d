//! Diagnostic channel contract.

use fb_core::BridgeResult;

/// One-way message sink handed to plugins for transient, non-fatal
/// communication with the host.
///
/// Implementations must be thread-safe (`Send + Sync`); the host may share
/// one channel across concurrently running plugins.
pub trait DiagnosticChannel: Send + Sync {
    /// Request immediate, attention-grabbing delivery to the end user.
    ///
    /// Fire-and-forget from the plugin's perspective: the call must not
    /// block indefinitely on a user response. Fails with `InvalidArgument`
    /// on an empty message, `Unknown` if the delivery surface is down.
    fn pop_up_message(&self, text: &str) -> BridgeResult<()>;

    /// Append a message to the host-owned durable journal.
    ///
    /// Entries from one channel are recorded in call order (FIFO).
    /// Ordering across different plugins is host-defined. Fails with
    /// `InvalidArgument` on an empty message, `Unknown` if the journal
    /// sink is unavailable; a failed call writes nothing (no torn
    /// entries).
    fn log_message(&self, text: &str) -> BridgeResult<()>;
}
