//! fb-diag: one-way diagnostic channel from plugin to host.
//!
//! Provides:
//! - `DiagnosticChannel` trait (pop-up notice + durable journal append)
//! - `MemoryJournal` reference sink (FIFO, timestamped, mirrored to tracing)
//!
//! Diagnostics flow plugin -> host only and never mutate simulation state.
//! A failing sink degrades to an error report; it must never crash the
//! calling plugin or tear an already-journaled entry.

pub mod channel;
pub mod journal;

pub use channel::DiagnosticChannel;
pub use journal::{JournalEntry, MemoryJournal, MessageKind};
