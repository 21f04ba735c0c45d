//! In-memory reference journal.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::channel::DiagnosticChannel;
use fb_core::{BridgeError, BridgeResult};

/// How a message was submitted to the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Immediate user-facing notice.
    PopUp,
    /// Durable journal append.
    Log,
}

/// A single recorded diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// RFC 3339 wall-clock timestamp taken at append time.
    pub timestamp: String,
    pub kind: MessageKind,
    pub text: String,
}

/// Mutex-serialized FIFO journal.
///
/// The reference diagnostic sink: appends are recorded in call order and
/// mirrored to `tracing` (pop-ups at WARN, log entries at INFO) so a host
/// subscriber sees them live. A full journal rejects the whole call with
/// `Unknown`; entries already recorded are never touched.
#[derive(Debug)]
pub struct MemoryJournal {
    entries: Mutex<Vec<JournalEntry>>,
    capacity: usize,
}

impl MemoryJournal {
    pub const DEFAULT_CAPACITY: usize = 4096;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            capacity,
        }
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn entries(&self) -> Vec<JournalEntry> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn append(&self, kind: MessageKind, text: &str) -> BridgeResult<()> {
        if text.is_empty() {
            return Err(BridgeError::invalid_argument("diagnostic message is empty"));
        }

        let mut guard = self
            .entries
            .lock()
            .map_err(|_| BridgeError::unknown("journal lock poisoned"))?;

        if guard.len() >= self.capacity {
            return Err(BridgeError::unknown("journal capacity reached"));
        }

        guard.push(JournalEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            kind,
            text: text.to_string(),
        });
        Ok(())
    }
}

impl Default for MemoryJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticChannel for MemoryJournal {
    fn pop_up_message(&self, text: &str) -> BridgeResult<()> {
        self.append(MessageKind::PopUp, text)?;
        tracing::warn!(target: "flowbridge::diag", "{text}");
        Ok(())
    }

    fn log_message(&self, text: &str) -> BridgeResult<()> {
        self.append(MessageKind::Log, text)?;
        tracing::info!(target: "flowbridge::diag", "{text}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_order_is_fifo() {
        let journal = MemoryJournal::new();
        journal.log_message("m1").unwrap();
        journal.log_message("m2").unwrap();
        journal.log_message("m3").unwrap();

        let texts: Vec<_> = journal.entries().into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn empty_message_is_invalid() {
        let journal = MemoryJournal::new();
        let err = journal.log_message("").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidArgument { .. }));

        let err = journal.pop_up_message("").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidArgument { .. }));

        assert!(journal.is_empty());
    }

    #[test]
    fn full_journal_reports_unknown_without_partial_write() {
        let journal = MemoryJournal::with_capacity(2);
        journal.log_message("m1").unwrap();
        journal.log_message("m2").unwrap();

        let err = journal.log_message("m3").unwrap_err();
        assert!(matches!(err, BridgeError::Unknown { .. }));

        // Earlier entries untouched, rejected entry absent.
        let texts: Vec<_> = journal.entries().into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["m1", "m2"]);
    }

    #[test]
    fn pop_up_and_log_record_their_kind() {
        let journal = MemoryJournal::new();
        journal.pop_up_message("check valve V-3").unwrap();
        journal.log_message("solve started").unwrap();

        let entries = journal.entries();
        assert_eq!(entries[0].kind, MessageKind::PopUp);
        assert_eq!(entries[1].kind, MessageKind::Log);
    }

    #[test]
    fn entries_serialize() {
        let journal = MemoryJournal::new();
        journal.log_message("hello").unwrap();
        let json = serde_json::to_string(&journal.entries()).unwrap();
        assert!(json.contains("hello"));
    }

    #[test]
    fn interleaved_calls_from_threads_all_land() {
        use std::sync::Arc;

        let journal = Arc::new(MemoryJournal::new());
        let mut handles = Vec::new();
        for t in 0..4 {
            let journal = Arc::clone(&journal);
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    journal.log_message(&format!("t{t}-{i}")).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(journal.len(), 100);

        // Per-thread order preserved even though interleaving is free.
        let texts: Vec<_> = journal.entries().into_iter().map(|e| e.text).collect();
        for t in 0..4 {
            let ours: Vec<_> = texts
                .iter()
                .filter(|m| m.starts_with(&format!("t{t}-")))
                .cloned()
                .collect();
            let expected: Vec<_> = (0..25).map(|i| format!("t{t}-{i}")).collect();
            assert_eq!(ours, expected);
        }
    }
}
