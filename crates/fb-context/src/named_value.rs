//! Named-value lookup service.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use fb_core::{BridgeError, BridgeResult};

/// Value handed out by the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NamedValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

/// Generic key lookup for host-supplied auxiliary values.
///
/// Two consecutive `get_value` calls with the same name MAY return
/// different results — allocation-style names ("FreeChannel") hand out a
/// fresh resource each time. That is documented non-idempotence, not a
/// bug. For any such exclusive resource the host guarantees no two
/// concurrently held values are equal.
pub trait NamedValueExchange: Send + Sync {
    /// Names currently obtainable.
    fn list_names(&self) -> Vec<String>;

    /// Look up (or allocate) the value behind a name.
    ///
    /// Fails with `InvalidArgument` when `name` is not in `list_names()`.
    fn get_value(&self, name: &str) -> BridgeResult<NamedValue>;
}

/// Exchange handing out exclusive numeric channels.
///
/// `get_value("FreeChannel")` returns a channel number never returned
/// before by this allocator; the internal counter is Mutex-serialized so
/// concurrent plugins cannot receive the same channel.
#[derive(Debug)]
pub struct ChannelAllocator {
    next: Mutex<i64>,
}

impl ChannelAllocator {
    pub const FREE_CHANNEL: &'static str = "FreeChannel";

    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: i64) -> Self {
        Self {
            next: Mutex::new(first),
        }
    }
}

impl Default for ChannelAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NamedValueExchange for ChannelAllocator {
    fn list_names(&self) -> Vec<String> {
        vec![Self::FREE_CHANNEL.to_string()]
    }

    fn get_value(&self, name: &str) -> BridgeResult<NamedValue> {
        if name != Self::FREE_CHANNEL {
            return Err(BridgeError::invalid_argument(format!(
                "named value not available: {name}"
            )));
        }

        let mut next = self
            .next
            .lock()
            .map_err(|_| BridgeError::unknown("channel allocator lock poisoned"))?;
        let channel = *next;
        *next += 1;
        tracing::debug!(target: "flowbridge::context", channel, "allocated channel");
        Ok(NamedValue::Integer(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_its_single_name() {
        let exchange = ChannelAllocator::new();
        assert_eq!(exchange.list_names(), vec!["FreeChannel"]);
    }

    #[test]
    fn unknown_name_is_invalid_argument() {
        let exchange = ChannelAllocator::new();
        let err = exchange.get_value("LicenseServer").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidArgument { .. }));
    }

    #[test]
    fn consecutive_allocations_differ() {
        let exchange = ChannelAllocator::new();
        let a = exchange.get_value(ChannelAllocator::FREE_CHANNEL).unwrap();
        let b = exchange.get_value(ChannelAllocator::FREE_CHANNEL).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn concurrent_allocations_never_collide() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let exchange = Arc::new(ChannelAllocator::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let exchange = Arc::clone(&exchange);
            handles.push(std::thread::spawn(move || {
                (0..50)
                    .map(|_| exchange.get_value(ChannelAllocator::FREE_CHANNEL).unwrap())
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                let NamedValue::Integer(channel) = value else {
                    panic!("channel allocations are integers");
                };
                assert!(seen.insert(channel), "channel {channel} handed out twice");
            }
        }
        assert_eq!(seen.len(), 200);
    }
}
