//! fb-context: the capability bundle a host hands to a plugin.
//!
//! Provides:
//! - `SimulationContext` + builder (write-once bundle of optional host
//!   capabilities)
//! - `NamedValueExchange` trait with the `ChannelAllocator` reference
//!   implementation
//! - `PluginComponent` lifecycle contract
//!
//! A context is built once by the host and treated as read-only for the
//! rest of the session: capabilities granted absent stay absent, and no
//! locking discipline is needed because the bundle is write-once
//! read-many.

pub mod context;
pub mod named_value;
pub mod plugin;

pub use context::{SimulationContext, SimulationContextBuilder};
pub use named_value::{ChannelAllocator, NamedValue, NamedValueExchange};
pub use plugin::PluginComponent;
