//! Outbound ports implemented by persistence adapters.

pub mod store;
