//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: the in-process member store.
//!
//! Adapters translate between domain types and storage; they hold no
//! business rules.

pub mod persistence;
