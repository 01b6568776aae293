//! Integration test utilities for the events API
//!
//! In-memory repositories stand in for PostgreSQL so the services and the
//! full router can be exercised without external infrastructure.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
pub use memory::MemoryStore;
