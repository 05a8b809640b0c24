//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and their backing
//! store. They contain no business logic.
//!
//! - **memory**: mutex-guarded in-memory account service and token verifier.

pub mod memory;
