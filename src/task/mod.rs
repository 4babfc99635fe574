//! Task lifecycle management for Taskmaster.
//!
//! This module owns the `Task` aggregate and the service that enforces its
//! update semantics: mutable fields are copied from the incoming payload,
//! the modification timestamp is refreshed, and the completion timestamp is
//! recorded when the task ends up `Completed`. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
