//! Taskmaster: task tracking core with bearer token issuance.
//!
//! This crate provides the logic-carrying parts of a task-tracking backend:
//! the task lifecycle manager and the token issuance service. Routing,
//! request shaping, and durable storage are supplied by the embedding
//! application through the port traits.
//!
//! # Architecture
//!
//! Taskmaster follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`task`]: Task CRUD with update and completion bookkeeping
//! - [`auth`]: Identity-to-token issuance and verification
//! - [`config`]: Layered runtime configuration

pub mod auth;
pub mod config;
pub mod task;
