//! Controller unit and integration tests.
//!
//! Tests are organized into modules by feature area:
//! - `common` - shared test helpers (mock and memory-backed controllers)
//! - `controller` - mock-store tests for the delegation contract
//! - `memory_flow` - controller over the in-memory backend

pub mod common;
