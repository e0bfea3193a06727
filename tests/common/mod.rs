//! Shared test utilities for chatdeck
//!
//! This module provides common helpers for integration tests:
//! - Deterministic UUID/timestamp generation
//! - Store fixtures over in-memory and SQLite backends

pub mod determinism;
pub mod fixtures;
