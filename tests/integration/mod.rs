//! Integration tests for chatdeck
//!
//! These tests verify that the store, its backends and the binary work
//! together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod persistence;
pub mod store_flow;
