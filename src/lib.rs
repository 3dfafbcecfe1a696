//! Caseflow - Complaint workflow tracker
//!
//! This library provides the core functionality for the caseflow CLI and API server, including:
//! - Schema definitions for work items, statuses and config
//! - Domain logic for the transition policy, lifecycle operations and session timing
//! - File system utilities for reading/writing the JSON item document
//! - A store and service layer that serializes read-modify-write cycles
//! - Per-role views with filtering, sorting and summaries
//! - An axum HTTP server exposing the service

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod server;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use errors::{CaseflowError, Result};
pub use schemas::{Config, Status, WorkItem};
