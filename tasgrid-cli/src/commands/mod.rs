//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`batch`] - Resolve a CSV file of references in parallel
//! - [`config`] - Configuration management (path, init, show)
//! - [`distance`] - Planar distance to a latitude/longitude
//! - [`resolve`] - Resolve a single reference
//! - [`sheets`] - List the sheet table

pub mod batch;
pub mod common;
pub mod config;
pub mod distance;
pub mod resolve;
pub mod sheets;
