//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`bodies`] - List registered bodies
//! - [`config`] - Configuration management (path, show, init)
//! - [`resolve`] - Resolve basemaps for a STAC document
//! - [`targets`] - Print the target bodies of a STAC document

pub mod bodies;
pub mod common;
pub mod config;
pub mod resolve;
pub mod targets;
