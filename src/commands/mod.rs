//! Command handlers for the termcard CLI.
//!
//! Each submodule handles a specific CLI command or command group. The
//! dispatch logic lives in main.rs.

pub mod completions;
pub mod config;
pub mod show;
