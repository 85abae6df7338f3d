//! tnsurl CLI - Command-line interface for the Tibero JDBC URL resolver.
//!
//! This crate provides the `tnsurl` tool for resolving connect strings and
//! inspecting `tnsurl.toml`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
