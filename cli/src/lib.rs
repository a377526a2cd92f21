//! Health Calculator CLI
//!
//! Command-line front end over the shared calculator: parses arguments,
//! layers configuration, runs a command and renders its output.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
