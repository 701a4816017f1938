//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads and writes the TOML file holding the console
//! address, the log level and the channel presets.

pub mod config;
