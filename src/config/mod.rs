//! Configuration for scanning and reporting.
//!
//! Settings are read from an optional TOML file; every field has a default
//! so an empty or missing file behaves like no configuration at all.

pub mod config;
