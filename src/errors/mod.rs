//! Error types for the scanner.
//!
//! This module defines:
//!
//! - `ErrorLexeme`, a rejected piece of source recorded during scanning
//! - `ErrorKind`, the categories of rejected input
//! - `Error`, failures of the surrounding I/O and configuration layer

pub mod errors;
