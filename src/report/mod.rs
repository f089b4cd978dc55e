//! Rendering of scan results for the console and for exported files.

pub mod report;
