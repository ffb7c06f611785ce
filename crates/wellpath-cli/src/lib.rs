//! wellpath-cli
//!
//! Host binary wiring the parser, intake, report and export crates to the
//! filesystem. The library half holds what the binary loads from disk.

pub mod config;
