//! Core analysis engine.
//!
//! - `file_scanner`: Source file discovery and change-set filtering
//! - `locale`: Locale layouts and the locale document codec
//! - `parsers`: JSX/TSX parsing
//! - `scan`: Runs every rule and assembles the report

pub mod file_scanner;
pub mod locale;
pub mod parsers;
pub mod scan;

pub use scan::{ScanConfig, ScanReport, scan_all};
