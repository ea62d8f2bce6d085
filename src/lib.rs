//! lingua-guard - i18n defect checker for React/Next.js projects
//!
//! lingua-guard is a CLI tool and library that finds user-facing strings
//! hardcoded in JSX/TSX markup, translation keys missing from target locales,
//! and target locales left stale by a source-locale edit. It reports
//! translation coverage and can machine-translate missing keys.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, terminal and markdown output)
//! - `config`: Configuration file loading and parsing
//! - `core`: File discovery, markup parsing, locale files and scan orchestration
//! - `fix`: Batched auto-translation of missing keys
//! - `issues`: Finding type definitions and reporting
//! - `rules`: Hardcoded-string, missing-key, stale-translation and coverage analyzers
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod fix;
pub mod issues;
pub mod rules;
pub mod utils;
