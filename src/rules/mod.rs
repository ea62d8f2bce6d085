//! Rule implementations for lingua-guard.
//!
//! Each rule takes only the inputs it needs and returns its own finding type.
//!
//! ## Module Structure
//!
//! - `hardcoded`: Hardcoded user-facing strings in JSX/TSX markup
//! - `missing`: Source-locale keys absent from target locales
//! - `stale`: Target locales left behind by a source-locale edit
//! - `coverage`: Per-locale and overall translation coverage

pub mod coverage;
pub mod hardcoded;
pub mod missing;
pub mod stale;
