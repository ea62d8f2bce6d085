use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::file_scanner::{filter_changed, scan_files};
use super::locale::LocaleContext;
use crate::{
    issues::{HardcodedStringFinding, Issue, MissingKeyFinding, StaleTranslationFinding},
    rules::{
        coverage::{CoverageReport, calculate_coverage},
        hardcoded::scan_hardcoded_strings,
        missing::check_missing_keys,
        stale::check_stale_translations,
    },
};

/// Resolved inputs for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Project root; includes, ignores and changed files are relative to it.
    pub source_root: PathBuf,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    /// Paths touched by the change set. Empty means scan everything.
    pub changed_files: Vec<String>,
    pub locales_root: PathBuf,
    pub source_locale: String,
    pub target_locales: Vec<String>,
}

impl ScanConfig {
    /// Locale parameters for this run, with the layout detected on disk.
    pub fn locale_context(&self) -> LocaleContext {
        LocaleContext::new(
            self.locales_root.clone(),
            self.source_locale.clone(),
            self.target_locales.clone(),
        )
    }
}

/// Everything one scan found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub hardcoded_strings: Vec<HardcodedStringFinding>,
    pub missing_keys: Vec<MissingKeyFinding>,
    pub stale_translations: Vec<StaleTranslationFinding>,
    pub coverage: CoverageReport,
    pub total_issues: usize,
    pub files_scanned: usize,
}

impl ScanReport {
    pub fn new(
        hardcoded_strings: Vec<HardcodedStringFinding>,
        missing_keys: Vec<MissingKeyFinding>,
        stale_translations: Vec<StaleTranslationFinding>,
        coverage: CoverageReport,
        files_scanned: usize,
    ) -> Self {
        let total_issues = hardcoded_strings.len() + missing_keys.len() + stale_translations.len();
        Self {
            hardcoded_strings,
            missing_keys,
            stale_translations,
            coverage,
            total_issues,
            files_scanned,
        }
    }

    /// All findings as reportable issues.
    pub fn issues(&self) -> Vec<Issue> {
        let hardcoded = self.hardcoded_strings.iter().cloned().map(Issue::from);
        let missing = self.missing_keys.iter().cloned().map(Issue::from);
        let stale = self.stale_translations.iter().cloned().map(Issue::from);
        hardcoded.chain(missing).chain(stale).collect()
    }
}

/// Run every rule over the project.
///
/// Unparsable source files are skipped. A missing source locale gives empty
/// locale findings. A malformed locale file is an error.
pub fn scan_all(config: &ScanConfig) -> Result<ScanReport> {
    let discovered = scan_files(&config.source_root, &config.includes, &config.ignores);
    let files = filter_changed(discovered.files, &config.source_root, &config.changed_files);
    info!(
        files = files.len(),
        skipped = discovered.skipped_count,
        "scanning source files"
    );

    let hardcoded_strings = scan_hardcoded_strings(&files);

    let ctx = config.locale_context();
    let missing_keys = check_missing_keys(&ctx)?;
    let stale_translations = check_stale_translations(&ctx, &config.changed_files);
    let coverage = calculate_coverage(&ctx)?;

    Ok(ScanReport::new(
        hardcoded_strings,
        missing_keys,
        stale_translations,
        coverage,
        files.len(),
    ))
}
