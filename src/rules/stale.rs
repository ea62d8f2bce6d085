//! Stale translation detection.
//!
//! A target locale is suspected stale when the change set edited the source
//! locale's file but not the target's.

use crate::{
    core::locale::LocaleContext,
    issues::{Severity, StaleTranslationFinding},
    utils::normalize_separators,
};

fn was_changed(changed_files: &[String], suffix: &str) -> bool {
    changed_files
        .iter()
        .any(|file| normalize_separators(file).contains(suffix))
}

/// Flag target locales that did not move with an edited source locale.
///
/// Returns nothing unless the source locale's file is among `changed_files`.
/// Targets whose file was changed too, or that have no file on disk, are not
/// reported.
pub fn check_stale_translations(
    ctx: &LocaleContext,
    changed_files: &[String],
) -> Vec<StaleTranslationFinding> {
    let source_suffix = ctx.layout.file_suffix(&ctx.source_locale);
    if !was_changed(changed_files, &source_suffix) {
        return Vec::new();
    }

    ctx.target_locales
        .iter()
        .filter(|locale| !was_changed(changed_files, &ctx.layout.file_suffix(locale)))
        .filter(|locale| ctx.file_path(locale).exists())
        .map(|locale| StaleTranslationFinding {
            locale: locale.clone(),
            reason: format!(
                "Source locale ({}) was updated but {} translations were not",
                ctx.source_locale, locale
            ),
            severity: Severity::Medium,
        })
        .collect()
}
