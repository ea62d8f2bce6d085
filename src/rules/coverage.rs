//! Translation coverage per target locale.

use anyhow::Result;
use serde::Serialize;

use crate::core::locale::{FlatKeyMap, LocaleContext};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleCoverage {
    pub locale: String,
    /// Number of keys in the source locale.
    pub total: usize,
    /// Source keys present in this locale.
    pub translated: usize,
    /// Rounded, 0-100.
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    /// Mean of the per-locale percentages, rounded, 0-100.
    pub overall: u32,
    pub per_language: Vec<LocaleCoverage>,
}

fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round() as u32
}

/// Compute coverage of the source locale's keys in each target locale.
///
/// - no source file: overall 0, no breakdown
/// - source file with no keys: overall 100, no breakdown
/// - target without a file: 0%
/// - no target locales: overall 0
pub fn calculate_coverage(ctx: &LocaleContext) -> Result<CoverageReport> {
    let Some(source) = ctx.load_flat(&ctx.source_locale)? else {
        return Ok(CoverageReport::default());
    };

    if source.is_empty() {
        return Ok(CoverageReport {
            overall: 100,
            per_language: Vec::new(),
        });
    }

    let per_language = ctx
        .target_locales
        .iter()
        .map(|locale| Ok(locale_coverage(locale, &source, ctx.load_flat(locale)?.as_ref())))
        .collect::<Result<Vec<_>>>()?;

    Ok(CoverageReport {
        overall: overall_percentage(&per_language),
        per_language,
    })
}

fn locale_coverage(locale: &str, source: &FlatKeyMap, target: Option<&FlatKeyMap>) -> LocaleCoverage {
    let total = source.len();
    let translated = target.map_or(0, |target| {
        source.keys().filter(|key| target.contains_key(*key)).count()
    });

    LocaleCoverage {
        locale: locale.to_string(),
        total,
        translated,
        percentage: rounded_percentage(translated, total),
    }
}

fn overall_percentage(per_language: &[LocaleCoverage]) -> u32 {
    if per_language.is_empty() {
        return 0;
    }
    let sum: u32 = per_language.iter().map(|c| c.percentage).sum();
    (sum as f64 / per_language.len() as f64).round() as u32
}
