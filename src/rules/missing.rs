//! Missing translation key detection.
//!
//! Diffs the flattened source locale against every target locale.

use anyhow::Result;

use crate::{
    core::locale::{FlatKeyMap, LocaleContext},
    issues::{MissingKeyFinding, Severity},
};

/// Find source-locale keys that one or more target locales lack.
///
/// Returns nothing when the source locale's file does not exist. A target
/// locale without a file is missing every key. Findings follow the source
/// document's key order, so repeated runs give identical output.
pub fn check_missing_keys(ctx: &LocaleContext) -> Result<Vec<MissingKeyFinding>> {
    let Some(source) = ctx.load_flat(&ctx.source_locale)? else {
        return Ok(Vec::new());
    };

    let targets: Vec<(&str, Option<FlatKeyMap>)> = ctx
        .target_locales
        .iter()
        .map(|locale| Ok((locale.as_str(), ctx.load_flat(locale)?)))
        .collect::<Result<_>>()?;

    Ok(find_missing_keys(&source, &targets))
}

/// Diff already-loaded maps. `None` marks a target locale with no file.
pub fn find_missing_keys(
    source: &FlatKeyMap,
    targets: &[(&str, Option<FlatKeyMap>)],
) -> Vec<MissingKeyFinding> {
    source
        .iter()
        .filter_map(|(key, value)| {
            let missing_in: Vec<String> = targets
                .iter()
                .filter(|(_, flat)| flat.as_ref().is_none_or(|flat| !flat.contains_key(key)))
                .map(|(locale, _)| locale.to_string())
                .collect();

            if missing_in.is_empty() {
                return None;
            }

            let severity = if missing_in.len() == targets.len() {
                Severity::High
            } else {
                Severity::Medium
            };

            Some(MissingKeyFinding {
                key: key.clone(),
                source_value: value.clone(),
                missing_in_locales: missing_in,
                severity,
            })
        })
        .collect()
}
