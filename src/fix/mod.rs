//! Auto-translation of missing keys.
//!
//! Missing keys are grouped by target locale. Each locale's file is loaded
//! once, its keys are translated in batches of [`BATCH_SIZE`] concurrent calls,
//! and the file is rewritten once at the end. A batch waits for every call to
//! settle before the next one starts; a failed call leaves its key out and
//! does not affect the rest of the batch.

pub mod translator;

use anyhow::Result;
use futures::future::join_all;
use indexmap::IndexMap;
use tracing::{info, warn};

pub use translator::{LingoTranslator, TranslateError, Translator};

use crate::{
    core::locale::{LocaleContext, flatten, read_locale_document, unflatten, write_locale_document},
    issues::MissingKeyFinding,
};

/// Concurrent translation calls per batch.
pub const BATCH_SIZE: usize = 5;

/// A key to translate and its source-locale text.
struct PendingKey<'a> {
    key: &'a str,
    source_value: &'a str,
}

fn group_by_locale(missing: &[MissingKeyFinding]) -> IndexMap<&str, Vec<PendingKey<'_>>> {
    let mut by_locale: IndexMap<&str, Vec<PendingKey<'_>>> = IndexMap::new();
    for finding in missing {
        for locale in &finding.missing_in_locales {
            by_locale
                .entry(locale.as_str())
                .or_default()
                .push(PendingKey {
                    key: &finding.key,
                    source_value: &finding.source_value,
                });
        }
    }
    by_locale
}

/// Translate every missing key and write the results into the target
/// locale files.
///
/// Locales are processed one after another. Returns how many keys were
/// translated. Provider failures are logged and skipped; only reading or
/// writing a locale file fails the call, and files already written stay
/// written.
pub async fn fix_missing_keys<T: Translator + ?Sized>(
    translator: &T,
    missing: &[MissingKeyFinding],
    ctx: &LocaleContext,
) -> Result<usize> {
    let mut fixed_count = 0;

    for (locale, pending) in group_by_locale(missing) {
        fixed_count += fix_locale(translator, locale, &pending, ctx).await?;
    }

    Ok(fixed_count)
}

async fn fix_locale<T: Translator + ?Sized>(
    translator: &T,
    locale: &str,
    pending: &[PendingKey<'_>],
    ctx: &LocaleContext,
) -> Result<usize> {
    let path = ctx.file_path(locale);
    let mut flat = flatten(&read_locale_document(&path)?);
    let mut fixed = 0;

    for batch in pending.chunks(BATCH_SIZE) {
        let results = join_all(
            batch
                .iter()
                .map(|p| translator.translate(p.source_value, &ctx.source_locale, locale)),
        )
        .await;

        for (p, result) in batch.iter().zip(results) {
            match result {
                Ok(translated) => {
                    flat.insert(p.key.to_string(), translated);
                    fixed += 1;
                }
                Err(e) => warn!(locale, key = p.key, error = %e, "translation failed"),
            }
        }
    }

    write_locale_document(&path, &unflatten(&flat))?;
    info!(locale, fixed, total = pending.len(), file = %path.display(), "updated locale file");

    Ok(fixed)
}
