//! Locale file layout and loading.
//!
//! Two on-disk conventions are supported:
//! - `flat`: `<root>/<locale>.json`
//! - `nested-common`: `<root>/<locale>/common.json`

mod tree;

use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

pub use tree::{
    FlatKeyMap, LocaleDocument, LocaleNode, flatten, parse_locale_document, read_locale_document,
    unflatten, write_locale_document,
};

const COMMON_FILE_NAME: &str = "common.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocaleLayout {
    Flat,
    NestedCommon,
}

impl fmt::Display for LocaleLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleLayout::Flat => write!(f, "flat"),
            LocaleLayout::NestedCommon => write!(f, "nested-common"),
        }
    }
}

impl LocaleLayout {
    /// Detect the layout from where the source locale's file lives.
    ///
    /// Nested-common is checked first and is also the fallback when neither
    /// file exists.
    pub fn detect(locales_root: &Path, source_locale: &str) -> Self {
        if LocaleLayout::NestedCommon
            .file_path(locales_root, source_locale)
            .exists()
        {
            return LocaleLayout::NestedCommon;
        }
        if LocaleLayout::Flat
            .file_path(locales_root, source_locale)
            .exists()
        {
            return LocaleLayout::Flat;
        }
        LocaleLayout::NestedCommon
    }

    /// On-disk path of a locale's file under this layout.
    pub fn file_path(self, locales_root: &Path, locale: &str) -> PathBuf {
        match self {
            LocaleLayout::Flat => locales_root.join(format!("{}.json", locale)),
            LocaleLayout::NestedCommon => locales_root.join(locale).join(COMMON_FILE_NAME),
        }
    }

    /// Trailing path fragment identifying a locale's file, always `/`-separated.
    pub fn file_suffix(self, locale: &str) -> String {
        match self {
            LocaleLayout::Flat => format!("{}.json", locale),
            LocaleLayout::NestedCommon => format!("{}/{}", locale, COMMON_FILE_NAME),
        }
    }
}

/// The locale parameters every analyzer shares.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    pub root: PathBuf,
    pub source_locale: String,
    pub target_locales: Vec<String>,
    pub layout: LocaleLayout,
}

impl LocaleContext {
    /// Build a context, detecting the layout from the source locale's file.
    pub fn new(
        root: impl Into<PathBuf>,
        source_locale: impl Into<String>,
        target_locales: Vec<String>,
    ) -> Self {
        let root = root.into();
        let source_locale = source_locale.into();
        let layout = LocaleLayout::detect(&root, &source_locale);
        debug!(root = %root.display(), %layout, "detected locale layout");
        Self {
            root,
            source_locale,
            target_locales,
            layout,
        }
    }

    pub fn with_layout(mut self, layout: LocaleLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn file_path(&self, locale: &str) -> PathBuf {
        self.layout.file_path(&self.root, locale)
    }

    pub fn source_file(&self) -> PathBuf {
        self.file_path(&self.source_locale)
    }

    /// Load and flatten a locale's file, or `None` if it does not exist.
    pub fn load_flat(&self, locale: &str) -> Result<Option<FlatKeyMap>> {
        let path = self.file_path(locale);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(flatten(&read_locale_document(&path)?)))
    }
}
