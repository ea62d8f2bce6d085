use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::super::args::{CommonArgs, ProviderArgs};
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{ScanConfig, locale::LocaleContext},
    fix::{LingoTranslator, fix_missing_keys, translator::API_KEY_ENV},
    issues::MissingKeyFinding,
};

/// A project root with its configuration resolved.
///
/// Precedence is CLI args, then the config file, then defaults.
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let root = common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root)?;
        if !config_result.from_file {
            debug!("no {} found, using default configuration", CONFIG_FILE_NAME);
        }

        let mut config = config_result.config;
        if let Some(ref source_locale) = common.source_locale {
            config.source_locale = source_locale.clone();
        }
        if let Some(ref target_locales) = common.target_locales {
            config.target_locales = target_locales.clone();
        }
        if let Some(ref locales_root) = common.locales_root {
            config.locales_root = locales_root.to_string_lossy().to_string();
        }
        config.validate()?;

        Ok(Self { root, config })
    }

    /// Locale directory; relative paths are resolved against the project root.
    pub fn locales_root(&self) -> PathBuf {
        let path = PathBuf::from(&self.config.locales_root);
        if path.is_absolute() {
            path
        } else {
            self.root.join(path)
        }
    }

    pub fn locale_context(&self) -> LocaleContext {
        LocaleContext::new(
            self.locales_root(),
            self.config.source_locale.clone(),
            self.config.target_locales.clone(),
        )
    }

    pub fn scan_config(&self, changed_files: Vec<String>) -> ScanConfig {
        ScanConfig {
            source_root: self.root.clone(),
            includes: self.config.includes.clone(),
            ignores: self.config.ignores.clone(),
            changed_files,
            locales_root: self.locales_root(),
            source_locale: self.config.source_locale.clone(),
            target_locales: self.config.target_locales.clone(),
        }
    }

    /// Translate `missing` through the configured provider and write the
    /// results. Returns how many keys were translated.
    ///
    /// Fails when no API key is given.
    pub fn translate_missing(
        &self,
        missing: &[MissingKeyFinding],
        provider: &ProviderArgs,
    ) -> Result<usize> {
        let api_key = provider
            .api_key()
            .with_context(|| format!("No API key: pass --api-key or set {}", API_KEY_ENV))?;
        let endpoint = provider
            .endpoint
            .clone()
            .unwrap_or_else(|| self.config.translator_endpoint.clone());
        info!(endpoint = %endpoint, keys = missing.len(), "translating missing keys");
        let translator = LingoTranslator::with_endpoint(api_key, endpoint);

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(fix_missing_keys(&translator, missing, &self.locale_context()))
    }
}
