//! Language table builder
//!
//! Loads the default-language resource as the base layer and the requested
//! language as the override layer, each independently. A missing or broken
//! resource never fails the build: it is logged and that layer stays empty.

use crate::config::Config;
use crate::decode::{decode_entries, EntrySet};
use crate::error::{LangError, LangResult};
use crate::resource::{FsProvider, ResourceProvider, ResourceRef};
use crate::table::LanguageTable;
use std::sync::Arc;

/// Build the table for `module_id` in `language_id` from `./assets`,
/// with `en_us` as the default language
pub fn build(module_id: &str, language_id: &str) -> LanguageTable {
    TableBuilder::from_config(&Config::default()).build(module_id, language_id)
}

/// Builds language tables from a resource provider
#[derive(Clone)]
pub struct TableBuilder {
    provider: Arc<dyn ResourceProvider>,
    default_language: String,
}

impl std::fmt::Debug for TableBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableBuilder")
            .field("default_language", &self.default_language)
            .finish_non_exhaustive()
    }
}

impl TableBuilder {
    /// Create a builder reading from `provider`, with `en_us` as default language
    pub fn new(provider: impl ResourceProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
            default_language: crate::config::DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Create a filesystem-backed builder from a loader configuration
    pub fn from_config(config: &Config) -> Self {
        let provider =
            FsProvider::new(&config.assets_root).with_max_file_size(config.max_file_size);
        Self::new(provider).with_default_language(&config.default_language)
    }

    /// Use a different default language
    pub fn with_default_language(mut self, language_id: impl Into<String>) -> Self {
        self.default_language = language_id.into();
        self
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Build the table for `module_id` in `language_id`. Never fails.
    pub fn build(&self, module_id: &str, language_id: &str) -> LanguageTable {
        let overrides = if language_id == self.default_language {
            None
        } else {
            let requested = ResourceRef::new(module_id, language_id);
            match self.load_layer(&requested) {
                Ok(Some(entries)) => Some(entries),
                Ok(None) => {
                    log::info!(
                        "No {} lang file for the language '{}' found, falling back to '{}'",
                        module_id,
                        language_id,
                        self.default_language
                    );
                    None
                }
                Err(e) => {
                    log_load_error(&requested, &e);
                    None
                }
            }
        };

        let default = ResourceRef::new(module_id, &self.default_language);
        let base = match self.load_layer(&default) {
            Ok(Some(entries)) => Some(entries),
            Ok(None) => {
                log::debug!(
                    "No {} lang file for the default language '{}' found",
                    module_id,
                    self.default_language
                );
                None
            }
            Err(e) => {
                log_load_error(&default, &e);
                None
            }
        };

        LanguageTable::from_layers(module_id, language_id, overrides, base)
    }

    /// Build on tokio's blocking pool. Never fails.
    #[cfg(feature = "async")]
    pub async fn build_async(&self, module_id: &str, language_id: &str) -> LanguageTable {
        let builder = self.clone();
        let module = module_id.to_string();
        let language = language_id.to_string();

        match tokio::task::spawn_blocking(move || builder.build(&module, &language)).await {
            Ok(table) => table,
            Err(e) => {
                log::error!(
                    "Building {} lang table for '{}' did not complete: {}",
                    module_id,
                    language_id,
                    e
                );
                LanguageTable::from_layers(module_id, language_id, None, None)
            }
        }
    }

    /// Open and decode one resource. `Ok(None)` when it does not exist.
    fn load_layer(&self, reference: &ResourceRef<'_>) -> LangResult<Option<EntrySet>> {
        let path = reference.path();
        let Some(reader) = self.provider.open(&path)? else {
            return Ok(None);
        };
        decode_entries(reader, &path).map(Some)
    }
}

fn log_load_error(reference: &ResourceRef<'_>, err: &LangError) {
    log::error!(
        "Couldn't read strings from {}: {}",
        reference.path(),
        error_chain(err)
    );
}

/// Error message followed by each underlying cause, `: `-separated
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}
