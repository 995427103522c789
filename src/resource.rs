//! Language resource lookup
//!
//! Resources live at a conventional path, `assets/<module>/lang/<language>.json`.
//! Where the bytes come from is up to a [`ResourceProvider`]: the filesystem
//! provider reads them below a root directory, the embedded provider serves
//! bytes bundled into the binary.

use crate::error::{LangError, LangResult};
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A (module, language) pair naming one language resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef<'a> {
    pub module_id: &'a str,
    pub language_id: &'a str,
}

impl<'a> ResourceRef<'a> {
    pub fn new(module_id: &'a str, language_id: &'a str) -> Self {
        Self {
            module_id,
            language_id,
        }
    }

    /// Conventional resource path, relative to the provider root
    pub fn path(&self) -> String {
        format!("assets/{}/lang/{}.json", self.module_id, self.language_id)
    }
}

/// Source of language resource bytes.
///
/// `Ok(None)` means the resource does not exist. `Err` means it exists but
/// could not be opened. The returned reader is closed when dropped.
pub trait ResourceProvider: Send + Sync {
    fn open(&self, path: &str) -> LangResult<Option<Box<dyn Read + '_>>>;
}

/// Reads resources from the filesystem below a root directory
#[derive(Debug, Clone)]
pub struct FsProvider {
    root: PathBuf,
    max_file_size: u64,
}

impl FsProvider {
    /// Create a provider rooted at `root` with the default size limit
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_file_size: crate::config::MAX_FILE_SIZE,
        }
    }

    /// Set the maximum size of a single resource
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Root directory of this provider
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Language ids that have a resource for `module_id`, sorted
    pub fn available_languages(&self, module_id: &str) -> Vec<String> {
        let lang_dir = self.root.join("assets").join(module_id).join("lang");
        let mut languages: Vec<String> = WalkDir::new(&lang_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
            })
            .filter_map(|e| {
                e.path()
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
            })
            .collect();
        languages.sort();
        languages
    }
}

impl ResourceProvider for FsProvider {
    fn open(&self, path: &str) -> LangResult<Option<Box<dyn Read + '_>>> {
        let full_path = self.root.join(path);

        let metadata = match std::fs::metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LangError::Read {
                    path: path.to_string(),
                    source: e,
                })
            }
        };
        if !metadata.is_file() {
            return Ok(None);
        }

        let size = metadata.len();
        if size > self.max_file_size {
            return Err(LangError::TooLarge {
                path: path.to_string(),
                size,
                max_size: self.max_file_size,
            });
        }

        let file = std::fs::File::open(&full_path).map_err(|e| LangError::Read {
            path: path.to_string(),
            source: e,
        })?;
        Ok(Some(Box::new(file)))
    }
}

/// Serves resources held in memory, e.g. bundled with `include_bytes!`
#[derive(Debug, Clone, Default)]
pub struct EmbeddedProvider {
    resources: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource under its conventional path
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) {
        self.resources.insert(path.into(), bytes.into());
    }

    /// Add the resource for a (module, language) pair
    pub fn with_language(
        mut self,
        module_id: &str,
        language_id: &str,
        bytes: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        self.insert(ResourceRef::new(module_id, language_id).path(), bytes);
        self
    }

    /// Number of bundled resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceProvider for EmbeddedProvider {
    fn open(&self, path: &str) -> LangResult<Option<Box<dyn Read + '_>>> {
        Ok(self
            .resources
            .get(path)
            .map(|bytes| Box::new(Cursor::new(&bytes[..])) as Box<dyn Read + '_>))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read_all(provider: &dyn ResourceProvider, path: &str) -> Option<String> {
        let mut reader = provider.open(path).unwrap()?;
        let mut content = String::new();
        reader.read_to_string(&mut content).unwrap();
        Some(content)
    }

    fn setup_assets() -> TempDir {
        let dir = TempDir::new().unwrap();
        let lang = dir.path().join("assets/demo/lang");
        fs::create_dir_all(&lang).unwrap();
        fs::write(lang.join("en_us.json"), r#"{"a":"b"}"#).unwrap();
        fs::write(lang.join("fr_fr.json"), r#"{"a":"c"}"#).unwrap();
        fs::write(lang.join("notes.txt"), "ignored").unwrap();
        fs::create_dir(lang.join("nested.json")).unwrap();
        dir
    }

    #[test]
    fn test_resource_path() {
        let reference = ResourceRef::new("demo", "en_us");
        assert_eq!(reference.path(), "assets/demo/lang/en_us.json");
        assert_eq!(reference.path(), ResourceRef::new("demo", "en_us").path());
    }

    #[test]
    fn test_fs_provider_reads_and_misses() {
        let dir = setup_assets();
        let provider = FsProvider::new(dir.path());

        assert_eq!(
            read_all(&provider, "assets/demo/lang/fr_fr.json").as_deref(),
            Some(r#"{"a":"c"}"#)
        );
        assert!(read_all(&provider, "assets/demo/lang/de_de.json").is_none());
        assert!(read_all(&provider, "assets/demo/lang/nested.json").is_none());
    }

    #[test]
    fn test_fs_provider_size_limit() {
        let dir = setup_assets();
        let provider = FsProvider::new(dir.path()).with_max_file_size(4);

        let result = provider.open("assets/demo/lang/en_us.json");
        assert!(matches!(result, Err(LangError::TooLarge { size: 9, max_size: 4, .. })));
    }

    #[test]
    fn test_available_languages() {
        let dir = setup_assets();
        let provider = FsProvider::new(dir.path());

        assert_eq!(provider.available_languages("demo"), vec!["en_us", "fr_fr"]);
        assert!(provider.available_languages("other").is_empty());
    }

    #[test]
    fn test_embedded_provider() {
        let provider = EmbeddedProvider::new()
            .with_language("demo", "en_us", &b"{\"a\":\"b\"}"[..])
            .with_language("demo", "ja_jp", b"{}".to_vec());

        assert_eq!(provider.len(), 2);
        assert_eq!(
            read_all(&provider, "assets/demo/lang/en_us.json").as_deref(),
            Some("{\"a\":\"b\"}")
        );
        assert!(read_all(&provider, "assets/demo/lang/ko_kr.json").is_none());
    }
}
