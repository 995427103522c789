//! Immutable language table
//!
//! Holds the two resolved layers for one (module, language) pair. Lookups try
//! the requested language first, then the default language, and finally echo
//! the key back so a missing translation shows up in the rendered text.

use crate::decode::EntrySet;
use std::collections::HashMap;

/// Resolved translations for one module and language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTable {
    module_id: String,
    language_id: String,
    /// Requested-language entries
    overrides: HashMap<String, String>,
    /// Default-language entries
    base: HashMap<String, String>,
}

impl LanguageTable {
    /// Freeze the decoded layers into a table
    pub(crate) fn from_layers(
        module_id: &str,
        language_id: &str,
        overrides: Option<EntrySet>,
        base: Option<EntrySet>,
    ) -> Self {
        Self {
            module_id: module_id.to_string(),
            language_id: language_id.to_string(),
            overrides: overrides.map(collect_layer).unwrap_or_default(),
            base: base.map(collect_layer).unwrap_or_default(),
        }
    }

    /// Translation for `key`, or `key` itself when no layer has it
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }

    /// Translation for `key`, `None` when no layer has it
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .or_else(|| self.base.get(key))
            .map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.overrides.contains_key(key) || self.base.contains_key(key)
    }

    /// Number of distinct keys across both layers
    pub fn len(&self) -> usize {
        self.overrides.len()
            + self
                .base
                .keys()
                .filter(|key| !self.overrides.contains_key(*key))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty() && self.base.is_empty()
    }

    /// Module this table was built for
    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    /// Requested language this table was built for
    pub fn language_id(&self) -> &str {
        &self.language_id
    }
}

fn collect_layer(entries: EntrySet) -> HashMap<String, String> {
    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_bytes;

    fn layer(json: &str) -> Option<EntrySet> {
        Some(decode_bytes(json.as_bytes(), "test.json").unwrap())
    }

    #[test]
    fn test_override_then_base_then_key() {
        let table = LanguageTable::from_layers(
            "demo",
            "fr_fr",
            layer(r#"{"a":"%1$d pommes"}"#),
            layer(r#"{"a":"%d apples","b":"bee"}"#),
        );

        assert_eq!(table.get("a"), "%1$s pommes");
        assert_eq!(table.get("b"), "bee");
        assert_eq!(table.get("c"), "c");
        assert_eq!(table.lookup("c"), None);
        assert_eq!(table.len(), 2);
        assert!(table.contains_key("b"));
        assert_eq!(table.module_id(), "demo");
        assert_eq!(table.language_id(), "fr_fr");
    }

    #[test]
    fn test_empty_table_echoes_keys() {
        let table = LanguageTable::default();
        assert!(table.is_empty());
        assert_eq!(table.get(""), "");
        assert_eq!(table.get("menu.title"), "menu.title");
        assert_eq!(table.get("ünïcødé ✓ \n"), "ünïcødé ✓ \n");
    }

    #[test]
    fn test_base_only() {
        let table = LanguageTable::from_layers("demo", "de_de", None, layer(r#"{"b":"bee"}"#));
        assert_eq!(table.get("b"), "bee");
        assert!(!table.is_empty());
    }

    #[test]
    fn test_table_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LanguageTable>();

        let table = std::sync::Arc::new(LanguageTable::from_layers(
            "demo",
            "en_us",
            None,
            layer(r#"{"k":"v"}"#),
        ));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let table = table.clone();
                std::thread::spawn(move || table.get("k").to_string())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "v");
        }
    }
}
