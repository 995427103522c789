//! Decoding of language resources into entry sets
//!
//! A resource is a JSON object mapping message keys to primitive values.
//! Strings are taken as they are, numbers and booleans in their JSON
//! notation. The first entry holding anything else (null, array, object)
//! fails the whole resource. Every value passes through the token
//! normalizer before it lands in the [`EntrySet`].

use crate::error::{LangError, LangResult};
use crate::normalize::normalize;
use serde_json::Value;
use std::io::Read;

/// UTF-8 byte order mark
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Longest value excerpt shown in error messages
const EXCERPT_LEN: usize = 10;

/// Normalized key/value pairs of one resource, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySet {
    entries: Vec<(String, String)>,
}

impl EntrySet {
    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for EntrySet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Decode a resource stream into a normalized entry set.
///
/// `path` is only used to label errors. The reader is consumed and dropped
/// before this returns, whether decoding succeeds or not.
pub fn decode_entries(mut reader: impl Read, path: &str) -> LangResult<EntrySet> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| LangError::Read {
        path: path.to_string(),
        source: e,
    })?;
    drop(reader);

    decode_bytes(&bytes, path)
}

/// Decode raw resource bytes into a normalized entry set
pub fn decode_bytes(bytes: &[u8], path: &str) -> LangResult<EntrySet> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let content = std::str::from_utf8(bytes).map_err(|_| LangError::Encoding {
        path: path.to_string(),
    })?;

    let root: Value = serde_json::from_str(content).map_err(|e| LangError::Parse {
        path: path.to_string(),
        source: e,
    })?;

    let object = match root {
        Value::Object(object) => object,
        other => {
            return Err(LangError::NotAnObject {
                path: path.to_string(),
                found: describe_value(&other),
            })
        }
    };

    let mut entries = Vec::with_capacity(object.len());
    for (key, value) in object {
        let raw = primitive_to_string(&value).ok_or_else(|| LangError::NonPrimitive {
            path: path.to_string(),
            key: key.clone(),
            found: describe_value(&value),
        })?;
        entries.push((key, normalize(&raw)));
    }

    Ok(EntrySet { entries })
}

/// String form of a primitive JSON value, `None` for anything else
fn primitive_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Human readable kind of a JSON value, with a shortened excerpt
fn describe_value(value: &Value) -> String {
    let excerpt = abbreviate_middle(&value.to_string(), "...", EXCERPT_LEN);
    match value {
        Value::Null => "null (json)".to_string(),
        Value::Array(_) => format!("an array ({})", excerpt),
        Value::Object(_) => format!("an object ({})", excerpt),
        Value::Number(_) => format!("a number ({})", excerpt),
        Value::Bool(_) => format!("a boolean ({})", excerpt),
        Value::String(_) => excerpt,
    }
}

/// Shorten `text` to `max_len` characters by replacing its middle with `marker`
fn abbreviate_middle(text: &str, marker: &str, max_len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let marker_len = marker.chars().count();
    if chars.len() <= max_len || max_len < marker_len + 2 {
        return text.to_string();
    }

    let keep = max_len - marker_len;
    let head = keep / 2 + keep % 2;
    let tail = keep / 2;

    let mut result: String = chars[..head].iter().collect();
    result.push_str(marker);
    result.extend(&chars[chars.len() - tail..]);
    result
}
