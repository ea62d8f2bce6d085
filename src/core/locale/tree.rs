//! Locale documents and their flat dot-path form.
//!
//! A locale file is a JSON object whose leaves are strings. In memory it is a
//! [`LocaleDocument`], an insertion-ordered tree of [`LocaleNode`]s. Analysis works on
//! the [`FlatKeyMap`] produced by [`flatten`], and the fixer turns its flat map back
//! into a tree with [`unflatten`] before rewriting the file.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Nested locale tree, in the order keys appear in the file.
pub type LocaleDocument = IndexMap<String, LocaleNode>;

/// Dot-joined key path to string value, in document order.
pub type FlatKeyMap = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocaleNode {
    Leaf(String),
    Branch(LocaleDocument),
}

impl From<Value> for LocaleNode {
    /// Objects become branches. Every other JSON value is kept as an opaque
    /// string leaf; arrays are not expanded.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => LocaleNode::Branch(
                map.into_iter()
                    .map(|(key, value)| (key, LocaleNode::from(value)))
                    .collect(),
            ),
            Value::String(s) => LocaleNode::Leaf(s),
            Value::Null => LocaleNode::Leaf("null".to_string()),
            Value::Bool(b) => LocaleNode::Leaf(b.to_string()),
            Value::Number(n) => LocaleNode::Leaf(n.to_string()),
            array @ Value::Array(_) => LocaleNode::Leaf(array.to_string()),
        }
    }
}

/// Flatten a locale tree into dot-joined key paths.
///
/// ```
/// use lingua_guard::core::locale::{LocaleDocument, flatten, parse_locale_document};
///
/// let doc: LocaleDocument = parse_locale_document(r#"{"nav": {"home": "Home"}}"#).unwrap();
/// let flat = flatten(&doc);
/// assert_eq!(flat.get("nav.home").map(String::as_str), Some("Home"));
/// ```
pub fn flatten(doc: &LocaleDocument) -> FlatKeyMap {
    let mut flat = FlatKeyMap::new();
    flatten_into(doc, "", &mut flat);
    flat
}

fn flatten_into(doc: &LocaleDocument, prefix: &str, flat: &mut FlatKeyMap) {
    for (key, node) in doc {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            LocaleNode::Branch(children) => flatten_into(children, &path, flat),
            LocaleNode::Leaf(value) => {
                flat.insert(path, value.clone());
            }
        }
    }
}

/// Rebuild a locale tree from dot-joined key paths.
///
/// When a path needs a branch where an earlier path put a leaf (or the other way
/// around), the later write wins. Such collisions are logged, never rejected, so
/// existing locale files keep loading.
pub fn unflatten(flat: &FlatKeyMap) -> LocaleDocument {
    let mut root = LocaleDocument::new();
    for (path, value) in flat {
        let segments: Vec<&str> = path.split('.').collect();
        insert_path(&mut root, path, &segments, value);
    }
    root
}

fn insert_path(doc: &mut LocaleDocument, path: &str, segments: &[&str], value: &str) {
    let [segment, rest @ ..] = segments else {
        return;
    };

    if rest.is_empty() {
        let previous = doc.insert(segment.to_string(), LocaleNode::Leaf(value.to_string()));
        if let Some(LocaleNode::Branch(_)) = previous {
            warn!(key = %path, "key path collision: branch replaced by leaf");
        }
        return;
    }

    let slot = doc
        .entry(segment.to_string())
        .or_insert_with(|| LocaleNode::Branch(LocaleDocument::new()));
    if let LocaleNode::Leaf(old) = slot {
        warn!(key = %path, segment = *segment, replaced = %old, "key path collision: leaf replaced by branch");
        *slot = LocaleNode::Branch(LocaleDocument::new());
    }
    if let LocaleNode::Branch(children) = slot {
        insert_path(children, path, rest, value);
    }
}

/// Parse locale JSON text. The top level must be an object.
pub fn parse_locale_document(content: &str) -> Result<LocaleDocument> {
    let value: Value = serde_json::from_str(content)?;
    match LocaleNode::from(value) {
        LocaleNode::Branch(doc) => Ok(doc),
        LocaleNode::Leaf(_) => bail!("expected a JSON object at the top level"),
    }
}

/// Read a locale file. A missing file reads as an empty document; a file that
/// exists but is not valid JSON is an error.
pub fn read_locale_document(path: &Path) -> Result<LocaleDocument> {
    if !path.exists() {
        return Ok(LocaleDocument::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {}", path.display()))?;
    parse_locale_document(&content)
        .with_context(|| format!("Failed to parse locale file: {}", path.display()))
}

/// Write a locale file with 2-space indentation and a trailing newline,
/// creating parent directories as needed.
pub fn write_locale_document(path: &Path, doc: &LocaleDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(doc).context("Failed to serialize locale file")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write locale file: {}", path.display()))
}
