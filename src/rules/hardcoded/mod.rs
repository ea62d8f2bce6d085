//! Hardcoded string detection.
//!
//! Scanning happens in two steps. A [`MarkupParser`] turns a file into the raw
//! literals the markup contains (text nodes and string-valued attributes);
//! [`classify_literals`] then applies the attribute allow-list and the ignore
//! filter and builds findings. Only the parser knows about swc, so another
//! markup dialect only needs another parser.
//!
//! Scanning is best-effort: unreadable or unparsable files are skipped.

mod ignore;
mod key;

use std::sync::Arc;

use anyhow::Result;
use rayon::prelude::*;
use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{JSXAttr, JSXAttrName, JSXAttrValue, JSXText};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::debug;

pub use ignore::{IGNORE_PATTERNS, matching_pattern, should_ignore};
pub use key::generate_key;

use crate::core::file_scanner::is_markup_file;
use crate::core::parsers::jsx::parse_jsx_source;
use crate::issues::{HardcodedKind, HardcodedStringFinding};

/// Attributes whose literal values are shown to users.
pub const USER_FACING_ATTRIBUTES: &[&str] = &["placeholder", "title", "aria-label", "alt", "label"];

/// What kind of markup node a literal came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralKind {
    Text,
    Attribute { name: String },
}

/// A literal found in markup, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupLiteral {
    pub kind: LiteralKind,
    /// Text nodes are already trimmed; attribute values are as written.
    pub text: String,
    pub line: usize,
    pub column: usize,
}

/// Extracts literals from one markup file.
pub trait MarkupParser: Sync {
    fn extract_literals(&self, file_path: &str, code: String) -> Result<Vec<MarkupLiteral>>;
}

/// JSX/TSX parser backed by swc.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwcJsxParser;

impl MarkupParser for SwcJsxParser {
    fn extract_literals(&self, file_path: &str, code: String) -> Result<Vec<MarkupLiteral>> {
        let parsed = parse_jsx_source(code, file_path, Arc::new(SourceMap::default()))?;
        let mut collector = LiteralCollector {
            source_map: &parsed.source_map,
            literals: Vec::new(),
        };
        parsed.module.visit_with(&mut collector);
        Ok(collector.literals)
    }
}

struct LiteralCollector<'a> {
    source_map: &'a SourceMap,
    literals: Vec<MarkupLiteral>,
}

impl LiteralCollector<'_> {
    fn push(&mut self, kind: LiteralKind, text: &str, pos: BytePos) {
        let loc = self.source_map.lookup_char_pos(pos);
        self.literals.push(MarkupLiteral {
            kind,
            text: text.to_string(),
            line: loc.line,
            column: loc.col_display + 1,
        });
    }
}

impl Visit for LiteralCollector<'_> {
    fn visit_jsx_text(&mut self, node: &JSXText) {
        let raw_value = &node.value;
        let trimmed = raw_value.trim();

        if trimmed.is_empty() {
            return;
        }

        let trim_start_offset = raw_value.len() - raw_value.trim_start().len();
        let actual_pos = node.span.lo + BytePos(trim_start_offset as u32);
        self.push(LiteralKind::Text, trimmed, actual_pos);
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        let name = match &node.name {
            JSXAttrName::Ident(ident) => ident.sym.to_string(),
            JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
        };

        if let Some(JSXAttrValue::Str(s)) = &node.value
            && let Some(value) = s.value.as_str()
        {
            self.push(LiteralKind::Attribute { name }, value, node.span.lo);
        }

        // Attribute values may hold nested JSX, e.g. `icon={<span>Hi</span>}`.
        node.visit_children_with(self);
    }
}

/// Turn raw literals into findings: text nodes first, then allow-listed
/// attributes, each in document order.
pub fn classify_literals(file_path: &str, literals: &[MarkupLiteral]) -> Vec<HardcodedStringFinding> {
    let texts = literals
        .iter()
        .filter(|lit| lit.kind == LiteralKind::Text)
        .map(|lit| (lit, HardcodedKind::TextNode));
    let attributes = literals
        .iter()
        .filter(|lit| match &lit.kind {
            LiteralKind::Attribute { name } => USER_FACING_ATTRIBUTES.contains(&name.as_str()),
            LiteralKind::Text => false,
        })
        .map(|lit| (lit, HardcodedKind::Attribute));

    texts
        .chain(attributes)
        .filter(|(lit, _)| !should_ignore(&lit.text))
        .map(|(lit, kind)| HardcodedStringFinding {
            file: file_path.to_string(),
            line: lit.line,
            column: lit.column,
            text: lit.text.clone(),
            kind,
            suggested_key: generate_key(&lit.text, file_path),
            severity: kind.severity(),
        })
        .collect()
}

/// Scans markup files for hardcoded user-facing strings.
pub struct HardcodedStringScanner<P = SwcJsxParser> {
    parser: P,
}

impl Default for HardcodedStringScanner<SwcJsxParser> {
    fn default() -> Self {
        Self::new(SwcJsxParser)
    }
}

impl<P: MarkupParser> HardcodedStringScanner<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Scan files in parallel. Files without a markup extension are skipped;
    /// findings keep the order of `files`.
    pub fn scan(&self, files: &[String]) -> Vec<HardcodedStringFinding> {
        files
            .par_iter()
            .filter(|file| is_markup_file(std::path::Path::new(file.as_str())))
            .map(|file| self.scan_file(file))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    fn scan_file(&self, file_path: &str) -> Vec<HardcodedStringFinding> {
        let code = match std::fs::read_to_string(file_path) {
            Ok(code) => code,
            Err(e) => {
                debug!(file = file_path, error = %e, "skipping unreadable file");
                return Vec::new();
            }
        };

        match self.parser.extract_literals(file_path, code) {
            Ok(literals) => classify_literals(file_path, &literals),
            Err(e) => {
                debug!(file = file_path, error = %e, "skipping unparsable file");
                Vec::new()
            }
        }
    }
}

/// Scan files with the default JSX parser.
pub fn scan_hardcoded_strings(files: &[String]) -> Vec<HardcodedStringFinding> {
    HardcodedStringScanner::new(SwcJsxParser).scan(files)
}
