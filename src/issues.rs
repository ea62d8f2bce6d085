//! Finding types produced by the analyzers.
//!
//! Findings serialize to the camelCase report shape consumed by reporting tools.
//! The [`Report`] trait gives the terminal reporter one view over all of them.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
        }
    }
}

/// Rule identifier for each finding type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Hardcoded,
    MissingKey,
    StaleTranslation,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Hardcoded => write!(f, "hardcoded"),
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::StaleTranslation => write!(f, "stale-translation"),
        }
    }
}

// ============================================================
// Findings
// ============================================================

/// Where in the markup a hardcoded string was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HardcodedKind {
    /// Text between tags: `<p>Hello</p>`
    TextNode,
    /// A user-facing attribute literal: `<input placeholder="Name" />`
    Attribute,
}

impl HardcodedKind {
    pub fn severity(self) -> Severity {
        match self {
            HardcodedKind::TextNode => Severity::High,
            HardcodedKind::Attribute => Severity::Medium,
        }
    }
}

/// A user-facing literal in markup that bypasses translation lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardcodedStringFinding {
    pub file: String,
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
    pub text: String,
    pub kind: HardcodedKind,
    pub suggested_key: String,
    pub severity: Severity,
}

/// A source-locale key absent from one or more target locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingKeyFinding {
    pub key: String,
    pub source_value: String,
    /// Target locales lacking the key, in configured order.
    pub missing_in_locales: Vec<String>,
    pub severity: Severity,
}

/// A target locale left untouched by a change set that edited the source locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaleTranslationFinding {
    pub locale: String,
    pub reason: String,
    pub severity: Severity,
}

// ============================================================
// Report trait
// ============================================================

/// Location info for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLocation<'a> {
    Source {
        file_path: &'a str,
        line: usize,
        col: usize,
    },
    Key(&'a str),
    Locale(&'a str),
}

/// Common interface for the terminal reporter.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (text, key, or locale).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for HardcodedStringFinding {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source {
            file_path: &self.file,
            line: self.line,
            col: self.column,
        }
    }

    fn message(&self) -> String {
        self.text.clone()
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Rule::Hardcoded
    }

    fn details(&self) -> Option<String> {
        Some(format!("suggested key: {}", self.suggested_key))
    }
}

impl Report for MissingKeyFinding {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Key(&self.key)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingKey
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "missing in: {} (source: \"{}\")",
            self.missing_in_locales.join(", "),
            self.source_value
        ))
    }
}

impl Report for StaleTranslationFinding {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Locale(&self.locale)
    }

    fn message(&self) -> String {
        self.locale.clone()
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Rule::StaleTranslation
    }

    fn details(&self) -> Option<String> {
        Some(self.reason.clone())
    }
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Hardcoded(HardcodedStringFinding),
    MissingKey(MissingKeyFinding),
    StaleTranslation(StaleTranslationFinding),
}
