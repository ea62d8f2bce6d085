//! Report formatting and printing utilities.
//!
//! This module displays scan results in cargo-style format.
//! Separate from core logic to allow lingua-guard to be used as a library.

use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::ScanReport;
use crate::core::locale::LocaleContext;
use crate::issues::{Issue, MissingKeyFinding, Report, ReportLocation, Severity};
use crate::rules::coverage::CoverageReport;
use crate::utils::display_relative;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a scan report in cargo-style format to stdout.
pub fn print_scan(report: &ScanReport, root: &Path) {
    print_scan_to(report, root, &mut io::stdout().lock());
}

/// Print a scan report to a custom writer.
pub fn print_scan_to<W: Write>(report: &ScanReport, root: &Path, writer: &mut W) {
    let issues = report.issues();
    let mut sources = SourceCache::default();

    let max_line_width = calculate_max_line_width(&issues);
    for issue in &issues {
        print_issue(issue, root, &mut sources, writer, max_line_width);
    }

    print_coverage(&report.coverage, writer);

    if issues.is_empty() {
        print_success_to(report.files_scanned, writer);
    } else {
        print_summary(&issues, writer);
    }
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print what `fix --apply` would translate.
pub fn print_fix_preview(missing: &[MissingKeyFinding], ctx: &LocaleContext) {
    print_fix_preview_to(missing, ctx, &mut io::stdout().lock());
}

pub fn print_fix_preview_to<W: Write>(
    missing: &[MissingKeyFinding],
    ctx: &LocaleContext,
    writer: &mut W,
) {
    if missing.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No missing keys to translate".green()
        );
        return;
    }

    let mut per_locale: Vec<(&str, Vec<&str>)> = Vec::new();
    for finding in missing {
        for locale in &finding.missing_in_locales {
            match per_locale.iter_mut().find(|(l, _)| *l == locale.as_str()) {
                Some((_, keys)) => keys.push(&finding.key),
                None => per_locale.push((locale.as_str(), vec![finding.key.as_str()])),
            }
        }
    }

    let total: usize = per_locale.iter().map(|(_, keys)| keys.len()).sum();
    for (locale, keys) in &per_locale {
        let _ = writeln!(
            writer,
            "  {} {}",
            "-->".blue(),
            ctx.file_path(locale).display()
        );
        for key in keys {
            let _ = writeln!(writer, "      {} {}", "+".green(), key);
        }
    }

    let _ = writeln!(
        writer,
        "{} {} key(s) into {} locale(s).",
        "Would translate".yellow().bold(),
        total,
        per_locale.len()
    );
    let _ = writeln!(
        writer,
        "Run with {} to write these translations.",
        "--apply".cyan()
    );
}

/// Print the outcome of `fix --apply`.
pub fn print_fix_result_to<W: Write>(fixed: usize, attempted: usize, writer: &mut W) {
    if fixed == attempted {
        let _ = writeln!(
            writer,
            "{} {} {} key(s).",
            SUCCESS_MARK.green(),
            "Translated".green().bold(),
            fixed
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} {} of {} key(s); {} failed (see log for details).",
            FAILURE_MARK.red(),
            "Translated".yellow().bold(),
            fixed,
            attempted,
            attempted - fixed
        );
    }
}

pub fn print_fix_result(fixed: usize, attempted: usize) {
    print_fix_result_to(fixed, attempted, &mut io::stdout().lock());
}

// ============================================================
// Internal Functions
// ============================================================

/// Source lines read from disk, one read per file.
#[derive(Default)]
struct SourceCache {
    files: HashMap<String, Option<Vec<String>>>,
}

impl SourceCache {
    fn line(&mut self, file_path: &str, line: usize) -> Option<&str> {
        let lines = self.files.entry(file_path.to_string()).or_insert_with(|| {
            fs::read_to_string(file_path)
                .ok()
                .map(|content| content.lines().map(String::from).collect())
        });
        lines
            .as_ref()?
            .get(line.checked_sub(1)?)
            .map(String::as_str)
    }
}

fn severity_label(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::High => "high".bold().red(),
        Severity::Medium => "medium".bold().yellow(),
    }
}

fn print_issue<W: Write>(
    issue: &Issue,
    root: &Path,
    sources: &mut SourceCache,
    writer: &mut W,
    max_line_width: usize,
) {
    let severity = issue.report_severity();
    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_label(severity),
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Source {
            file_path,
            line,
            col,
        } => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                display_relative(file_path, root),
                line,
                col
            );
            if let Some(source_line) = sources.line(file_path, line) {
                print_source_context(source_line, line, col, severity, writer, max_line_width);
            }
        }
        ReportLocation::Key(key) => {
            let _ = writeln!(writer, "  {} key {}", "-->".blue(), key);
        }
        ReportLocation::Locale(locale) => {
            let _ = writeln!(writer, "  {} locale {}", "-->".blue(), locale);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_source_context<W: Write>(
    source_line: &str,
    line: usize,
    col: usize,
    severity: Severity,
    writer: &mut W,
    max_line_width: usize,
) {
    let caret_char = match severity {
        Severity::High => "^".red(),
        Severity::Medium => "^".yellow(),
    };

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // col is 1-based
    let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_char,
        width = max_line_width,
        padding = caret_padding
    );
}

fn print_coverage<W: Write>(coverage: &CoverageReport, writer: &mut W) {
    if coverage.per_language.is_empty() {
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}%",
        "coverage:".bold(),
        coverage.overall
    );
    let locale_width = coverage
        .per_language
        .iter()
        .map(|c| UnicodeWidthStr::width(c.locale.as_str()))
        .max()
        .unwrap_or(0);

    for c in &coverage.per_language {
        let percentage = format!("{:>3}%", c.percentage);
        let percentage = match c.percentage {
            100 => percentage.green(),
            80..=99 => percentage.yellow(),
            _ => percentage.red(),
        };
        let _ = writeln!(
            writer,
            "  {:<width$}  {} ({}/{})",
            c.locale,
            percentage,
            c.translated,
            c.total,
            width = locale_width
        );
    }
    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let high = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::High)
        .count();
    let medium = issues.len() - high;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        high,
        "high".red(),
        medium,
        "medium".yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source { line, .. } => Some(line),
            _ => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Tests
// ============================================================
