//! Markdown summary for pull-request comments.

use std::fmt::Write;
use std::path::Path;

use crate::core::ScanReport;
use crate::utils::display_relative;

/// First line of every rendered comment, so a bot can find and update it.
pub const COMMENT_MARKER: &str = "<!-- lingua-guard -->";

/// Rows shown per findings table.
const MAX_TABLE_ROWS: usize = 15;

const FLAGS: &[(&str, &str)] = &[
    ("en", "🇺🇸"),
    ("hi", "🇮🇳"),
    ("ar", "🇸🇦"),
    ("ja", "🇯🇵"),
    ("de", "🇩🇪"),
    ("fr", "🇫🇷"),
    ("es", "🇪🇸"),
    ("pt", "🇧🇷"),
    ("zh", "🇨🇳"),
    ("ko", "🇰🇷"),
];

/// Flag emoji for a locale, or the locale code itself.
pub fn flag(locale: &str) -> &str {
    FLAGS
        .iter()
        .find(|(code, _)| *code == locale)
        .map_or(locale, |&(_, flag)| flag)
}

/// Cut `text` to `limit` characters, marking the cut with `...`.
///
/// # Examples
///
/// ```
/// use lingua_guard::cli::markdown::truncate;
///
/// assert_eq!(truncate("Hello", 40), "Hello");
/// assert_eq!(truncate("Hello, world", 5), "Hello...");
/// ```
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        format!("{}...", text.chars().take(limit).collect::<String>())
    } else {
        text.to_string()
    }
}

/// 20-cell progress bar, one `#` per 5%.
fn coverage_bar(percentage: u32) -> String {
    let filled = (percentage.min(100) / 5) as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(20 - filled))
}

fn coverage_status(percentage: u32) -> &'static str {
    match percentage {
        100.. => "✅",
        80..=99 => "🟡",
        _ => "🔴",
    }
}

/// Render a scan report as a pull-request comment.
///
/// `fixed_count` is how many keys the fixer translated in this run.
/// File paths under `root` are shown relative to it.
pub fn render(report: &ScanReport, root: &Path, fixed_count: usize) -> String {
    let mut out = String::new();
    let total = report.total_issues;

    let (status_emoji, status_text) = if total == 0 {
        ("✅", "All clear! No i18n issues found.".to_string())
    } else if fixed_count >= total {
        ("🔧", format!("Found {} issues - all auto-fixed!", total))
    } else {
        ("⚠️", format!("Found {} issues ({} auto-fixed)", total, fixed_count))
    };

    let _ = writeln!(out, "{}", COMMENT_MARKER);
    let _ = writeln!(out, "## {} lingua-guard i18n Report", status_emoji);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", status_text);
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Count |");
    let _ = writeln!(out, "|--------|-------|");
    let _ = writeln!(out, "| 🔍 Files scanned | {} |", report.files_scanned);
    let _ = writeln!(out, "| 🔴 Hardcoded strings | {} |", report.hardcoded_strings.len());
    let _ = writeln!(out, "| 🟡 Missing translations | {} |", report.missing_keys.len());
    let _ = writeln!(out, "| 🟠 Stale translations | {} |", report.stale_translations.len());
    let _ = writeln!(out, "| 🔧 Auto-fixed | {} |", fixed_count);
    let _ = writeln!(out, "| 📊 Overall coverage | {}% |", report.coverage.overall);
    let _ = writeln!(out);

    render_hardcoded(&mut out, report, root);
    render_missing(&mut out, report, fixed_count);
    render_stale(&mut out, report);
    render_coverage(&mut out, report);

    let _ = writeln!(out, "---");
    let _ = writeln!(
        out,
        "<sub>🛡️ **lingua-guard** - Catches broken i18n before it ships</sub>"
    );

    out
}

fn render_hardcoded(out: &mut String, report: &ScanReport, root: &Path) {
    let findings = &report.hardcoded_strings;
    if findings.is_empty() {
        return;
    }

    let _ = writeln!(out, "### 🔴 Hardcoded Strings");
    let _ = writeln!(out);
    let _ = writeln!(out, "These strings should use `t()` for translation:");
    let _ = writeln!(out);
    let _ = writeln!(out, "| File | Line | Text | Suggested Key |");
    let _ = writeln!(out, "|------|------|------|---------------|");
    for item in findings.iter().take(MAX_TABLE_ROWS) {
        let _ = writeln!(
            out,
            "| `{}` | L{} | \"{}\" | `{}` |",
            display_relative(&item.file, root),
            item.line,
            truncate(&item.text, 40),
            item.suggested_key
        );
    }
    if findings.len() > MAX_TABLE_ROWS {
        let _ = writeln!(out);
        let _ = writeln!(out, "*...and {} more*", findings.len() - MAX_TABLE_ROWS);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "<details>");
    let _ = writeln!(out, "<summary>How to fix</summary>");
    let _ = writeln!(out);
    let _ = writeln!(out, "```diff");
    let _ = writeln!(out, "- <button>Sign Up</button>");
    let _ = writeln!(out, "+ <button>{{t('auth.signUp')}}</button>");
    let _ = writeln!(out, "```");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Then add the key to your source locale file and run `lingua-guard fix --apply`."
    );
    let _ = writeln!(out, "</details>");
    let _ = writeln!(out);
}

fn render_missing(out: &mut String, report: &ScanReport, fixed_count: usize) {
    let findings = &report.missing_keys;
    if findings.is_empty() {
        return;
    }

    let _ = writeln!(out, "### 🟡 Missing Translation Keys");
    let _ = writeln!(out);
    if fixed_count > 0 {
        let _ = writeln!(
            out,
            "> ✅ **{} keys were auto-translated** and written to the locale files.",
            fixed_count
        );
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "| Key | Missing In | Source Text |");
    let _ = writeln!(out, "|-----|-----------|-------------|");
    for item in findings.iter().take(MAX_TABLE_ROWS) {
        let flags: Vec<&str> = item.missing_in_locales.iter().map(|l| flag(l)).collect();
        let _ = writeln!(
            out,
            "| `{}` | {} | \"{}\" |",
            item.key,
            flags.join(" "),
            truncate(&item.source_value, 30)
        );
    }
    if findings.len() > MAX_TABLE_ROWS {
        let _ = writeln!(out);
        let _ = writeln!(out, "*...and {} more*", findings.len() - MAX_TABLE_ROWS);
    }
    let _ = writeln!(out);
}

fn render_stale(out: &mut String, report: &ScanReport) {
    if report.stale_translations.is_empty() {
        return;
    }

    let _ = writeln!(out, "### 🟠 Potentially Stale Translations");
    let _ = writeln!(out);
    let _ = writeln!(out, "Source locale was updated but these translations were not:");
    let _ = writeln!(out);
    for item in &report.stale_translations {
        let _ = writeln!(
            out,
            "- {} **{}**: {}",
            flag(&item.locale),
            item.locale,
            item.reason
        );
    }
    let _ = writeln!(out);
}

fn render_coverage(out: &mut String, report: &ScanReport) {
    let _ = writeln!(out, "### 📊 Translation Coverage");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Language | Coverage | Status |");
    let _ = writeln!(out, "|----------|----------|--------|");
    for lang in &report.coverage.per_language {
        let _ = writeln!(
            out,
            "| {} {} | `{}` {}% | {} |",
            flag(&lang.locale),
            lang.locale.to_uppercase(),
            coverage_bar(lang.percentage),
            lang.percentage,
            coverage_status(lang.percentage)
        );
    }
    let _ = writeln!(out);
}
