//! Check command - scan the project and print the findings.
//!
//! With `--fix` (or `autoFix` in the config file) missing keys are
//! translated after the scan, and translated keys no longer count toward
//! the exit status.

use anyhow::Result;
use tracing::{info, warn};

use super::super::{
    args::{CheckArgs, CheckCommand, OutputFormat},
    exit_status::ExitStatus,
    markdown, report,
};
use super::helper::Project;
use crate::core::{ScanReport, scan_all};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let project = Project::load(&args.common)?;

    let scan_report = scan_all(&project.scan_config(args.changed.clone()))?;
    let fixed = auto_fix(args, &project, &scan_report)?;

    match args.format {
        OutputFormat::Terminal => {
            report::print_scan(&scan_report, &project.root);
            if let Some(fixed) = fixed {
                report::print_fix_result(fixed, attempted_count(&scan_report));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scan_report)?),
        OutputFormat::Markdown => print!(
            "{}",
            markdown::render(&scan_report, &project.root, fixed.unwrap_or(0))
        ),
    }

    let fail_on_issues = args.fail_on_issues || project.config.fail_on_issues;
    Ok(ExitStatus::from_issue_count(
        remaining_issues(scan_report.total_issues, fixed.unwrap_or(0)),
        fail_on_issues,
    ))
}

/// Run the fixer when asked to. Returns `None` when no fix ran.
///
/// `--fix` without an API key is an error. `autoFix` from the config file
/// without one only logs a warning, so plain scans keep working offline.
fn auto_fix(
    args: &CheckArgs,
    project: &Project,
    scan_report: &ScanReport,
) -> Result<Option<usize>> {
    if !args.fix && !project.config.auto_fix {
        return Ok(None);
    }
    if scan_report.missing_keys.is_empty() {
        return Ok(None);
    }
    if !args.fix && args.provider.api_key().is_none() {
        warn!("autoFix is enabled but no API key is set; skipping translation");
        return Ok(None);
    }

    let fixed = project.translate_missing(&scan_report.missing_keys, &args.provider)?;
    info!(fixed, "auto-fixed missing keys");
    Ok(Some(fixed))
}

fn attempted_count(scan_report: &ScanReport) -> usize {
    scan_report
        .missing_keys
        .iter()
        .map(|m| m.missing_in_locales.len())
        .sum()
}

/// Issues left after `fixed` translations were written.
fn remaining_issues(total_issues: usize, fixed: usize) -> usize {
    total_issues.saturating_sub(fixed)
}
