//! Fix command - machine-translate missing keys into the target locale files.
//!
//! Use `--apply` to call the translation provider and write the files
//! (default is dry-run mode, which only lists what would be translated).

use anyhow::Result;

use super::super::{args::FixCommand, exit_status::ExitStatus, report};
use super::helper::Project;
use crate::rules::missing::check_missing_keys;

pub fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let project = Project::load(&args.common)?;
    let ctx = project.locale_context();

    let missing = check_missing_keys(&ctx)?;

    if !args.apply || missing.is_empty() {
        report::print_fix_preview(&missing, &ctx);
        return Ok(ExitStatus::Success);
    }

    let attempted: usize = missing.iter().map(|m| m.missing_in_locales.len()).sum();
    let fixed = project.translate_missing(&missing, &args.provider)?;

    report::print_fix_result(fixed, attempted);

    Ok(ExitStatus::Success)
}
