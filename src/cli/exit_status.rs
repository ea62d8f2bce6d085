use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed, nothing blocking was found
/// - `Failure` (1): Issues were found with fail-on-issues set, or the command refused to run
/// - `Error` (2): Command failed due to internal error (parse error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a finished scan.
    pub fn from_issue_count(total_issues: usize, fail_on_issues: bool) -> Self {
        if fail_on_issues && total_issues > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }

    #[test]
    fn issues_fail_only_when_requested() {
        assert_eq!(ExitStatus::from_issue_count(3, false), ExitStatus::Success);
        assert_eq!(ExitStatus::from_issue_count(3, true), ExitStatus::Failure);
        assert_eq!(ExitStatus::from_issue_count(0, true), ExitStatus::Success);
    }
}
