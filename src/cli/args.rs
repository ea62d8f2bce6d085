//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan for hardcoded strings, missing keys and stale translations
//! - `fix`: Machine-translate missing keys into the target locale files
//! - `init`: Write a default `.linguaguardrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::fix::translator::API_KEY_ENV;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Fix(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source locale (overrides config file)
    #[arg(long)]
    pub source_locale: Option<String>,

    /// Comma-separated target locales (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub target_locales: Option<Vec<String>>,

    /// Locale files directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Project root directory (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Translation provider settings for commands that write translations.
#[derive(Debug, Clone, Default, Args)]
pub struct ProviderArgs {
    /// Translation provider API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Translation provider endpoint (overrides config file)
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl ProviderArgs {
    /// The API key, unless it is unset or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Cargo-style colored output
    #[default]
    Terminal,
    /// The scan report as JSON
    Json,
    /// A pull-request comment summary
    Markdown,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Files changed in this change set (default: scan everything)
    #[arg(long, num_args = 1..)]
    pub changed: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Exit with status 1 when any issue is found
    #[arg(long)]
    pub fail_on_issues: bool,

    /// Translate missing keys into the target locale files after scanning
    #[arg(long)]
    pub fix: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct FixArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write translations (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub args: FixArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for i18n issues (hardcoded strings, missing keys, stale translations)
    Check(CheckCommand),
    /// Translate missing keys into the target locale files
    Fix(FixCommand),
    /// Initialize a new .linguaguardrc.json configuration file
    Init,
}
