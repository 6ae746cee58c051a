//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ranker - Rank a list of items by answering pairwise comparisons.
#[derive(Debug, Parser)]
#[command(name = "ranker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "RANKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one ranked item per line)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a new ranking session from an item file
    Start(StartArgs),

    /// Resume a saved ranking session
    Resume(ResumeArgs),

    /// Show progress and standings of a saved session
    Show(ShowArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the start command.
#[derive(Debug, Parser)]
pub struct StartArgs {
    /// Text file with one item per line
    pub items: PathBuf,

    /// State file (default: <ITEMS> plus the configured suffix)
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Which verdicts to accept
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Overwrite an existing state file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the resume command.
#[derive(Debug, Parser)]
pub struct ResumeArgs {
    /// Item file the session was started from
    pub items: PathBuf,

    /// State file (default: <ITEMS> plus the configured suffix)
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Which verdicts to accept
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// State file to inspect
    pub state: PathBuf,
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Judge mode argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// Win/loss only
    Plain,
    /// Strong win/loss only
    Strong,
    /// Both
    Mixed,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ModeArg> for crate::config::JudgeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Plain => crate::config::JudgeMode::Plain,
            ModeArg::Strong => crate::config::JudgeMode::Strong,
            ModeArg::Mixed => crate::config::JudgeMode::Mixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JudgeMode;

    #[test]
    fn test_start_command() {
        let cli = Cli::parse_from(["ranker", "start", "films.txt", "--mode", "strong"]);
        match cli.command {
            Command::Start(args) => {
                assert_eq!(args.items, PathBuf::from("films.txt"));
                assert!(matches!(args.mode, Some(ModeArg::Strong)));
                assert!(!args.force);
            }
            _ => panic!("Expected Start command"),
        }
    }

    #[test]
    fn test_resume_with_state_path() {
        let cli = Cli::parse_from([
            "ranker",
            "resume",
            "films.txt",
            "--state",
            "s.json",
            "--no-color",
        ]);
        assert!(cli.no_color);
        match cli.command {
            Command::Resume(args) => assert_eq!(args.state, Some(PathBuf::from("s.json"))),
            _ => panic!("Expected Resume command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["ranker", "show", "s.json", "--format", "json"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_missing_command_is_error() {
        assert!(Cli::try_parse_from(["ranker"]).is_err());
    }

    #[test]
    fn test_mode_conversion() {
        let mode: JudgeMode = ModeArg::Plain.into();
        assert_eq!(mode, JudgeMode::Plain);
    }
}
