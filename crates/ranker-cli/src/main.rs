//! Ranker CLI - rank a list of items by pairwise comparison.

use anyhow::Context;
use clap::Parser;
use ranker_cli::commands;
use ranker_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Start(args) => {
            let items = args.items.display().to_string();
            commands::execute_start(args, &config, &formatter)
                .with_context(|| format!("Failed to rank {}", items))?;
        }
        Command::Resume(args) => {
            let items = args.items.display().to_string();
            commands::execute_resume(args, &config, &formatter)
                .with_context(|| format!("Failed to resume ranking of {}", items))?;
        }
        Command::Show(args) => {
            let state = args.state.display().to_string();
            commands::execute_show(args, &formatter)
                .with_context(|| format!("Failed to show {}", state))?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
