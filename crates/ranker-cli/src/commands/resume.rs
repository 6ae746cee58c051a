//! Resume command implementation.

use crate::cli::ResumeArgs;
use crate::config::{Config, JudgeMode};
use crate::error::Result;
use crate::output::Formatter;
use crate::repl;
use ranker_domain::Session;
use ranker_store::{read_items, StateFile};
use tracing::{info, warn};

/// Execute the resume command.
pub fn execute_resume(args: ResumeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let state = match &args.state {
        Some(path) => StateFile::new(path.clone()),
        None => StateFile::for_items(&args.items, &config.settings.state_suffix),
    };

    let matrix = state.load()?;
    info!("Resumed {} with {} free pairs", state.path().display(), matrix.count_unknown());

    // The saved item list is authoritative; an edited item file only warrants a warning.
    match read_items(&args.items) {
        Ok(items) if items.as_slice() != matrix.items() => {
            warn!("{} no longer matches the saved session", args.items.display());
            println!(
                "{}",
                formatter.warning(
                    "Item file has changed since the session started; using the saved items"
                )
            );
        }
        Ok(_) => {}
        Err(e) => warn!("Could not re-read {}: {}", args.items.display(), e),
    }

    let mode: JudgeMode = args.mode.map(Into::into).unwrap_or(config.settings.mode);
    let mut session = Session::new(matrix);
    repl::run_repl(&mut session, &state, config, formatter, mode)
}
