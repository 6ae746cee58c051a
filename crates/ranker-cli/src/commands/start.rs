//! Start command implementation.

use crate::cli::StartArgs;
use crate::config::{Config, JudgeMode};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::repl;
use ranker_domain::{RelationMatrix, Session};
use ranker_store::{read_items, StateFile};
use tracing::info;

/// Execute the start command.
pub fn execute_start(args: StartArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let state = state_file(&args, config);
    if state.exists() && !args.force {
        return Err(CliError::StateExists(state.path().display().to_string()));
    }

    let mut session = new_session(&args, &state)?;
    let mode: JudgeMode = args.mode.map(Into::into).unwrap_or(config.settings.mode);

    println!(
        "{}",
        formatter.success(&format!(
            "Ranking {} items, saving to {}",
            session.matrix().len(),
            state.path().display()
        ))
    );

    repl::run_repl(&mut session, &state, config, formatter, mode)
}

fn state_file(args: &StartArgs, config: &Config) -> StateFile {
    match &args.state {
        Some(path) => StateFile::new(path.clone()),
        None => StateFile::for_items(&args.items, &config.settings.state_suffix),
    }
}

fn new_session(args: &StartArgs, state: &StateFile) -> Result<Session> {
    let items = read_items(&args.items)?;
    info!("Starting session over {} items from {}", items.len(), args.items.display());

    let matrix = RelationMatrix::new(items);
    state.save(&matrix)?;
    Ok(Session::new(matrix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(dir: &TempDir, force: bool) -> StartArgs {
        StartArgs {
            items: dir.path().join("films.txt"),
            state: None,
            mode: None,
            force,
        }
    }

    #[test]
    fn test_state_file_uses_suffix() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.settings.state_suffix = ".state".into();

        let state = state_file(&args(&dir, false), &config);
        assert_eq!(state.path(), dir.path().join("films.txt.state"));
    }

    #[test]
    fn test_new_session_writes_fresh_state() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("films.txt"), "alien\nheat\nbrazil\n").unwrap();
        let args = args(&dir, false);
        let state = state_file(&args, &Config::default());

        let session = new_session(&args, &state).unwrap();
        assert_eq!(session.remaining(), 3);
        assert_eq!(state.load().unwrap(), *session.matrix());
    }

    #[test]
    fn test_start_refuses_existing_state() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("films.txt"), "alien\nheat\n").unwrap();
        let config = Config::default();
        let state = state_file(&args(&dir, false), &config);
        state.save(&RelationMatrix::new(vec!["alien".into(), "heat".into()])).unwrap();

        let formatter = Formatter::new(config.settings.format, false);
        let result = execute_start(args(&dir, false), &config, &formatter);
        assert!(matches!(result, Err(CliError::StateExists(_))));
    }
}
