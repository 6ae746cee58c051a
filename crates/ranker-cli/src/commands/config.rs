//! Config command implementation.

use crate::cli::{ConfigArgs, ConfigAction};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            let written = init(path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", written.display()))
            );
        }
    }
    Ok(())
}

fn init(path: Option<&Path>, force: bool) -> Result<std::path::PathBuf> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => Config::path()?,
    };
    if target.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        )));
    }
    Config::default().save(Some(&target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init(Some(&path), false).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        assert!(matches!(init(Some(&path), false), Err(CliError::Config(_))));
        init(Some(&path), true).unwrap();
        assert!(Config::load(Some(&path)).unwrap().settings.color);
    }
}
