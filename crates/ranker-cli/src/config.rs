//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use ranker_domain::Verdict;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Answer keys
    #[serde(default)]
    pub keys: KeyBindings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Which verdicts the judge may give
    #[serde(default = "default_mode")]
    pub mode: JudgeMode,

    /// Appended to the item file name to locate the state file
    #[serde(default = "default_state_suffix")]
    pub state_suffix: String,

    /// Line editor history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Keys the judge types to answer a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// First item wins
    #[serde(default = "default_win_key")]
    pub win: String,

    /// First item loses
    #[serde(default = "default_loss_key")]
    pub loss: String,

    /// First item wins, transitively
    #[serde(default = "default_strong_win_key")]
    pub strong_win: String,

    /// First item loses, transitively
    #[serde(default = "default_strong_loss_key")]
    pub strong_loss: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Which verdicts are accepted during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JudgeMode {
    /// Plain win/loss only; nothing is inferred
    Plain,
    /// Strong win/loss only; every answer propagates
    Strong,
    /// Both kinds
    Mixed,
}

impl JudgeMode {
    /// Whether a verdict may be given in this mode.
    pub fn accepts(self, verdict: Verdict) -> bool {
        match self {
            JudgeMode::Plain => !verdict.is_strong(),
            JudgeMode::Strong => verdict.is_strong(),
            JudgeMode::Mixed => true,
        }
    }

    /// Mode name as used in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            JudgeMode::Plain => "plain",
            JudgeMode::Strong => "strong",
            JudgeMode::Mixed => "mixed",
        }
    }
}

impl KeyBindings {
    /// Verdict bound to an input key.
    pub fn verdict(&self, key: &str) -> Option<Verdict> {
        [
            (&self.win, Verdict::Win),
            (&self.loss, Verdict::Loss),
            (&self.strong_win, Verdict::StrongWin),
            (&self.strong_loss, Verdict::StrongLoss),
        ]
        .into_iter()
        .find(|(bound, _)| bound.as_str() == key)
        .map(|(_, verdict)| verdict)
    }

    /// Key bound to a verdict.
    pub fn key(&self, verdict: Verdict) -> &str {
        match verdict {
            Verdict::Win => &self.win,
            Verdict::Loss => &self.loss,
            Verdict::StrongWin => &self.strong_win,
            Verdict::StrongLoss => &self.strong_loss,
        }
    }

    fn validate(&self) -> Result<()> {
        let keys = [&self.win, &self.loss, &self.strong_win, &self.strong_loss];
        for (i, key) in keys.iter().enumerate() {
            if key.trim().is_empty() || key.trim() != key.as_str() {
                return Err(CliError::Config(format!("Invalid answer key '{}'", key)));
            }
            if keys[..i].contains(key) {
                return Err(CliError::Config(format!("Answer key '{}' is bound twice", key)));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("config.toml"))
    }

    /// Directory holding config and history.
    pub fn home_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".ranker"))
    }

    /// Load configuration from a file, or the default file if `path` is `None`.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            Self::parse(&contents)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.keys.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, or the default file if `path` is `None`.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::path()?,
        };

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, self.to_toml()?)?;
        Ok(path)
    }

    /// Render configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            mode: JudgeMode::Mixed,
            state_suffix: default_state_suffix(),
            history_size: 1000,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            win: default_win_key(),
            loss: default_loss_key(),
            strong_win: default_strong_win_key(),
            strong_loss: default_strong_loss_key(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_mode() -> JudgeMode {
    JudgeMode::Mixed
}

fn default_state_suffix() -> String {
    ranker_store::DEFAULT_SUFFIX.to_string()
}

fn default_history_size() -> usize {
    1000
}

fn default_win_key() -> String {
    "k".to_string()
}

fn default_loss_key() -> String {
    "l".to_string()
}

fn default_strong_win_key() -> String {
    "i".to_string()
}

fn default_strong_loss_key() -> String {
    "o".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.mode, JudgeMode::Mixed);
        assert_eq!(config.settings.state_suffix, "-ranks.json");
        assert_eq!(config.keys.verdict("k"), Some(Verdict::Win));
        assert_eq!(config.keys.verdict("o"), Some(Verdict::StrongLoss));
        assert_eq!(config.keys.verdict("x"), None);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
            [settings]
            mode = "strong"

            [keys]
            win = "w"
            "#,
        )
        .unwrap();

        assert_eq!(config.settings.mode, JudgeMode::Strong);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.keys.win, "w");
        assert_eq!(config.keys.loss, "l");
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let result = Config::parse(
            r#"
            [keys]
            win = "l"
            "#,
        );
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let result = Config::parse(
            r#"
            [settings]
            mode = "fuzzy"
            "#,
        );
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default();
        let parsed = Config::parse(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_mode_accepts() {
        assert!(JudgeMode::Plain.accepts(Verdict::Win));
        assert!(!JudgeMode::Plain.accepts(Verdict::StrongWin));
        assert!(JudgeMode::Strong.accepts(Verdict::StrongLoss));
        assert!(!JudgeMode::Strong.accepts(Verdict::Loss));
        assert!(JudgeMode::Mixed.accepts(Verdict::Loss));
        assert!(JudgeMode::Mixed.accepts(Verdict::StrongWin));
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.color = false;
        config.save(Some(&path)).unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }
}
