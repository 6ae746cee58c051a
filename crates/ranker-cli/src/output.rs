//! Output formatting for the CLI.

use crate::config::{JudgeMode, KeyBindings, OutputFormat};
use crate::error::Result;
use colored::*;
use ranker_domain::{Cycle, Position, Standing, Verdict};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format final or intermediate standings.
    pub fn format_standings(&self, standings: &[Standing]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_standings_json(standings),
            OutputFormat::Table => self.format_standings_table(standings),
            OutputFormat::Quiet => Ok(self.format_standings_quiet(standings)),
        }
    }

    fn format_standings_json(&self, standings: &[Standing]) -> Result<String> {
        let json: Vec<serde_json::Value> = standings
            .iter()
            .enumerate()
            .map(|(rank, s)| {
                serde_json::json!({
                    "rank": rank,
                    "item": s.item,
                    "wins": s.wins,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn format_standings_table(&self, standings: &[Standing]) -> Result<String> {
        if standings.is_empty() {
            return Ok(self.colorize("No items.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Rank", "Item", "Wins"]);
        for (rank, s) in standings.iter().enumerate() {
            builder.push_record([rank.to_string(), s.item.clone(), s.wins.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    fn format_standings_quiet(&self, standings: &[Standing]) -> String {
        standings
            .iter()
            .enumerate()
            .map(|(rank, s)| format!("{}: {}", rank, s.item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of comparisons still open.
    pub fn progress(&self, remaining: usize) -> String {
        self.colorize(&format!("free spaces: {}", remaining), "cyan")
    }

    /// Prompt for a comparison.
    pub fn comparison_prompt(&self, pos: &Position) -> String {
        format!("{}: ", pos)
    }

    /// Listing of a cycle's pairs, one selectable index per line.
    pub fn cycle(&self, cycle: &Cycle) -> String {
        let mut lines = vec![self.warning("Contradiction: each item below beats the next")];
        for (i, edge) in cycle.edges().enumerate() {
            lines.push(format!("{}: {}", i, edge));
        }
        lines.push(self.info("Enter the number of the pair to reverse"));
        lines.join("\n")
    }

    /// Help text for the comparison prompt.
    pub fn answer_help(&self, keys: &KeyBindings, mode: JudgeMode) -> String {
        let mut lines = vec![self.info(&format!("Answer keys ({} mode):", mode.as_str()))];
        let verdicts = [
            (Verdict::Win, "first item wins"),
            (Verdict::Loss, "second item wins"),
            (Verdict::StrongWin, "first item wins, and beats everything the second beats"),
            (Verdict::StrongLoss, "second item wins, and beats everything the first beats"),
        ];
        for (verdict, text) in verdicts {
            if mode.accepts(verdict) {
                lines.push(format!("  {:<6} - {}", keys.key(verdict), text));
            }
        }
        lines.push("  ?      - show this help".to_string());
        lines.push("  q      - save and quit".to_string());
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
