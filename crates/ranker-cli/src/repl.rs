//! Interactive judge loop.

use crate::config::{Config, JudgeMode, KeyBindings};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use ranker_domain::{Judgement, Session, Standing, Step, Verdict};
use ranker_store::StateFile;
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// A source of judge input, one line at a time.
pub trait LineSource {
    /// Show `prompt` and read one line; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line source backed by a rustyline editor with persistent history.
pub struct EditorInput {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    interrupt_hint: String,
}

impl EditorInput {
    /// Create an editor, loading history from `history_path` if given.
    pub fn new(
        history_size: usize,
        history_path: Option<PathBuf>,
        interrupt_hint: String,
    ) -> Result<Self> {
        let config = EditorConfig::builder()
            .max_history_size(history_size)
            .map_err(|e| CliError::Readline(e.to_string()))?
            .auto_add_history(false)
            .build();
        let mut editor =
            DefaultEditor::with_config(config).map_err(|e| CliError::Readline(e.to_string()))?;

        if let Some(path) = &history_path {
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            history_path,
            interrupt_hint,
        })
    }

    /// Persist history.
    pub fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                warn!("Failed to save history to {}: {}", path.display(), e);
            }
        }
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.trim()).ok();
                    }
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", self.interrupt_hint);
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(CliError::Readline(err.to_string())),
            }
        }
    }
}

/// Line source over any buffered reader, for piped input.
pub struct ReaderInput<R> {
    reader: R,
    echo: bool,
}

impl<R: BufRead> ReaderInput<R> {
    /// Read lines from `reader`; prompts are printed to stdout when `echo` is set.
    pub fn new(reader: R, echo: bool) -> Self {
        Self { reader, echo }
    }
}

impl<R: BufRead> LineSource for ReaderInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.echo {
            print!("{}", prompt);
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Answer typed at the comparison prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// A verdict on the pair
    Verdict(Verdict),
    /// Show the answer keys
    Help,
    /// Save and stop
    Quit,
}

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every pair is resolved
    Finished(Vec<Standing>),
    /// The judge stopped early; progress is saved
    Quit,
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit" | "exit")
}

/// Parse a comparison answer.
pub fn parse_answer(line: &str, keys: &KeyBindings, mode: JudgeMode) -> Result<Answer> {
    let input = line.trim();

    if is_quit(input) {
        return Ok(Answer::Quit);
    }
    if matches!(input, "?" | "help") {
        return Ok(Answer::Help);
    }

    match keys.verdict(input) {
        Some(verdict) if mode.accepts(verdict) => Ok(Answer::Verdict(verdict)),
        Some(_) => Err(CliError::InvalidInput(format!(
            "'{}' is not available in {} mode",
            input,
            mode.as_str()
        ))),
        None => Err(CliError::InvalidInput(format!(
            "Unknown answer '{}'. Type '?' for the answer keys.",
            input
        ))),
    }
}

/// Parse the index of the cycle pair to reverse.
pub fn parse_cycle_selection(line: &str, len: usize) -> Result<usize> {
    let input = line.trim();
    let index: usize = input
        .parse()
        .map_err(|e| CliError::InvalidInput(format!("'{}' is not a pair number: {}", input, e)))?;

    if index >= len {
        return Err(CliError::InvalidInput(format!(
            "Pair {} does not exist; choose 0 to {}",
            index,
            len.saturating_sub(1)
        )));
    }
    Ok(index)
}

/// Drive a session until every pair is resolved or the judge quits.
///
/// The state file is rewritten after every accepted change.
pub fn run_session<I: LineSource, W: Write>(
    session: &mut Session,
    state: &StateFile,
    input: &mut I,
    out: &mut W,
    formatter: &Formatter,
    keys: &KeyBindings,
    mode: JudgeMode,
) -> Result<SessionEnd> {
    loop {
        match session.next_step() {
            Step::Done(standings) => {
                state.save(session.matrix())?;
                info!("All pairs resolved");
                return Ok(SessionEnd::Finished(standings));
            }

            Step::Compare(pos) => {
                writeln!(out, "{}", formatter.progress(session.remaining()))?;

                let Some(line) = input.read_line(&formatter.comparison_prompt(&pos))? else {
                    state.save(session.matrix())?;
                    return Ok(SessionEnd::Quit);
                };

                match parse_answer(&line, keys, mode) {
                    Ok(Answer::Verdict(verdict)) => {
                        match session.judge(&pos, verdict) {
                            Judgement::Consistent { inferred } => {
                                debug!("{} -> {:?}, {} inferred", pos, verdict, inferred);
                                if inferred > 0 {
                                    let note = format!("{} more pair(s) inferred", inferred);
                                    writeln!(out, "{}", formatter.info(&note))?;
                                }
                            }
                            Judgement::Contradicted => {
                                warn!("Verdict on {} contradicts earlier judgments", pos);
                                writeln!(out, "{}", formatter.warning("conflict"))?;
                            }
                        }
                        state.save(session.matrix())?;
                    }
                    Ok(Answer::Help) => {
                        writeln!(out, "{}", formatter.answer_help(keys, mode))?;
                    }
                    Ok(Answer::Quit) => {
                        state.save(session.matrix())?;
                        return Ok(SessionEnd::Quit);
                    }
                    Err(e) => {
                        writeln!(out, "{}", formatter.error(&e.to_string()))?;
                    }
                }
            }

            Step::Resolve(cycle) => {
                writeln!(out, "{}", formatter.cycle(&cycle))?;

                let Some(line) = input.read_line("> ")? else {
                    state.save(session.matrix())?;
                    return Ok(SessionEnd::Quit);
                };
                if is_quit(line.trim()) {
                    state.save(session.matrix())?;
                    return Ok(SessionEnd::Quit);
                }

                match parse_cycle_selection(&line, cycle.len()) {
                    Ok(index) => {
                        if let Some(pos) = session.break_cycle(&cycle, index) {
                            info!("Reversed {}", pos);
                            state.save(session.matrix())?;
                        }
                    }
                    Err(e) => {
                        writeln!(out, "{}", formatter.error(&e.to_string()))?;
                    }
                }
            }
        }
    }
}

/// Run a session on the terminal, then print the outcome.
pub fn run_repl(
    session: &mut Session,
    state: &StateFile,
    config: &Config,
    formatter: &Formatter,
    mode: JudgeMode,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Ranker - answer each comparison; '?' for keys, 'q' to save and quit")
    );

    let mut stdout = io::stdout();
    let end = if io::stdin().is_terminal() {
        let mut input = EditorInput::new(
            config.settings.history_size,
            history_path().ok(),
            formatter.info("Use 'q' to save and quit"),
        )?;
        let keys = &config.keys;
        let end = run_session(session, state, &mut input, &mut stdout, formatter, keys, mode);
        input.save_history();
        end?
    } else {
        let mut input = ReaderInput::new(io::stdin().lock(), true);
        let keys = &config.keys;
        run_session(session, state, &mut input, &mut stdout, formatter, keys, mode)?
    };

    match end {
        SessionEnd::Finished(standings) => {
            println!("{}", formatter.format_standings(&standings)?);
        }
        SessionEnd::Quit => {
            println!(
                "{}",
                formatter.success(&format!("Progress saved to {}", state.path().display()))
            );
        }
    }

    Ok(())
}

fn history_path() -> Result<PathBuf> {
    let dir = Config::home_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(line: &str, mode: JudgeMode) -> Result<Answer> {
        parse_answer(line, &KeyBindings::default(), mode)
    }

    #[test]
    fn test_parse_answer_keys() {
        use JudgeMode::*;
        assert_eq!(answer("k", Mixed).unwrap(), Answer::Verdict(Verdict::Win));
        assert_eq!(answer(" l ", Mixed).unwrap(), Answer::Verdict(Verdict::Loss));
        assert_eq!(answer("i", Strong).unwrap(), Answer::Verdict(Verdict::StrongWin));
        assert_eq!(answer("o", Mixed).unwrap(), Answer::Verdict(Verdict::StrongLoss));
        assert_eq!(answer("?", Mixed).unwrap(), Answer::Help);
        assert_eq!(answer("q", Mixed).unwrap(), Answer::Quit);
    }

    #[test]
    fn test_parse_answer_rejects_by_mode() {
        use JudgeMode::*;
        assert!(matches!(answer("i", Plain), Err(CliError::InvalidInput(_))));
        assert!(matches!(answer("k", Strong), Err(CliError::InvalidInput(_))));
        assert!(matches!(answer("x", Mixed), Err(CliError::InvalidInput(_))));
        assert!(matches!(answer("", Mixed), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_cycle_selection() {
        assert_eq!(parse_cycle_selection("0", 3).unwrap(), 0);
        assert_eq!(parse_cycle_selection(" 2\n", 3).unwrap(), 2);
        assert!(parse_cycle_selection("3", 3).is_err());
        assert!(parse_cycle_selection("-1", 3).is_err());
        assert!(parse_cycle_selection("two", 3).is_err());
    }

    #[test]
    fn test_reader_input() {
        let mut input = ReaderInput::new("k\r\nl\n".as_bytes(), false);
        assert_eq!(input.read_line("").unwrap(), Some("k".to_string()));
        assert_eq!(input.read_line("").unwrap(), Some("l".to_string()));
        assert_eq!(input.read_line("").unwrap(), None);
    }
}
