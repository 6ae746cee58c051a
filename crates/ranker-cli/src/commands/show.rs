//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use ranker_domain::{find_cycle, standings, RelationMatrix};
use ranker_store::StateFile;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, formatter: &Formatter) -> Result<()> {
    let matrix = StateFile::new(args.state).load()?;
    println!("{}", render(&matrix, formatter)?);
    Ok(())
}

fn render(matrix: &RelationMatrix, formatter: &Formatter) -> Result<String> {
    let table = formatter.format_standings(&standings(matrix))?;
    if formatter.format() == crate::config::OutputFormat::Json {
        return Ok(table);
    }

    let mut lines = vec![formatter.progress(matrix.count_unknown())];
    if let Some(cycle) = find_cycle(matrix) {
        lines.push(formatter.warning(&format!(
            "Unresolved contradiction between {} items; resume the session to fix it",
            cycle.len()
        )));
    }
    lines.push(table);
    Ok(lines.join("\n"))
}
