//! Item source - one item per line of text

use crate::error::{Result, StoreError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Split text into items
///
/// Trailing whitespace (including `\r`) is trimmed and blank lines are
/// skipped. Repeated items are dropped, keeping the first occurrence, since
/// the relation matrix identifies items by exact match.
pub fn parse_items(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let item = line.trim_end();
        if item.trim_start().is_empty() {
            continue;
        }
        if !seen.insert(item) {
            warn!("Skipping duplicate item '{}' on line {}", item, line_no + 1);
            continue;
        }
        items.push(item.to_string());
    }

    items
}

/// Read items from a text file
pub fn read_items<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let items = parse_items(&text);

    if items.is_empty() {
        return Err(StoreError::NoItems(path.display().to_string()));
    }

    debug!("Read {} items from {}", items.len(), path.display());
    Ok(items)
}
