//! Relation matrix module - the table of all pairwise judgments

use crate::RelationCode;
use std::collections::HashSet;
use std::fmt;

/// One comparison question: "does `row` beat `col`?"
///
/// Positions are stored directionally. Setting a relation at a position
/// writes the code at (row, col) and its converse at (col, row).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Item asked about first
    pub row: String,
    /// Item it is compared against
    pub col: String,
}

impl Position {
    /// Create a new position
    pub fn new(row: impl Into<String>, col: impl Into<String>) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
        }
    }

    /// The same question asked the other way round
    pub fn reversed(&self) -> Self {
        Self {
            row: self.col.clone(),
            col: self.row.clone(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' vs '{}'", self.row, self.col)
    }
}

/// Square table of relation codes over an ordered item list
///
/// The item list is fixed at creation. Cells are stored row-major, so the
/// relation of item `i` against item `j` lives at `i * n + j`.
///
/// Invariants:
/// - `get(i, j)` is always `get(j, i).converse()`
/// - the diagonal is always [`RelationCode::Unknown`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationMatrix {
    items: Vec<String>,
    cells: Vec<RelationCode>,
}

impl RelationMatrix {
    /// Create an empty matrix over the given items
    ///
    /// # Examples
    ///
    /// ```
    /// use ranker_domain::RelationMatrix;
    ///
    /// let matrix = RelationMatrix::new(vec!["a".into(), "b".into(), "c".into()]);
    /// assert_eq!(matrix.count_unknown(), 3);
    /// ```
    pub fn new(items: Vec<String>) -> Self {
        let n = items.len();
        Self {
            items,
            cells: vec![RelationCode::Unknown; n * n],
        }
    }

    /// Rebuild a matrix from persisted parts
    ///
    /// Rejects a cell count other than n², a non-empty diagonal and any cell
    /// pair that is not an exact converse.
    pub fn from_parts(items: Vec<String>, cells: Vec<RelationCode>) -> Result<Self, String> {
        let n = items.len();
        if cells.len() != n * n {
            return Err(format!(
                "Expected {} relations for {} items, got {}",
                n * n,
                n,
                cells.len()
            ));
        }

        let mut seen = HashSet::with_capacity(n);
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.as_str())) {
            return Err(format!("Duplicate item '{}'", dup));
        }

        for i in 0..n {
            if !cells[i * n + i].is_unknown() {
                return Err(format!("Diagonal cell of '{}' is not unknown", items[i]));
            }
            for j in (i + 1)..n {
                if cells[i * n + j].converse() != cells[j * n + i] {
                    return Err(format!(
                        "Relations between '{}' and '{}' are not converse",
                        items[i], items[j]
                    ));
                }
            }
        }

        Ok(Self { items, cells })
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the matrix has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items, in their fixed order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[RelationCode] {
        &self.cells
    }

    /// Position of an item in the item list
    pub fn index_of(&self, item: &str) -> Option<usize> {
        self.items.iter().position(|key| key == item)
    }

    /// Relation of item `row` against item `col`, by index
    ///
    /// # Panics
    /// Panics if either index is out of bounds
    pub fn get(&self, row: usize, col: usize) -> RelationCode {
        self.cells[row * self.len() + col]
    }

    /// Relation at a position, or `None` if either item is unknown
    pub fn relation(&self, pos: &Position) -> Option<RelationCode> {
        let row = self.index_of(&pos.row)?;
        let col = self.index_of(&pos.col)?;
        Some(self.get(row, col))
    }

    /// Record a relation and its converse
    ///
    /// Silently does nothing if either item is absent or both name the same
    /// item.
    pub fn set(&mut self, pos: &Position, code: RelationCode) {
        if let (Some(row), Some(col)) = (self.index_of(&pos.row), self.index_of(&pos.col)) {
            self.set_at(row, col, code);
        }
    }

    /// Record a relation and its converse, by index
    ///
    /// Does nothing on the diagonal.
    ///
    /// # Panics
    /// Panics if either index is out of bounds
    pub fn set_at(&mut self, row: usize, col: usize, code: RelationCode) {
        if row == col {
            return;
        }
        let n = self.len();
        self.cells[row * n + col] = code;
        self.cells[col * n + row] = code.converse();
    }

    /// Number of unordered item pairs still unknown
    pub fn count_unknown(&self) -> usize {
        let n = self.len();
        (0..n)
            .map(|i| ((i + 1)..n).filter(|&j| self.get(i, j).is_unknown()).count())
            .sum()
    }

    /// True once every pair has a relation
    pub fn is_complete(&self) -> bool {
        self.count_unknown() == 0
    }

    /// Copy of this matrix with every inferred relation reset to unknown
    pub fn clear_inferred(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|&code| {
                if code.is_inferred() {
                    RelationCode::Unknown
                } else {
                    code
                }
            })
            .collect();

        Self {
            items: self.items.clone(),
            cells,
        }
    }

    /// Position naming the items at two indices
    pub(crate) fn position(&self, row: usize, col: usize) -> Position {
        Position::new(self.items[row].clone(), self.items[col].clone())
    }
}
