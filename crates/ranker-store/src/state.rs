//! Persisted session state
//!
//! A matrix is stored as its item list plus a flat row-major array of
//! relation codes. Codes are the stable integers of
//! [`RelationCode::code`], so files written by older versions keep loading.

use crate::error::{Result, StoreError};
use ranker_domain::{RelationCode, RelationMatrix};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix appended to the item file name to locate its state file
pub const DEFAULT_SUFFIX: &str = "-ranks.json";

/// On-disk representation of a relation matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRecord {
    /// Items in matrix order
    pub items: Vec<String>,

    /// n*n relation codes, row-major
    pub relations: Vec<u8>,
}

impl From<&RelationMatrix> for MatrixRecord {
    fn from(matrix: &RelationMatrix) -> Self {
        Self {
            items: matrix.items().to_vec(),
            relations: matrix.cells().iter().map(|code| code.code()).collect(),
        }
    }
}

impl TryFrom<MatrixRecord> for RelationMatrix {
    type Error = StoreError;

    fn try_from(record: MatrixRecord) -> Result<Self> {
        let cells = record
            .relations
            .iter()
            .enumerate()
            .map(|(i, &code)| {
                RelationCode::from_code(code).ok_or_else(|| {
                    StoreError::InvalidData(format!(
                        "Unknown relation code {} at index {}",
                        code, i
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        RelationMatrix::from_parts(record.items, cells).map_err(StoreError::InvalidData)
    }
}

/// Encode a matrix as JSON
pub fn serialize(matrix: &RelationMatrix) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&MatrixRecord::from(matrix))?)
}

/// Decode a matrix from JSON, validating codes and converse pairs
pub fn deserialize(data: &[u8]) -> Result<RelationMatrix> {
    let record: MatrixRecord = serde_json::from_slice(data)?;
    RelationMatrix::try_from(record)
}

/// State file of one ranking session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// State file at an explicit path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// State file next to an item file: `<items><suffix>`
    ///
    /// # Examples
    ///
    /// ```
    /// use ranker_store::StateFile;
    /// use std::path::Path;
    ///
    /// let state = StateFile::for_items("lists/films.txt", "-ranks.json");
    /// assert_eq!(state.path(), Path::new("lists/films.txt-ranks.json"));
    /// ```
    pub fn for_items<P: AsRef<Path>>(items_path: P, suffix: &str) -> Self {
        let mut name = OsString::from(items_path.as_ref().as_os_str());
        name.push(suffix);
        Self {
            path: PathBuf::from(name),
        }
    }

    /// Location of the state file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if a saved state exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the saved matrix
    pub fn load(&self) -> Result<RelationMatrix> {
        let data = fs::read(&self.path)?;
        let matrix = deserialize(&data)?;
        debug!(
            "Loaded {} items ({} unknown pairs) from {}",
            matrix.len(),
            matrix.count_unknown(),
            self.path.display()
        );
        Ok(matrix)
    }

    /// Save a matrix
    ///
    /// The full serialization is written to a sibling temporary file which
    /// then replaces the target, so readers never see a partial state.
    pub fn save(&self, matrix: &RelationMatrix) -> Result<()> {
        let data = serialize(matrix)?;

        let mut tmp = OsString::from(self.path.as_os_str());
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, &data)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }

        debug!("Saved {} bytes to {}", data.len(), self.path.display());
        Ok(())
    }
}
