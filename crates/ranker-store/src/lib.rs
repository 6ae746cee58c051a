//! Ranker Storage Layer
//!
//! Reads item lists and persists relation matrices so a ranking session can be
//! resumed later.
//!
//! # Formats
//!
//! - Item source: plain text, one item per line
//! - State: JSON `{"items": [...], "relations": [...]}` with the relations as a
//!   flat row-major array of stable integer codes
//!
//! # Examples
//!
//! ```no_run
//! use ranker_store::{read_items, StateFile};
//! use ranker_domain::RelationMatrix;
//!
//! let items = read_items("films.txt").unwrap();
//! let state = StateFile::for_items("films.txt", "-ranks.json");
//! state.save(&RelationMatrix::new(items)).unwrap();
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod items;
pub mod state;

pub use error::{Result, StoreError};
pub use items::{parse_items, read_items};
pub use state::{deserialize, serialize, MatrixRecord, StateFile, DEFAULT_SUFFIX};
