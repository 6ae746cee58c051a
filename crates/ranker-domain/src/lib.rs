//! Ranker Domain Layer
//!
//! This crate contains the relation-matrix engine that turns a stream of
//! pairwise judgments into a total ranking. It has no runtime dependencies
//! and knows nothing about files, terminals or JSON.
//!
//! ## Key Concepts
//!
//! - **Relation matrix**: an n×n table of [`RelationCode`]s over a fixed item list
//! - **Strong judgment**: a verdict that seeds transitive inference
//! - **Closure**: deriving inferred relations from chains of strong judgments
//! - **Contradiction**: an inferred relation that conflicts with a recorded one
//! - **Cycle**: a ring of "beats" relations that rules out a clean ordering
//!
//! ## Flow
//!
//! A [`Session`] owns the live matrix. It proposes the next pair to ask about,
//! records verdicts, propagates closure transactionally and surfaces cycles
//! for the judge to break. Once no free pairs remain it yields the standings.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod closure;
pub mod cycle;
pub mod matrix;
pub mod ranking;
pub mod relation;
pub mod selector;
pub mod session;

// Re-exports for convenience
pub use closure::{propagate, Propagation};
pub use cycle::{find_cycle, Cycle};
pub use matrix::{Position, RelationMatrix};
pub use ranking::{rank, standings, Standing};
pub use relation::{RelationCode, Verdict};
pub use selector::{find_free, next_comparison};
pub use session::{Judgement, Session, Step};
