//! Session module - the judge loop as an owned state machine

use crate::closure::{propagate, Propagation};
use crate::cycle::{find_cycle, Cycle};
use crate::ranking::{standings, Standing};
use crate::selector::next_comparison;
use crate::{Position, RelationCode, RelationMatrix, Verdict};

/// What the judge should be asked next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The live matrix holds a cycle; one of its pairs must be downgraded
    Resolve(Cycle),

    /// Ask the judge about this pair
    Compare(Position),

    /// Every pair is resolved; these are the final standings
    Done(Vec<Standing>),
}

/// Result of recording a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgement {
    /// Closure succeeded and replaced the live matrix
    Consistent {
        /// Pairs resolved by inference on top of the verdict itself
        inferred: usize,
    },

    /// Closure conflicted with an existing judgment; the verdict is kept but
    /// nothing was inferred, and the next step surfaces the cycle
    Contradicted,
}

/// A ranking session owning the live relation matrix
///
/// Every closure attempt runs on a copy and is swapped in only when
/// consistent, so the live matrix is never left half-propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    matrix: RelationMatrix,
}

impl Session {
    /// Start or resume a session over a matrix
    pub fn new(matrix: RelationMatrix) -> Self {
        Self { matrix }
    }

    /// Live matrix
    pub fn matrix(&self) -> &RelationMatrix {
        &self.matrix
    }

    /// Give up ownership of the live matrix
    pub fn into_matrix(self) -> RelationMatrix {
        self.matrix
    }

    /// Number of pairs still unknown
    pub fn remaining(&self) -> usize {
        self.matrix.count_unknown()
    }

    /// Decide what to ask next
    ///
    /// Cycles take priority over free pairs: a ring of plain verdicts never
    /// trips closure, yet still rules out a clean ordering.
    pub fn next_step(&self) -> Step {
        if let Some(cycle) = find_cycle(&self.matrix) {
            return Step::Resolve(cycle);
        }

        match next_comparison(&self.matrix) {
            Some(pos) => Step::Compare(pos),
            None => Step::Done(standings(&self.matrix)),
        }
    }

    /// Record the judge's verdict on a pair and propagate closure
    pub fn judge(&mut self, pos: &Position, verdict: Verdict) -> Judgement {
        self.matrix.set(pos, verdict.into());
        let before = self.matrix.count_unknown();

        match propagate(&self.matrix) {
            Propagation::Consistent(next) => {
                let inferred = before - next.count_unknown();
                self.matrix = next;
                Judgement::Consistent { inferred }
            }
            Propagation::Contradiction { .. } => Judgement::Contradicted,
        }
    }

    /// Downgrade the `index`-th pair of a cycle to a plain loss
    ///
    /// Inferred relations are stripped and closure is recomputed from the
    /// remaining judgments. If closure still conflicts, the stripped matrix
    /// stays live and the next step surfaces the remaining cycle. Returns the
    /// downgraded pair, or `None` if `index` is outside the ring.
    pub fn break_cycle(&mut self, cycle: &Cycle, index: usize) -> Option<Position> {
        let pos = cycle.edge(index)?;
        self.matrix.set(&pos, RelationCode::Loss);

        let stripped = self.matrix.clear_inferred();
        self.matrix = match propagate(&stripped) {
            Propagation::Consistent(next) => next,
            Propagation::Contradiction { .. } => stripped,
        };

        Some(pos)
    }
}
