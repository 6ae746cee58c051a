//! Relation codes - the seven values a matrix cell can hold

/// Relation between the row item and the column item of a matrix cell
///
/// Codes come in converse pairs: writing a code at (row, col) forces its
/// converse at (col, row). The integer codes are part of the persisted
/// format and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RelationCode {
    /// No judgment yet
    #[default]
    Unknown = 0,

    /// Row beats column (plain verdict, does not seed inference)
    Win = 1,

    /// Row loses to column (plain verdict)
    Loss = 2,

    /// Row beats column (strong verdict, seeds inference)
    StrongWin = 3,

    /// Row loses to column (strong verdict)
    StrongLoss = 4,

    /// Row beats column (derived by closure)
    InferredWin = 5,

    /// Row loses to column (derived by closure)
    InferredLoss = 6,
}

impl RelationCode {
    /// All codes in integer order
    pub const ALL: [RelationCode; 7] = [
        RelationCode::Unknown,
        RelationCode::Win,
        RelationCode::Loss,
        RelationCode::StrongWin,
        RelationCode::StrongLoss,
        RelationCode::InferredWin,
        RelationCode::InferredLoss,
    ];

    /// The code that must sit at the mirrored cell
    pub fn converse(self) -> Self {
        match self {
            RelationCode::Unknown => RelationCode::Unknown,
            RelationCode::Win => RelationCode::Loss,
            RelationCode::Loss => RelationCode::Win,
            RelationCode::StrongWin => RelationCode::StrongLoss,
            RelationCode::StrongLoss => RelationCode::StrongWin,
            RelationCode::InferredWin => RelationCode::InferredLoss,
            RelationCode::InferredLoss => RelationCode::InferredWin,
        }
    }

    /// True for every code meaning "row beats column"
    pub fn is_win(self) -> bool {
        matches!(
            self,
            RelationCode::Win | RelationCode::StrongWin | RelationCode::InferredWin
        )
    }

    /// True for every code meaning "row loses to column"
    pub fn is_loss(self) -> bool {
        matches!(
            self,
            RelationCode::Loss | RelationCode::StrongLoss | RelationCode::InferredLoss
        )
    }

    /// True for codes produced by closure rather than by a judge
    pub fn is_inferred(self) -> bool {
        matches!(self, RelationCode::InferredWin | RelationCode::InferredLoss)
    }

    /// True if no judgment has been recorded
    pub fn is_unknown(self) -> bool {
        self == RelationCode::Unknown
    }

    /// Stable integer code used for persistence
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parse a stable integer code
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }
}

/// A judge's answer to "does row beat column?"
///
/// Judges can only record plain or strong verdicts; inferred codes are
/// reserved for the closure engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Row beats column
    Win,
    /// Row loses to column
    Loss,
    /// Row beats column, and everything column beats strongly too
    StrongWin,
    /// Row loses to column, and to everything that strongly beats column
    StrongLoss,
}

impl Verdict {
    /// True for verdicts that seed transitive inference
    pub fn is_strong(self) -> bool {
        matches!(self, Verdict::StrongWin | Verdict::StrongLoss)
    }
}

impl From<Verdict> for RelationCode {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Win => RelationCode::Win,
            Verdict::Loss => RelationCode::Loss,
            Verdict::StrongWin => RelationCode::StrongWin,
            Verdict::StrongLoss => RelationCode::StrongLoss,
        }
    }
}
