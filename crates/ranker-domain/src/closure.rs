//! Transitive closure engine - derives inferred relations from strong ones

use crate::{RelationCode, RelationMatrix};

/// Outcome of a propagation attempt
///
/// Propagation never mutates its input. A consistent outcome carries the
/// complete next matrix for the caller to swap in; a contradiction carries
/// the conflicting cell and leaves nothing half-applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Propagation {
    /// Every forced relation was filled in without conflict
    Consistent(RelationMatrix),

    /// A chain of strong wins from `ancestor` reaches `node`, but the matrix
    /// already records `ancestor` losing to `node`
    Contradiction {
        /// Item at the start of the strong chain
        ancestor: String,
        /// Item the chain reached
        node: String,
    },
}

impl Propagation {
    /// The propagated matrix, if consistent
    pub fn into_matrix(self) -> Option<RelationMatrix> {
        match self {
            Propagation::Consistent(matrix) => Some(matrix),
            Propagation::Contradiction { .. } => None,
        }
    }

    /// True if the attempt was rejected
    pub fn is_contradiction(&self) -> bool {
        matches!(self, Propagation::Contradiction { .. })
    }
}

/// Fill in every relation forced by chains of strong wins
///
/// For each item, a depth-first search follows strong wins outward; every
/// item on the current path is inferred to beat the item just reached. An
/// unknown cell becomes [`RelationCode::InferredWin`]; a cell that already
/// holds a loss-class code is a contradiction and aborts the whole attempt.
///
/// Running propagation on its own consistent output is a no-op.
///
/// # Examples
///
/// ```
/// use ranker_domain::{propagate, Position, RelationCode, RelationMatrix};
///
/// let mut m = RelationMatrix::new(vec!["a".into(), "b".into(), "c".into()]);
/// m.set(&Position::new("a", "b"), RelationCode::StrongWin);
/// m.set(&Position::new("b", "c"), RelationCode::StrongWin);
///
/// let closed = propagate(&m).into_matrix().unwrap();
/// assert_eq!(closed.get(0, 2), RelationCode::InferredWin);
/// ```
pub fn propagate(matrix: &RelationMatrix) -> Propagation {
    let mut next = matrix.clone();
    let n = next.len();

    for root in 0..n {
        let mut visited = vec![false; n];
        visited[root] = true;

        // Current DFS path, with the next neighbour to scan for each node
        let mut path: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(&(node, start)) = path.last() {
            let step = (start..n)
                .find(|&j| !visited[j] && next.get(node, j) == RelationCode::StrongWin);

            let Some(reached) = step else {
                path.pop();
                continue;
            };

            if let Some(frame) = path.last_mut() {
                frame.1 = reached + 1;
            }
            visited[reached] = true;

            for &(ancestor, _) in &path {
                let current = next.get(ancestor, reached);
                if current.is_unknown() {
                    next.set_at(ancestor, reached, RelationCode::InferredWin);
                } else if current.is_loss() {
                    return Propagation::Contradiction {
                        ancestor: next.items()[ancestor].clone(),
                        node: next.items()[reached].clone(),
                    };
                }
            }

            path.push((reached, 0));
        }
    }

    Propagation::Consistent(next)
}
