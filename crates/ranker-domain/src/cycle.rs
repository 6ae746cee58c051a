//! Cycle detector - finds intransitive rings of "beats" relations

use crate::{Position, RelationMatrix};

/// A simple directed cycle of items
///
/// Consecutive items denote "X beats Y", and the last item beats the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    items: Vec<String>,
}

impl Cycle {
    /// Create a cycle from an ordered ring of items
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Items around the ring
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items (and edges) in the ring
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True for a ring without items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `index`-th "X beats Y" pair, wrapping at the end of the ring
    pub fn edge(&self, index: usize) -> Option<Position> {
        let k = self.items.len();
        if index >= k {
            return None;
        }
        Some(Position::new(
            self.items[index].clone(),
            self.items[(index + 1) % k].clone(),
        ))
    }

    /// All adjacent pairs of the ring
    pub fn edges(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.items.len()).filter_map(move |i| self.edge(i))
    }
}

/// Find one cycle among the win-class relations of the matrix
///
/// Runs a depth-first search from every unvisited item in index order,
/// scanning outgoing edges in index order. An edge into an item on the
/// current path closes a cycle. Fully explored items are dead ends and are
/// never expanded twice. Returns `None` iff the win-class relations form a
/// DAG.
///
/// # Examples
///
/// ```
/// use ranker_domain::{find_cycle, Position, RelationCode, RelationMatrix};
///
/// let mut m = RelationMatrix::new(vec!["a".into(), "b".into(), "c".into()]);
/// m.set(&Position::new("a", "b"), RelationCode::Win);
/// m.set(&Position::new("b", "c"), RelationCode::Win);
/// m.set(&Position::new("c", "a"), RelationCode::Win);
///
/// let cycle = find_cycle(&m).unwrap();
/// assert_eq!(cycle.len(), 3);
/// ```
pub fn find_cycle(matrix: &RelationMatrix) -> Option<Cycle> {
    let n = matrix.len();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];

    for root in 0..n {
        if visited[root] {
            continue;
        }

        // Current DFS path, with the next neighbour to scan for each node
        let mut path: Vec<(usize, usize)> = vec![(root, 0)];
        visited[root] = true;
        on_stack[root] = true;

        while let Some(frame) = path.last_mut() {
            let (node, next) = *frame;

            let step = (next..n).find(|&j| {
                matrix.get(node, j).is_win() && (on_stack[j] || !visited[j])
            });

            match step {
                Some(j) if on_stack[j] => {
                    let start = path.iter().position(|&(item, _)| item == j).unwrap_or(0);
                    return Some(ring(matrix, &path[start..]));
                }
                Some(j) => {
                    frame.1 = j + 1;
                    visited[j] = true;
                    on_stack[j] = true;
                    path.push((j, 0));
                }
                None => {
                    on_stack[node] = false;
                    path.pop();
                }
            }
        }
    }

    None
}

/// Turn a path segment `[t, v1, .., vk]` closed by `vk -> t` into the ring
/// `[v1, .., vk, t]`.
fn ring(matrix: &RelationMatrix, segment: &[(usize, usize)]) -> Cycle {
    let mut indices: Vec<usize> = segment.iter().map(|&(item, _)| item).collect();
    indices.rotate_left(1);
    Cycle::new(
        indices
            .into_iter()
            .map(|i| matrix.items()[i].clone())
            .collect(),
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::RelationCode;
    use proptest::prelude::*;

    /// Win-class relations form a DAG iff some order has every win pointing forward
    fn is_acyclic(matrix: &RelationMatrix) -> bool {
        let n = matrix.len();
        let mut indegree: Vec<usize> = (0..n)
            .map(|j| (0..n).filter(|&i| matrix.get(i, j).is_win()).count())
            .collect();
        let mut ready: Vec<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
        let mut seen = 0;
        while let Some(node) = ready.pop() {
            seen += 1;
            for j in 0..n {
                if matrix.get(node, j).is_win() {
                    indegree[j] -= 1;
                    if indegree[j] == 0 {
                        ready.push(j);
                    }
                }
            }
        }
        seen == n
    }

    proptest! {
        /// Property: a cycle is reported iff one exists, and it is simple
        #[test]
        fn test_cycle_iff_not_dag(
            n in 1usize..7,
            cells in prop::collection::vec(0u8..3, 21),
        ) {
            let items: Vec<String> = (0..n).map(|i| format!("item{}", i)).collect();
            let mut matrix = RelationMatrix::new(items);
            let mut k = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    let code = RelationCode::from_code(cells[k]).unwrap_or_default();
                    matrix.set_at(i, j, code);
                    k += 1;
                }
            }

            match find_cycle(&matrix) {
                Some(cycle) => {
                    prop_assert!(!is_acyclic(&matrix));
                    let mut ring = cycle.items().to_vec();
                    ring.sort();
                    ring.dedup();
                    prop_assert_eq!(ring.len(), cycle.len());
                    for edge in cycle.edges() {
                        prop_assert!(matrix.relation(&edge).unwrap().is_win());
                    }
                }
                None => prop_assert!(is_acyclic(&matrix)),
            }
        }
    }
}
