//! Comparison selector - picks the next pair worth asking about

use crate::{Position, RelationCode, RelationMatrix};

/// First unknown pair in order of increasing index distance
///
/// Pairs are scanned gap by gap (neighbours first), and within a gap by
/// increasing start index. The row item of the returned position is always
/// the lower-indexed one.
pub fn find_free(matrix: &RelationMatrix) -> Option<Position> {
    find_free_index(matrix).map(|(row, col)| matrix.position(row, col))
}

fn find_free_index(matrix: &RelationMatrix) -> Option<(usize, usize)> {
    let n = matrix.len();
    for gap in 1..n {
        for start in 0..(n - gap) {
            if matrix.get(start, start + gap).is_unknown() {
                return Some((start, start + gap));
            }
        }
    }
    None
}

/// Next pair to present to the judge, or `None` once every pair is resolved
///
/// Starts from [`find_free`] and tries to improve on it by following chains
/// of strong judgments: from the column item along strong losses, and from
/// the row item along strong wins. A pair reached through a longer chain
/// unlocks more inferred relations once answered strongly. Ties keep the
/// earlier candidate, so the base pair wins unless a chain is strictly
/// deeper, and the loss chain wins a tie against the win chain.
///
/// # Examples
///
/// ```
/// use ranker_domain::{next_comparison, Position, RelationMatrix};
///
/// let matrix = RelationMatrix::new(vec!["a".into(), "b".into()]);
/// assert_eq!(next_comparison(&matrix), Some(Position::new("a", "b")));
/// ```
pub fn next_comparison(matrix: &RelationMatrix) -> Option<Position> {
    let (row, col) = find_free_index(matrix)?;

    let mut best = (row, col);
    let mut best_depth = 0;

    // Items that strongly beat `col`: asking row against them decides row vs col too
    if let Some((target, depth)) = deepest_free(matrix, col, RelationCode::StrongLoss, row) {
        if depth > best_depth {
            best = (row, target);
            best_depth = depth;
        }
    }

    // Items `row` strongly beats: asking them against col decides row vs col too
    if let Some((target, depth)) = deepest_free(matrix, row, RelationCode::StrongWin, col) {
        if depth > best_depth {
            best = (target, col);
        }
    }

    Some(matrix.position(best.0, best.1))
}

/// Follow `edge` relations outward from `start` and return the item reached
/// by the longest chain whose cell against `anchor` is still unknown.
///
/// Depth counts the edges of the longest chain from `start`. Longest chains
/// are computed over the reachable subgraph in topological order, so the
/// cost stays polynomial however many distinct chains exist. Among items of
/// equal depth the lowest index wins.
fn deepest_free(
    matrix: &RelationMatrix,
    start: usize,
    edge: RelationCode,
    anchor: usize,
) -> Option<(usize, usize)> {
    let n = matrix.len();
    let follows = |from: usize, to: usize| from != to && matrix.get(from, to) == edge;

    let mut reachable = vec![false; n];
    reachable[start] = true;
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        for next in 0..n {
            if !reachable[next] && follows(node, next) {
                reachable[next] = true;
                stack.push(next);
            }
        }
    }

    let mut indegree = vec![0usize; n];
    for from in (0..n).filter(|&i| reachable[i]) {
        for to in (0..n).filter(|&j| reachable[j] && j != start) {
            if follows(from, to) {
                indegree[to] += 1;
            }
        }
    }

    // Items on a strong cycle never reach indegree zero and are left out
    let mut depth = vec![None::<usize>; n];
    depth[start] = Some(0);
    let mut ready = vec![start];
    while let Some(node) = ready.pop() {
        let here = depth[node].unwrap_or(0);
        for next in (0..n).filter(|&j| reachable[j] && j != start) {
            if follows(node, next) {
                depth[next] = Some(depth[next].map_or(here + 1, |d| d.max(here + 1)));
                indegree[next] -= 1;
                if indegree[next] == 0 {
                    ready.push(next);
                }
            }
        }
    }

    let mut best: Option<(usize, usize)> = None;
    for (item, reached) in depth.iter().enumerate() {
        let Some(reached) = *reached else { continue };
        if item == start || item == anchor || !matrix.get(anchor, item).is_unknown() {
            continue;
        }
        if best.map_or(true, |(_, d)| reached > d) {
            best = Some((item, reached));
        }
    }

    best
}
