//! Ranking aggregator - reduces a matrix to a total order

use crate::RelationMatrix;

/// An item together with the number of items it beats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Item identifier
    pub item: String,
    /// Count of win-class relations in the item's row
    pub wins: usize,
}

/// Items sorted by descending win count
///
/// Ties keep the original item order. The result is only meaningful once
/// the matrix is complete and acyclic; neither is checked here.
pub fn standings(matrix: &RelationMatrix) -> Vec<Standing> {
    let n = matrix.len();
    let mut scores: Vec<Standing> = matrix
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| Standing {
            item: item.clone(),
            wins: (0..n).filter(|&j| matrix.get(i, j).is_win()).count(),
        })
        .collect();

    // Vec::sort_by is stable
    scores.sort_by(|a, b| b.wins.cmp(&a.wins));
    scores
}

/// Item identifiers from best to worst
pub fn rank(matrix: &RelationMatrix) -> Vec<String> {
    standings(matrix).into_iter().map(|s| s.item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RelationCode::{self, *};

    fn matrix(keys: &[&str], cells: Vec<RelationCode>) -> RelationMatrix {
        RelationMatrix::from_parts(keys.iter().map(|k| k.to_string()).collect(), cells).unwrap()
    }

    #[test]
    fn test_rank_by_wins() {
        let m = matrix(
            &["a", "b", "c"],
            vec![Unknown, Win, Win, Loss, Unknown, Loss, Loss, Win, Unknown],
        );
        assert_eq!(rank(&m), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_all_win_classes_count() {
        #[rustfmt::skip]
        let m = matrix(
            &["a", "b", "c", "d"],
            vec![
                Unknown, StrongWin, InferredWin, Win,
                StrongLoss, Unknown, Win, Win,
                InferredLoss, Loss, Unknown, StrongWin,
                Loss, Loss, StrongLoss, Unknown,
            ],
        );
        let scores = standings(&m);
        assert_eq!(
            scores,
            vec![
                Standing { item: "a".into(), wins: 3 },
                Standing { item: "b".into(), wins: 2 },
                Standing { item: "c".into(), wins: 1 },
                Standing { item: "d".into(), wins: 0 },
            ]
        );
    }

    #[test]
    fn test_ties_keep_item_order() {
        // An unresolved matrix: every score is zero
        let m = RelationMatrix::new(vec!["z".into(), "y".into(), "x".into()]);
        assert_eq!(rank(&m), vec!["z", "y", "x"]);
    }
}
