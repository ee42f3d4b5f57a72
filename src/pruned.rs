use crate::combinatorics::degrees;
use crate::matching::{cell_matches, MatchMode};
use crate::{AdjacencyMatrix, Assignment, Error, Result};
use std::collections::HashSet;

/// Find every placement of `pattern` in `data` by growing one assignment at a
/// time and abandoning it as soon as the newest position disagrees with the pattern.
///
/// Returns the same set as [`brute_force_search`](crate::brute_force::brute_force_search)
/// for the same mode.
///
/// # Errors
/// [`Error::PatternTooLarge`] if the pattern has more vertices than `data`.
pub fn pruned_search(
    data: &AdjacencyMatrix,
    pattern: &AdjacencyMatrix,
    mode: MatchMode,
) -> Result<HashSet<Assignment>> {
    let n_p = pattern.num_vertices();
    let n_d = data.num_vertices();

    if n_p > n_d {
        return Err(Error::PatternTooLarge {
            pattern: n_p,
            graph: n_d,
        });
    }

    tracing::debug!(n = n_d, m = n_p, ?mode, "pruned search started");

    let mut search = Search {
        data,
        pattern,
        mode,
        data_degrees: degrees(data),
        pattern_degrees: degrees(pattern),
        used: vec![false; n_d],
        current: Vec::with_capacity(n_p),
        found: HashSet::new(),
    };
    search.backtrack();

    tracing::debug!(found = search.found.len(), "pruned search finished");
    Ok(search.found)
}

/// Per-call scratch state.
struct Search<'a> {
    data: &'a AdjacencyMatrix,
    pattern: &'a AdjacencyMatrix,
    mode: MatchMode,
    data_degrees: Vec<usize>,
    pattern_degrees: Vec<usize>,
    /// used[v] is set while data vertex v is part of `current`
    used: Vec<bool>,
    /// current[i] is the data vertex bound to pattern position i
    current: Vec<usize>,
    found: HashSet<Assignment>,
}

impl Search<'_> {
    fn backtrack(&mut self) {
        // Everything before the newest position was checked one level up.
        if !self.newest_position_matches() {
            return;
        }

        let cnt = self.current.len();
        if cnt == self.pattern.num_vertices() {
            tracing::trace!(assignment = ?self.current, "pruned match");
            self.found.insert(Assignment::from_slice(&self.current));
            return;
        }

        // Try binding the next pattern position to each unused data vertex
        for v in 0..self.data.num_vertices() {
            if self.used[v]
                || !self
                    .mode
                    .admits_degree(self.data_degrees[v], self.pattern_degrees[cnt])
            {
                continue;
            }
            self.used[v] = true;
            self.current.push(v);
            self.backtrack();
            self.current.pop();
            self.used[v] = false;
        }
    }

    /// Check the last row and column of the partial submatrix, the diagonal cell included.
    fn newest_position_matches(&self) -> bool {
        let Some((&last_v, placed)) = self.current.split_last() else {
            return true;
        };
        let last = placed.len();

        self.current.iter().enumerate().all(|(i, &v)| {
            cell_matches(self.mode, self.pattern.get_edge(i, last), self.data.get_edge(v, last_v))
                && cell_matches(
                    self.mode,
                    self.pattern.get_edge(last, i),
                    self.data.get_edge(last_v, v),
                )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_injections_of_empty_pattern() {
        // An edgeless pattern in soft mode binds to any injective placement: P(3, 2) = 6
        let pattern = AdjacencyMatrix::new(2);
        let data = AdjacencyMatrix::from_rows(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]])
            .unwrap();
        let found = pruned_search(&data, &pattern, MatchMode::Soft).unwrap();
        assert_eq!(found.len(), 6);
    }

    #[test]
    fn test_labels_must_match_exactly() {
        let data = AdjacencyMatrix::from_rows(vec![
            vec![0, 5, 0],
            vec![0, 0, 6],
            vec![5, 0, 0],
        ])
        .unwrap();
        let pattern = AdjacencyMatrix::from_rows(vec![vec![0, 5], vec![0, 0]]).unwrap();

        for mode in [MatchMode::Strict, MatchMode::Soft] {
            let found = pruned_search(&data, &pattern, mode).unwrap();
            let expected: HashSet<Assignment> =
                [Assignment::from([0, 1]), Assignment::from([2, 0])].into_iter().collect();
            assert_eq!(found, expected, "{:?}", mode);
        }
    }

    #[test]
    fn test_strict_mode_rejects_extra_edges() {
        let data = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let pattern = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
        assert!(pruned_search(&data, &pattern, MatchMode::Strict)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_self_loop_is_checked() {
        let data = AdjacencyMatrix::from_rows(vec![vec![0, 0], vec![0, 3]]).unwrap();
        let pattern = AdjacencyMatrix::from_rows(vec![vec![3]]).unwrap();
        let found = pruned_search(&data, &pattern, MatchMode::Soft).unwrap();
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![Assignment::from([1])]);
    }

    #[test]
    fn test_pattern_larger_than_data_is_an_error() {
        let err = pruned_search(
            &AdjacencyMatrix::new(1),
            &AdjacencyMatrix::new(2),
            MatchMode::Strict,
        )
        .unwrap_err();
        assert!(matches!(err, Error::PatternTooLarge { pattern: 2, graph: 1 }));
    }

    #[test]
    fn test_empty_pattern() {
        let found =
            pruned_search(&AdjacencyMatrix::new(4), &AdjacencyMatrix::new(0), MatchMode::Strict)
                .unwrap();
        assert_eq!(found.len(), 1);
    }
}
