//! Reference resolver: every vertex subset, every ordering of it.
//!
//! Costs `C(n, m) * m!` matrix comparisons. Use it as an oracle on small inputs.

use crate::combinatorics::{
    apply_permutation, combinations, degrees, permutations, reverse_permutation, sub_matrix,
};
use crate::matching::{cell_matches, MatchMode};
use crate::utils::search_space;
use crate::{AdjacencyMatrix, Assignment, Error, IndexSequence, Result};
use std::collections::HashSet;

/// Find every placement of `pattern` in `data` by exhaustive enumeration.
///
/// # Errors
/// [`Error::PatternTooLarge`] if the pattern has more vertices than `data`.
pub fn brute_force_search(
    data: &AdjacencyMatrix,
    pattern: &AdjacencyMatrix,
    mode: MatchMode,
) -> Result<HashSet<Assignment>> {
    let n = data.num_vertices();
    let m = pattern.num_vertices();
    if m > n {
        return Err(Error::PatternTooLarge {
            pattern: m,
            graph: n,
        });
    }

    tracing::debug!(
        n,
        m,
        ?mode,
        candidates = search_space(n, m),
        "brute force search started"
    );

    let mut found = HashSet::new();
    combinations(n, m, |c| {
        let sub = sub_matrix(data, c);
        for p in isomorphic_permutations(&sub, pattern, mode) {
            let assignment = apply_permutation(c, &reverse_permutation(p.as_slice()));
            tracing::trace!(?assignment, "brute force match");
            found.insert(Assignment::new(assignment));
        }
    })?;

    tracing::debug!(found = found.len(), "brute force search finished");
    Ok(found)
}

/// All orderings `p` of `source`'s vertices with
/// `target[i][j]` matching `source[p[i]][p[j]]` for every cell.
///
/// Both matrices must have the same side.
pub fn isomorphic_permutations(
    source: &AdjacencyMatrix,
    target: &AdjacencyMatrix,
    mode: MatchMode,
) -> HashSet<IndexSequence> {
    debug_assert_eq!(source.num_vertices(), target.num_vertices());
    let source_degrees = degrees(source);
    let target_degrees = degrees(target);

    let mut ps = HashSet::new();
    permutations(target.num_vertices(), |p| {
        if permuted_equals(p, source, target, &source_degrees, &target_degrees, mode) {
            ps.insert(IndexSequence::from_slice(p));
        }
    });
    ps
}

fn permuted_equals(
    p: &[usize],
    source: &AdjacencyMatrix,
    target: &AdjacencyMatrix,
    source_degrees: &[usize],
    target_degrees: &[usize],
    mode: MatchMode,
) -> bool {
    let sz = p.len();
    if (0..sz).any(|i| !mode.admits_degree(source_degrees[p[i]], target_degrees[i])) {
        return false;
    }

    for i in 0..sz {
        for j in 0..sz {
            if !cell_matches(mode, target.get_edge(i, j), source.get_edge(p[i], p[j])) {
                return false;
            }
        }
    }
    true
}
