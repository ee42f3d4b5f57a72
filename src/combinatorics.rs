//! Enumeration and index-shuffling primitives shared by both resolvers.
//!
//! The enumerators hand each sequence to a visitor as a borrowed slice. The
//! slice is scratch space reused by the next visit, so a visitor that keeps a
//! sequence must copy it (e.g. into an [`IndexSequence`](crate::IndexSequence)).

use crate::{AdjacencyMatrix, Error, Result};

/// Visit every strictly increasing `k`-element sequence over `[0, n)` in
/// lexicographic order.
pub fn combinations<F>(n: usize, k: usize, mut visit: F) -> Result<()>
where
    F: FnMut(&[usize]),
{
    if k > n {
        return Err(Error::CombinationTooLarge { n, k });
    }
    let mut combination = vec![0; k];
    combine_step(&mut combination, 0, n, 0, &mut visit);
    Ok(())
}

/// Either take `floor` for position `pos` and move on, or skip `floor`.
fn combine_step<F>(combination: &mut [usize], floor: usize, n: usize, pos: usize, visit: &mut F)
where
    F: FnMut(&[usize]),
{
    if pos == combination.len() {
        visit(combination);
    } else if floor < n {
        combination[pos] = floor;
        combine_step(combination, floor + 1, n, pos + 1, visit);
        combine_step(combination, floor + 1, n, pos, visit);
    }
}

/// Visit all `size!` orderings of `[0, size)`. Order is unspecified.
pub fn permutations<F>(size: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    let mut p: Vec<usize> = (0..size).collect();
    permute_step(&mut p, 0, size, &mut visit);
}

/// Visit every ordered selection of `k` distinct values from `[0, n)`,
/// i.e. every injective map from `k` positions into `n` vertices.
pub fn arrangements<F>(n: usize, k: usize, mut visit: F) -> Result<()>
where
    F: FnMut(&[usize]),
{
    if k > n {
        return Err(Error::CombinationTooLarge { n, k });
    }
    let mut p: Vec<usize> = (0..n).collect();
    permute_step(&mut p, 0, k, &mut visit);
    Ok(())
}

/// `p[..pos]` is fixed and `p[pos..]` holds the unused values; swap each of
/// them into `pos` in turn and stop once `depth` positions are fixed.
fn permute_step<F>(p: &mut [usize], pos: usize, depth: usize, visit: &mut F)
where
    F: FnMut(&[usize]),
{
    if pos >= depth {
        visit(&p[..depth]);
        return;
    }
    for i in pos..p.len() {
        p.swap(pos, i);
        permute_step(p, pos + 1, depth, visit);
        p.swap(pos, i);
    }
}

/// Scatter: `result[p[i]] = values[i]`.
pub fn apply_permutation(values: &[usize], p: &[usize]) -> Vec<usize> {
    debug_assert_eq!(values.len(), p.len());
    let mut result = vec![0; values.len()];
    for (&value, &target) in values.iter().zip(p) {
        result[target] = value;
    }
    result
}

/// Gather on both axes: `result[i][j] = source[p[i]][p[j]]`.
///
/// Note the direction is the opposite of [`apply_permutation`].
pub fn permute_matrix(source: &AdjacencyMatrix, p: &[usize]) -> AdjacencyMatrix {
    sub_matrix(source, p)
}

/// `r[p[i]] = i`.
pub fn reverse_permutation(p: &[usize]) -> Vec<usize> {
    let mut reverse = vec![0; p.len()];
    for (i, &target) in p.iter().enumerate() {
        reverse[target] = i;
    }
    reverse
}

/// Non-zero outgoing plus non-zero incoming entries per vertex.
/// A non-zero self-loop counts twice.
pub fn degrees(matrix: &AdjacencyMatrix) -> Vec<usize> {
    let n = matrix.num_vertices();
    let mut powers = vec![0; n];
    for u in 0..n {
        for v in 0..n {
            if matrix.get_edge(u, v) != 0 {
                powers[u] += 1;
                powers[v] += 1;
            }
        }
    }
    powers
}

/// Induced submatrix: `result[i][j] = source[indices[i]][indices[j]]`.
pub fn sub_matrix(source: &AdjacencyMatrix, indices: &[usize]) -> AdjacencyMatrix {
    let mut result = AdjacencyMatrix::new(indices.len());
    for (i, &u) in indices.iter().enumerate() {
        for (j, &v) in indices.iter().enumerate() {
            result.set_edge(i, j, source.get_edge(u, v));
        }
    }
    result
}
