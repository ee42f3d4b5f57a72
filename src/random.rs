//! Seedable generators for synthetic instances.
//!
//! Every function takes the random source explicitly so that tests and
//! benchmarks can replay an instance from its seed.

use crate::combinatorics::permute_matrix;
use crate::{AdjacencyMatrix, Error, IndexSequence, Result};
use rand::seq::index;
use rand::Rng;

/// An `n`x`n` matrix where each cell is, with probability `non_zero_part`,
/// drawn uniformly from `[min_val, max_val)` and is 0 otherwise.
///
/// Values drawn from the range may themselves be 0 when the range spans it.
pub fn random_matrix<R: Rng + ?Sized>(
    n: usize,
    min_val: i32,
    max_val: i32,
    non_zero_part: f64,
    rng: &mut R,
) -> Result<AdjacencyMatrix> {
    if min_val >= max_val {
        return Err(Error::InvalidValueRange {
            min: min_val,
            max: max_val,
        });
    }
    if !(0.0..=1.0).contains(&non_zero_part) {
        return Err(Error::InvalidDensity(non_zero_part));
    }

    let mut m = AdjacencyMatrix::new(n);
    for u in 0..n {
        for v in 0..n {
            if rng.gen::<f64>() < non_zero_part {
                m.set_edge(u, v, rng.gen_range(min_val..max_val));
            }
        }
    }
    Ok(m)
}

/// `k` distinct values from `[0, n)` in random order.
pub fn random_combination<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<IndexSequence> {
    if k > n {
        return Err(Error::CombinationTooLarge { n, k });
    }
    Ok(IndexSequence::new(index::sample(rng, n, k).into_vec()))
}

/// A uniformly random ordering of `[0, size)`.
pub fn random_permutation<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<IndexSequence> {
    if size == 0 {
        return Err(Error::EmptyPermutation);
    }
    random_combination(size, size, rng)
}

/// Relabel the vertices of `m` by a random permutation `p`, returning the
/// gathered matrix (`result[i][j] = m[p[i]][p[j]]`) and `p`.
pub fn random_permute<R: Rng + ?Sized>(
    m: &AdjacencyMatrix,
    rng: &mut R,
) -> Result<(AdjacencyMatrix, IndexSequence)> {
    let p = random_permutation(m.num_vertices(), rng)?;
    Ok((permute_matrix(m, p.as_slice()), p))
}
