//! Planting patterns into a base matrix.
//!
//! A [`GraphBuilder`] owns a data graph under construction together with a
//! claim grid of the same shape. Every successful [`GraphBuilder::put_pattern`]
//! claims the cells it wrote; later stampings may overlap claimed cells only
//! where they agree on the label.

use crate::matching::validate_assignment;
use crate::{AdjacencyMatrix, Error, Result};

#[derive(Debug, Clone)]
pub struct GraphBuilder {
    matrix: AdjacencyMatrix,
    /// claimed[u * n + v] is set once some stamping has fixed cell (u, v)
    claimed: Vec<bool>,
}

impl GraphBuilder {
    pub fn new(base: AdjacencyMatrix) -> Self {
        let n = base.num_vertices();
        GraphBuilder {
            matrix: base,
            claimed: vec![false; n * n],
        }
    }

    /// Stamp `pattern` so that pattern vertex i lands on `assignment[i]`.
    ///
    /// Returns `Ok(false)` without touching anything if a claimed cell would
    /// receive a different label. Malformed assignments are rejected before
    /// the conflict scan.
    ///
    /// # Errors
    /// [`Error::PatternSizeMismatch`], [`Error::VertexOutOfRange`] or
    /// [`Error::RepeatedVertex`] when the assignment does not describe an
    /// injective placement of the pattern.
    pub fn put_pattern(&mut self, pattern: &AdjacencyMatrix, assignment: &[usize]) -> Result<bool> {
        let m = pattern.num_vertices();
        if m != assignment.len() {
            return Err(Error::PatternSizeMismatch {
                pattern: m,
                assignment: assignment.len(),
            });
        }
        validate_assignment(assignment, self.matrix.num_vertices())?;

        for i in 0..m {
            for j in 0..m {
                let (x, y) = (assignment[i], assignment[j]);
                if self.is_claimed(x, y) && self.matrix.get_edge(x, y) != pattern.get_edge(i, j) {
                    tracing::trace!(
                        cell = ?(x, y),
                        existing = self.matrix.get_edge(x, y),
                        wanted = pattern.get_edge(i, j),
                        "stamping rejected"
                    );
                    return Ok(false);
                }
            }
        }

        for i in 0..m {
            for j in 0..m {
                let (x, y) = (assignment[i], assignment[j]);
                self.matrix.set_edge(x, y, pattern.get_edge(i, j));
                let at = self.claim_index(x, y);
                self.claimed[at] = true;
            }
        }
        Ok(true)
    }

    pub fn is_claimed(&self, u: usize, v: usize) -> bool {
        self.claimed[self.claim_index(u, v)]
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.claimed.iter().filter(|&&c| c).count()
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> AdjacencyMatrix {
        self.matrix
    }

    fn claim_index(&self, u: usize, v: usize) -> usize {
        let n = self.matrix.num_vertices();
        assert!(u < n && v < n, "cell ({}, {}) out of range for {} vertices", u, v, n);
        u * n + v
    }
}
