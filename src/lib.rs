use itertools::Itertools;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Square matrix of integer edge labels, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Number of vertices
    n: usize,
    /// cells[u * n + v] = label of the edge from u to v, 0 for no edge
    cells: Vec<i32>,
}

impl AdjacencyMatrix {
    pub fn new(n: usize) -> Self {
        AdjacencyMatrix {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Build from nested rows, rejecting anything that is not square.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(Error::RaggedMatrix {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            cells.extend(values);
        }
        Ok(AdjacencyMatrix { n, cells })
    }

    pub fn num_vertices(&self) -> usize {
        self.n
    }

    pub fn get_edge(&self, u: usize, v: usize) -> i32 {
        self.cells[self.offset(u, v)]
    }

    pub fn set_edge(&mut self, u: usize, v: usize, label: i32) {
        let at = self.offset(u, v);
        self.cells[at] = label;
    }

    pub fn row(&self, u: usize) -> &[i32] {
        assert!(u < self.n, "row {} out of range for {} vertices", u, self.n);
        &self.cells[u * self.n..(u + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // chunks_exact panics on 0, and an empty matrix has no rows anyway
        self.cells.chunks_exact(self.n.max(1))
    }

    /// Number of non-zero cells.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Position of cell (u, v) in `cells`. Both axes are checked: a column
    /// past the end must not spill into the next row.
    fn offset(&self, u: usize, v: usize) -> usize {
        assert!(
            u < self.n && v < self.n,
            "cell ({}, {}) out of range for {} vertices",
            u,
            v,
            self.n
        );
        u * self.n + v
    }
}

impl Index<(usize, usize)> for AdjacencyMatrix {
    type Output = i32;

    fn index(&self, (u, v): (usize, usize)) -> &i32 {
        &self.cells[self.offset(u, v)]
    }
}

impl IndexMut<(usize, usize)> for AdjacencyMatrix {
    fn index_mut(&mut self, (u, v): (usize, usize)) -> &mut i32 {
        let at = self.offset(u, v);
        &mut self.cells[at]
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().map(|c| format!("{:>4}", c)).join(" "))?;
        }
        Ok(())
    }
}

/// Pattern position i is bound to data-graph vertex `assignment[i]`
pub type Assignment = IndexSequence;

// Module declarations
pub mod brute_force;
pub mod builder;
pub mod combinatorics;
pub mod error;
pub mod matching;
pub mod parser;
pub mod pruned;
pub mod random;
pub mod sequence;
pub mod utils;

pub use error::{Error, Result};
pub use matching::MatchMode;
pub use sequence::IndexSequence;
