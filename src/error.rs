//! Error types shared by the combinatorics primitives, the builder and the resolvers.

use thiserror::Error;

/// Errors raised synchronously on malformed requests.
///
/// A failed stamping in [`GraphBuilder::put_pattern`](crate::builder::GraphBuilder::put_pattern)
/// and an empty search result are ordinary outcomes and never show up here.
#[derive(Debug, Error)]
pub enum Error {
    /// Asked for `k` elements out of a pool of `n < k`.
    #[error("cannot choose {k} elements out of {n}")]
    CombinationTooLarge { n: usize, k: usize },

    /// Random permutation of zero elements.
    #[error("permutation size must be positive")]
    EmptyPermutation,

    /// Pattern side and assignment length disagree.
    #[error("pattern size {pattern} does not match assignment length {assignment}")]
    PatternSizeMismatch { pattern: usize, assignment: usize },

    /// Pattern has more vertices than the data graph.
    #[error("pattern with {pattern} vertices does not fit into a data graph with {graph} vertices")]
    PatternTooLarge { pattern: usize, graph: usize },

    /// Vertex index outside `[0, size)`.
    #[error("vertex {vertex} is out of range for a graph with {size} vertices")]
    VertexOutOfRange { vertex: usize, size: usize },

    /// The same vertex appears twice in an assignment.
    #[error("vertex {vertex} appears more than once in the assignment")]
    RepeatedVertex { vertex: usize },

    /// A row whose length differs from the number of rows.
    #[error("row {row} has {len} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Empty half-open value range for random matrices.
    #[error("invalid value range [{min}, {max})")]
    InvalidValueRange { min: i32, max: i32 },

    /// Probability outside `[0, 1]`.
    #[error("density {0} is not within [0, 1]")]
    InvalidDensity(f64),

    /// Malformed instance text.
    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// Result type for every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, Error>;
