use crate::{AdjacencyMatrix, Error, Result};

/// How pattern cells are compared against data-graph cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Every cell must be equal, zeros included.
    Strict,
    /// Zero pattern cells are wildcards; non-zero cells must be equal.
    Soft,
}

impl MatchMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            MatchMode::Strict
        } else {
            MatchMode::Soft
        }
    }

    pub fn is_strict(self) -> bool {
        self == MatchMode::Strict
    }

    /// Degree pre-filter. Only strict mode prunes by degree.
    pub fn admits_degree(self, data_degree: usize, pattern_degree: usize) -> bool {
        !self.is_strict() || data_degree >= pattern_degree
    }
}

/// The pairwise matching rule both resolvers share.
#[inline]
pub fn cell_matches(mode: MatchMode, expected: i32, actual: i32) -> bool {
    match mode {
        MatchMode::Strict => expected == actual,
        MatchMode::Soft => expected == 0 || expected == actual,
    }
}

/// Check that `assignment` picks distinct vertices of a graph with `size`
/// vertices.
///
/// # Errors
/// [`Error::VertexOutOfRange`] or [`Error::RepeatedVertex`] for the first
/// offending entry.
pub fn validate_assignment(assignment: &[usize], size: usize) -> Result<()> {
    let mut seen = vec![false; size];
    for &vertex in assignment {
        if vertex >= size {
            return Err(Error::VertexOutOfRange { vertex, size });
        }
        if seen[vertex] {
            return Err(Error::RepeatedVertex { vertex });
        }
        seen[vertex] = true;
    }
    Ok(())
}

/// Every pattern cell (i, j) whose mapped data-graph cell
/// `(assignment[i], assignment[j])` breaks the matching rule.
///
/// # Errors
/// [`Error::PatternSizeMismatch`] when the assignment does not cover the
/// pattern, and the [`validate_assignment`] errors otherwise.
pub fn mismatches(
    data: &AdjacencyMatrix,
    pattern: &AdjacencyMatrix,
    assignment: &[usize],
    mode: MatchMode,
) -> Result<Vec<(usize, usize)>> {
    let m = pattern.num_vertices();
    if assignment.len() != m {
        return Err(Error::PatternSizeMismatch {
            pattern: m,
            assignment: assignment.len(),
        });
    }
    validate_assignment(assignment, data.num_vertices())?;

    let mut cells = Vec::new();
    for (u, &x) in assignment.iter().enumerate() {
        for (v, &y) in assignment.iter().enumerate() {
            if !cell_matches(mode, pattern.get_edge(u, v), data.get_edge(x, y)) {
                cells.push((u, v));
            }
        }
    }
    Ok(cells)
}

/// Whether `assignment` is a well-formed embedding of `pattern` into `data`:
/// one in-range, distinct vertex per pattern position, and no mismatched cell.
pub fn is_embedding(
    data: &AdjacencyMatrix,
    pattern: &AdjacencyMatrix,
    assignment: &[usize],
    mode: MatchMode,
) -> bool {
    matches!(mismatches(data, pattern, assignment, mode), Ok(cells) if cells.is_empty())
}
