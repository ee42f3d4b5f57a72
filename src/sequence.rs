use itertools::Itertools;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// Immutable fixed-length sequence of vertex indices.
///
/// The same type carries raw combinations, raw permutations and final
/// assignments; which one it is depends only on where it came from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexSequence {
    items: Box<[usize]>,
}

impl IndexSequence {
    pub fn new(items: Vec<usize>) -> Self {
        IndexSequence {
            items: items.into_boxed_slice(),
        }
    }

    pub fn from_slice(items: &[usize]) -> Self {
        IndexSequence {
            items: items.into(),
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.items.into_vec()
    }
}

/// Polynomial accumulator with base 31, seeded with 1.
impl Hash for IndexSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let acc = self
            .items
            .iter()
            .fold(1u64, |acc, &x| acc.wrapping_mul(31).wrapping_add(x as u64));
        state.write_u64(acc);
    }
}

impl From<Vec<usize>> for IndexSequence {
    fn from(items: Vec<usize>) -> Self {
        IndexSequence::new(items)
    }
}

impl From<&[usize]> for IndexSequence {
    fn from(items: &[usize]) -> Self {
        IndexSequence::from_slice(items)
    }
}

impl<const N: usize> From<[usize; N]> for IndexSequence {
    fn from(items: [usize; N]) -> Self {
        IndexSequence::from_slice(&items)
    }
}

impl Index<usize> for IndexSequence {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.items[i]
    }
}

impl<'a> IntoIterator for &'a IndexSequence {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for IndexSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}
