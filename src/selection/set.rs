//! Immutable sets of selected faces.

use std::collections::BTreeSet;
use std::iter::FromIterator;

use crate::error::{MeshError, Result};
use crate::mesh::FaceId;

/// A set of face indices.
///
/// Every operation returns a new set and leaves its inputs untouched, so a
/// selection can be snapshotted by cloning. Iteration yields faces in
/// ascending index order.
///
/// # Example
/// ```
/// use meshlabel::selection::SelectionSet;
///
/// let a = SelectionSet::from_indices(10, [1, 2, 3]).unwrap();
/// let b = SelectionSet::from_indices(10, [3, 4]).unwrap();
///
/// assert_eq!(a.union(&b).len(), 4);
/// assert_eq!(a.difference(&b).to_indices(), vec![1, 2]);
/// assert_eq!(a.complement(5).unwrap().to_indices(), vec![0, 4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectionSet {
    faces: BTreeSet<FaceId>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection holding a single face.
    pub fn single(face: FaceId) -> Self {
        Self {
            faces: BTreeSet::from([face]),
        }
    }

    /// Create a selection from raw indices, rejecting any index that is not
    /// below `face_count`.
    pub fn from_indices<I>(face_count: usize, indices: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut faces = BTreeSet::new();
        for i in indices {
            if i >= face_count {
                return Err(MeshError::face_out_of_range(i, face_count));
            }
            faces.insert(FaceId::new(i));
        }
        Ok(Self { faces })
    }

    /// Every face of a mesh with `face_count` faces.
    pub fn all(face_count: usize) -> Self {
        (0..face_count).map(FaceId::new).collect()
    }

    /// Check that every member is below `face_count`.
    pub fn check_bounds(&self, face_count: usize) -> Result<()> {
        match self.faces.last() {
            Some(&max) if max.index() >= face_count => {
                Err(MeshError::face_out_of_range(max.index(), face_count))
            }
            _ => Ok(()),
        }
    }

    /// Get the number of selected faces.
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Check if nothing is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Check whether a face is selected.
    #[inline]
    pub fn contains(&self, face: FaceId) -> bool {
        self.faces.contains(&face)
    }

    /// Iterate over selected faces in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().copied()
    }

    /// Selected faces as raw indices, ascending.
    pub fn to_indices(&self) -> Vec<usize> {
        self.iter().map(FaceId::index).collect()
    }

    /// Faces in either set.
    pub fn union(&self, other: &SelectionSet) -> SelectionSet {
        Self {
            faces: self.faces.union(&other.faces).copied().collect(),
        }
    }

    /// Faces in `self` but not in `other`.
    pub fn difference(&self, other: &SelectionSet) -> SelectionSet {
        Self {
            faces: self.faces.difference(&other.faces).copied().collect(),
        }
    }

    /// Faces in both sets.
    pub fn intersection(&self, other: &SelectionSet) -> SelectionSet {
        Self {
            faces: self.faces.intersection(&other.faces).copied().collect(),
        }
    }

    /// Check whether the sets share at least one face.
    pub fn intersects(&self, other: &SelectionSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|f| large.contains(f))
    }

    /// Faces in `[0, face_count)` that are not selected.
    ///
    /// Fails if the selection holds a face outside that range.
    pub fn complement(&self, face_count: usize) -> Result<SelectionSet> {
        self.check_bounds(face_count)?;
        Ok((0..face_count)
            .map(FaceId::new)
            .filter(|f| !self.faces.contains(f))
            .collect())
    }
}

impl FromIterator<FaceId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = FaceId>>(iter: T) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = FaceId;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, FaceId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter().copied()
    }
}

/// Faces in either set.
pub fn union(a: &SelectionSet, b: &SelectionSet) -> SelectionSet {
    a.union(b)
}

/// Faces in `a` but not in `b`.
pub fn difference(a: &SelectionSet, b: &SelectionSet) -> SelectionSet {
    a.difference(b)
}

/// Faces in `[0, universe_size)` that are not in `a`.
pub fn complement(universe_size: usize, a: &SelectionSet) -> Result<SelectionSet> {
    a.complement(universe_size)
}
