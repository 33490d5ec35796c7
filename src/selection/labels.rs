//! Per-face and per-vertex label arrays for export.

use crate::error::Result;
use crate::mesh::{FaceId, TriMesh};

use super::set::SelectionSet;

/// Binary labels derived from a selection.
///
/// `faces[i]` is `1` when face `i` is selected. `vertices[v]` is `1` when
/// vertex `v` belongs to at least one selected face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionLabels {
    /// One label per face.
    pub faces: Vec<u8>,
    /// One label per vertex.
    pub vertices: Vec<u8>,
}

impl SelectionLabels {
    /// Compute labels for a selection on a mesh.
    ///
    /// Fails if the mesh is invalid or the selection refers to a face the
    /// mesh does not have.
    ///
    /// # Example
    /// ```
    /// use meshlabel::mesh::TriMesh;
    /// use meshlabel::selection::{SelectionLabels, SelectionSet};
    /// use nalgebra::Point3;
    ///
    /// let mesh = TriMesh::new(
    ///     vec![
    ///         Point3::new(0.0, 0.0, 0.0),
    ///         Point3::new(1.0, 0.0, 0.0),
    ///         Point3::new(0.0, 1.0, 0.0),
    ///         Point3::new(1.0, 1.0, 0.0),
    ///     ],
    ///     vec![[0, 1, 2], [2, 1, 3]],
    /// );
    /// let selection = SelectionSet::from_indices(2, [1]).unwrap();
    /// let labels = SelectionLabels::from_selection(&mesh, &selection).unwrap();
    ///
    /// assert_eq!(labels.faces, vec![0, 1]);
    /// assert_eq!(labels.vertices, vec![0, 1, 1, 1]);
    /// ```
    pub fn from_selection(mesh: &TriMesh, selection: &SelectionSet) -> Result<Self> {
        mesh.validate()?;
        selection.check_bounds(mesh.num_faces())?;

        let mut faces = vec![0u8; mesh.num_faces()];
        let mut vertices = vec![0u8; mesh.num_vertices()];

        for f in selection.iter() {
            faces[f.index()] = 1;
            for v in mesh.face_vertices(f) {
                vertices[v.index()] = 1;
            }
        }

        Ok(Self { faces, vertices })
    }

    /// Number of faces labeled `1`.
    pub fn selected_face_count(&self) -> usize {
        self.faces.iter().filter(|&&l| l != 0).count()
    }

    /// Number of vertices labeled `1`.
    pub fn selected_vertex_count(&self) -> usize {
        self.vertices.iter().filter(|&&l| l != 0).count()
    }

    /// Rebuild the face selection from the per-face labels.
    pub fn to_selection(&self) -> SelectionSet {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, &l)| l != 0)
            .map(|(i, _)| FaceId::new(i))
            .collect()
    }
}
