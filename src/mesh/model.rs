//! A mesh bundled with its derived structures.

use tracing::info;

use super::normals::NormalField;
use super::topology::MeshTopology;
use super::trimesh::TriMesh;
use crate::error::Result;

/// A mesh together with its topology and normal field.
///
/// Everything here is computed once in [`SurfaceModel::new`] and never
/// changes afterwards, so a model can be shared read-only (for example behind
/// an `Arc`) by any number of region-growing calls. Loading a different mesh
/// means building a new model.
#[derive(Debug, Clone)]
pub struct SurfaceModel {
    mesh: TriMesh,
    topology: MeshTopology,
    normals: NormalField,
}

impl SurfaceModel {
    /// Build topology and normals for a mesh.
    ///
    /// # Example
    /// ```
    /// use meshlabel::mesh::{SurfaceModel, TriMesh};
    /// use nalgebra::Point3;
    ///
    /// let mesh = TriMesh::new(
    ///     vec![
    ///         Point3::new(0.0, 0.0, 0.0),
    ///         Point3::new(1.0, 0.0, 0.0),
    ///         Point3::new(0.5, 1.0, 0.0),
    ///     ],
    ///     vec![[0, 1, 2]],
    /// );
    /// let model = SurfaceModel::new(mesh).unwrap();
    /// assert_eq!(model.num_faces(), 1);
    /// ```
    pub fn new(mesh: TriMesh) -> Result<Self> {
        let topology = MeshTopology::build(&mesh)?;
        let normals = NormalField::with_topology(&mesh, &topology)?;

        info!(
            vertices = mesh.num_vertices(),
            faces = mesh.num_faces(),
            edges = topology.num_edges(),
            "Built surface model"
        );

        Ok(Self {
            mesh,
            topology,
            normals,
        })
    }

    /// The underlying mesh.
    #[inline]
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    /// Face and vertex adjacency.
    #[inline]
    pub fn topology(&self) -> &MeshTopology {
        &self.topology
    }

    /// Per-face normals.
    #[inline]
    pub fn normals(&self) -> &NormalField {
        &self.normals
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.mesh.num_faces()
    }

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.mesh.num_vertices()
    }

    /// Take the mesh back, dropping the derived structures.
    pub fn into_mesh(self) -> TriMesh {
        self.mesh
    }
}
