//! Face adjacency for a fixed mesh.
//!
//! [`MeshTopology`] is built in one pass over the faces of a [`TriMesh`] and
//! answers the two neighbor queries region growing needs:
//!
//! - **edge neighbors**: faces sharing both endpoints of an edge
//! - **vertex neighbors**: faces sharing at least one vertex (this includes
//!   faces that only touch at a corner)
//!
//! The structure holds no mutable state and is never updated incrementally.
//! A different mesh needs a fresh [`MeshTopology::build`].

use std::collections::{HashMap, VecDeque};

use super::index::{FaceId, VertexId};
use super::trimesh::TriMesh;
use crate::error::Result;

/// Unordered vertex pair identifying an edge, stored as (smaller, larger).
pub type EdgeKey = (VertexId, VertexId);

#[inline]
fn edge_key(a: VertexId, b: VertexId) -> EdgeKey {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Edge and vertex adjacency of a triangle mesh.
#[derive(Debug, Clone)]
pub struct MeshTopology {
    /// Vertices of every face, copied so queries don't need the mesh.
    faces: Vec<[VertexId; 3]>,

    /// Edge → incident faces. One face means a boundary edge, more than two
    /// means a non-manifold edge.
    edge_to_faces: HashMap<EdgeKey, Vec<FaceId>>,

    /// Vertex → incident faces, indexed by vertex.
    vertex_to_faces: Vec<Vec<FaceId>>,
}

impl MeshTopology {
    /// Build adjacency maps for a mesh.
    ///
    /// Fails with [`MeshError::EmptyMesh`](crate::error::MeshError::EmptyMesh)
    /// or [`MeshError::InvalidVertexIndex`](crate::error::MeshError::InvalidVertexIndex)
    /// if the mesh is not usable; no partial topology is returned.
    ///
    /// # Example
    /// ```
    /// use meshlabel::mesh::{FaceId, MeshTopology, TriMesh, VertexId};
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
    /// let topo = MeshTopology::build(&mesh).unwrap();
    ///
    /// let across: Vec<_> = topo
    ///     .edge_neighbors(FaceId::new(0), VertexId::new(1), VertexId::new(2))
    ///     .collect();
    /// assert_eq!(across, vec![FaceId::new(1)]);
    /// ```
    pub fn build(mesh: &TriMesh) -> Result<Self> {
        mesh.validate()?;

        let mut edge_to_faces: HashMap<EdgeKey, Vec<FaceId>> = HashMap::new();
        let mut vertex_to_faces: Vec<Vec<FaceId>> = vec![Vec::new(); mesh.num_vertices()];
        let mut faces = Vec::with_capacity(mesh.num_faces());

        for f in mesh.face_ids() {
            let verts = mesh.face_vertices(f);
            faces.push(verts);

            for v in verts {
                push_unique(&mut vertex_to_faces[v.index()], f);
            }

            for (a, b) in triangle_edges(verts) {
                push_unique(edge_to_faces.entry(edge_key(a, b)).or_default(), f);
            }
        }

        Ok(Self {
            faces,
            edge_to_faces,
            vertex_to_faces,
        })
    }

    // ==================== Sizes ====================

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertex_to_faces.len()
    }

    /// Get the number of distinct edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_to_faces.len()
    }

    // ==================== Adjacency Queries ====================

    /// Vertices of a face.
    #[inline]
    pub fn face_vertices(&self, f: FaceId) -> [VertexId; 3] {
        self.faces[f.index()]
    }

    /// Edges of a face, skipping edges whose endpoints coincide.
    pub fn face_edges(&self, f: FaceId) -> impl Iterator<Item = (VertexId, VertexId)> {
        triangle_edges(self.faces[f.index()])
    }

    /// All faces incident to the edge `(a, b)`, in either direction.
    pub fn edge_faces(&self, a: VertexId, b: VertexId) -> &[FaceId] {
        self.edge_to_faces
            .get(&edge_key(a, b))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All faces incident to a vertex.
    #[inline]
    pub fn vertex_faces(&self, v: VertexId) -> &[FaceId] {
        &self.vertex_to_faces[v.index()]
    }

    /// Faces other than `face` sharing the edge `(a, b)`.
    ///
    /// `(a, b)` is expected to be one of `face`'s own edges.
    pub fn edge_neighbors(
        &self,
        face: FaceId,
        a: VertexId,
        b: VertexId,
    ) -> impl Iterator<Item = FaceId> + '_ {
        debug_assert!(
            self.face_edges(face).any(|e| edge_key(e.0, e.1) == edge_key(a, b)),
            "edge ({:?}, {:?}) is not an edge of {:?}",
            a,
            b,
            face
        );
        self.edge_faces(a, b).iter().copied().filter(move |&g| g != face)
    }

    /// Faces other than `face` that also contain `v`.
    pub fn vertex_neighbors(&self, face: FaceId, v: VertexId) -> impl Iterator<Item = FaceId> + '_ {
        self.vertex_faces(v).iter().copied().filter(move |&g| g != face)
    }

    /// Faces sharing an edge with `face`, sorted and without duplicates.
    pub fn face_edge_neighbors(&self, face: FaceId) -> Vec<FaceId> {
        let mut out: Vec<FaceId> = self
            .face_edges(face)
            .flat_map(|(a, b)| self.edge_neighbors(face, a, b))
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Faces sharing at least one vertex with `face`, sorted and without
    /// duplicates.
    pub fn face_vertex_neighbors(&self, face: FaceId) -> Vec<FaceId> {
        let mut out: Vec<FaceId> = self
            .face_vertices(face)
            .into_iter()
            .flat_map(|v| self.vertex_neighbors(face, v))
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    // ==================== Diagnostics ====================

    /// Iterate over boundary edges (edges with exactly one incident face).
    pub fn boundary_edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edge_to_faces
            .iter()
            .filter(|(_, faces)| faces.len() == 1)
            .map(|(&edge, _)| edge)
    }

    /// Count boundary edges.
    pub fn boundary_edge_count(&self) -> usize {
        self.boundary_edges().count()
    }

    /// Count non-manifold edges (more than two incident faces).
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|faces| faces.len() > 2)
            .count()
    }

    /// Every edge has at most two incident faces.
    pub fn is_manifold(&self) -> bool {
        self.edge_to_faces.values().all(|faces| faces.len() <= 2)
    }

    /// Every edge has at least two incident faces.
    pub fn is_watertight(&self) -> bool {
        self.edge_to_faces.values().all(|faces| faces.len() >= 2)
    }

    /// Split the faces into edge-connected components.
    ///
    /// Components are ordered by their lowest face index, and faces within a
    /// component are sorted.
    pub fn connected_components(&self) -> Vec<Vec<FaceId>> {
        let n = self.num_faces();
        let mut seen = vec![false; n];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..n {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            queue.push_back(FaceId::new(start));

            let mut component = Vec::new();
            while let Some(f) = queue.pop_front() {
                component.push(f);
                for g in self.face_edge_neighbors(f) {
                    if !seen[g.index()] {
                        seen[g.index()] = true;
                        queue.push_back(g);
                    }
                }
            }

            component.sort_unstable();
            components.push(component);
        }

        components
    }
}

/// The three directed edges of a triangle, minus any with coincident ends.
fn triangle_edges([a, b, c]: [VertexId; 3]) -> impl Iterator<Item = (VertexId, VertexId)> {
    [(a, b), (b, c), (c, a)].into_iter().filter(|(u, v)| u != v)
}

/// Faces are visited in order, so a repeat can only be the last entry.
#[inline]
fn push_unique(list: &mut Vec<FaceId>, f: FaceId) {
    if list.last() != Some(&f) {
        list.push(f);
    }
}
