//! Consistently oriented per-face normals.
//!
//! A loaded surface may mix clockwise and counter-clockwise triangles. The
//! [`NormalField`] fixes one winding per edge-connected component: the lowest
//! face index of each component keeps its stored winding and the orientation
//! is propagated breadth-first across shared edges, flipping every neighbor
//! that traverses a shared edge in the same direction.
//!
//! Zero-area faces get no normal at all. Angle predicates treat them as never
//! admissible.

use std::collections::VecDeque;

use nalgebra::Vector3;
use tracing::debug;

use super::index::FaceId;
use super::topology::MeshTopology;
use super::trimesh::TriMesh;
use crate::error::Result;

/// A face is degenerate when the sine of the angle between its two edge
/// vectors falls below this value (collinear or zero-length edges).
pub const DEGENERATE_SINE_TOLERANCE: f64 = 1e-12;

/// Unit normal per face with globally consistent orientation.
#[derive(Debug, Clone)]
pub struct NormalField {
    normals: Vec<Option<Vector3<f64>>>,
    flipped: Vec<bool>,
}

impl NormalField {
    /// Compute normals for a mesh, building a temporary topology.
    pub fn compute(mesh: &TriMesh) -> Result<Self> {
        let topology = MeshTopology::build(mesh)?;
        Self::with_topology(mesh, &topology)
    }

    /// Compute normals using an already built topology of the same mesh.
    pub fn with_topology(mesh: &TriMesh, topology: &MeshTopology) -> Result<Self> {
        mesh.validate()?;
        debug_assert_eq!(mesh.num_faces(), topology.num_faces());

        let flipped = propagate_orientation(topology);

        let normals: Vec<Option<Vector3<f64>>> = mesh
            .face_ids()
            .map(|f| {
                let n = geometric_normal(mesh, f)?;
                Some(if flipped[f.index()] { -n } else { n })
            })
            .collect();

        let degenerate = normals.iter().filter(|n| n.is_none()).count();
        let reoriented = flipped.iter().filter(|&&b| b).count();
        debug!(
            faces = normals.len(),
            degenerate, reoriented, "Computed face normals"
        );

        Ok(Self { normals, flipped })
    }

    /// Get the number of faces.
    #[inline]
    pub fn len(&self) -> usize {
        self.normals.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normals.is_empty()
    }

    /// Unit normal of a face, or `None` for a zero-area face.
    #[inline]
    pub fn normal(&self, f: FaceId) -> Option<Vector3<f64>> {
        self.normals[f.index()]
    }

    /// Whether a face has zero area and therefore no normal.
    #[inline]
    pub fn is_degenerate(&self, f: FaceId) -> bool {
        self.normals[f.index()].is_none()
    }

    /// Count zero-area faces.
    pub fn degenerate_count(&self) -> usize {
        self.normals.iter().filter(|n| n.is_none()).count()
    }

    /// Whether the face's stored winding was reversed to agree with its
    /// component.
    #[inline]
    pub fn is_flipped(&self, f: FaceId) -> bool {
        self.flipped[f.index()]
    }

    /// Arithmetic mean of the normals of the given faces.
    ///
    /// The result is not renormalized. Faces without a normal are skipped;
    /// if none of the faces has one, the zero vector is returned.
    pub fn mean_normal<I>(&self, faces: I) -> Vector3<f64>
    where
        I: IntoIterator<Item = FaceId>,
    {
        let mut sum = Vector3::zeros();
        let mut count = 0usize;
        for f in faces {
            if let Some(n) = self.normal(f) {
                sum += n;
                count += 1;
            }
        }

        if count == 0 {
            sum
        } else {
            sum / count as f64
        }
    }
}

/// Normalized cross product following the stored winding.
fn geometric_normal(mesh: &TriMesh, f: FaceId) -> Option<Vector3<f64>> {
    let [p0, p1, p2] = mesh.face_positions(f);
    let e1 = p1 - p0;
    let e2 = p2 - p0;
    let cross = e1.cross(&e2);
    let norm = cross.norm();

    if norm <= DEGENERATE_SINE_TOLERANCE * e1.norm() * e2.norm() {
        None
    } else {
        Some(cross / norm)
    }
}

/// Decide per face whether its winding must be reversed.
fn propagate_orientation(topology: &MeshTopology) -> Vec<bool> {
    let n = topology.num_faces();
    let mut flipped = vec![false; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(FaceId::new(start));

        while let Some(f) = queue.pop_front() {
            let f_flipped = flipped[f.index()];
            for (a, b) in topology.face_edges(f) {
                for g in topology.edge_neighbors(f, a, b) {
                    if visited[g.index()] {
                        continue;
                    }
                    // Neighbors must walk the shared edge the other way round.
                    let same_direction = topology.face_edges(g).any(|e| e == (a, b));
                    flipped[g.index()] = same_direction ^ f_flipped;
                    visited[g.index()] = true;
                    queue.push_back(g);
                }
            }
        }
    }

    flipped
}
