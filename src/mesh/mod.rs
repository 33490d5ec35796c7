//! Core mesh data structures.
//!
//! # Overview
//!
//! - [`TriMesh`]: the immutable face-vertex mesh every loader produces
//! - [`MeshTopology`]: edge and vertex adjacency between faces
//! - [`NormalField`]: consistently oriented unit normal per face
//! - [`SurfaceModel`]: a mesh bundled with its topology and normals
//!
//! Faces and vertices are identified by [`FaceId`] and [`VertexId`], plain
//! indices into flat arrays. Nothing holds a pointer into the mesh, so the
//! derived structures are cheap to share across threads.
//!
//! # Construction
//!
//! ```
//! use meshlabel::mesh::{FaceId, SurfaceModel, TriMesh};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2], [2, 1, 3]];
//!
//! let model = SurfaceModel::new(TriMesh::new(vertices, faces)).unwrap();
//! assert_eq!(model.topology().face_edge_neighbors(FaceId::new(0)), vec![FaceId::new(1)]);
//! ```

mod index;
mod model;
mod normals;
mod topology;
mod trimesh;

pub use index::{FaceId, VertexId};
pub use model::SurfaceModel;
pub use normals::{NormalField, DEGENERATE_SINE_TOLERANCE};
pub use topology::{EdgeKey, MeshTopology};
pub use trimesh::TriMesh;
