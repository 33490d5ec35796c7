//! # meshlabel
//!
//! Face selection for labeling triangle meshes.
//!
//! A user picks one or more faces; meshlabel grows that pick into a region
//! using topological and geometric criteria and folds the region into a
//! persistent selection, with undo. The selection is exported as 0/1 labels
//! per face and per vertex.
//!
//! ## Features
//!
//! - **Adjacency**: edge and vertex neighborhoods over an indexed triangle mesh
//! - **Consistent normals**: per-face unit normals with winding unified per
//!   connected component
//! - **Region growing**: hop-limited, angle-limited, combined and
//!   selection-constrained expansion
//! - **Curvature**: discrete Gaussian curvature per vertex
//! - **Selection editing**: union, difference, complement and bounded undo
//! - **File formats**: STL, PLY, glTF in; labeled PLY out
//!
//! ## Quick Start
//!
//! ```
//! use meshlabel::prelude::*;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//! let faces = vec![
//!     [0, 2, 1], // bottom
//!     [0, 1, 3], // front
//!     [1, 2, 3], // right
//!     [2, 0, 3], // left
//! ];
//! let model = SurfaceModel::new(TriMesh::new(vertices, faces)).unwrap();
//!
//! let mut session = SelectionSession::new();
//! let seed = SelectionSet::single(FaceId::new(0));
//! let method = ExpandMethod::Neighbor { hops: 1 };
//! session.apply(&model, &seed, &method, SelectionMode::Union).unwrap();
//! assert_eq!(session.selection().len(), 4);
//!
//! let labels = session.labels(&model).unwrap();
//! assert_eq!(labels.faces, vec![1, 1, 1, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;
pub mod selection;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use meshlabel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::curvature::gaussian_curvature;
    pub use crate::algo::expand::{
        angle_expand, multi_threshold_expand, neighbor_expand, on_selected_expand, ExpandMethod,
    };
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{FaceId, MeshTopology, NormalField, SurfaceModel, TriMesh, VertexId};
    pub use crate::selection::{
        SelectionHistory, SelectionLabels, SelectionMode, SelectionSession, SelectionSet,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
