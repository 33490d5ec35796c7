//! Error types for meshlabel.
//!
//! Every fallible operation in the crate returns [`Result`], whose error type
//! is [`MeshError`]. None of these errors are fatal: the caller can reject the
//! input (a malformed mesh, an out-of-range pick) and carry on.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while building mesh structures or editing selections.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references a vertex index past the end of the vertex list.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A selection refers to a face the current mesh does not have.
    #[error("face index {index} is out of range (mesh has {face_count} faces)")]
    FaceIndexOutOfRange {
        /// The rejected face index.
        index: usize,
        /// Number of faces in the mesh.
        face_count: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading a mesh or label file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Error saving a mesh or label file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Create a face-out-of-range error.
    pub fn face_out_of_range(index: usize, face_count: usize) -> Self {
        MeshError::FaceIndexOutOfRange { index, face_count }
    }

    /// Whether this error means the mesh itself is unusable.
    pub fn is_invalid_mesh(&self) -> bool {
        matches!(
            self,
            MeshError::EmptyMesh | MeshError::InvalidVertexIndex { .. }
        )
    }
}
