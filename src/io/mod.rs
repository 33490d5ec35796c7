//! Mesh file I/O.
//!
//! Meshes are read into a [`TriMesh`]; selections are written back out as a
//! labeled PLY next to the geometry they refer to.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | STL | `.stl` | ✓ | ✗ | Binary and ASCII, coincident corners merged |
//! | PLY | `.ply` | ✓ | ✓ | Polygons fan-triangulated; saves with labels |
//! | glTF | `.gltf`, `.glb` | ✓ | ✗ | All triangle primitives merged |
//!
//! # Usage
//!
//! ```no_run
//! use meshlabel::io;
//! use meshlabel::mesh::SurfaceModel;
//! use meshlabel::selection::SelectionSession;
//!
//! let mesh = io::load("tooth.stl").unwrap();
//! let model = SurfaceModel::new(mesh).unwrap();
//! let session = SelectionSession::new();
//!
//! let labels = session.labels(&model).unwrap();
//! io::ply::save_labeled(model.mesh(), &labels, "tooth_labels.ply").unwrap();
//! ```

pub mod gltf;
pub mod ply;
pub mod stl;

use std::path::Path;

use tracing::info;

use crate::error::{MeshError, Result};
use crate::mesh::TriMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// STL (stereolithography) format.
    Stl,
    /// PLY (Stanford polygon) format.
    Ply,
    /// glTF format.
    Gltf,
    /// glTF binary format.
    Glb,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "stl" => Some(Format::Stl),
            "ply" => Some(Format::Ply),
            "gltf" => Some(Format::Gltf),
            "glb" => Some(Format::Glb),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }

    /// Detect format from file path, failing with
    /// [`MeshError::UnsupportedFormat`] for unknown extensions.
    pub fn require<P: AsRef<Path>>(path: P) -> Result<Format> {
        let path = path.as_ref();
        Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
            extension: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("(none)")
                .to_string(),
        })
    }
}

/// Load a mesh from a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriMesh> {
    let path = path.as_ref();
    let format = Format::require(path)?;

    let mesh = match format {
        Format::Stl => stl::load(path)?,
        Format::Ply => ply::load(path)?,
        Format::Gltf | Format::Glb => gltf::load(path)?,
    };

    info!(
        path = %path.display(),
        ?format,
        vertices = mesh.num_vertices(),
        faces = mesh.num_faces(),
        "Loaded mesh"
    );
    Ok(mesh)
}

/// Wrap a message as a [`MeshError::LoadError`] for `path`.
pub(crate) fn load_error(path: &Path, message: impl Into<String>) -> MeshError {
    MeshError::LoadError {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

/// Wrap a message as a [`MeshError::SaveError`] for `path`.
pub(crate) fn save_error(path: &Path, message: impl Into<String>) -> MeshError {
    MeshError::SaveError {
        path: path.to_path_buf(),
        message: message.into(),
    }
}
