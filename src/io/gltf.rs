//! glTF format support.
//!
//! Every triangle primitive of every mesh in the document is merged into one
//! [`TriMesh`]. Node transforms are not applied. Points and lines are skipped.

use std::path::Path;

use ::gltf::mesh::Mode;
use nalgebra::Point3;
use tracing::debug;

use super::load_error;
use crate::error::Result;
use crate::mesh::TriMesh;

/// Load a mesh from a glTF or GLB file.
///
/// # Example
///
/// ```no_run
/// use meshlabel::io::gltf;
///
/// let mesh = gltf::load("model.glb").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriMesh> {
    let path = path.as_ref();

    let (document, buffers, _images) =
        ::gltf::import(path).map_err(|e| load_error(path, e.to_string()))?;

    let mut vertices: Vec<Point3<f64>> = Vec::new();
    let mut faces: Vec<[usize; 3]> = Vec::new();
    let mut primitives = 0usize;

    for mesh in document.meshes() {
        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let offset = vertices.len();
            vertices.extend(positions.map(|p| Point3::new(p[0] as f64, p[1] as f64, p[2] as f64)));
            let count = vertices.len() - offset;

            // Unindexed primitives use their positions in order
            let indices: Vec<usize> = match reader.read_indices() {
                Some(indices) => indices.into_u32().map(|i| i as usize + offset).collect(),
                None => (offset..offset + count).collect(),
            };

            faces.extend(triangulate(primitive.mode(), &indices));
            primitives += 1;
        }
    }

    if faces.is_empty() {
        return Err(load_error(path, "glTF file contains no triangle meshes"));
    }

    debug!(
        primitives,
        vertices = vertices.len(),
        faces = faces.len(),
        "Merged glTF primitives"
    );

    let mesh = TriMesh::new(vertices, faces);
    mesh.validate()?;
    Ok(mesh)
}

/// Turn a primitive's index stream into triangles.
///
/// Odd strip triangles are flipped so the whole strip keeps one winding.
fn triangulate(mode: Mode, indices: &[usize]) -> Vec<[usize; 3]> {
    match mode {
        Mode::Triangles => indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect(),
        Mode::TriangleStrip => indices
            .windows(3)
            .enumerate()
            .map(|(i, w)| {
                if i % 2 == 0 {
                    [w[0], w[1], w[2]]
                } else {
                    [w[0], w[2], w[1]]
                }
            })
            .collect(),
        Mode::TriangleFan => match indices.split_first() {
            Some((&hub, rest)) => rest.windows(2).map(|w| [hub, w[0], w[1]]).collect(),
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}
