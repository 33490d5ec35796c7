//! STL (stereolithography) format support.
//!
//! STL stores three corner positions per triangle. Corners with exactly the
//! same position are merged into one vertex so that neighboring triangles
//! share edges. Triangle order is preserved, so face `i` of the loaded mesh is
//! triangle `i` of the file, including zero-area triangles.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nalgebra::Point3;
use tracing::debug;

use super::load_error;
use crate::error::Result;
use crate::mesh::TriMesh;

/// Load a mesh from an STL file.
///
/// Automatically detects binary vs ASCII format.
///
/// # Example
///
/// ```no_run
/// use meshlabel::io::stl;
///
/// let mesh = stl::load("model.stl").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriMesh> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);

    let stl = stl_io::read_stl(&mut reader).map_err(|e| load_error(path, e.to_string()))?;

    let mut welder = Welder::default();
    let mut faces: Vec<[usize; 3]> = Vec::with_capacity(stl.faces.len());

    for tri in &stl.faces {
        let mut face = [0usize; 3];
        for (slot, &corner) in face.iter_mut().zip(tri.vertices.iter()) {
            let v = stl
                .vertices
                .get(corner)
                .ok_or_else(|| load_error(path, format!("corner index {} out of range", corner)))?;
            *slot = welder.insert([v[0], v[1], v[2]]);
        }
        faces.push(face);
    }

    if faces.is_empty() {
        return Err(load_error(path, "STL file contains no triangles"));
    }

    debug!(
        triangles = faces.len(),
        corners = faces.len() * 3,
        vertices = welder.vertices.len(),
        "Merged STL corners"
    );

    let mesh = TriMesh::new(welder.vertices, faces);
    mesh.validate()?;
    Ok(mesh)
}

/// Merges corners by exact position.
#[derive(Default)]
struct Welder {
    index: HashMap<[u32; 3], usize>,
    vertices: Vec<Point3<f64>>,
}

impl Welder {
    fn insert(&mut self, p: [f32; 3]) -> usize {
        // `+ 0.0` folds -0.0 onto 0.0 so both hash alike
        let key = [
            (p[0] + 0.0).to_bits(),
            (p[1] + 0.0).to_bits(),
            (p[2] + 0.0).to_bits(),
        ];
        let vertices = &mut self.vertices;
        *self.index.entry(key).or_insert_with(|| {
            vertices.push(Point3::new(p[0] as f64, p[1] as f64, p[2] as f64));
            vertices.len() - 1
        })
    }
}
