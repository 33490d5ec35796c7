//! PLY (Stanford polygon) format support.
//!
//! Loading accepts any PLY with `x`/`y`/`z` vertex properties and a
//! `vertex_indices` (or `vertex_index`) face list; polygons are fan
//! triangulated. Saving writes ASCII PLY carrying a `label` property on both
//! vertices and faces, which [`load_labels`] reads back.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Ply, Property};
use tracing::{debug, warn};

use super::{load_error, save_error};
use crate::error::Result;
use crate::mesh::TriMesh;
use crate::selection::SelectionLabels;

/// Load a mesh from a PLY file.
///
/// Faces with fewer than three indices are skipped. A face naming a vertex
/// the file does not define fails with
/// [`MeshError::InvalidVertexIndex`](crate::error::MeshError::InvalidVertexIndex).
///
/// # Example
///
/// ```no_run
/// use meshlabel::io::ply;
///
/// let mesh = ply::load("model.ply").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriMesh> {
    let path = path.as_ref();
    let ply = read(path)?;

    let vertex_element = ply
        .payload
        .get("vertex")
        .ok_or_else(|| load_error(path, "PLY file has no vertex element"))?;

    let mut vertices: Vec<Point3<f64>> = Vec::with_capacity(vertex_element.len());
    for vertex in vertex_element {
        let coord = |name: &str| {
            get_float_property(vertex, name)
                .ok_or_else(|| load_error(path, format!("vertex missing {} coordinate", name)))
        };
        vertices.push(Point3::new(coord("x")?, coord("y")?, coord("z")?));
    }

    let face_element = ply
        .payload
        .get("face")
        .ok_or_else(|| load_error(path, "PLY file has no face element"))?;

    let mut faces: Vec<[usize; 3]> = Vec::with_capacity(face_element.len());
    let mut skipped = 0usize;
    for face in face_element {
        let indices = face_indices(face)
            .ok_or_else(|| load_error(path, "face missing vertex_indices property"))?;

        if indices.len() < 3 {
            skipped += 1;
            continue;
        }
        for i in 1..indices.len() - 1 {
            faces.push([indices[0], indices[i], indices[i + 1]]);
        }
    }

    if skipped > 0 {
        warn!(skipped, path = %path.display(), "Skipped PLY faces with fewer than 3 vertices");
    }
    if faces.is_empty() {
        return Err(load_error(path, "PLY file contains no faces"));
    }

    let mesh = TriMesh::new(vertices, faces);
    mesh.validate()?;
    Ok(mesh)
}

/// Read the per-face `label` property of a PLY file.
///
/// Any nonzero label counts as selected and is returned as `1`. Polygons are
/// not split here, so the result lines up with the faces of a file written by
/// [`save_labeled`] (which only writes triangles).
pub fn load_labels<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let ply = read(path)?;

    let face_element = ply
        .payload
        .get("face")
        .ok_or_else(|| load_error(path, "PLY file has no face element"))?;

    let labels = face_element
        .iter()
        .enumerate()
        .map(|(i, face)| {
            get_float_property(face, "label")
                .map(|l| u8::from(l != 0.0))
                .ok_or_else(|| load_error(path, format!("face {} has no label property", i)))
        })
        .collect::<Result<Vec<u8>>>()?;

    debug!(
        faces = labels.len(),
        selected = labels.iter().filter(|&&l| l != 0).count(),
        "Read face labels"
    );
    Ok(labels)
}

/// Save a mesh with per-vertex and per-face labels as ASCII PLY.
///
/// Vertices are written as `x y z label`, faces as `3 a b c label`.
///
/// # Example
///
/// ```no_run
/// use meshlabel::io::ply;
/// use meshlabel::selection::{SelectionLabels, SelectionSet};
///
/// let mesh = ply::load("model.ply").unwrap();
/// let selection = SelectionSet::from_indices(mesh.num_faces(), [0, 1]).unwrap();
/// let labels = SelectionLabels::from_selection(&mesh, &selection).unwrap();
/// ply::save_labeled(&mesh, &labels, "labeled.ply").unwrap();
/// ```
pub fn save_labeled<P: AsRef<Path>>(
    mesh: &TriMesh,
    labels: &SelectionLabels,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    if labels.vertices.len() != mesh.num_vertices() || labels.faces.len() != mesh.num_faces() {
        return Err(save_error(
            path,
            format!(
                "labels cover {} vertices and {} faces, mesh has {} and {}",
                labels.vertices.len(),
                labels.faces.len(),
                mesh.num_vertices(),
                mesh.num_faces()
            ),
        ));
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment Generated by meshlabel")?;
    writeln!(writer, "element vertex {}", mesh.num_vertices())?;
    writeln!(writer, "property double x")?;
    writeln!(writer, "property double y")?;
    writeln!(writer, "property double z")?;
    writeln!(writer, "property uchar label")?;
    writeln!(writer, "element face {}", mesh.num_faces())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "property uchar label")?;
    writeln!(writer, "end_header")?;

    for (v, label) in mesh.vertices().iter().zip(&labels.vertices) {
        writeln!(writer, "{} {} {} {}", v.x, v.y, v.z, label)?;
    }
    for (f, label) in mesh.faces().iter().zip(&labels.faces) {
        writeln!(writer, "3 {} {} {} {}", f[0], f[1], f[2], label)?;
    }

    writer.flush()?;

    debug!(
        path = %path.display(),
        selected_faces = labels.selected_face_count(),
        "Wrote labeled PLY"
    );
    Ok(())
}

fn read(path: &Path) -> Result<Ply<DefaultElement>> {
    let mut reader = BufReader::new(File::open(path)?);
    let parser = Parser::<DefaultElement>::new();
    parser
        .read_ply(&mut reader)
        .map_err(|e| load_error(path, e.to_string()))
}

fn face_indices(face: &DefaultElement) -> Option<Vec<usize>> {
    get_list_property(face, "vertex_indices").or_else(|| get_list_property(face, "vertex_index"))
}

fn get_float_property(element: &DefaultElement, name: &str) -> Option<f64> {
    match element.get(name)? {
        Property::Float(v) => Some(*v as f64),
        Property::Double(v) => Some(*v),
        Property::Int(v) => Some(*v as f64),
        Property::UInt(v) => Some(*v as f64),
        Property::Short(v) => Some(*v as f64),
        Property::UShort(v) => Some(*v as f64),
        Property::Char(v) => Some(*v as f64),
        Property::UChar(v) => Some(*v as f64),
        _ => None,
    }
}

fn get_list_property(element: &DefaultElement, name: &str) -> Option<Vec<usize>> {
    match element.get(name)? {
        Property::ListInt(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUInt(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListShort(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUShort(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListChar(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUChar(v) => Some(v.iter().map(|&x| x as usize).collect()),
        _ => None,
    }
}
