//! Discrete Gaussian curvature per vertex.
//!
//! Curvature is the angle defect `2π - Σθ` at a vertex divided by its mixed
//! Voronoi area (Meyer et al. 2003). Boundary vertices have no well defined
//! defect and are reported as `0.0`, as are isolated vertices.
//!
//! Summed over a closed surface the angle defects equal `2π·χ` (Gauss-Bonnet),
//! which [`total_angle_defect`] exposes as a quick topology check.
//!
//! # Example
//!
//! ```
//! use meshlabel::algo::curvature::{gaussian_curvature, total_angle_defect};
//! use meshlabel::prelude::*;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//! let faces = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
//! let model = SurfaceModel::new(TriMesh::new(vertices, faces)).unwrap();
//!
//! let k = gaussian_curvature(&model);
//! assert!(k.iter().all(|&k| k > 0.0));
//! assert!((total_angle_defect(&model) - 4.0 * std::f64::consts::PI).abs() < 1e-9);
//! ```

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Point3;
use tracing::debug;

use crate::mesh::{FaceId, SurfaceModel, VertexId};

const AREA_EPSILON: f64 = 1e-10;

/// Interior angle at `a` in triangle (a, b, c), in `[0, π]`.
///
/// Zero-length sides give `0.0`.
fn corner_angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.cross(&ac).norm().atan2(ab.dot(&ac))
}

/// Cotangent of an angle, `0.0` when the angle is (nearly) flat.
fn cot(angle: f64) -> f64 {
    let s = angle.sin();
    if s.abs() < 1e-12 {
        0.0
    } else {
        angle.cos() / s
    }
}

/// Corner of `f` at `v` as (position of v, next, previous).
fn corner(model: &SurfaceModel, f: FaceId, v: VertexId) -> [Point3<f64>; 3] {
    let mesh = model.mesh();
    let verts = mesh.face_vertices(f);
    let [p0, p1, p2] = mesh.face_positions(f);
    if verts[0] == v {
        [p0, p1, p2]
    } else if verts[1] == v {
        [p1, p2, p0]
    } else {
        [p2, p0, p1]
    }
}

/// Vertices on at least one boundary edge.
fn boundary_mask(model: &SurfaceModel) -> Vec<bool> {
    let mut mask = vec![false; model.num_vertices()];
    for (a, b) in model.topology().boundary_edges() {
        mask[a.index()] = true;
        mask[b.index()] = true;
    }
    mask
}

/// Sum of the corner angles of all faces around `v`.
fn angle_sum(model: &SurfaceModel, v: VertexId) -> f64 {
    model
        .topology()
        .vertex_faces(v)
        .iter()
        .map(|&f| {
            let [p, q, r] = corner(model, f, v);
            corner_angle(&p, &q, &r)
        })
        .sum()
}

/// Mixed Voronoi area around `v`.
///
/// - Non-obtuse triangle: Voronoi region of the corner
/// - Obtuse at `v`: half the triangle
/// - Obtuse elsewhere: a quarter of the triangle
///
/// Falls back to the barycentric area when the mixed area vanishes.
fn mixed_area(model: &SurfaceModel, v: VertexId) -> f64 {
    let faces = model.topology().vertex_faces(v);
    let mut area = 0.0;

    for &f in faces {
        let [p, q, r] = corner(model, f, v);
        let at_p = corner_angle(&p, &q, &r);
        let at_q = corner_angle(&q, &r, &p);
        let at_r = corner_angle(&r, &p, &q);
        let tri_area = model.mesh().face_area(f);

        area += if at_p > FRAC_PI_2 {
            tri_area / 2.0
        } else if at_q > FRAC_PI_2 || at_r > FRAC_PI_2 {
            tri_area / 4.0
        } else {
            0.125 * ((r - p).norm_squared() * cot(at_q) + (q - p).norm_squared() * cot(at_r))
        };
    }

    if area < AREA_EPSILON {
        faces
            .iter()
            .map(|&f| model.mesh().face_area(f) / 3.0)
            .sum()
    } else {
        area
    }
}

/// Angle defect `2π - Σθ` for every vertex.
///
/// Boundary and isolated vertices get `0.0`.
pub fn angle_defects(model: &SurfaceModel) -> Vec<f64> {
    let boundary = boundary_mask(model);

    model
        .mesh()
        .vertex_ids()
        .map(|v| {
            if boundary[v.index()] || model.topology().vertex_faces(v).is_empty() {
                0.0
            } else {
                2.0 * PI - angle_sum(model, v)
            }
        })
        .collect()
}

/// Sum of all angle defects. Equals `2π·χ` on a closed surface.
pub fn total_angle_defect(model: &SurfaceModel) -> f64 {
    angle_defects(model).iter().sum()
}

/// Gaussian curvature `K = (2π - Σθ) / A_mixed` for every vertex.
///
/// Vertices whose neighborhood has no area get `0.0`.
pub fn gaussian_curvature(model: &SurfaceModel) -> Vec<f64> {
    let curvature: Vec<f64> = angle_defects(model)
        .into_iter()
        .enumerate()
        .map(|(i, defect)| {
            if defect == 0.0 {
                return 0.0;
            }
            let area = mixed_area(model, VertexId::new(i));
            if area > AREA_EPSILON {
                defect / area
            } else {
                0.0
            }
        })
        .collect();

    debug!(vertices = curvature.len(), "Computed Gaussian curvature");
    curvature
}
