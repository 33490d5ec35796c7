//! Small meshes shared by region-growing tests.

use nalgebra::Point3;

use crate::mesh::{SurfaceModel, TriMesh};

/// Regular icosahedron, 12 vertices and 20 outward-wound faces.
///
/// Face 0 is `[0, 11, 5]`; face 13 (`[3, 6, 8]`) is its antipode.
pub(crate) fn icosahedron() -> SurfaceModel {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let vertices = vec![
        Point3::new(-1.0, t, 0.0),
        Point3::new(1.0, t, 0.0),
        Point3::new(-1.0, -t, 0.0),
        Point3::new(1.0, -t, 0.0),
        Point3::new(0.0, -1.0, t),
        Point3::new(0.0, 1.0, t),
        Point3::new(0.0, -1.0, -t),
        Point3::new(0.0, 1.0, -t),
        Point3::new(t, 0.0, -1.0),
        Point3::new(t, 0.0, 1.0),
        Point3::new(-t, 0.0, -1.0),
        Point3::new(-t, 0.0, 1.0),
    ];
    let faces = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    SurfaceModel::new(TriMesh::new(vertices, faces)).unwrap()
}

/// Triangular bipyramid with no two faces exactly anti-parallel.
///
/// Faces 0..3 form the upper pyramid, faces 3..6 the lower one; face `k + 3`
/// shares its equator edge with face `k`.
pub(crate) fn bipyramid() -> SurfaceModel {
    let h = 3.0_f64.sqrt() / 2.0;
    let vertices = vec![
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(-0.5, h, 0.0),
        Point3::new(-0.5, -h, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, -1.0),
    ];
    let faces = vec![
        [0, 1, 3],
        [1, 2, 3],
        [2, 0, 3],
        [1, 0, 4],
        [2, 1, 4],
        [0, 2, 4],
    ];
    SurfaceModel::new(TriMesh::new(vertices, faces)).unwrap()
}

/// Three coplanar faces where the middle one has zero area.
///
/// Face 0 and face 2 only touch at vertex 1; face 1 joins them by edges.
pub(crate) fn sliver_chain() -> SurfaceModel {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.5, 0.5, 0.0),
        Point3::new(1.0, 1.0, 0.0),
    ];
    let faces = vec![[0, 1, 2], [2, 1, 3], [3, 1, 4]];
    SurfaceModel::new(TriMesh::new(vertices, faces)).unwrap()
}
