//! Growth limited by the angle to the seed's mean normal.
//!
//! The two predicates here use different formulas.
//! [`cosine_admits`] compares the absolute dot product, so faces pointing the
//! opposite way are as welcome as faces pointing the same way.
//! [`deviation_admits`] measures `180° - angle(n, r)` and admits faces whose
//! normal is within `180° - max_angle_degrees` of the reference.

use std::f64::consts::PI;

use nalgebra::Vector3;
use tracing::debug;

use super::check_finite;
use super::frontier::{grow, Adjacency};
use crate::error::Result;
use crate::mesh::SurfaceModel;
use crate::selection::SelectionSet;

/// `|n · r| > cosine_threshold`. Faces without a normal are never admitted.
#[inline]
pub fn cosine_admits(
    normal: Option<Vector3<f64>>,
    reference: &Vector3<f64>,
    cosine_threshold: f64,
) -> bool {
    normal.map_or(false, |n| n.dot(reference).abs() > cosine_threshold)
}

/// `degrees(π - acos(n · r)) > max_angle_degrees`. Faces without a normal are
/// never admitted.
///
/// The dot product is clamped to `[-1, 1]` before `acos`.
#[inline]
pub fn deviation_admits(
    normal: Option<Vector3<f64>>,
    reference: &Vector3<f64>,
    max_angle_degrees: f64,
) -> bool {
    normal.map_or(false, |n| {
        let cos = n.dot(reference).clamp(-1.0, 1.0);
        (PI - cos.acos()).to_degrees() > max_angle_degrees
    })
}

/// Grow `seed` across shared edges while `|n · r| > cosine_threshold`.
///
/// `r` is the mean normal of the seed. Growth continues until no frontier
/// face has an admissible neighbor, so the result is bounded only by the
/// connected component(s) of the seed. A threshold of `-1` or lower admits
/// every face with a normal.
///
/// # Errors
///
/// Fails on an out-of-range seed or a non-finite threshold.
pub fn angle_expand(
    model: &SurfaceModel,
    seed: &SelectionSet,
    cosine_threshold: f64,
) -> Result<SelectionSet> {
    seed.check_bounds(model.num_faces())?;
    check_finite("cosine_threshold", cosine_threshold)?;

    let normals = model.normals();
    let reference = normals.mean_normal(seed);

    let growth = grow(model.topology(), seed, Adjacency::Edge, None, |f| {
        cosine_admits(normals.normal(f), &reference, cosine_threshold)
    });

    debug!(
        seeds = seed.len(),
        cosine_threshold,
        rounds = growth.rounds,
        selected = growth.selection.len(),
        "Angle expansion"
    );

    Ok(growth.selection)
}

/// Grow `seed` across shared edges for `max_hops` rounds, admitting faces
/// that pass [`deviation_admits`] against the seed's mean normal.
///
/// With `max_angle_degrees == 0` every face except one exactly anti-parallel
/// to the reference is admitted, so growth is limited by `max_hops` alone.
///
/// # Errors
///
/// Fails on an out-of-range seed or a non-finite angle.
pub fn multi_threshold_expand(
    model: &SurfaceModel,
    seed: &SelectionSet,
    max_hops: usize,
    max_angle_degrees: f64,
) -> Result<SelectionSet> {
    seed.check_bounds(model.num_faces())?;
    check_finite("max_angle_degrees", max_angle_degrees)?;

    let normals = model.normals();
    let reference = normals.mean_normal(seed);

    let growth = grow(
        model.topology(),
        seed,
        Adjacency::Edge,
        Some(max_hops),
        |f| deviation_admits(normals.normal(f), &reference, max_angle_degrees),
    );

    debug!(
        seeds = seed.len(),
        max_hops,
        max_angle_degrees,
        rounds = growth.rounds,
        selected = growth.selection.len(),
        "Multi-threshold expansion"
    );

    Ok(growth.selection)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{bipyramid, icosahedron, sliver_chain};
    use super::*;
    use crate::error::MeshError;
    use crate::mesh::{FaceId, MeshTopology, SurfaceModel, TriMesh};
    use nalgebra::Point3;

    fn single(i: usize) -> SelectionSet {
        SelectionSet::single(FaceId::new(i))
    }

    #[test]
    fn test_cosine_predicate_uses_absolute_value() {
        let r = Vector3::z();
        assert!(cosine_admits(Some(Vector3::z()), &r, 0.5));
        assert!(cosine_admits(Some(-Vector3::z()), &r, 0.5));
        assert!(!cosine_admits(Some(Vector3::x()), &r, 0.5));
        assert!(!cosine_admits(None, &r, -2.0));
    }

    #[test]
    fn test_deviation_predicate() {
        let r = Vector3::z();
        // Same direction: 180 degrees of deviation from anti-parallel
        assert!(deviation_admits(Some(Vector3::z()), &r, 179.0));
        // Perpendicular sits at 90
        assert!(!deviation_admits(Some(Vector3::x()), &r, 91.0));
        assert!(deviation_admits(Some(Vector3::x()), &r, 89.0));
        // Anti-parallel never passes a non-negative limit
        assert!(!deviation_admits(Some(-Vector3::z()), &r, 0.0));
        assert!(!deviation_admits(None, &r, -1.0));
    }

    #[test]
    fn test_deviation_predicate_clamps_dot() {
        // Slightly longer than unit: acos would be NaN without the clamp
        let r = Vector3::new(0.0, 0.0, 1.0 + 1e-9);
        assert!(deviation_admits(Some(Vector3::z()), &r, 90.0));
    }

    #[test]
    fn test_angle_negative_one_selects_everything() {
        let model = icosahedron();
        let all = angle_expand(&model, &single(0), -1.0).unwrap();
        assert_eq!(all, SelectionSet::all(20));
    }

    #[test]
    fn test_angle_admits_opposite_normals() {
        let model = bipyramid();
        // Face 3 shares the equator edge with face 0 (dot 3/5); faces 4 and 5
        // are reached through face 3 (dot -3/5). Faces 1 and 2 sit at -1/5.
        let grown = angle_expand(&model, &single(0), 0.5).unwrap();
        assert_eq!(grown.to_indices(), vec![0, 3, 4, 5]);
    }

    #[test]
    fn test_angle_high_threshold_keeps_seed() {
        let model = icosahedron();
        assert_eq!(angle_expand(&model, &single(5), 0.99).unwrap(), single(5));
    }

    #[test]
    fn test_angle_skips_degenerate_faces() {
        let model = sliver_chain();
        // Face 1 has no normal and face 2 is only reachable through it
        assert_eq!(angle_expand(&model, &single(0), -1.0).unwrap(), single(0));
    }

    #[test]
    fn test_multi_threshold_skips_degenerate_faces() {
        let model = sliver_chain();
        // A negative limit admits any normal, but face 1 has none
        assert_eq!(
            multi_threshold_expand(&model, &single(0), 5, -10.0).unwrap(),
            single(0)
        );
    }

    #[test]
    fn test_angle_rejects_nan() {
        let model = icosahedron();
        assert!(matches!(
            angle_expand(&model, &single(0), f64::NAN),
            Err(MeshError::InvalidParameter {
                name: "cosine_threshold",
                ..
            })
        ));
    }

    #[test]
    fn test_multi_threshold_zero_angle_reaches_closed_mesh() {
        let model = bipyramid();
        for f in 0..6 {
            let grown = multi_threshold_expand(&model, &single(f), 6, 0.0).unwrap();
            assert_eq!(grown, SelectionSet::all(6));
        }
    }

    #[test]
    fn test_multi_threshold_zero_angle_on_tetrahedron() {
        let mesh = TriMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.5, 1.0, 0.0),
                Point3::new(0.5, 0.5, 1.0),
            ],
            vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]],
        );
        assert!(MeshTopology::build(&mesh).unwrap().is_watertight());
        let model = SurfaceModel::new(mesh).unwrap();

        let grown = multi_threshold_expand(&model, &single(0), 1, 0.0).unwrap();
        assert_eq!(grown, SelectionSet::all(4));
    }

    #[test]
    fn test_multi_threshold_limits() {
        let model = bipyramid();

        // Only face 3 is within 90 degrees of face 0 (dot 3/5)
        let grown = multi_threshold_expand(&model, &single(0), 5, 90.0).unwrap();
        assert_eq!(grown.to_indices(), vec![0, 3]);

        // Zero hops leaves the seed alone
        let grown = multi_threshold_expand(&model, &single(0), 0, 0.0).unwrap();
        assert_eq!(grown, single(0));
    }

    #[test]
    fn test_multi_threshold_hop_bound() {
        let model = icosahedron();
        let seed = single(0);
        let one = multi_threshold_expand(&model, &seed, 1, -1.0).unwrap();

        // One edge ring: the three edge neighbors
        assert_eq!(one.len(), 4);
        let two = multi_threshold_expand(&model, &seed, 2, -1.0).unwrap();
        assert!(one.difference(&two).is_empty());
        assert!(two.len() > one.len());
    }

    #[test]
    fn test_empty_seed() {
        let model = icosahedron();
        assert!(angle_expand(&model, &SelectionSet::new(), -1.0)
            .unwrap()
            .is_empty());
        assert!(multi_threshold_expand(&model, &SelectionSet::new(), 3, 0.0)
            .unwrap()
            .is_empty());
    }
}
