//! Property-based tests for selection algebra and region growing.
//!
//! Run with: cargo test --test selection_properties

use std::collections::BTreeSet;

use meshlabel::prelude::*;
use meshlabel::selection::{complement, difference, union};
use nalgebra::Point3;
use proptest::prelude::*;

// =============================================================================
// Strategies and fixtures
// =============================================================================

/// A face count together with a set of indices below it.
fn arb_selection(max_faces: usize) -> impl Strategy<Value = (usize, SelectionSet)> {
    (1..=max_faces).prop_flat_map(|n| {
        prop::collection::btree_set(0..n, 0..=n)
            .prop_map(move |s| (n, SelectionSet::from_indices(n, s).unwrap()))
    })
}

/// Two disjoint selections over the same face count.
fn arb_disjoint_pair(max_faces: usize) -> impl Strategy<Value = (usize, SelectionSet, SelectionSet)> {
    (1..=max_faces).prop_flat_map(|n| {
        let side = prop::collection::vec(0u8..3, n);
        side.prop_map(move |side| {
            let pick = |tag: u8| {
                let indices: BTreeSet<usize> = side
                    .iter()
                    .enumerate()
                    .filter(|(_, &t)| t == tag)
                    .map(|(i, _)| i)
                    .collect();
                SelectionSet::from_indices(n, indices).unwrap()
            };
            (n, pick(1), pick(2))
        })
    })
}

/// Random triangle soup, possibly non-manifold and with repeated corners.
fn arb_soup() -> impl Strategy<Value = TriMesh> {
    (3usize..20).prop_flat_map(|nv| {
        let vertices = prop::collection::vec(prop::array::uniform3(-10.0..10.0f64), nv);
        let faces = prop::collection::vec(prop::array::uniform3(0..nv), 1..40);
        (vertices, faces).prop_map(|(v, f)| {
            TriMesh::new(v.into_iter().map(|[x, y, z]| Point3::new(x, y, z)).collect(), f)
        })
    })
}

/// An `n` x `n` grid bent into a bowl: connected, open, no anti-parallel faces.
fn bowl(n: usize) -> SurfaceModel {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    let half = n as f64 / 2.0;
    for j in 0..=n {
        for i in 0..=n {
            let (x, y) = (i as f64 - half, j as f64 - half);
            vertices.push(Point3::new(x, y, 0.1 * (x * x + y * y)));
        }
    }
    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;
            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }
    SurfaceModel::new(TriMesh::new(vertices, faces)).unwrap()
}

const BOWL_SIZE: usize = 6;
const BOWL_FACES: usize = BOWL_SIZE * BOWL_SIZE * 2;

fn arb_bowl_seed() -> impl Strategy<Value = SelectionSet> {
    prop::collection::btree_set(0..BOWL_FACES, 0..4)
        .prop_map(|s| SelectionSet::from_indices(BOWL_FACES, s).unwrap())
}

// =============================================================================
// Set algebra
// =============================================================================

proptest! {
    /// Complementing twice gives back the original set.
    #[test]
    fn complement_is_involution((n, s) in arb_selection(200)) {
        let back = complement(n, &complement(n, &s).unwrap()).unwrap();
        prop_assert_eq!(back, s);
    }

    /// A set and its complement partition the faces.
    #[test]
    fn complement_partitions((n, s) in arb_selection(200)) {
        let c = s.complement(n).unwrap();
        prop_assert!(!s.intersects(&c));
        prop_assert_eq!(s.len() + c.len(), n);
        prop_assert_eq!(union(&s, &c), SelectionSet::all(n));
    }

    /// Union of disjoint sets adds sizes and difference undoes it.
    #[test]
    fn disjoint_union_and_difference((_n, a, b) in arb_disjoint_pair(150)) {
        let u = union(&a, &b);
        prop_assert_eq!(u.len(), a.len() + b.len());
        prop_assert_eq!(difference(&u, &b), a.clone());
        prop_assert_eq!(difference(&u, &a), b);
    }

    /// Iteration order is ascending.
    #[test]
    fn iteration_is_sorted((_n, s) in arb_selection(100)) {
        let indices = s.to_indices();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }
}

// =============================================================================
// Region growing
// =============================================================================

proptest! {
    /// Zero hops returns the seed and more hops never shrink the result.
    #[test]
    fn neighbor_growth_is_monotonic(seed in arb_bowl_seed(), hops in 0usize..6) {
        let model = bowl(BOWL_SIZE);
        prop_assert_eq!(neighbor_expand(&model, &seed, 0).unwrap(), seed.clone());

        let smaller = neighbor_expand(&model, &seed, hops).unwrap();
        let larger = neighbor_expand(&model, &seed, hops + 1).unwrap();
        prop_assert!(smaller.difference(&larger).is_empty());
        prop_assert!(seed.difference(&smaller).is_empty());
    }

    /// A cosine threshold of -1 floods a connected mesh.
    #[test]
    fn angle_minus_one_floods(seed in arb_bowl_seed()) {
        let model = bowl(BOWL_SIZE);
        let grown = angle_expand(&model, &seed, -1.0).unwrap();
        if seed.is_empty() {
            prop_assert!(grown.is_empty());
        } else {
            prop_assert_eq!(grown.len(), BOWL_FACES);
        }
    }

    /// Multi-threshold growth keeps the seed, and an angle limit never
    /// selects more than no limit at all.
    #[test]
    fn multi_threshold_contains_seed(seed in arb_bowl_seed(), hops in 0usize..8, angle in 0.0..180.0f64) {
        let model = bowl(BOWL_SIZE);
        let grown = multi_threshold_expand(&model, &seed, hops, angle).unwrap();
        prop_assert!(seed.difference(&grown).is_empty());

        let unlimited = multi_threshold_expand(&model, &seed, hops, 0.0).unwrap();
        prop_assert!(grown.difference(&unlimited).is_empty());
    }

    /// Constrained growth stays within seed and selection.
    #[test]
    fn on_selected_stays_inside(seed in arb_bowl_seed(), existing in arb_bowl_seed(), hops in 0usize..4) {
        let model = bowl(BOWL_SIZE);
        let existing = neighbor_expand(&model, &existing, hops).unwrap();
        let kept = on_selected_expand(&model, &seed, &existing).unwrap();

        prop_assert!(kept.difference(&seed.union(&existing)).is_empty());
        prop_assert!(seed.difference(&kept).is_empty());
        if !seed.intersects(&existing) {
            prop_assert_eq!(kept, seed);
        }
    }

    /// Building a model and growing on arbitrary soup never panics and
    /// stays in range.
    #[test]
    fn soup_never_panics(mesh in arb_soup(), face in 0usize..40, hops in 0usize..4) {
        let model = SurfaceModel::new(mesh).unwrap();
        let face = face % model.num_faces();
        let seed = SelectionSet::single(FaceId::new(face));

        for method in [
            ExpandMethod::Neighbor { hops },
            ExpandMethod::Angle { cosine_threshold: 0.5 },
            ExpandMethod::MultiThreshold { max_hops: hops, max_angle_degrees: 45.0 },
        ] {
            let grown = method.expand(&model, &seed).unwrap();
            prop_assert!(grown.contains(FaceId::new(face)));
            prop_assert!(grown.check_bounds(model.num_faces()).is_ok());
        }

        for f in model.mesh().face_ids() {
            if let Some(n) = model.normals().normal(f) {
                prop_assert!((n.norm() - 1.0).abs() < 1e-9);
            }
        }
    }
}
