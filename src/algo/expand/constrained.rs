//! Growth confined to an existing selection.

use tracing::debug;

use super::frontier::{grow, Adjacency};
use crate::error::Result;
use crate::mesh::SurfaceModel;
use crate::selection::SelectionSet;

/// Grow `seed` across shared edges, admitting only faces in `existing`.
///
/// The result is the part of `existing` edge-connected to the seed, plus the
/// seed itself. Used to drop selected islands that are not connected to the
/// last pick. If `seed` and `existing` share no face nothing can be reached,
/// and `seed` is returned as is.
///
/// # Errors
///
/// Fails if either selection names a face the model does not have.
pub fn on_selected_expand(
    model: &SurfaceModel,
    seed: &SelectionSet,
    existing: &SelectionSet,
) -> Result<SelectionSet> {
    seed.check_bounds(model.num_faces())?;
    existing.check_bounds(model.num_faces())?;

    if !seed.intersects(existing) {
        debug!(
            seeds = seed.len(),
            existing = existing.len(),
            "Seed does not touch selection, nothing to expand"
        );
        return Ok(seed.clone());
    }

    let growth = grow(model.topology(), seed, Adjacency::Edge, None, |f| {
        existing.contains(f)
    });

    debug!(
        seeds = seed.len(),
        existing = existing.len(),
        rounds = growth.rounds,
        selected = growth.selection.len(),
        "Constrained expansion"
    );

    Ok(growth.selection)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{icosahedron, sliver_chain};
    use super::*;
    use crate::error::MeshError;
    use crate::mesh::FaceId;

    fn set(indices: &[usize]) -> SelectionSet {
        SelectionSet::from_indices(20, indices.iter().copied()).unwrap()
    }

    #[test]
    fn test_disjoint_seed_is_returned() {
        let model = icosahedron();
        let seed = set(&[0]);
        let existing = set(&[10, 11, 12]);
        assert_eq!(on_selected_expand(&model, &seed, &existing).unwrap(), seed);
    }

    #[test]
    fn test_keeps_connected_island_only() {
        let model = icosahedron();
        // 0-1 share edge (0, 5); 13 is on the far side
        let existing = set(&[0, 1, 13]);
        let kept = on_selected_expand(&model, &set(&[0]), &existing).unwrap();
        assert_eq!(kept.to_indices(), vec![0, 1]);
    }

    #[test]
    fn test_result_is_subset_of_union() {
        let model = icosahedron();
        let existing = set(&[1, 2, 3, 4, 5, 6]);
        let seed = set(&[0, 1]);
        let kept = on_selected_expand(&model, &seed, &existing).unwrap();

        assert!(kept.difference(&seed.union(&existing)).is_empty());
        assert!(kept.contains(FaceId::new(0)));
        // 0 is not in `existing` but stays as part of the seed
        assert!(seed.difference(&kept).is_empty());
    }

    #[test]
    fn test_corner_contact_does_not_connect() {
        let model = icosahedron();
        // Faces 0 and 2 share only vertex 0
        let existing = set(&[0, 2]);
        let kept = on_selected_expand(&model, &set(&[0]), &existing).unwrap();
        assert_eq!(kept.to_indices(), vec![0]);
    }

    #[test]
    fn test_walks_through_degenerate_faces() {
        let model = sliver_chain();
        let all = SelectionSet::all(3);
        let seed = SelectionSet::single(FaceId::new(0));
        assert_eq!(on_selected_expand(&model, &seed, &all).unwrap(), all);
    }

    #[test]
    fn test_out_of_range() {
        let model = icosahedron();
        let bad = SelectionSet::single(FaceId::new(42));
        assert!(matches!(
            on_selected_expand(&model, &set(&[0]), &bad),
            Err(MeshError::FaceIndexOutOfRange { index: 42, .. })
        ));
        assert!(on_selected_expand(&model, &bad, &set(&[0])).is_err());
    }
}
