//! Hop-limited growth over vertex adjacency.

use tracing::debug;

use super::frontier::{grow, Adjacency};
use crate::error::Result;
use crate::mesh::SurfaceModel;
use crate::selection::SelectionSet;

/// Grow `seed` by `hops` rings of faces that share at least one vertex.
///
/// No geometric test is applied. `hops == 0` returns the seed unchanged.
///
/// # Errors
///
/// [`MeshError::FaceIndexOutOfRange`](crate::error::MeshError::FaceIndexOutOfRange)
/// if the seed names a face the model does not have.
pub fn neighbor_expand(
    model: &SurfaceModel,
    seed: &SelectionSet,
    hops: usize,
) -> Result<SelectionSet> {
    seed.check_bounds(model.num_faces())?;

    let growth = grow(model.topology(), seed, Adjacency::Vertex, Some(hops), |_| true);

    debug!(
        seeds = seed.len(),
        hops,
        rounds = growth.rounds,
        selected = growth.selection.len(),
        "Neighbor expansion"
    );

    Ok(growth.selection)
}
