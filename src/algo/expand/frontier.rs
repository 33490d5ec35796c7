//! Round-synchronous frontier expansion shared by every growth variant.

use crate::mesh::{FaceId, MeshTopology};
use crate::selection::SelectionSet;

/// Which faces count as neighbors during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Adjacency {
    /// Faces sharing a full edge.
    Edge,
    /// Faces sharing at least one vertex.
    Vertex,
}

/// Output of a frontier expansion.
#[derive(Debug, Clone)]
pub(crate) struct Growth {
    /// Seed faces plus every admitted face.
    pub selection: SelectionSet,
    /// Number of rounds that actually ran.
    pub rounds: usize,
}

/// Grow `seed` over `adjacency`, admitting neighbors for which `admit`
/// returns true.
///
/// Each round looks only at the neighbors of the faces discovered in the
/// previous round, so a face admitted in round `k` is first expanded in round
/// `k + 1`. The result therefore does not depend on the order faces are
/// enumerated in. Stops when the frontier is empty, after `max_rounds`
/// rounds if given, or once every face has been visited.
///
/// `seed` must already be checked against the face count.
pub(crate) fn grow<P>(
    topology: &MeshTopology,
    seed: &SelectionSet,
    adjacency: Adjacency,
    max_rounds: Option<usize>,
    admit: P,
) -> Growth
where
    P: Fn(FaceId) -> bool,
{
    let n = topology.num_faces();
    let mut visited = vec![false; n];
    let mut members: Vec<FaceId> = Vec::with_capacity(seed.len());

    for f in seed.iter() {
        visited[f.index()] = true;
        members.push(f);
    }

    let mut frontier = members.clone();
    let mut next: Vec<FaceId> = Vec::new();
    let mut rounds = 0;

    while !frontier.is_empty() && members.len() < n && max_rounds.map_or(true, |m| rounds < m) {
        for &f in &frontier {
            let mut consider = |g: FaceId| {
                // Marking here only deduplicates `next`; the faces being
                // expanded this round were fixed before it started.
                if !visited[g.index()] && admit(g) {
                    visited[g.index()] = true;
                    next.push(g);
                }
            };

            match adjacency {
                Adjacency::Edge => {
                    for (a, b) in topology.face_edges(f) {
                        topology.edge_neighbors(f, a, b).for_each(&mut consider);
                    }
                }
                Adjacency::Vertex => {
                    for v in topology.face_vertices(f) {
                        topology.vertex_neighbors(f, v).for_each(&mut consider);
                    }
                }
            }
        }

        members.extend_from_slice(&next);
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
        rounds += 1;
    }

    Growth {
        selection: members.into_iter().collect(),
        rounds,
    }
}
