//! Region growing over face adjacency.
//!
//! Every variant starts from a seed [`SelectionSet`] and grows it one ring at
//! a time. A round looks at the neighbors of the faces discovered in the
//! previous round and keeps those that pass the variant's admission test:
//!
//! | Function | Adjacency | Admits | Rounds |
//! |----------|-----------|--------|--------|
//! | [`neighbor_expand`] | vertex | every face | `hops` |
//! | [`angle_expand`] | edge | `\|n · r\| > cosine_threshold` | until stable |
//! | [`multi_threshold_expand`] | edge | `180° - angle(n, r) > max_angle_degrees` | `max_hops` |
//! | [`on_selected_expand`] | edge | faces of an existing selection | until stable |
//!
//! `r` is the mean normal of the seed faces, computed once before growth.
//! Zero-area faces never pass an angle test, but neighbor and constrained
//! growth walk through them.
//!
//! # Example
//!
//! ```
//! use meshlabel::algo::expand::{neighbor_expand, ExpandMethod};
//! use meshlabel::mesh::{FaceId, SurfaceModel, TriMesh};
//! use meshlabel::selection::SelectionSet;
//! use nalgebra::Point3;
//!
//! let mesh = TriMesh::new(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!         Point3::new(1.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2], [2, 1, 3]],
//! );
//! let model = SurfaceModel::new(mesh).unwrap();
//! let seed = SelectionSet::single(FaceId::new(0));
//!
//! let grown = neighbor_expand(&model, &seed, 1).unwrap();
//! assert_eq!(grown.len(), 2);
//!
//! let method = ExpandMethod::Angle { cosine_threshold: 0.9 };
//! assert_eq!(method.expand(&model, &seed).unwrap(), grown);
//! ```

mod angle;
mod constrained;
mod frontier;
mod hops;

#[cfg(test)]
pub(crate) mod fixtures;

use std::fmt;

pub use angle::{angle_expand, cosine_admits, deviation_admits, multi_threshold_expand};
pub use constrained::on_selected_expand;
pub use hops::neighbor_expand;

use crate::error::{MeshError, Result};
use crate::mesh::SurfaceModel;
use crate::selection::SelectionSet;

/// Default ring count for hop-limited growth.
pub const DEFAULT_HOPS: usize = 5;

/// Default angle limit, in degrees, for multi-threshold growth.
pub const DEFAULT_MAX_ANGLE_DEGREES: f64 = 90.0;

/// A growth variant together with its parameters.
///
/// This is how callers that only hold plain values (a command line, a control
/// panel) pick an algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpandMethod {
    /// [`neighbor_expand`] for a fixed number of vertex-adjacency rings.
    Neighbor {
        /// Number of rings.
        hops: usize,
    },
    /// [`angle_expand`] until no neighbor is similar enough.
    Angle {
        /// Minimum `|n · r|` for admission.
        cosine_threshold: f64,
    },
    /// [`multi_threshold_expand`] bounded by both rings and angle.
    MultiThreshold {
        /// Number of rings.
        max_hops: usize,
        /// Angle limit in degrees.
        max_angle_degrees: f64,
    },
}

impl Default for ExpandMethod {
    fn default() -> Self {
        ExpandMethod::MultiThreshold {
            max_hops: DEFAULT_HOPS,
            max_angle_degrees: DEFAULT_MAX_ANGLE_DEGREES,
        }
    }
}

impl ExpandMethod {
    /// Grow `seed` on `model` with this method.
    pub fn expand(&self, model: &SurfaceModel, seed: &SelectionSet) -> Result<SelectionSet> {
        match *self {
            ExpandMethod::Neighbor { hops } => neighbor_expand(model, seed, hops),
            ExpandMethod::Angle { cosine_threshold } => {
                angle_expand(model, seed, cosine_threshold)
            }
            ExpandMethod::MultiThreshold {
                max_hops,
                max_angle_degrees,
            } => multi_threshold_expand(model, seed, max_hops, max_angle_degrees),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ExpandMethod::Neighbor { .. } => "neighbor",
            ExpandMethod::Angle { .. } => "angle",
            ExpandMethod::MultiThreshold { .. } => "multi-threshold",
        }
    }
}

impl fmt::Display for ExpandMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandMethod::Neighbor { hops } => write!(f, "neighbor(hops={})", hops),
            ExpandMethod::Angle { cosine_threshold } => {
                write!(f, "angle(cos>{})", cosine_threshold)
            }
            ExpandMethod::MultiThreshold {
                max_hops,
                max_angle_degrees,
            } => write!(
                f,
                "multi-threshold(hops={}, angle>{}deg)",
                max_hops, max_angle_degrees
            ),
        }
    }
}

/// Reject thresholds that would make every comparison meaningless.
fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MeshError::invalid_param(name, value, "must be finite"))
    }
}
