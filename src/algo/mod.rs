//! Selection algorithms.
//!
//! - **Expansion**: hop-limited, angle-limited and selection-constrained
//!   region growing from a seed set of faces ([`expand`])
//! - **Curvature**: per-vertex Gaussian curvature by angle defect
//!   ([`curvature`])

pub mod curvature;
pub mod expand;
