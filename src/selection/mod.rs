//! Face selections and their editing state.
//!
//! - [`SelectionSet`]: an immutable set of faces with union, difference and
//!   complement
//! - [`SelectionHistory`]: a bounded undo stack of earlier selections
//! - [`SelectionSession`]: the current selection of one mesh, edited pick by
//!   pick according to a [`SelectionMode`]
//! - [`SelectionLabels`]: 0/1 arrays per face and per vertex for export

mod history;
mod labels;
mod session;
mod set;

pub use history::{SelectionHistory, DEFAULT_HISTORY_CAPACITY};
pub use labels::SelectionLabels;
pub use session::{SelectionMode, SelectionSession};
pub use set::{complement, difference, union, SelectionSet};
