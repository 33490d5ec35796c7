//! Interactive selection state for one mesh.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::history::SelectionHistory;
use super::labels::SelectionLabels;
use super::set::SelectionSet;
use crate::algo::expand::{on_selected_expand, ExpandMethod};
use crate::error::{MeshError, Result};
use crate::mesh::SurfaceModel;

/// How a grown pick is combined with the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Remember the pick only; the selection is left alone.
    #[default]
    Pick,
    /// The grown pick becomes the selection.
    Replace,
    /// Add the grown pick to the selection.
    Union,
    /// Remove the grown pick from the selection.
    Difference,
}

impl SelectionMode {
    /// Whether applying this mode changes the selection.
    #[inline]
    pub fn mutates(self) -> bool {
        !matches!(self, SelectionMode::Pick)
    }

    fn combine(self, current: &SelectionSet, region: SelectionSet) -> SelectionSet {
        match self {
            SelectionMode::Pick => current.clone(),
            SelectionMode::Replace => region,
            SelectionMode::Union => current.union(&region),
            SelectionMode::Difference => current.difference(&region),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SelectionMode::Pick => "pick",
            SelectionMode::Replace => "replace",
            SelectionMode::Union => "union",
            SelectionMode::Difference => "difference",
        })
    }
}

impl FromStr for SelectionMode {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pick" => Ok(SelectionMode::Pick),
            "replace" | "select" => Ok(SelectionMode::Replace),
            "union" | "add" => Ok(SelectionMode::Union),
            "difference" | "remove" => Ok(SelectionMode::Difference),
            _ => Err(MeshError::invalid_param(
                "mode",
                s,
                "expected pick, replace, union or difference",
            )),
        }
    }
}

/// Current selection, last pick and undo history for one mesh.
///
/// A session does not own the mesh; every operation takes the
/// [`SurfaceModel`] it works on. Using one session with two different models
/// is caught only where face indices go out of range.
///
/// # Example
/// ```
/// use meshlabel::algo::expand::ExpandMethod;
/// use meshlabel::mesh::{FaceId, SurfaceModel, TriMesh};
/// use meshlabel::selection::{SelectionMode, SelectionSession, SelectionSet};
/// use nalgebra::Point3;
///
/// let mesh = TriMesh::new(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///         Point3::new(1.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2], [2, 1, 3]],
/// );
/// let model = SurfaceModel::new(mesh).unwrap();
/// let mut session = SelectionSession::new();
///
/// let seed = SelectionSet::single(FaceId::new(0));
/// let method = ExpandMethod::Neighbor { hops: 0 };
/// session.apply(&model, &seed, &method, SelectionMode::Replace).unwrap();
/// assert_eq!(session.selection().len(), 1);
///
/// session.invert(&model).unwrap();
/// assert_eq!(session.selection().to_indices(), vec![1]);
///
/// assert!(session.undo());
/// assert_eq!(session.selection().to_indices(), vec![0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionSession {
    current: SelectionSet,
    last_pick: Option<SelectionSet>,
    history: SelectionHistory,
}

impl SelectionSession {
    /// Create an empty session with the default history capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session keeping up to `capacity` undo snapshots.
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            history: SelectionHistory::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Create a session whose selection starts as `initial`.
    ///
    /// Nothing is recorded in the history, so the initial selection cannot be
    /// undone.
    pub fn with_selection(model: &SurfaceModel, initial: SelectionSet) -> Result<Self> {
        initial.check_bounds(model.num_faces())?;
        Ok(Self {
            current: initial,
            ..Self::default()
        })
    }

    /// The current selection.
    #[inline]
    pub fn selection(&self) -> &SelectionSet {
        &self.current
    }

    /// The seed of the most recent [`apply`](Self::apply), if any.
    #[inline]
    pub fn last_pick(&self) -> Option<&SelectionSet> {
        self.last_pick.as_ref()
    }

    /// The undo history.
    #[inline]
    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    /// Grow `seed` with `method` and combine the result with the selection
    /// according to `mode`.
    ///
    /// The seed is remembered as the last pick in every mode. Mutating modes
    /// record the previous selection in the history first. Returns the grown
    /// region, which in [`SelectionMode::Pick`] is only a preview.
    pub fn apply(
        &mut self,
        model: &SurfaceModel,
        seed: &SelectionSet,
        method: &ExpandMethod,
        mode: SelectionMode,
    ) -> Result<SelectionSet> {
        let region = method.expand(model, seed)?;
        self.last_pick = Some(seed.clone());

        if mode.mutates() {
            let next = mode.combine(&self.current, region.clone());
            self.replace(next);
        }

        debug!(
            method = method.name(),
            %mode,
            seeds = seed.len(),
            region = region.len(),
            selected = self.current.len(),
            "Applied pick"
        );

        Ok(region)
    }

    /// Replace the selection with its complement.
    pub fn invert(&mut self, model: &SurfaceModel) -> Result<()> {
        let inverted = self.current.complement(model.num_faces())?;
        self.replace(inverted);

        debug!(selected = self.current.len(), "Inverted selection");
        Ok(())
    }

    /// Drop every selected face not edge-connected to the last pick.
    ///
    /// Returns `false` without touching anything if the selection is empty,
    /// nothing has been picked yet, or the last pick lies outside the
    /// selection.
    pub fn keep_connected(&mut self, model: &SurfaceModel) -> Result<bool> {
        let Some(pick) = self.last_pick.as_ref() else {
            return Ok(false);
        };
        if self.current.is_empty() || !pick.intersects(&self.current) {
            debug!("Last pick is outside the selection, nothing to clean");
            return Ok(false);
        }

        let kept = on_selected_expand(model, pick, &self.current)?;
        let removed = self.current.len().saturating_sub(kept.len());
        self.replace(kept);

        debug!(removed, selected = self.current.len(), "Removed outliers");
        Ok(true)
    }

    /// Restore the selection from before the last mutation.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                debug!(
                    selected = self.current.len(),
                    remaining = self.history.len(),
                    "Undo"
                );
                true
            }
            None => false,
        }
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.replace(SelectionSet::new());
        debug!("Cleared selection");
    }

    /// Per-face and per-vertex labels of the current selection.
    pub fn labels(&self, model: &SurfaceModel) -> Result<SelectionLabels> {
        SelectionLabels::from_selection(model.mesh(), &self.current)
    }

    fn replace(&mut self, next: SelectionSet) {
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::expand::fixtures::icosahedron;
    use crate::mesh::FaceId;

    fn set(indices: &[usize]) -> SelectionSet {
        SelectionSet::from_indices(20, indices.iter().copied()).unwrap()
    }

    const SEED_ONLY: ExpandMethod = ExpandMethod::Neighbor { hops: 0 };

    #[test]
    fn test_mode_parsing() {
        assert_eq!("union".parse::<SelectionMode>().unwrap(), SelectionMode::Union);
        assert_eq!("ADD".parse::<SelectionMode>().unwrap(), SelectionMode::Union);
        assert_eq!("remove".parse::<SelectionMode>().unwrap(), SelectionMode::Difference);
        assert!("sideways".parse::<SelectionMode>().is_err());
        assert_eq!(SelectionMode::Replace.to_string(), "replace");
    }

    #[test]
    fn test_pick_mode_leaves_selection() {
        let model = icosahedron();
        let mut session = SelectionSession::new();

        let region = session
            .apply(&model, &set(&[0]), &ExpandMethod::Neighbor { hops: 1 }, SelectionMode::Pick)
            .unwrap();

        assert_eq!(region.len(), 10);
        assert!(session.selection().is_empty());
        assert_eq!(session.last_pick(), Some(&set(&[0])));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_modes_combine() {
        let model = icosahedron();
        let mut session = SelectionSession::new();

        session
            .apply(&model, &set(&[0, 1]), &SEED_ONLY, SelectionMode::Replace)
            .unwrap();
        assert_eq!(session.selection(), &set(&[0, 1]));

        session
            .apply(&model, &set(&[5]), &SEED_ONLY, SelectionMode::Union)
            .unwrap();
        assert_eq!(session.selection(), &set(&[0, 1, 5]));

        session
            .apply(&model, &set(&[1, 9]), &SEED_ONLY, SelectionMode::Difference)
            .unwrap();
        assert_eq!(session.selection(), &set(&[0, 5]));

        session
            .apply(&model, &set(&[7]), &SEED_ONLY, SelectionMode::Replace)
            .unwrap();
        assert_eq!(session.selection(), &set(&[7]));
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn test_undo_walks_back() {
        let model = icosahedron();
        let mut session = SelectionSession::new();

        session
            .apply(&model, &set(&[0]), &SEED_ONLY, SelectionMode::Union)
            .unwrap();
        session
            .apply(&model, &set(&[3]), &SEED_ONLY, SelectionMode::Union)
            .unwrap();
        session.invert(&model).unwrap();
        assert_eq!(session.selection().len(), 18);

        assert!(session.undo());
        assert_eq!(session.selection(), &set(&[0, 3]));
        assert!(session.undo());
        assert_eq!(session.selection(), &set(&[0]));
        assert!(session.undo());
        assert!(session.selection().is_empty());
        assert!(!session.undo());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_failed_apply_changes_nothing() {
        let model = icosahedron();
        let mut session = SelectionSession::new();
        session
            .apply(&model, &set(&[2]), &SEED_ONLY, SelectionMode::Replace)
            .unwrap();

        let bad = SelectionSet::single(FaceId::new(99));
        assert!(session
            .apply(&model, &bad, &SEED_ONLY, SelectionMode::Replace)
            .is_err());
        assert_eq!(session.selection(), &set(&[2]));
        assert_eq!(session.last_pick(), Some(&set(&[2])));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_keep_connected() {
        let model = icosahedron();
        let mut session = SelectionSession::with_selection(&model, set(&[0, 1, 13])).unwrap();

        // Nothing picked yet
        assert!(!session.keep_connected(&model).unwrap());

        session
            .apply(&model, &set(&[0]), &SEED_ONLY, SelectionMode::Pick)
            .unwrap();
        assert!(session.keep_connected(&model).unwrap());
        assert_eq!(session.selection(), &set(&[0, 1]));

        assert!(session.undo());
        assert_eq!(session.selection(), &set(&[0, 1, 13]));
    }

    #[test]
    fn test_keep_connected_noop_when_pick_outside() {
        let model = icosahedron();
        let mut session = SelectionSession::with_selection(&model, set(&[10, 11])).unwrap();
        session
            .apply(&model, &set(&[0]), &SEED_ONLY, SelectionMode::Pick)
            .unwrap();

        assert!(!session.keep_connected(&model).unwrap());
        assert_eq!(session.selection(), &set(&[10, 11]));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_clear_and_labels() {
        let model = icosahedron();
        let mut session = SelectionSession::new();
        session
            .apply(&model, &set(&[0]), &SEED_ONLY, SelectionMode::Replace)
            .unwrap();

        let labels = session.labels(&model).unwrap();
        assert_eq!(labels.selected_face_count(), 1);
        assert_eq!(labels.selected_vertex_count(), 3);

        session.clear();
        assert!(session.selection().is_empty());
        assert!(session.undo());
        assert_eq!(session.selection(), &set(&[0]));
    }

    #[test]
    fn test_history_capacity() {
        let model = icosahedron();
        let mut session = SelectionSession::with_history_capacity(2);
        for f in 0..5 {
            session
                .apply(&model, &set(&[f]), &SEED_ONLY, SelectionMode::Replace)
                .unwrap();
        }
        assert_eq!(session.history().len(), 2);
        assert!(session.undo());
        assert!(session.undo());
        assert!(!session.undo());
        assert_eq!(session.selection(), &set(&[2]));
    }

    #[test]
    fn test_with_selection_checks_bounds() {
        let model = icosahedron();
        let bad = SelectionSet::single(FaceId::new(20));
        assert!(SelectionSession::with_selection(&model, bad).is_err());
    }
}
