// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state and the select-by-id step over borrowed state.

use orgchart_collapse::CollapseState;
use orgchart_model::{MemberId, OrgTree, Path, find_path};

/// The highlighted member and its ancestor path.
///
/// The path runs from the root to the highlighted member, inclusive, and is
/// empty when nothing is selected. Only selection operations change it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    highlighted: Option<MemberId>,
    path: Path,
}

impl SelectionState {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected member, if any.
    pub fn highlighted(&self) -> Option<MemberId> {
        self.highlighted
    }

    /// Ids from the root to the selected member; empty when nothing is selected.
    pub fn path(&self) -> &[MemberId] {
        &self.path
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.highlighted.is_none()
    }

    /// Returns true if `id` is the selected member.
    pub fn is_highlighted(&self, id: MemberId) -> bool {
        self.highlighted == Some(id)
    }

    /// Returns true if `id` lies on the highlighted path.
    pub fn is_on_path(&self, id: MemberId) -> bool {
        self.path.contains(&id)
    }

    /// Returns true if the edge `source → target` should be drawn highlighted,
    /// which is when both ends lie on the path.
    pub fn is_edge_highlighted(&self, source: MemberId, target: MemberId) -> bool {
        self.is_on_path(source) && self.is_on_path(target)
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.highlighted = None;
        self.path.clear();
    }

    fn set(&mut self, id: MemberId, path: Path) {
        self.highlighted = Some(id);
        self.path = path;
    }
}

/// Select `id` in `model`, revealing it in `collapse`.
///
/// 1. Finds the ancestor path to `id`. If `id` is not in `model` nothing
///    changes and this returns `false`.
/// 2. Expands every member on the path.
/// 3. Records `id` and the path in `selection`.
///
/// Selecting the already selected member repeats the same steps.
/// [`SelectionController::select`](crate::SelectionController::select) wraps
/// this and additionally emits view effects.
pub fn select_by_id(
    model: &OrgTree,
    collapse: &mut CollapseState,
    selection: &mut SelectionState,
    id: MemberId,
) -> bool {
    let Some(path) = find_path(model.root(), id) else {
        return false;
    };
    collapse.expand_ancestors(&path);
    selection.set(id, path);
    true
}
