// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of collapsed members.

use hashbrown::HashSet;
use orgchart_model::{MemberId, OrgTree};

use crate::view::ViewTree;

/// Which members are collapsed.
///
/// This is plain set membership over ids. It is never validated against a
/// model: ids that do not exist in the current [`OrgTree`] are harmless and
/// simply never match a node. A fresh `CollapseState` (everything expanded)
/// belongs with every freshly loaded model.
///
/// ## Example
///
/// ```rust
/// use orgchart_collapse::CollapseState;
/// use orgchart_model::{MemberId, RawRecord, normalize};
///
/// let raw = RawRecord::new(1, "Ann Lee")
///     .with_child(RawRecord::new(2, "Bo Park").with_child(RawRecord::new(3, "Cy Ito")));
/// let tree = normalize(&raw).unwrap();
///
/// let mut collapse = CollapseState::new();
/// collapse.toggle(MemberId(2));
///
/// let view = collapse.derive_view(&tree);
/// assert_eq!(view.get(MemberId(2)).unwrap().children().count(), 0);
/// assert!(!view.is_visible(MemberId(3)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: HashSet<MemberId>,
}

impl CollapseState {
    /// Create an empty state: every member expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `id` if it is expanded, expand it if it is collapsed.
    ///
    /// Toggling twice restores the previous membership.
    pub fn toggle(&mut self, id: MemberId) {
        if !self.collapsed.remove(&id) {
            self.collapsed.insert(id);
        }
    }

    /// Collapse `id`.
    pub fn collapse(&mut self, id: MemberId) {
        self.collapsed.insert(id);
    }

    /// Expand `id`.
    pub fn expand(&mut self, id: MemberId) {
        self.collapsed.remove(&id);
    }

    /// Expand every member on `path`.
    ///
    /// Only removes entries; members not on the path keep their state.
    pub fn expand_ancestors(&mut self, path: &[MemberId]) {
        for id in path {
            self.collapsed.remove(id);
        }
    }

    /// Expand everything.
    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Returns true if `id` is collapsed.
    pub fn is_collapsed(&self, id: MemberId) -> bool {
        self.collapsed.contains(&id)
    }

    /// Returns true if `id` exists in `tree` and no ancestor of it is collapsed.
    ///
    /// This answers the same question as [`ViewTree::is_visible`] without
    /// deriving the view.
    pub fn is_visible(&self, tree: &OrgTree, id: MemberId) -> bool {
        let Some(node) = tree.get(id) else {
            return false;
        };
        let mut ancestor = node.parent();
        while let Some(a) = ancestor {
            if self.is_collapsed(a.id()) {
                return false;
            }
            ancestor = a.parent();
        }
        true
    }

    /// Number of collapsed ids, including ids absent from any model.
    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    /// Returns true if nothing is collapsed.
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    /// Iterate collapsed ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.collapsed.iter().copied()
    }

    /// Derive the pruned view of `tree` under this state.
    ///
    /// Every member whose id is collapsed is presented with no children; every
    /// other member keeps its children, each processed the same way. The view
    /// is rebuilt from scratch on each call and never patched.
    pub fn derive_view<'a>(&self, tree: &'a OrgTree) -> ViewTree<'a> {
        ViewTree::derive(tree, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_model::{RawRecord, normalize};

    #[test]
    fn toggle_twice_is_identity() {
        let mut state = CollapseState::new();
        state.toggle(MemberId(5));
        assert!(state.is_collapsed(MemberId(5)));
        state.toggle(MemberId(5));
        assert!(!state.is_collapsed(MemberId(5)));
        assert!(state.is_empty());
    }

    #[test]
    fn unknown_ids_are_harmless() {
        let tree = normalize(&RawRecord::new(1, "Ann")).unwrap();
        let mut state = CollapseState::new();
        state.toggle(MemberId(999));
        assert_eq!(state.len(), 1);
        let view = state.derive_view(&tree);
        assert_eq!(view.len(), 1);
        assert!(!state.is_visible(&tree, MemberId(999)));
    }

    #[test]
    fn expand_ancestors_only_removes() {
        let mut state = CollapseState::new();
        state.collapse(MemberId(1));
        state.collapse(MemberId(2));
        state.collapse(MemberId(9));
        state.expand_ancestors(&[MemberId(1), MemberId(2), MemberId(3)]);
        assert!(!state.is_collapsed(MemberId(1)));
        assert!(!state.is_collapsed(MemberId(2)));
        // Not on the path; left alone, and 3 is not collapsed as a side effect.
        assert!(state.is_collapsed(MemberId(9)));
        assert!(!state.is_collapsed(MemberId(3)));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn visibility_follows_collapsed_ancestors() {
        let raw = RawRecord::new(1, "Ann")
            .with_child(RawRecord::new(2, "Bo").with_child(RawRecord::new(3, "Cy")));
        let tree = normalize(&raw).unwrap();
        let mut state = CollapseState::new();
        state.collapse(MemberId(2));
        assert!(state.is_visible(&tree, MemberId(1)));
        // A collapsed member is itself still visible; its reports are not.
        assert!(state.is_visible(&tree, MemberId(2)));
        assert!(!state.is_visible(&tree, MemberId(3)));
        state.collapse(MemberId(1));
        assert!(!state.is_visible(&tree, MemberId(2)));
        assert!(state.is_visible(&tree, MemberId(1)));
    }

    #[test]
    fn expand_all_clears() {
        let mut state = CollapseState::new();
        state.collapse(MemberId(1));
        state.collapse(MemberId(2));
        state.expand_all();
        assert!(state.is_empty());
        assert_eq!(state.iter().count(), 0);
    }
}
