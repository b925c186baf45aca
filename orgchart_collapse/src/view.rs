// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pruned view tree derived from a model and a collapse state.

use alloc::{vec, vec::Vec};

use orgchart_model::{MemberId, OrgNode, OrgTree};

use crate::state::CollapseState;
use crate::types::{ViewEdge, ViewFlags};

/// The visible part of an [`OrgTree`] under a [`CollapseState`].
///
/// A `ViewTree` is a projection: it borrows the model, is rebuilt whole by
/// [`CollapseState::derive_view`] whenever the model or the collapse state
/// changes, and its structure is never edited afterwards. The only mutation
/// it accepts is [`ViewTree::apply_highlight`], which restyles nodes without
/// touching structure.
///
/// Nodes are stored in pre-order, matching the model's order with the
/// descendants of collapsed members left out.
#[derive(Clone)]
pub struct ViewTree<'a> {
    model: &'a OrgTree,
    nodes: Vec<ViewSlot>,
    /// Model pre-order position → view slot, for visible members.
    view_of: Vec<Option<usize>>,
}

impl core::fmt::Debug for ViewTree<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewTree")
            .field("visible", &self.nodes.len())
            .field("members", &self.model.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct ViewSlot {
    /// Pre-order position in the model.
    node: usize,
    parent: Option<usize>,
    children: Vec<usize>,
    flags: ViewFlags,
}

impl<'a> ViewTree<'a> {
    pub(crate) fn derive(model: &'a OrgTree, collapse: &CollapseState) -> Self {
        let mut nodes: Vec<ViewSlot> = Vec::with_capacity(model.len());
        let mut view_of: Vec<Option<usize>> = vec![None; model.len()];

        // Walk the model in pre-order. A collapsed member's subtree is one
        // contiguous run, so hiding it is a jump past that run.
        let mut index = 0;
        while let Some(node) = model.node_at(index) {
            let collapsed = collapse.is_collapsed(node.id());
            let mut flags = ViewFlags::empty();
            flags.set(ViewFlags::HAS_CHILDREN, node.has_children());
            flags.set(ViewFlags::COLLAPSED, collapsed);

            let slot = nodes.len();
            let parent = node.parent().and_then(|p| view_of[p.index()]);
            if let Some(p) = parent {
                nodes[p].children.push(slot);
            }
            view_of[index] = Some(slot);
            nodes.push(ViewSlot {
                node: index,
                parent,
                children: Vec::new(),
                flags,
            });

            index += if collapsed { node.subtree_len() } else { 1 };
        }

        Self {
            model,
            nodes,
            view_of,
        }
    }

    /// The root of the view. The model root is always visible.
    pub fn root(&self) -> ViewNode<'_> {
        ViewNode {
            view: self,
            slot: 0,
        }
    }

    /// The model this view was derived from.
    pub fn model(&self) -> &'a OrgTree {
        self.model
    }

    /// Number of visible members.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root is always visible.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The visible node for `id`, or `None` if it is hidden or unknown.
    pub fn get(&self, id: MemberId) -> Option<ViewNode<'_>> {
        self.slot_of(id).map(|slot| ViewNode { view: self, slot })
    }

    /// Returns true if `id` is part of this view.
    pub fn is_visible(&self, id: MemberId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Iterate visible nodes in pre-order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = ViewNode<'_>> + '_ {
        (0..self.nodes.len()).map(move |slot| ViewNode { view: self, slot })
    }

    /// Iterate manager → report edges between visible nodes, in pre-order of the report.
    pub fn edges(&self) -> impl Iterator<Item = ViewEdge> + '_ {
        self.nodes.iter().filter_map(move |slot| {
            let parent = &self.nodes[slot.parent?];
            Some(ViewEdge {
                source: self.member(parent).id(),
                target: self.member(slot).id(),
                highlighted: parent.flags.contains(ViewFlags::ON_PATH)
                    && slot.flags.contains(ViewFlags::ON_PATH),
            })
        })
    }

    /// Mark the selection on this view.
    ///
    /// Clears any previous marks, then sets [`ViewFlags::ON_PATH`] on every
    /// visible member of `path` and [`ViewFlags::HIGHLIGHTED`] on `highlighted`
    /// if it is visible. Structure is unchanged.
    pub fn apply_highlight(&mut self, path: &[MemberId], highlighted: Option<MemberId>) {
        for slot in &mut self.nodes {
            slot.flags.remove(ViewFlags::HIGHLIGHTED | ViewFlags::ON_PATH);
        }
        for &id in path {
            if let Some(slot) = self.slot_of(id) {
                self.nodes[slot].flags.insert(ViewFlags::ON_PATH);
            }
        }
        if let Some(slot) = highlighted.and_then(|id| self.slot_of(id)) {
            self.nodes[slot].flags.insert(ViewFlags::HIGHLIGHTED);
        }
    }

    fn slot_of(&self, id: MemberId) -> Option<usize> {
        let node = self.model.get(id)?;
        self.view_of[node.index()]
    }

    fn member(&self, slot: &ViewSlot) -> OrgNode<'a> {
        // Every slot was created from a live model position.
        self.model
            .node_at(slot.node)
            .unwrap_or_else(|| unreachable!("view slot outside its model"))
    }
}

/// A borrowed handle onto one visible node of a [`ViewTree`].
#[derive(Copy, Clone)]
pub struct ViewNode<'v> {
    view: &'v ViewTree<'v>,
    slot: usize,
}

impl core::fmt::Debug for ViewNode<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewNode")
            .field("id", &self.id())
            .field("flags", &self.flags())
            .finish_non_exhaustive()
    }
}

impl<'v> ViewNode<'v> {
    /// The member id.
    pub fn id(&self) -> MemberId {
        self.node().id()
    }

    /// The underlying model node, for name, role, and other member data.
    pub fn node(&self) -> OrgNode<'v> {
        self.view.member(&self.view.nodes[self.slot])
    }

    /// Presentation flags.
    pub fn flags(&self) -> ViewFlags {
        self.view.nodes[self.slot].flags
    }

    /// Distance from the root. A visible member sits at the same depth as in the model.
    pub fn depth(&self) -> usize {
        self.node().depth()
    }

    /// Returns true if this member is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.flags().contains(ViewFlags::COLLAPSED)
    }

    /// Returns true if this member is the current selection.
    pub fn is_highlighted(&self) -> bool {
        self.flags().contains(ViewFlags::HIGHLIGHTED)
    }

    /// Returns true if this member lies on the highlighted ancestor path.
    pub fn is_on_path(&self) -> bool {
        self.flags().contains(ViewFlags::ON_PATH)
    }

    /// Visible children in display order; empty for collapsed members.
    pub fn children(&self) -> impl ExactSizeIterator<Item = ViewNode<'v>> + 'v {
        let view = self.view;
        view.nodes[self.slot]
            .children
            .iter()
            .map(move |&slot| ViewNode { view, slot })
    }

    /// The visible parent, or `None` for the root.
    pub fn parent(&self) -> Option<ViewNode<'v>> {
        self.view.nodes[self.slot].parent.map(|slot| Self {
            view: self.view,
            slot,
        })
    }
}
