// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: normalization, storage, and node handles.

use alloc::{string::String, vec, vec::Vec};

use hashbrown::HashMap;

use crate::error::MalformedRecord;
use crate::types::{MemberId, RawRecord};

/// Default limit for [`NormalizeOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options controlling [`normalize_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Deepest level a record may sit at, with the root at depth 0.
    ///
    /// Nesting depth comes straight from the record source, so it is bounded
    /// here rather than trusted.
    pub max_depth: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// An immutable, normalized organization hierarchy.
///
/// Members are stored in pre-order, so each subtree occupies a contiguous run
/// of slots starting at its root. An id → slot map makes lookups and ancestor
/// paths independent of tree size.
///
/// A tree is never patched in place: when a fresh record arrives, normalize it
/// into a new `OrgTree` and replace the old one wholesale.
///
/// ## Example
///
/// ```rust
/// use orgchart_model::{MemberId, RawRecord, normalize};
///
/// let raw = RawRecord::new(1, "Ann Lee")
///     .with_role("CEO")
///     .with_child(RawRecord::new(2, "Bo Park"));
/// let tree = normalize(&raw).unwrap();
///
/// let root = tree.root();
/// assert_eq!(root.name(), "Ann Lee");
/// assert!(root.has_children());
/// assert_eq!(tree.get(MemberId(2)).unwrap().parent(), Some(root));
/// ```
#[derive(Clone)]
pub struct OrgTree {
    slots: Vec<Slot>,
    by_id: HashMap<MemberId, usize>,
}

impl core::fmt::Debug for OrgTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrgTree")
            .field("root", &self.slots.first().map(|s| s.id))
            .field("members", &self.slots.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Slot {
    id: MemberId,
    name: String,
    role: Option<String>,
    photo_url: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
    depth: usize,
    /// Number of slots in this subtree, itself included.
    len: usize,
}

/// Normalize a raw record with [`NormalizeOptions::default`].
pub fn normalize(raw: &RawRecord) -> Result<OrgTree, MalformedRecord> {
    normalize_with(raw, &NormalizeOptions::default())
}

/// Normalize a raw record into an [`OrgTree`].
///
/// - Missing `children` is an empty list; missing `role` and `photo_url` are absent.
/// - Children keep the order they have in the record.
/// - A missing `id` or `name`, a repeated `id`, or nesting beyond
///   [`NormalizeOptions::max_depth`] rejects the whole record.
///
/// The walk uses an explicit stack, so arbitrarily deep input cannot exhaust
/// the call stack.
pub fn normalize_with(
    raw: &RawRecord,
    options: &NormalizeOptions,
) -> Result<OrgTree, MalformedRecord> {
    let result = build(raw, options);
    #[cfg(feature = "tracing")]
    {
        match &result {
            Ok(tree) => tracing::debug!(
                root = %tree.root().id(),
                members = tree.len(),
                "normalized organization record"
            ),
            Err(err) => tracing::warn!(%err, "rejected organization record"),
        }
    }
    result
}

fn build(raw: &RawRecord, options: &NormalizeOptions) -> Result<OrgTree, MalformedRecord> {
    let mut slots: Vec<Slot> = Vec::new();
    let mut by_id: HashMap<MemberId, usize> = HashMap::new();
    // (record, parent slot, position among siblings)
    let mut stack = vec![(raw, None::<usize>, 0_usize)];

    while let Some((record, parent, index)) = stack.pop() {
        let parent_id = parent.map(|p| slots[p].id);
        let id = record
            .id
            .ok_or(MalformedRecord::MissingId {
                parent: parent_id,
                index,
            })?;
        let name = record
            .name
            .as_ref()
            .ok_or(MalformedRecord::MissingName { id })?;
        let depth = parent.map_or(0, |p| slots[p].depth + 1);
        if depth > options.max_depth {
            return Err(MalformedRecord::TooDeep {
                id,
                max_depth: options.max_depth,
            });
        }

        let slot = slots.len();
        if by_id.insert(id, slot).is_some() {
            return Err(MalformedRecord::DuplicateId { id });
        }
        if let Some(p) = parent {
            slots[p].children.push(slot);
        }
        slots.push(Slot {
            id,
            name: name.clone(),
            role: record.role.clone(),
            photo_url: record.photo_url.clone(),
            parent,
            children: Vec::new(),
            depth,
            len: 1,
        });

        // Reversed so the first child is popped, and therefore slotted, first.
        if let Some(children) = &record.children {
            for (i, child) in children.iter().enumerate().rev() {
                stack.push((child, Some(slot), i));
            }
        }
    }

    // Descendants always sit after their ancestors, so a backward sweep folds
    // every subtree size into its parent before the parent is read.
    for i in (1..slots.len()).rev() {
        if let Some(p) = slots[i].parent {
            slots[p].len += slots[i].len;
        }
    }

    Ok(OrgTree { slots, by_id })
}

impl OrgTree {
    /// The root member.
    pub fn root(&self) -> OrgNode<'_> {
        OrgNode {
            tree: self,
            slot: 0,
        }
    }

    /// Number of members in the whole tree.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a normalized tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Look up a member by id.
    pub fn get(&self, id: MemberId) -> Option<OrgNode<'_>> {
        self.by_id
            .get(&id)
            .map(|&slot| OrgNode { tree: self, slot })
    }

    /// Returns true if a member with this id exists.
    pub fn contains(&self, id: MemberId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// The member at a pre-order position, if in range.
    ///
    /// Position 0 is the root. See [`OrgNode::index`].
    pub fn node_at(&self, index: usize) -> Option<OrgNode<'_>> {
        (index < self.slots.len()).then_some(OrgNode {
            tree: self,
            slot: index,
        })
    }

    /// Iterate all members in pre-order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = OrgNode<'_>> + '_ {
        (0..self.slots.len()).map(move |slot| OrgNode { tree: self, slot })
    }

    fn slot(&self, slot: usize) -> &Slot {
        &self.slots[slot]
    }
}

/// A borrowed handle onto one member of an [`OrgTree`].
///
/// Handles are cheap to copy and compare equal when they refer to the same
/// member of the same tree.
#[derive(Copy, Clone)]
pub struct OrgNode<'a> {
    tree: &'a OrgTree,
    slot: usize,
}

impl core::fmt::Debug for OrgNode<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrgNode")
            .field("id", &self.id())
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

impl PartialEq for OrgNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.slot == other.slot
    }
}

impl Eq for OrgNode<'_> {}

impl<'a> OrgNode<'a> {
    /// The member id.
    pub fn id(&self) -> MemberId {
        self.data().id
    }

    /// The display name.
    pub fn name(&self) -> &'a str {
        &self.data().name
    }

    /// The role label, if the record carried one.
    pub fn role(&self) -> Option<&'a str> {
        self.data().role.as_deref()
    }

    /// The avatar location, if the record carried one.
    pub fn photo_url(&self) -> Option<&'a str> {
        self.data().photo_url.as_deref()
    }

    /// Returns true if this member has direct reports in the model.
    ///
    /// This reflects the model, not any collapsed view of it.
    pub fn has_children(&self) -> bool {
        !self.data().children.is_empty()
    }

    /// Direct reports in display order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = OrgNode<'a>> + 'a {
        let tree = self.tree;
        tree.slot(self.slot)
            .children
            .iter()
            .map(move |&slot| OrgNode { tree, slot })
    }

    /// The manager of this member, or `None` for the root.
    pub fn parent(&self) -> Option<OrgNode<'a>> {
        self.data().parent.map(|slot| Self {
            tree: self.tree,
            slot,
        })
    }

    /// Distance from the root; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.data().depth
    }

    /// Pre-order position of this member within its tree.
    ///
    /// The subtree rooted here occupies positions
    /// `index()..index() + subtree_len()`.
    pub fn index(&self) -> usize {
        self.slot
    }

    /// Number of members in the subtree rooted here, itself included.
    pub fn subtree_len(&self) -> usize {
        self.data().len
    }

    /// Returns true if `other` is this member or one of its descendants.
    pub fn contains(&self, other: OrgNode<'_>) -> bool {
        core::ptr::eq(self.tree, other.tree)
            && (self.slot..self.slot + self.subtree_len()).contains(&other.slot)
    }

    /// Iterate the subtree rooted here in pre-order, starting with this member.
    pub fn subtree(&self) -> impl ExactSizeIterator<Item = OrgNode<'a>> + 'a {
        let tree = self.tree;
        (self.slot..self.slot + self.subtree_len()).map(move |slot| OrgNode { tree, slot })
    }

    /// Up to two uppercase initials taken from the first two words of the name.
    ///
    /// `"ann lee"` yields `"AL"`; a single-word name yields one letter.
    pub fn initials(&self) -> String {
        self.name()
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// The tree this handle belongs to.
    pub fn tree(&self) -> &'a OrgTree {
        self.tree
    }

    fn data(&self) -> &'a Slot {
        self.tree.slot(self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sample() -> RawRecord {
        RawRecord::new(1, "Ann Lee")
            .with_role("CEO")
            .with_photo_url("https://img.example.org/ann.png")
            .with_children([
                RawRecord::new(2, "Bo Park")
                    .with_role("CTO")
                    .with_child(RawRecord::new(3, "Cy Ito")),
                RawRecord::new(4, "Di Roe"),
            ])
    }

    fn ids<'a>(nodes: impl Iterator<Item = OrgNode<'a>>) -> Vec<u64> {
        nodes.map(|n| n.id().0).collect()
    }

    #[test]
    fn normalize_keeps_fields_and_child_order() {
        let tree = normalize(&sample()).unwrap();
        let root = tree.root();
        assert_eq!(root.id(), MemberId(1));
        assert_eq!(root.name(), "Ann Lee");
        assert_eq!(root.role(), Some("CEO"));
        assert_eq!(root.photo_url(), Some("https://img.example.org/ann.png"));
        assert_eq!(tree.get(MemberId(2)).unwrap().photo_url(), None);
        assert_eq!(ids(root.children()), [2, 4]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn missing_children_and_role_are_tolerated() {
        let raw = RawRecord {
            id: Some(MemberId(7)),
            name: Some("Solo".into()),
            ..RawRecord::default()
        };
        let tree = normalize(&raw).unwrap();
        let root = tree.root();
        assert!(!root.has_children());
        assert_eq!(root.role(), None);
        assert_eq!(root.children().len(), 0);
    }

    #[test]
    fn empty_children_list_means_leaf() {
        let raw = RawRecord::new(1, "Leaf").with_children([]);
        let tree = normalize(&raw).unwrap();
        assert!(!tree.root().has_children());
    }

    #[test]
    fn has_children_is_per_node() {
        let tree = normalize(&sample()).unwrap();
        let flags: Vec<(u64, bool)> = tree.iter().map(|n| (n.id().0, n.has_children())).collect();
        assert_eq!(flags, [(1, true), (2, true), (3, false), (4, false)]);
    }

    #[test]
    fn storage_is_pre_order_with_contiguous_subtrees() {
        let tree = normalize(&sample()).unwrap();
        assert_eq!(ids(tree.iter()), [1, 2, 3, 4]);

        let bo = tree.get(MemberId(2)).unwrap();
        assert_eq!(bo.index(), 1);
        assert_eq!(bo.subtree_len(), 2);
        assert_eq!(ids(bo.subtree()), [2, 3]);
        assert_eq!(tree.root().subtree_len(), 4);
    }

    #[test]
    fn parent_and_depth() {
        let tree = normalize(&sample()).unwrap();
        let cy = tree.get(MemberId(3)).unwrap();
        assert_eq!(cy.depth(), 2);
        assert_eq!(cy.parent().map(|p| p.id()), Some(MemberId(2)));
        assert_eq!(tree.root().parent(), None);
        assert!(tree.root().contains(cy));
        assert!(!tree.get(MemberId(4)).unwrap().contains(cy));
    }

    #[test]
    fn missing_id_reports_location() {
        let raw = RawRecord::new(1, "Ann").with_children([
            RawRecord::new(2, "Bo"),
            RawRecord {
                name: Some("Nobody".into()),
                ..RawRecord::default()
            },
        ]);
        assert_eq!(
            normalize(&raw).unwrap_err(),
            MalformedRecord::MissingId {
                parent: Some(MemberId(1)),
                index: 1,
            }
        );
    }

    #[test]
    fn missing_root_id_has_no_parent() {
        let raw = RawRecord {
            name: Some("Nobody".into()),
            ..RawRecord::default()
        };
        assert_eq!(
            normalize(&raw).unwrap_err(),
            MalformedRecord::MissingId {
                parent: None,
                index: 0,
            }
        );
    }

    #[test]
    fn missing_name_deep_in_tree_is_fatal() {
        let nameless = RawRecord {
            id: Some(MemberId(9)),
            ..RawRecord::default()
        };
        let raw = RawRecord::new(1, "Ann").with_child(RawRecord::new(2, "Bo").with_child(nameless));
        assert_eq!(
            normalize(&raw).unwrap_err(),
            MalformedRecord::MissingName { id: MemberId(9) }
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = RawRecord::new(1, "Ann").with_children([
            RawRecord::new(2, "Bo"),
            RawRecord::new(2, "Bo again"),
        ]);
        assert_eq!(
            normalize(&raw).unwrap_err(),
            MalformedRecord::DuplicateId { id: MemberId(2) }
        );
    }

    #[test]
    fn depth_limit_is_enforced() {
        let mut raw = RawRecord::new(10, "bottom");
        for id in (0..10_u64).rev() {
            raw = RawRecord::new(id, "level").with_child(raw);
        }
        // Eleven levels: depths 0..=10.
        let options = NormalizeOptions { max_depth: 10 };
        assert_eq!(normalize_with(&raw, &options).unwrap().len(), 11);

        let options = NormalizeOptions { max_depth: 9 };
        assert_eq!(
            normalize_with(&raw, &options).unwrap_err(),
            MalformedRecord::TooDeep {
                id: MemberId(10),
                max_depth: 9,
            }
        );
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        // A chain far deeper than a recursive walk would comfortably handle.
        let depth = 2_000_u64;
        let mut raw = RawRecord::new(depth, "bottom");
        for id in (0..depth).rev() {
            raw = RawRecord::new(id, "level").with_child(raw);
        }
        let options = NormalizeOptions {
            max_depth: usize::MAX,
        };
        let tree = normalize_with(&raw, &options).unwrap();
        assert_eq!(tree.root().subtree_len(), 2_001);
        assert_eq!(tree.get(MemberId(depth)).unwrap().depth(), 2_000);
        // Unwind the nested record without recursive drops.
        let mut next = raw.children.take();
        while let Some(mut children) = next {
            next = children.pop().and_then(|mut c| c.children.take());
        }
    }

    #[test]
    fn initials_from_first_two_words() {
        let raw = RawRecord::new(1, "ann lee park").with_children([
            RawRecord::new(2, "Bo"),
            RawRecord::new(3, ""),
        ]);
        let tree = normalize(&raw).unwrap();
        assert_eq!(tree.root().initials(), "AL");
        assert_eq!(tree.get(MemberId(2)).unwrap().initials(), "B");
        assert_eq!(tree.get(MemberId(3)).unwrap().initials(), "");
    }

    #[test]
    fn lookups_on_unknown_ids_are_empty() {
        let tree = normalize(&sample()).unwrap();
        assert!(tree.get(MemberId(99)).is_none());
        assert!(!tree.contains(MemberId(99)));
        assert!(tree.node_at(4).is_none());
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = normalize(&sample()).unwrap();
        let b = normalize(&sample()).unwrap();
        assert_eq!(a.root(), a.get(MemberId(1)).unwrap());
        assert_ne!(a.root(), b.root());
    }
}
