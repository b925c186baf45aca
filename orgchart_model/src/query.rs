// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only structural queries over an [`OrgTree`](crate::OrgTree).
//!
//! These are free functions over a subtree root so they can be applied to any
//! member, not only the root of the whole tree. None of them mutate the tree,
//! and none of them recurse.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::tree::OrgNode;
use crate::types::MemberId;

/// Ordered ids from a subtree root down to a target member, both inclusive.
///
/// Organization charts are shallow, so typical paths fit inline.
pub type Path = SmallVec<[MemberId; 8]>;

/// Number of members in the subtree rooted at `node`: 1 plus the count of each child.
///
/// A leaf counts as 1.
pub fn count_nodes(node: OrgNode<'_>) -> usize {
    node.subtree_len()
}

/// Ancestor path from `node` to the member with id `target`.
///
/// Returns the ids from `node` down to `target`, both inclusive, or `None` if
/// no member of the subtree rooted at `node` has that id. Ids are unique
/// within a normalized tree, so the first pre-order match is the only one.
pub fn find_path(node: OrgNode<'_>, target: MemberId) -> Option<Path> {
    let found = node.tree().get(target)?;
    if !node.contains(found) {
        return None;
    }

    let mut path = Path::new();
    let mut current = Some(found);
    while let Some(member) = current {
        path.push(member.id());
        if member == node {
            break;
        }
        current = member.parent();
    }
    path.reverse();
    Some(path)
}

/// The subtree rooted at `node` in pre-order: `node` first, then each child's
/// subtree in display order.
pub fn flatten(node: OrgNode<'_>) -> Vec<OrgNode<'_>> {
    node.subtree().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawRecord, normalize};
    use alloc::vec::Vec;

    fn scenario() -> RawRecord {
        RawRecord::new(1, "Ann Lee")
            .with_child(RawRecord::new(2, "Bo Park").with_child(RawRecord::new(3, "Cy Ito")))
    }

    fn wide() -> RawRecord {
        RawRecord::new(1, "Root").with_children([
            RawRecord::new(2, "A").with_children([RawRecord::new(5, "A1"), RawRecord::new(6, "A2")]),
            RawRecord::new(3, "B"),
            RawRecord::new(4, "C").with_child(RawRecord::new(7, "C1").with_child(RawRecord::new(8, "C1a"))),
        ])
    }

    fn raw_ids(path: &[MemberId]) -> Vec<u64> {
        path.iter().map(|id| id.0).collect()
    }

    #[test]
    fn scenario_path_and_count() {
        let tree = normalize(&scenario()).unwrap();
        let root = tree.root();
        assert_eq!(raw_ids(&find_path(root, MemberId(3)).unwrap()), [1, 2, 3]);
        assert_eq!(count_nodes(root), 3);
    }

    #[test]
    fn path_to_root_is_singleton() {
        let tree = normalize(&wide()).unwrap();
        let root = tree.root();
        assert_eq!(raw_ids(&find_path(root, root.id()).unwrap()), [1]);
    }

    #[test]
    fn missing_target_is_none() {
        let tree = normalize(&wide()).unwrap();
        assert!(find_path(tree.root(), MemberId(404)).is_none());
    }

    #[test]
    fn path_from_inner_node_excludes_outside_targets() {
        let tree = normalize(&wide()).unwrap();
        let c = tree.get(MemberId(4)).unwrap();
        assert_eq!(raw_ids(&find_path(c, MemberId(8)).unwrap()), [4, 7, 8]);
        // Sibling subtree and ancestors are outside `c`.
        assert!(find_path(c, MemberId(5)).is_none());
        assert!(find_path(c, MemberId(1)).is_none());
    }

    #[test]
    fn count_matches_manual_recursion() {
        let tree = normalize(&wide()).unwrap();
        for node in tree.iter() {
            let by_children = 1 + node.children().map(count_nodes).sum::<usize>();
            assert_eq!(count_nodes(node), by_children, "count mismatch at {:?}", node);
        }
        assert_eq!(count_nodes(tree.get(MemberId(3)).unwrap()), 1);
    }

    #[test]
    fn flatten_is_pre_order() {
        let tree = normalize(&wide()).unwrap();
        let order: Vec<u64> = flatten(tree.root()).iter().map(|n| n.id().0).collect();
        assert_eq!(order, [1, 2, 5, 6, 3, 4, 7, 8]);

        let sub: Vec<u64> = flatten(tree.get(MemberId(2)).unwrap())
            .iter()
            .map(|n| n.id().0)
            .collect();
        assert_eq!(sub, [2, 5, 6]);
    }

    #[test]
    fn count_equals_flatten_len() {
        let tree = normalize(&wide()).unwrap();
        for node in tree.iter() {
            assert_eq!(count_nodes(node), flatten(node).len(), "at {:?}", node);
        }
    }
}
