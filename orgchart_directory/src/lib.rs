// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Directory: a flat, searchable listing of every member.
//!
//! The directory ignores collapse state: it lists the whole model in
//! pre-order and filters it by a case-insensitive substring match on the
//! member's name.
//!
//! Each query rescans the model. Hierarchies are tens to a few hundred
//! members, which makes a persistent index (trie, inverted index) pure
//! overhead, so none is kept.
//!
//! ## Example
//!
//! ```rust
//! use orgchart_directory::search;
//! use orgchart_model::{MemberId, RawRecord, normalize};
//!
//! let raw = RawRecord::new(1, "Ann Lee").with_children([
//!     RawRecord::new(2, "Bo Park").with_role("CTO"),
//!     RawRecord::new(3, "Anna Bell"),
//! ]);
//! let tree = normalize(&raw).unwrap();
//!
//! let hits: Vec<MemberId> = search(&tree, "ANN").iter().map(|e| e.id).collect();
//! assert_eq!(hits, [MemberId(1), MemberId(3)]);
//! assert_eq!(search(&tree, "").len(), 3);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use orgchart_model::{MemberId, OrgNode, OrgTree, flatten};

/// One row of the directory: a read-only projection of a member.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry<'a> {
    /// The member id, for routing a pick back into selection.
    pub id: MemberId,
    /// Display name.
    pub name: &'a str,
    /// Role label, if any.
    pub role: Option<&'a str>,
}

impl<'a> From<OrgNode<'a>> for DirectoryEntry<'a> {
    fn from(node: OrgNode<'a>) -> Self {
        Self {
            id: node.id(),
            name: node.name(),
            role: node.role(),
        }
    }
}

/// A search term folded for case-insensitive matching.
///
/// Hosts can keep one of these between keystrokes; [`search`] builds a
/// temporary one from the raw input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTerm {
    folded: String,
}

impl SearchTerm {
    /// Fold `raw` for matching. The term is not trimmed: spaces are significant.
    pub fn new(raw: &str) -> Self {
        Self {
            folded: raw.to_lowercase(),
        }
    }

    /// Returns true for the empty term, which matches everything.
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// The folded term.
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Returns true if `name` contains this term, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || name.to_lowercase().contains(self.folded.as_str())
    }
}

/// Every member in pre-order, unfiltered.
pub fn entries(tree: &OrgTree) -> Vec<DirectoryEntry<'_>> {
    flatten(tree.root()).into_iter().map(DirectoryEntry::from).collect()
}

/// Members whose name contains `term`, ignoring case, in pre-order.
///
/// The empty term matches every member.
pub fn search<'a>(tree: &'a OrgTree, term: &str) -> Vec<DirectoryEntry<'a>> {
    search_term(tree, &SearchTerm::new(term))
}

/// Like [`search`], with an already folded term.
pub fn search_term<'a>(tree: &'a OrgTree, term: &SearchTerm) -> Vec<DirectoryEntry<'a>> {
    flatten(tree.root())
        .into_iter()
        .filter(|node| term.matches(node.name()))
        .map(DirectoryEntry::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use orgchart_model::{RawRecord, normalize};

    fn staff() -> OrgTree {
        normalize(&RawRecord::new(1, "Ann Lee").with_role("CEO").with_children([
            RawRecord::new(2, "Bo Park")
                .with_role("CTO")
                .with_children([RawRecord::new(4, "Cy Ito"), RawRecord::new(5, "Joanna Park")]),
            RawRecord::new(3, "Dee Ann Cole"),
        ]))
        .unwrap()
    }

    fn ids(entries: &[DirectoryEntry<'_>]) -> Vec<u64> {
        entries.iter().map(|e| e.id.0).collect()
    }

    #[test]
    fn empty_term_lists_everyone_in_pre_order() {
        let tree = staff();
        assert_eq!(ids(&search(&tree, "")), [1, 2, 4, 5, 3]);
        assert_eq!(search(&tree, ""), entries(&tree));
    }

    #[test]
    fn match_ignores_case() {
        let tree = staff();
        assert_eq!(ids(&search(&tree, "ann")), [1, 5, 3]);
        assert_eq!(ids(&search(&tree, "PARK")), [2, 5]);
        assert_eq!(ids(&search(&tree, "pArK")), [2, 5]);
    }

    #[test]
    fn matches_only_names_not_roles() {
        let tree = staff();
        assert!(search(&tree, "CTO").is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        let tree = staff();
        assert!(search(&tree, "zed").is_empty());
    }

    #[test]
    fn spaces_are_part_of_the_term() {
        let tree = staff();
        assert_eq!(ids(&search(&tree, "ann ")), [1, 3]);
        assert_eq!(ids(&search(&tree, " ann")), [3]);
        assert_eq!(ids(&search(&tree, " ")), [1, 2, 4, 5, 3]);
    }

    #[test]
    fn entries_project_name_and_role() {
        let tree = staff();
        let all = entries(&tree);
        assert_eq!(
            all[1],
            DirectoryEntry {
                id: MemberId(2),
                name: "Bo Park",
                role: Some("CTO"),
            }
        );
        assert_eq!(all[4].role, None);
    }

    #[test]
    fn folded_term_is_reusable() {
        let tree = staff();
        let term = SearchTerm::new("Cy");
        assert_eq!(term.as_str(), "cy");
        assert!(term.matches("CYRUS"));
        assert_eq!(ids(&search_term(&tree, &term)), [4]);
        assert!(SearchTerm::default().matches("anyone"));
    }

    #[test]
    fn unicode_names_fold() {
        let tree = normalize(
            &RawRecord::new(1, "Ölof Åberg").with_child(RawRecord::new(2, "Zoë Ünal")),
        )
        .unwrap();
        assert_eq!(ids(&search(&tree, "öLOF")), [1]);
        assert_eq!(ids(&search(&tree, "ÜNAL")), [2]);
    }
}
