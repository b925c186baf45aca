// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Collapse: collapse/expand state and the derived view tree.
//!
//! - [`CollapseState`]: a set of collapsed member ids. Unknown ids are harmless.
//! - [`ViewTree`]: the pruned tree a renderer draws, derived from an
//!   [`OrgTree`](orgchart_model::OrgTree) and a [`CollapseState`].
//! - [`ViewFlags`]: per-node presentation flags (has children, collapsed, highlighted, on path).
//! - [`ViewEdge`]: a manager → report edge between visible nodes, flagged when it lies on
//!   the highlighted path.
//!
//! ## Derivation, not mutation
//!
//! The view is recomputed from `(model, collapse state)` on every change; nothing
//! is diffed or cached between calls. The model stores members in pre-order, so
//! derivation is a single linear pass that jumps over collapsed subtrees.
//! Hierarchies here are tens to a few hundred members, so this stays cheap.
//!
//! ## Example
//!
//! ```rust
//! use orgchart_collapse::{CollapseState, ViewFlags};
//! use orgchart_model::{MemberId, RawRecord, find_path, normalize};
//!
//! let raw = RawRecord::new(1, "Ann Lee")
//!     .with_child(RawRecord::new(2, "Bo Park").with_child(RawRecord::new(3, "Cy Ito")));
//! let tree = normalize(&raw).unwrap();
//!
//! let mut collapse = CollapseState::new();
//! collapse.toggle(MemberId(2));
//! assert!(!collapse.derive_view(&tree).is_visible(MemberId(3)));
//!
//! // Revealing a member expands everything on its ancestor path.
//! let path = find_path(tree.root(), MemberId(3)).unwrap();
//! collapse.expand_ancestors(&path);
//! let mut view = collapse.derive_view(&tree);
//! view.apply_highlight(&path, Some(MemberId(3)));
//!
//! let cy = view.get(MemberId(3)).unwrap();
//! assert!(cy.flags().contains(ViewFlags::HIGHLIGHTED | ViewFlags::ON_PATH));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod state;
mod types;
mod view;

pub use state::CollapseState;
pub use types::{ViewEdge, ViewFlags};
pub use view::{ViewNode, ViewTree};
