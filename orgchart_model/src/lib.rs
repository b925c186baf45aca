// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Model: a normalized, immutable organization hierarchy.
//!
//! This crate is the bottom layer of the Orgchart crates. It turns the nested
//! record delivered by an organization-record source into an [`OrgTree`], and
//! answers structural questions about it.
//!
//! - [`RawRecord`]: the external nested record; every field optional at this layer.
//! - [`normalize`] / [`normalize_with`]: validate and convert a record into an [`OrgTree`].
//!   Missing `id` or `name`, repeated ids, and nesting beyond [`NormalizeOptions::max_depth`]
//!   are reported as [`MalformedRecord`].
//! - [`OrgTree`]: pre-order arena of members with an id index.
//! - [`OrgNode`]: a cheap, copyable handle onto one member.
//! - [`query`]: [`count_nodes`], [`find_path`], and [`flatten`].
//!
//! ## Where this fits
//!
//! - Model (this crate): who reports to whom. Immutable per fetched snapshot.
//! - `orgchart_collapse`: which members are collapsed, and the pruned view tree derived from that.
//! - `orgchart_directory`: flat, searchable listing.
//! - `orgchart_selection`: the controller tying selection, collapse state, and effects together.
//!
//! ## Not a layout engine
//!
//! This crate computes no coordinates. Positions of nodes and edges are left to
//! whatever hierarchical layout the renderer uses.
//!
//! ## Example
//!
//! ```rust
//! use orgchart_model::{MemberId, RawRecord, count_nodes, find_path, normalize};
//!
//! let raw = RawRecord::new(1, "Ann Lee")
//!     .with_child(RawRecord::new(2, "Bo Park").with_child(RawRecord::new(3, "Cy Ito")));
//! let tree = normalize(&raw).unwrap();
//!
//! assert_eq!(count_nodes(tree.root()), 3);
//! let path = find_path(tree.root(), MemberId(3)).unwrap();
//! assert_eq!(path.as_slice(), &[MemberId(1), MemberId(2), MemberId(3)]);
//! assert!(find_path(tree.root(), MemberId(42)).is_none());
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`RawRecord`] and [`MemberId`].
//! - `tracing`: logs accepted and rejected records through `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
pub mod query;
mod tree;
mod types;

pub use error::MalformedRecord;
pub use query::{Path, count_nodes, find_path, flatten};
pub use tree::{DEFAULT_MAX_DEPTH, NormalizeOptions, OrgNode, OrgTree, normalize, normalize_with};
pub use types::{MemberId, RawRecord};
