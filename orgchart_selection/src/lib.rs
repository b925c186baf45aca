// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Selection: select a member, reveal it, and highlight its ancestor path.
//!
//! This crate ties together the model, the collapse state, and the directory:
//!
//! - [`SelectionState`]: the highlighted member and its root-to-member path.
//! - [`select_by_id`]: the core step over borrowed state. It finds the path,
//!   expands every ancestor, and records the selection.
//! - [`SelectionController`]: one context that owns the current model with its
//!   collapse and selection state, replaces all three on reload, and emits
//!   [`Effect`]s for its host.
//! - [`DetailState`]: the detail panel for the selected member, filled in by an
//!   external member-detail source.
//!
//! ## Effects
//!
//! Selecting a member emits [`Effect::BringIntoView`] and, unless the lookup is
//! already in flight or done, [`Effect::FetchDetail`]. Both carry the
//! [`Generation`] of the model they were issued against. Centering must happen
//! after the host has laid out the view that reveals the member, so the host
//! hands the request back through [`SelectionController::accept_center`] once
//! layout is done. Requests from an older generation are refused.
//!
//! ## Example
//!
//! ```rust
//! use orgchart_model::{MemberId, RawRecord};
//! use orgchart_selection::{Effect, SelectionController};
//!
//! let raw = RawRecord::new(1, "Ann Lee")
//!     .with_child(RawRecord::new(2, "Bo Park").with_child(RawRecord::new(3, "Cy Ito")));
//!
//! let mut org: SelectionController = SelectionController::new();
//! org.load(&raw).unwrap();
//! org.toggle(MemberId(2));
//!
//! // Picking a hidden member from the directory reveals it.
//! let picked = org.search("cy")[0].id;
//! assert!(org.select(picked));
//! assert_eq!(org.selection().unwrap().path(), &[MemberId(1), MemberId(2), MemberId(3)]);
//!
//! let view = org.view().unwrap();
//! assert!(view.get(MemberId(3)).unwrap().is_highlighted());
//! drop(view);
//!
//! for effect in org.drain_effects() {
//!     if let Effect::BringIntoView(request) = effect {
//!         assert_eq!(org.accept_center(request), Some(MemberId(3)));
//!     }
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod detail;
mod state;
mod types;

pub use controller::SelectionController;
pub use detail::{DetailState, DetailUnavailable};
pub use state::{SelectionState, select_by_id};
pub use types::{CenterRequest, DetailRequest, Effect, Generation};
