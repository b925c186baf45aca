// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the view: per-node flags and edges.

use orgchart_model::MemberId;

bitflags::bitflags! {
    /// Presentation flags carried by each node of a [`ViewTree`](crate::ViewTree).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ViewFlags: u8 {
        /// The member has reports in the model, even if they are hidden here.
        ///
        /// Renderers use this to decide whether to draw a collapse toggle.
        const HAS_CHILDREN = 0b0000_0001;
        /// The member is collapsed; its children are presented as empty.
        const COLLAPSED    = 0b0000_0010;
        /// The member is the current selection.
        const HIGHLIGHTED  = 0b0000_0100;
        /// The member lies on the highlighted ancestor path.
        const ON_PATH      = 0b0000_1000;
    }
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// A manager → report edge between two visible nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ViewEdge {
    /// The manager end.
    pub source: MemberId,
    /// The report end.
    pub target: MemberId,
    /// Both ends lie on the highlighted ancestor path.
    pub highlighted: bool,
}
