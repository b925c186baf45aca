// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generations and the effects the controller asks its host to perform.

use orgchart_model::MemberId;

/// Identifies one loaded model snapshot.
///
/// Each successful load bumps the generation. Requests carry the generation
/// they were issued against, so responses for an older model can be told
/// apart and dropped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// The raw counter. Zero means no model has been loaded yet.
    pub fn get(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Ask the layout/viewport collaborator to bring a member into view.
///
/// Issue order is not completion order: the member may only have become
/// visible as part of the same selection, so the host should lay out the new
/// view first and then pass the request back through
/// [`SelectionController::accept_center`](crate::SelectionController::accept_center).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CenterRequest {
    /// Member to center on.
    pub id: MemberId,
    /// Model the request was issued against.
    pub generation: Generation,
}

/// Ask the member-detail source for one member's extended record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DetailRequest {
    /// Member to look up.
    pub id: MemberId,
    /// Model the request was issued against.
    pub generation: Generation,
}

/// Work the controller hands to its host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Center the viewport on a member once the view has been laid out.
    BringIntoView(CenterRequest),
    /// Fetch a member's details.
    FetchDetail(DetailRequest),
}
