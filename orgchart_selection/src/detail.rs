// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Member-detail panel state.

use orgchart_model::MemberId;

/// State of the detail panel for the selected member.
///
/// `D` is whatever the member-detail source returns (contact info, salary,
/// status, and so on). The engine stores it and hands it back; it never
/// looks inside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailState<D> {
    /// Nothing is selected.
    #[default]
    Absent,
    /// A lookup for this member is in flight.
    Loading(MemberId),
    /// Details for this member have arrived.
    Ready(MemberId, D),
    /// The lookup for this member failed.
    Unavailable(MemberId),
}

impl<D> DetailState<D> {
    /// The member this state refers to, if any.
    pub fn member(&self) -> Option<MemberId> {
        match self {
            Self::Absent => None,
            Self::Loading(id) | Self::Ready(id, _) | Self::Unavailable(id) => Some(*id),
        }
    }

    /// The loaded payload, if any.
    pub fn payload(&self) -> Option<&D> {
        match self {
            Self::Ready(_, detail) => Some(detail),
            _ => None,
        }
    }

    /// Returns true while a lookup is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

/// The member-detail source could not produce details.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("details for member {id} are unavailable")]
pub struct DetailUnavailable {
    /// The member whose lookup failed.
    pub id: MemberId,
}
