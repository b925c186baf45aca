// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the model: member identifiers and the raw nested record.

use alloc::string::String;
use alloc::vec::Vec;

/// Identifier of an organization member.
///
/// Ids are opaque to the engine. They are only guaranteed to be stable within
/// one fetched snapshot of the hierarchy, so they must not be carried over to a
/// freshly loaded [`OrgTree`](crate::OrgTree).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MemberId(pub u64);

impl From<u64> for MemberId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl core::fmt::Display for MemberId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One member of the organization record as delivered by the record source.
///
/// Every field is optional at this layer; [`normalize`](crate::normalize) decides
/// which absences are tolerated (`role`, `photo_url`, `children`) and which are
/// fatal (`id`, `name`).
///
/// With the `serde` feature enabled, records deserialize from the nested JSON
/// shape `{ "id": 1, "name": "..", "role": "..", "children": [..] }`, with
/// missing fields treated as absent.
///
/// The derived `Clone`, `PartialEq`, and `Drop` follow the nesting, so their
/// stack use grows with record depth. Only [`normalize`](crate::normalize) and
/// the [`OrgTree`](crate::OrgTree) it produces are depth-independent; keep raw
/// records short-lived and bound untrusted input at the parser (`serde_json`
/// stops at 128 levels by default).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RawRecord {
    /// Member identifier. Required.
    pub id: Option<MemberId>,
    /// Display name. Required.
    pub name: Option<String>,
    /// Short role label, for example a job title.
    pub role: Option<String>,
    /// Avatar location, passed through untouched for the renderer.
    pub photo_url: Option<String>,
    /// Direct reports in display order.
    pub children: Option<Vec<Self>>,
}

impl RawRecord {
    /// Create a record with an id and a name and no role or children.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: Some(MemberId(id)),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the role label.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the avatar location.
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    /// Append a direct report.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Append several direct reports, keeping their order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.get_or_insert_with(Vec::new).extend(children);
        self
    }
}
