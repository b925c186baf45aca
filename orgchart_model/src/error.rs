// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalization failures.

use crate::types::MemberId;

/// A raw record that cannot be turned into an [`OrgTree`](crate::OrgTree).
///
/// Any of these is fatal to the whole record: callers keep their previous
/// model instead of installing a partial one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecord {
    /// A record has no `id`.
    #[error("record #{index} under {parent:?} has no id")]
    MissingId {
        /// Id of the enclosing record, or `None` for the root.
        parent: Option<MemberId>,
        /// Position of the record among its siblings.
        index: usize,
    },
    /// A record has no `name`.
    #[error("member {id} has no name")]
    MissingName {
        /// Id of the nameless record.
        id: MemberId,
    },
    /// The same id appears on more than one record.
    #[error("member id {id} appears more than once")]
    DuplicateId {
        /// The repeated id.
        id: MemberId,
    },
    /// The hierarchy nests deeper than the configured limit.
    #[error("member {id} is nested deeper than {max_depth} levels")]
    TooDeep {
        /// First record found beyond the limit.
        id: MemberId,
        /// The limit from [`NormalizeOptions::max_depth`](crate::NormalizeOptions::max_depth).
        max_depth: usize,
    },
}
