// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by structural tree mutations.

use crate::types::NodeId;

/// Failure of a structural tree mutation.
///
/// Dispatch and queries never fail; they treat stale ids as absent. Only
/// operations that would otherwise attach to, or reshape, a missing or
/// mismatched node report an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The id does not refer to a live container.
    #[error("container {0:?} is not alive")]
    StaleNode(NodeId),
    /// The operation requires a scroll composite.
    #[error("container {0:?} is not a scroll composite")]
    NotScroll(NodeId),
}
