// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for canvas nodes.
//!
//! Each `NodeId` is a monotonically increasing `u64` generated from a global
//! atomic counter. IDs are used as keys into the node store and for matching
//! pointer targets during hit testing. They are never reused within a
//! session, so stale updates can be detected and dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a canvas node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

static NODE_COUNTER: AtomicU64 = AtomicU64::new(1);

impl NodeId {
    /// Create a new unique node ID
    pub fn next() -> Self {
        Self(NODE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::next()
    }
}
