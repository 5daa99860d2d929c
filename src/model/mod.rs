// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Core data model: node identity and the node entity itself.

pub mod node;
pub mod node_id;

pub use node::{Node, NodeKind};
pub use node_id::NodeId;
