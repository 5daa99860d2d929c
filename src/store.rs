// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! The node store: single source of truth for the ordered node sequence.
//!
//! All mutation goes through [`NodeStore::create`] and [`NodeStore::update`].
//! Updates targeting an id that is no longer present are treated as stale
//! races and dropped silently. An update never changes a node's id or kind.

use kurbo::{Point, Rect};

use crate::model::{Node, NodeId};

/// Partial update applied to a node; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub position: Option<Point>,
    pub text: Option<String>,
    pub locked: Option<bool>,
}

impl NodePatch {
    /// Patch that only moves a node
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Patch that only replaces a node's text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Patch that only sets the locked flag
    pub fn locked(locked: bool) -> Self {
        Self {
            locked: Some(locked),
            ..Self::default()
        }
    }
}

/// Ordered collection of canvas nodes, keyed by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStore {
    nodes: Vec<Node>,
}

impl NodeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully-formed node and return its id
    pub fn create(&mut self, node: Node) -> NodeId {
        let id = node.id;
        tracing::debug!("creating {:?} node {:?}", node.kind, id);
        self.nodes.push(node);
        id
    }

    /// Merge `patch` onto the node at `id`.
    ///
    /// Silently ignored when `id` is absent (a stale update racing a node
    /// set that has moved on).
    pub fn update(&mut self, id: NodeId, patch: NodePatch) {
        let Some(node) = self.nodes.iter_mut().find(|node| node.id == id) else {
            tracing::debug!("dropping stale update for {:?}", id);
            return;
        };
        if let Some(position) = patch.position {
            node.position = position;
        }
        if let Some(text) = patch.text {
            node.text = text;
        }
        if let Some(locked) = patch.locked {
            node.locked = locked;
        }
    }

    /// Look up a node by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// All nodes in creation order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Bounding rectangles of every node, for collision candidate lists
    pub fn frames(&self) -> Vec<Rect> {
        self.nodes.iter().map(Node::frame).collect()
    }

    /// Number of nodes in the store
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;

    #[test]
    fn create_preserves_order() {
        let mut store = NodeStore::new();
        let first = store.create(Node::question(Point::new(0.0, 0.0)));
        let second = store.create(Node::question(Point::new(500.0, 0.0)));

        assert_eq!(store.len(), 2);
        assert_eq!(store.nodes()[0].id, first);
        assert_eq!(store.nodes()[1].id, second);
    }

    #[test]
    fn partial_update_leaves_other_fields_alone() {
        let mut store = NodeStore::new();
        let id = store.create(Node::question(Point::new(10.0, 10.0)));
        store.update(id, NodePatch::text("hello"));

        let node = store.get(id).unwrap();
        assert_eq!(node.text, "hello");
        assert_eq!(node.position, Point::new(10.0, 10.0));
        assert!(!node.locked);

        store.update(id, NodePatch::position(Point::new(50.0, 60.0)));
        let node = store.get(id).unwrap();
        assert_eq!(node.text, "hello");
        assert_eq!(node.position, Point::new(50.0, 60.0));

        store.update(id, NodePatch::locked(true));
        let node = store.get(id).unwrap();
        assert_eq!(node.text, "hello");
        assert_eq!(node.position, Point::new(50.0, 60.0));
        assert!(node.locked);
    }

    #[test]
    fn stale_update_is_silently_ignored() {
        let mut store = NodeStore::new();
        store.create(Node::question(Point::ZERO));
        let before = store.clone();

        // An id the store has never seen
        store.update(NodeId::next(), NodePatch::text("ghost"));
        assert_eq!(store, before);
    }

    #[test]
    fn update_never_changes_id_or_kind() {
        let mut store = NodeStore::new();
        let id = store.create(Node::question(Point::ZERO));
        store.update(
            id,
            NodePatch {
                position: Some(Point::new(1.0, 2.0)),
                text: Some("x".into()),
                locked: Some(true),
            },
        );
        let node = store.get(id).unwrap();
        assert_eq!(node.id, id);
        assert_eq!(node.kind, NodeKind::Question);
    }

    #[test]
    fn frames_follow_creation_order() {
        let mut store = NodeStore::new();
        store.create(Node::question(Point::new(0.0, 0.0)));
        store.create(Node::answer(Point::new(400.0, 0.0), "a".into()));

        let frames = store.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], Rect::new(0.0, 0.0, 320.0, 180.0));
        assert_eq!(frames[1], Rect::new(400.0, 0.0, 720.0, 120.0));
    }
}
