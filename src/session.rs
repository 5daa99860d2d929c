// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! The canvas session: node store plus transient interaction state.
//!
//! `CanvasSession` is the value that flows between `AppState` and the
//! canvas widget. The widget holds a mutable clone, mutates it in event
//! handlers, and emits it back to the app; answer replies mutate the
//! app-side copy, which then replaces the widget's clone on rebuild.

use kurbo::{Point, Rect};

use crate::geometry;
use crate::model::{Node, NodeId};
use crate::settings;
use crate::store::{NodePatch, NodeStore};

/// Items offered by the node context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Reopen the question for editing, keeping its text
    Edit,
    /// Reopen and immediately submit the unchanged text
    Resubmit,
}

impl MenuItem {
    /// All items, in display order
    pub const ALL: [MenuItem; 2] = [MenuItem::Edit, MenuItem::Resubmit];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Edit => "edit",
            MenuItem::Resubmit => "resubmit",
        }
    }
}

/// An open context menu anchored at a canvas position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenu {
    /// The question node the menu acts on
    pub node: NodeId,
    /// Top-left corner of the menu (the right-click position)
    pub position: Point,
}

impl ContextMenu {
    /// Rectangle of the item at `index`
    pub fn item_rect(&self, index: usize) -> Rect {
        let top = self.position.y + index as f64 * settings::menu::ITEM_HEIGHT;
        Rect::new(
            self.position.x,
            top,
            self.position.x + settings::menu::ITEM_WIDTH,
            top + settings::menu::ITEM_HEIGHT,
        )
    }

    /// The whole menu rectangle
    pub fn frame(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + settings::menu::ITEM_WIDTH,
            self.position.y + MenuItem::ALL.len() as f64 * settings::menu::ITEM_HEIGHT,
        )
    }

    /// Which item, if any, sits under `point`
    pub fn hit_item(&self, point: Point) -> Option<MenuItem> {
        MenuItem::ALL
            .into_iter()
            .enumerate()
            .find(|(index, _)| self.item_rect(*index).contains(point))
            .map(|(_, item)| item)
    }
}

/// Everything the canvas needs to render and react to input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasSession {
    /// The node sequence
    pub store: NodeStore,
    /// Node currently receiving keyboard input, if any
    pub focused: Option<NodeId>,
    /// Open context menu, if any
    pub menu: Option<ContextMenu>,
}

impl CanvasSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new question node near `point`, shifted to avoid
    /// overlapping existing nodes, and focus it for typing.
    pub fn create_question_at(&mut self, point: Point) -> NodeId {
        let desired = Rect::from_origin_size(
            point,
            (
                settings::node::QUESTION_WIDTH,
                settings::node::QUESTION_HEIGHT,
            ),
        );
        let placed = geometry::place_non_overlapping(&self.store.frames(), desired);
        let id = self.store.create(Node::question(placed));
        self.focused = Some(id);
        id
    }

    /// The topmost node under `point` (latest created wins)
    pub fn node_at(&self, point: Point) -> Option<&Node> {
        self.store
            .nodes()
            .iter()
            .rev()
            .find(|node| node.frame().contains(point))
    }

    /// Append a character to the focused node's text.
    ///
    /// Text may only be mutated while the node is unlocked; edits against
    /// locked or missing nodes are dropped.
    pub fn insert_text(&mut self, text: &str) {
        let Some(node) = self.focused.and_then(|id| self.store.get(id)) else {
            return;
        };
        if !node.is_editable() {
            return;
        }
        let id = node.id;
        let mut updated = node.text.clone();
        updated.push_str(text);
        self.store.update(id, NodePatch::text(updated));
    }

    /// Remove the last character from the focused node's text
    pub fn backspace(&mut self) {
        let Some(node) = self.focused.and_then(|id| self.store.get(id)) else {
            return;
        };
        if !node.is_editable() {
            return;
        }
        let id = node.id;
        let mut updated = node.text.clone();
        updated.pop();
        self.store.update(id, NodePatch::text(updated));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NodePatch;

    #[test]
    fn double_click_placement_avoids_existing_nodes() {
        let mut session = CanvasSession::new();
        let first = session.create_question_at(Point::new(100.0, 100.0));
        assert_eq!(
            session.store.get(first).unwrap().position,
            Point::new(100.0, 100.0)
        );

        // Creating a second question on top of the first shifts it
        let second = session.create_question_at(Point::new(100.0, 100.0));
        let placed = session.store.get(second).unwrap().position;
        assert_ne!(placed, Point::new(100.0, 100.0));
    }

    #[test]
    fn hit_testing_prefers_latest_node() {
        let mut session = CanvasSession::new();
        let first = session.create_question_at(Point::new(0.0, 0.0));
        let second = session.create_question_at(Point::new(10.0, 10.0));

        let second_pos = session.store.get(second).unwrap().position;
        let probe = Point::new(second_pos.x + 5.0, second_pos.y + 5.0);
        let hit = session.node_at(probe).unwrap();
        assert_eq!(hit.id, second);
        assert_ne!(hit.id, first);
    }

    #[test]
    fn text_edits_require_unlocked_focus() {
        let mut session = CanvasSession::new();
        let id = session.create_question_at(Point::ZERO);

        session.insert_text("hi");
        assert_eq!(session.store.get(id).unwrap().text, "hi");

        session.backspace();
        assert_eq!(session.store.get(id).unwrap().text, "h");

        // Locked node refuses edits even while focused
        session.store.update(id, NodePatch::locked(true));
        session.insert_text("!");
        session.backspace();
        assert_eq!(session.store.get(id).unwrap().text, "h");

        // No focus, no edits
        session.store.update(id, NodePatch::locked(false));
        session.focused = None;
        session.insert_text("!");
        assert_eq!(session.store.get(id).unwrap().text, "h");
    }

    #[test]
    fn menu_hit_testing() {
        let menu = ContextMenu {
            node: NodeId::next(),
            position: Point::new(50.0, 50.0),
        };
        assert_eq!(menu.hit_item(Point::new(60.0, 60.0)), Some(MenuItem::Edit));
        assert_eq!(
            menu.hit_item(Point::new(60.0, 90.0)),
            Some(MenuItem::Resubmit)
        );
        assert_eq!(menu.hit_item(Point::new(10.0, 10.0)), None);
    }
}
