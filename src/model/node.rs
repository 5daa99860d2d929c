// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas nodes: questions typed by the user and answers returned by the
//! Q&A backend.
//!
//! A node is a rectangle with a kind-fixed size, a mutable position, and a
//! text body. Questions start unlocked and editable; submitting one locks
//! it. Answers are born locked and never change after creation.

use kurbo::{Point, Rect, Size};

use super::NodeId;
use crate::settings;

/// Which kind of node this is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A user-authored question (editable until locked)
    Question,
    /// A backend-produced answer (read-only)
    Answer,
}

/// A rectangular element on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique id, assigned at creation, never mutated
    pub id: NodeId,
    /// Kind discriminant, never mutated
    pub kind: NodeKind,
    /// Top-left corner in canvas coordinates
    pub position: Point,
    /// Text body; user-edited for questions, set once for answers
    pub text: String,
    /// Whether text edits are forbidden
    pub locked: bool,
}

impl Node {
    /// Create a new editable question at `position` with empty text
    pub fn question(position: Point) -> Self {
        Self {
            id: NodeId::next(),
            kind: NodeKind::Question,
            position,
            text: String::new(),
            locked: false,
        }
    }

    /// Create a new answer at `position`; answers are locked from birth
    pub fn answer(position: Point, text: String) -> Self {
        Self {
            id: NodeId::next(),
            kind: NodeKind::Answer,
            position,
            text,
            locked: true,
        }
    }

    /// The fixed size for this node's kind
    pub fn size(&self) -> Size {
        match self.kind {
            NodeKind::Question => Size::new(
                settings::node::QUESTION_WIDTH,
                settings::node::QUESTION_HEIGHT,
            ),
            NodeKind::Answer => {
                Size::new(settings::node::ANSWER_WIDTH, settings::node::ANSWER_HEIGHT)
            }
        }
    }

    /// The node's bounding rectangle at its current position
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size())
    }

    /// The draggable title bar strip at the top of the frame
    pub fn title_bar(&self) -> Rect {
        let frame = self.frame();
        Rect::new(
            frame.x0,
            frame.y0,
            frame.x1,
            frame.y0 + settings::node::TITLE_BAR_HEIGHT,
        )
    }

    /// The submit button region, present only on editable questions
    pub fn submit_button(&self) -> Option<Rect> {
        if !self.is_editable() {
            return None;
        }
        let frame = self.frame();
        let margin = settings::node::SUBMIT_BUTTON_MARGIN;
        let x1 = frame.x1 - margin;
        let y1 = frame.y1 - margin;
        Some(Rect::new(
            x1 - settings::node::SUBMIT_BUTTON_WIDTH,
            y1 - settings::node::SUBMIT_BUTTON_HEIGHT,
            x1,
            y1,
        ))
    }

    /// Whether this node currently accepts text edits
    pub fn is_editable(&self) -> bool {
        self.kind == NodeKind::Question && !self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_fixes_size() {
        let q = Node::question(Point::new(10.0, 20.0));
        assert_eq!(q.size(), Size::new(320.0, 180.0));
        let a = Node::answer(Point::new(0.0, 0.0), "hi".into());
        assert_eq!(a.size(), Size::new(320.0, 120.0));
    }

    #[test]
    fn question_starts_editable_answer_does_not() {
        let q = Node::question(Point::ZERO);
        assert!(q.is_editable());
        assert!(q.submit_button().is_some());

        let a = Node::answer(Point::ZERO, "text".into());
        assert!(a.locked);
        assert!(!a.is_editable());
        assert!(a.submit_button().is_none());
    }

    #[test]
    fn frame_tracks_position() {
        let mut q = Node::question(Point::new(100.0, 100.0));
        assert_eq!(q.frame(), Rect::new(100.0, 100.0, 420.0, 280.0));
        q.position = Point::new(0.0, 0.0);
        assert_eq!(q.frame(), Rect::new(0.0, 0.0, 320.0, 180.0));
    }

    #[test]
    fn locked_question_hides_submit_button() {
        let mut q = Node::question(Point::ZERO);
        q.locked = true;
        assert!(q.submit_button().is_none());
    }
}
