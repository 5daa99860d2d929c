// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! The per-question submission state machine.
//!
//! A question is editable until submitted. `submit` locks it immediately
//! (before any network round trip) and captures the text and origin by
//! value, so a node dragged while its request is in flight still gets its
//! answer placed relative to where it sat at submit time. `complete`
//! materializes the answer node against the store as it exists at reply
//! time, so answers from faster concurrent requests participate in
//! collision avoidance. Failures become a placeholder answer node; the
//! question stays locked until the user explicitly reopens it.

use kurbo::{Point, Rect, Vec2};

use crate::geometry;
use crate::model::{Node, NodeId, NodeKind};
use crate::settings;
use crate::store::{NodePatch, NodeStore};

/// A submission captured at submit time
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    /// The question node that was submitted
    pub node: NodeId,
    /// The question text at submit time
    pub question: String,
    /// The question's position at submit time
    pub origin: Point,
}

/// The outcome of one submission, delivered back to the UI
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerReply {
    /// The question node that was submitted
    pub node: NodeId,
    /// The question's position at submit time
    pub origin: Point,
    /// The backend's answer, or `None` for any failure
    pub answer: Option<String>,
}

/// Attempt to submit the question at `id`.
///
/// Preconditions: the node exists, is a question, is unlocked, and its
/// trimmed text is non-empty. Violations are silent no-ops (this is what
/// guards against double-submit and empty submissions). On success the
/// node is locked and a request carrying the captured text and origin is
/// returned for the caller to dispatch.
pub fn submit(store: &mut NodeStore, id: NodeId) -> Option<SubmissionRequest> {
    let Some(node) = store.get(id) else {
        tracing::debug!("submit: {:?} not found", id);
        return None;
    };
    if node.kind != NodeKind::Question || node.locked || node.text.trim().is_empty() {
        tracing::debug!("submit: {:?} rejected (locked or empty)", id);
        return None;
    }

    let request = SubmissionRequest {
        node: id,
        question: node.text.clone(),
        origin: node.position,
    };

    // Optimistic lock: no re-entrant submission while the request is in
    // flight.
    store.update(id, NodePatch::locked(true));
    tracing::info!("submitted question {:?}", id);
    Some(request)
}

/// Materialize the answer node for a completed submission.
///
/// The desired position is the captured origin shifted right by the fixed
/// answer offset; it is resolved through the collision search against the
/// store's current frames. A missing answer yields the literal failure
/// text. The originating question is left locked either way.
pub fn complete(store: &mut NodeStore, reply: AnswerReply) -> NodeId {
    let desired_origin = reply.origin + Vec2::new(settings::node::ANSWER_OFFSET_X, 0.0);
    let desired = Rect::from_origin_size(
        desired_origin,
        (settings::node::ANSWER_WIDTH, settings::node::ANSWER_HEIGHT),
    );
    let placed = geometry::place_non_overlapping(&store.frames(), desired);

    let text = match reply.answer {
        Some(answer) => answer,
        None => {
            tracing::warn!("submission for {:?} failed", reply.node);
            settings::backend::FAILURE_TEXT.to_string()
        }
    };
    store.create(Node::answer(placed, text))
}

/// Explicit re-edit: unlock the question without touching its text.
///
/// Valid from any locked question state; a no-op for answers, unlocked
/// questions, and missing ids.
pub fn reopen(store: &mut NodeStore, id: NodeId) {
    let Some(node) = store.get(id) else {
        return;
    };
    if node.kind != NodeKind::Question || !node.locked {
        return;
    }
    tracing::info!("reopening question {:?}", id);
    store.update(id, NodePatch::locked(false));
}

/// Clear the question's text; available only while editable.
pub fn clear_text(store: &mut NodeStore, id: NodeId) {
    let Some(node) = store.get(id) else {
        return;
    };
    if !node.is_editable() {
        return;
    }
    store.update(id, NodePatch::text(String::new()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_with_text(store: &mut NodeStore, position: Point, text: &str) -> NodeId {
        let id = store.create(Node::question(position));
        store.update(id, NodePatch::text(text));
        id
    }

    #[test]
    fn submit_locks_immediately_and_captures_state() {
        let mut store = NodeStore::new();
        let id = question_with_text(&mut store, Point::new(100.0, 100.0), "hello");

        let request = submit(&mut store, id).expect("submission accepted");
        assert!(store.get(id).unwrap().locked);
        assert_eq!(request.question, "hello");
        assert_eq!(request.origin, Point::new(100.0, 100.0));

        // Dragging after submit must not affect the captured origin
        store.update(id, NodePatch::position(Point::new(900.0, 900.0)));
        assert_eq!(request.origin, Point::new(100.0, 100.0));
    }

    #[test]
    fn double_submit_is_a_noop() {
        let mut store = NodeStore::new();
        let id = question_with_text(&mut store, Point::ZERO, "hello");

        assert!(submit(&mut store, id).is_some());
        // Second submit before the first resolves: rejected at the lock
        assert!(submit(&mut store, id).is_none());
    }

    #[test]
    fn empty_or_whitespace_text_is_rejected() {
        let mut store = NodeStore::new();
        let empty = store.create(Node::question(Point::ZERO));
        assert!(submit(&mut store, empty).is_none());
        assert!(!store.get(empty).unwrap().locked);

        let blank = question_with_text(&mut store, Point::ZERO, "   \n\t");
        assert!(submit(&mut store, blank).is_none());
        assert!(!store.get(blank).unwrap().locked);
    }

    #[test]
    fn answers_cannot_be_submitted() {
        let mut store = NodeStore::new();
        let id = store.create(Node::answer(Point::ZERO, "text".into()));
        assert!(submit(&mut store, id).is_none());
    }

    #[test]
    fn successful_submission_places_answer_beside_question() {
        let mut store = NodeStore::new();
        let id = question_with_text(&mut store, Point::new(100.0, 100.0), "hello");

        let request = submit(&mut store, id).unwrap();
        let answer_id = complete(
            &mut store,
            AnswerReply {
                node: request.node,
                origin: request.origin,
                answer: Some("world".into()),
            },
        );

        assert_eq!(store.len(), 2);
        let answer = store.get(answer_id).unwrap();
        assert_eq!(answer.kind, NodeKind::Answer);
        assert_eq!(answer.text, "world");
        assert!(answer.locked);
        // Empty canvas to the right of the question: no displacement
        assert_eq!(answer.position, Point::new(460.0, 100.0));
    }

    #[test]
    fn colliding_answers_advance_by_the_step_vector() {
        let mut store = NodeStore::new();
        let first = question_with_text(&mut store, Point::new(100.0, 100.0), "one");
        let second = question_with_text(&mut store, Point::new(100.0, 130.0), "two");

        let first_request = submit(&mut store, first).unwrap();
        let second_request = submit(&mut store, second).unwrap();

        let first_answer = complete(
            &mut store,
            AnswerReply {
                node: first_request.node,
                origin: first_request.origin,
                answer: Some("a".into()),
            },
        );
        assert_eq!(
            store.get(first_answer).unwrap().position,
            Point::new(460.0, 100.0)
        );

        // The second answer's desired spot (460, 130) overlaps the first
        // answer; it must advance along (32, 28) until clear.
        let second_answer = complete(
            &mut store,
            AnswerReply {
                node: second_request.node,
                origin: second_request.origin,
                answer: Some("b".into()),
            },
        );
        let placed = store.get(second_answer).unwrap().position;
        assert_ne!(placed, Point::new(460.0, 130.0));
        let k = (placed.x - 460.0) / 32.0;
        assert!(k >= 1.0);
        assert_eq!(placed.x, 460.0 + k * 32.0);
        assert_eq!(placed.y, 130.0 + k * 28.0);
    }

    #[test]
    fn failed_submission_creates_placeholder_and_keeps_lock() {
        let mut store = NodeStore::new();
        let id = question_with_text(&mut store, Point::new(100.0, 100.0), "hello");

        let request = submit(&mut store, id).unwrap();
        let answer_id = complete(
            &mut store,
            AnswerReply {
                node: request.node,
                origin: request.origin,
                answer: None,
            },
        );

        assert_eq!(store.len(), 2);
        let answer = store.get(answer_id).unwrap();
        assert_eq!(answer.text, settings::backend::FAILURE_TEXT);
        assert!(answer.locked);
        // The question is not rolled back to editable
        assert!(store.get(id).unwrap().locked);
    }

    #[test]
    fn reopen_allows_resubmission_without_changing_text() {
        let mut store = NodeStore::new();
        let id = question_with_text(&mut store, Point::ZERO, "hello");

        submit(&mut store, id).unwrap();
        reopen(&mut store, id);

        let node = store.get(id).unwrap();
        assert!(!node.locked);
        assert_eq!(node.text, "hello");

        // A subsequent submit is accepted again
        assert!(submit(&mut store, id).is_some());
    }

    #[test]
    fn reopen_ignores_answers_and_unlocked_questions() {
        let mut store = NodeStore::new();
        let answer = store.create(Node::answer(Point::ZERO, "text".into()));
        reopen(&mut store, answer);
        assert!(store.get(answer).unwrap().locked);

        let question = question_with_text(&mut store, Point::ZERO, "q");
        reopen(&mut store, question);
        assert!(!store.get(question).unwrap().locked);
    }

    #[test]
    fn clear_text_only_while_editable() {
        let mut store = NodeStore::new();
        let id = question_with_text(&mut store, Point::ZERO, "hello");

        submit(&mut store, id).unwrap();
        clear_text(&mut store, id);
        assert_eq!(store.get(id).unwrap().text, "hello");

        reopen(&mut store, id);
        clear_text(&mut store, id);
        assert_eq!(store.get(id).unwrap().text, "");
    }

    #[test]
    fn completion_sees_answers_from_faster_requests() {
        let mut store = NodeStore::new();
        let a = question_with_text(&mut store, Point::new(100.0, 100.0), "first");
        let b = question_with_text(&mut store, Point::new(100.0, 128.0), "second");

        let request_a = submit(&mut store, a).unwrap();
        let request_b = submit(&mut store, b).unwrap();

        // The second request completes first; the first must then dodge it.
        complete(
            &mut store,
            AnswerReply {
                node: request_b.node,
                origin: request_b.origin,
                answer: Some("b".into()),
            },
        );
        let answer_a = complete(
            &mut store,
            AnswerReply {
                node: request_a.node,
                origin: request_a.origin,
                answer: Some("a".into()),
            },
        );
        let placed = store.get(answer_a).unwrap().position;
        assert_ne!(placed, Point::new(460.0, 100.0));
    }
}
