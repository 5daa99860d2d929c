// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! The Q&A canvas widget - the freeform surface holding question and
//! answer nodes.
//!
//! A leaf masonry widget. It owns a mutable clone of the [`CanvasSession`]
//! and emits [`CanvasUpdate`] actions whenever the session changes; the
//! Xilem view wrapper forwards those to `AppState`. Submissions captured
//! by pointer handlers ride along in the same action so the app can hand
//! them to the background worker.

mod keyboard;
mod paint;
mod pointer;
mod view;

pub use view::canvas_view;

use kurbo::Point;
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, RegisterCtx,
    TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use std::sync::Arc;

use crate::drag::Drag;
use crate::lifecycle::SubmissionRequest;
use crate::session::CanvasSession;

/// The canvas widget
pub struct CanvasWidget {
    /// The canvas session (mutable copy for interaction)
    pub session: CanvasSession,

    /// Active drag gesture, if any
    pub(super) drag: Option<Drag>,

    /// Canvas size
    size: Size,

    /// Submissions captured since the last emitted update
    pending_submissions: Vec<SubmissionRequest>,

    /// Last click time for double-click detection
    last_click_time: Option<std::time::Instant>,

    /// Last click position for double-click detection
    last_click_position: Option<Point>,
}

impl CanvasWidget {
    /// Create a new canvas widget
    pub fn new(session: Arc<CanvasSession>) -> Self {
        Self {
            session: (*session).clone(),
            drag: None,
            size: Size::new(800.0, 600.0),
            pending_submissions: Vec::new(),
            last_click_time: None,
            last_click_position: None,
        }
    }

    /// Emit the current session (plus any captured submissions) to the app
    pub(super) fn emit_update(&mut self, ctx: &mut EventCtx<'_>) {
        ctx.submit_action::<CanvasUpdate>(CanvasUpdate {
            session: self.session.clone(),
            submissions: std::mem::take(&mut self.pending_submissions),
        });
    }
}

/// Action emitted by the canvas widget when the session is updated
#[derive(Debug, Clone)]
pub struct CanvasUpdate {
    pub session: CanvasSession,
    /// Submissions captured at submit time, for the worker to dispatch
    pub submissions: Vec<SubmissionRequest>,
}

impl Widget for CanvasWidget {
    type Action = CanvasUpdate;

    fn accepts_focus(&self) -> bool {
        // Allow this widget to receive keyboard events
        true
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        // Use all available space (expand to fill the window)
        let size = bc.max();
        self.size = size;
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let canvas_size = ctx.size();
        self.paint_background(scene, canvas_size);
        self.paint_nodes(scene);
        self.paint_menu(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        // Always request focus on any pointer event so keyboard input works
        ctx.request_focus();

        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_down(ctx, state);
            }

            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Secondary),
                state,
                ..
            }) => {
                self.handle_secondary_down(ctx, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_up(ctx, state);
            }

            PointerEvent::Cancel(_) => {
                self.handle_pointer_cancel(ctx);
            }

            _ => {
                // Ignore other pointer events
            }
        }
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        self.handle_text_event(ctx, event);
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!(
            "Question and answer canvas with {} nodes",
            self.session.store.len()
        ));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
