// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for CanvasWidget

use super::{CanvasUpdate, CanvasWidget};
use crate::lifecycle::SubmissionRequest;
use crate::session::CanvasSession;
use crate::store::NodePatch;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a canvas view from a session with a callback for session updates
///
/// The callback receives the updated session and any submissions captured
/// since the last update.
pub fn canvas_view<State, F>(session: Arc<CanvasSession>, on_update: F) -> CanvasView<State, F>
where
    F: Fn(&mut State, CanvasSession, Vec<SubmissionRequest>),
{
    CanvasView {
        session,
        on_update,
        phantom: PhantomData,
    }
}

/// The Xilem View for CanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct CanvasView<State, F> {
    session: Arc<CanvasSession>,
    on_update: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for CanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, CanvasSession, Vec<SubmissionRequest>) + 'static>
    View<State, (), ViewCtx>
    for CanvasView<State, F>
{
    type Element = Pod<CanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = CanvasWidget::new(self.session.clone());
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // Update the widget's session if it changed (e.g. an answer node
        // arrived). We compare Arc pointers - if they're different, the
        // session was updated upstream.
        if !Arc::ptr_eq(&self.session, &prev.session) {
            tracing::debug!("[CanvasView::rebuild] Session Arc changed, updating widget");

            let mut widget = element.downcast::<CanvasWidget>();
            widget.widget.session = (*self.session).clone();

            // An answer can arrive mid-drag; the new session carries the
            // dragged node's last *emitted* position, so re-apply the
            // live drag position to keep the gesture from jumping.
            if let Some(drag) = widget.widget.drag {
                widget
                    .widget
                    .session
                    .store
                    .update(drag.node, NodePatch::position(drag.current_position()));
            }

            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
        // No cleanup needed
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        // Handle CanvasUpdate messages from the widget
        match message.take_message::<CanvasUpdate>() {
            Some(update) => {
                (self.on_update)(app_state, update.session, update.submissions);
                // Return Action(()) to propagate to root and trigger a
                // full app rebuild so the app-side session stays current
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
