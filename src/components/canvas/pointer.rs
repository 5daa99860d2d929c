// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for CanvasWidget

use super::CanvasWidget;
use crate::drag::Drag;
use crate::lifecycle;
use crate::model::NodeKind;
use crate::session::{ContextMenu, MenuItem};
use crate::store::NodePatch;
use kurbo::Point;
use masonry::core::EventCtx;

impl CanvasWidget {
    /// Handle primary pointer down
    pub(super) fn handle_pointer_down(
        &mut self,
        ctx: &mut EventCtx<'_>,
        state: &masonry::core::PointerState,
    ) {
        ctx.request_focus();
        ctx.capture_pointer();

        let local_pos = ctx.local_position(state.position);
        tracing::debug!("pointer down at {:?}", local_pos);

        // An open menu swallows the click, whether it hits an item or not
        if let Some(menu) = self.session.menu {
            self.handle_menu_click(ctx, menu, local_pos);
            return;
        }

        if self.is_double_click(local_pos) {
            self.handle_double_click(ctx, local_pos);
            return;
        }

        let Some(target) = self.session.node_at(local_pos).map(|node| {
            (
                node.id,
                node.position,
                node.submit_button()
                    .is_some_and(|button| button.contains(local_pos)),
                node.title_bar().contains(local_pos),
                node.is_editable(),
            )
        }) else {
            // Click on empty space drops focus
            if self.session.focused.take().is_some() {
                self.emit_update(ctx);
                ctx.request_render();
            }
            return;
        };
        let (id, position, submit_hit, title_hit, editable) = target;

        if submit_hit {
            if let Some(request) = lifecycle::submit(&mut self.session.store, id) {
                self.pending_submissions.push(request);
                self.session.focused = None;
                self.emit_update(ctx);
                ctx.request_render();
            }
            return;
        }

        if title_hit {
            self.drag = Some(Drag::begin(id, local_pos, position));
            return;
        }

        // Click on an editable question body focuses it for typing
        if editable && self.session.focused != Some(id) {
            self.session.focused = Some(id);
            self.emit_update(ctx);
            ctx.request_render();
        }
    }

    /// Double-click on empty canvas creates a new question node there,
    /// shifted off any overlapping nodes.
    fn handle_double_click(&mut self, ctx: &mut EventCtx<'_>, local_pos: Point) {
        if self.session.node_at(local_pos).is_some() {
            return;
        }
        let id = self.session.create_question_at(local_pos);
        tracing::info!("created question {:?} at {:?}", id, local_pos);
        self.emit_update(ctx);
        ctx.request_render();
    }

    /// Handle secondary (right-click) pointer down: open the context menu
    /// on a question node, or dismiss an open one.
    pub(super) fn handle_secondary_down(
        &mut self,
        ctx: &mut EventCtx<'_>,
        state: &masonry::core::PointerState,
    ) {
        let local_pos = ctx.local_position(state.position);

        let target = self
            .session
            .node_at(local_pos)
            .filter(|node| node.kind == NodeKind::Question)
            .map(|node| node.id);

        match target {
            Some(node) => {
                self.session.menu = Some(ContextMenu {
                    node,
                    position: local_pos,
                });
                ctx.request_render();
            }
            None => {
                if self.session.menu.take().is_some() {
                    ctx.request_render();
                }
            }
        }
    }

    /// A click while the menu is open: run the hit item (if any) and close
    fn handle_menu_click(&mut self, ctx: &mut EventCtx<'_>, menu: ContextMenu, local_pos: Point) {
        self.session.menu = None;

        match menu.hit_item(local_pos) {
            Some(MenuItem::Edit) => {
                lifecycle::reopen(&mut self.session.store, menu.node);
                self.session.focused = Some(menu.node);
            }
            Some(MenuItem::Resubmit) => {
                lifecycle::reopen(&mut self.session.store, menu.node);
                if let Some(request) = lifecycle::submit(&mut self.session.store, menu.node) {
                    self.pending_submissions.push(request);
                }
            }
            None => {
                // Clicked outside the items: just dismiss
            }
        }

        self.emit_update(ctx);
        ctx.request_render();
    }

    /// Handle pointer move: feed an active drag into the store
    pub(super) fn handle_pointer_move(
        &mut self,
        ctx: &mut EventCtx<'_>,
        state: &masonry::core::PointerState,
    ) {
        let Some(drag) = &mut self.drag else {
            return;
        };
        let local_pos = ctx.local_position(state.position);
        let position = drag.update(local_pos);
        let id = drag.node;
        self.session.store.update(id, NodePatch::position(position));
        ctx.request_render();
    }

    /// Handle primary pointer up: end any active drag
    pub(super) fn handle_pointer_up(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _state: &masonry::core::PointerState,
    ) {
        if self.drag.take().is_some() {
            self.emit_update(ctx);
        }
    }

    /// Handle pointer cancel (e.g. the pointer left the window): release
    /// the drag at its last known position.
    pub(super) fn handle_pointer_cancel(&mut self, ctx: &mut EventCtx<'_>) {
        if self.drag.take().is_some() {
            tracing::debug!("pointer cancel, releasing drag");
            self.emit_update(ctx);
        }
    }

    /// Check if the current click is a double-click
    ///
    /// Returns true if the click is within 500ms and 10px of the last click
    fn is_double_click(&mut self, position: Point) -> bool {
        const DOUBLE_CLICK_TIME_MS: u128 = 500;
        const DOUBLE_CLICK_DISTANCE_PX: f64 = 10.0;

        let now = std::time::Instant::now();

        let is_double = if let (Some(last_time), Some(last_pos)) =
            (self.last_click_time, self.last_click_position)
        {
            let time_diff = now.duration_since(last_time).as_millis();
            let distance =
                ((position.x - last_pos.x).powi(2) + (position.y - last_pos.y).powi(2)).sqrt();

            time_diff < DOUBLE_CLICK_TIME_MS && distance < DOUBLE_CLICK_DISTANCE_PX
        } else {
            false
        };

        if is_double {
            // Reset tracking so the next click starts fresh
            // and doesn't cascade into triple/quadruple clicks
            self.last_click_time = None;
            self.last_click_position = None;
        } else {
            self.last_click_time = Some(now);
            self.last_click_position = Some(position);
        }

        is_double
    }
}
