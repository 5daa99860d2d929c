// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard input for CanvasWidget: text entry into the focused question.

use super::CanvasWidget;
use masonry::core::keyboard::{Key, KeyState, NamedKey};
use masonry::core::{EventCtx, TextEvent};

impl CanvasWidget {
    pub(super) fn handle_text_event(&mut self, ctx: &mut EventCtx<'_>, event: &TextEvent) {
        let TextEvent::Keyboard(key_event) = event else {
            return;
        };
        if key_event.state != KeyState::Down {
            return;
        }

        // Escape closes the menu and drops focus
        if matches!(&key_event.key, Key::Named(NamedKey::Escape)) {
            let menu_closed = self.session.menu.take().is_some();
            let focus_dropped = self.session.focused.take().is_some();
            if menu_closed || focus_dropped {
                self.emit_update(ctx);
                ctx.request_render();
            }
            return;
        }

        if self.session.focused.is_none() {
            return;
        }

        match &key_event.key {
            Key::Character(text) => self.session.insert_text(text.as_str()),
            Key::Named(NamedKey::Enter) => self.session.insert_text("\n"),
            Key::Named(NamedKey::Backspace) => self.session.backspace(),
            _ => return,
        }

        self.emit_update(ctx);
        ctx.request_render();
    }
}
