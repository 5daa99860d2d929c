// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Painting for CanvasWidget: node rectangles, text, and the context menu.

use super::CanvasWidget;
use crate::model::{Node, NodeKind};
use crate::session::MenuItem;
use crate::settings;
use crate::theme;
use kurbo::{Affine, Point, Size, Stroke};
use masonry::core::{BrushIndex, StyleProperty, render_text};
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};
use parley::GenericFamily;
use parley::{FontContext, LayoutContext};

/// Hint shown in an empty, editable question node
const QUESTION_PLACEHOLDER: &str = "type a question\u{2026}";

impl CanvasWidget {
    pub(super) fn paint_background(&self, scene: &mut Scene, canvas_size: Size) {
        fill_color(scene, &canvas_size.to_rect(), theme::canvas::BACKGROUND);
    }

    pub(super) fn paint_nodes(&self, scene: &mut Scene) {
        for node in self.session.store.nodes() {
            self.paint_node(scene, node);
        }
    }

    fn paint_node(&self, scene: &mut Scene, node: &Node) {
        let frame = node.frame();
        let rounded = frame.to_rounded_rect(theme::node::CORNER_RADIUS);

        let background = match node.kind {
            NodeKind::Question => theme::node::QUESTION_BACKGROUND,
            NodeKind::Answer => theme::node::ANSWER_BACKGROUND,
        };
        fill_color(scene, &rounded, background);

        // Title bar (the drag handle)
        let title_color = if node.locked {
            theme::node::TITLE_BAR_LOCKED
        } else {
            theme::node::TITLE_BAR
        };
        let title_bar = node
            .title_bar()
            .to_rounded_rect(theme::node::CORNER_RADIUS);
        fill_color(scene, &title_bar, title_color);

        let outline = if self.session.focused == Some(node.id) {
            theme::node::FOCUSED_OUTLINE
        } else {
            theme::node::OUTLINE
        };
        scene.stroke(
            &Stroke::new(theme::node::OUTLINE_WIDTH),
            Affine::IDENTITY,
            outline,
            None,
            &rounded,
        );

        // Body text, wrapped at the node's inner width
        let inset = settings::node::TEXT_INSET;
        let text_origin = Point::new(
            frame.x0 + inset,
            frame.y0 + settings::node::TITLE_BAR_HEIGHT + inset / 2.0,
        );
        let max_width = (frame.width() - inset * 2.0) as f32;
        if node.text.is_empty() && node.is_editable() {
            draw_text(
                scene,
                QUESTION_PLACEHOLDER,
                text_origin,
                max_width,
                theme::node::PLACEHOLDER_TEXT,
            );
        } else {
            draw_text(scene, &node.text, text_origin, max_width, theme::node::TEXT);
        }

        if let Some(button) = node.submit_button() {
            fill_color(scene, &button.to_rounded_rect(4.0), theme::node::SUBMIT_BACKGROUND);
            draw_text(
                scene,
                "submit",
                Point::new(button.x0 + 14.0, button.y0 + 4.0),
                button.width() as f32,
                theme::node::SUBMIT_TEXT,
            );
        }
    }

    pub(super) fn paint_menu(&self, scene: &mut Scene) {
        let Some(menu) = self.session.menu else {
            return;
        };

        let frame = menu.frame().to_rounded_rect(4.0);
        fill_color(scene, &frame, theme::menu::BACKGROUND);
        scene.stroke(
            &Stroke::new(theme::node::OUTLINE_WIDTH),
            Affine::IDENTITY,
            theme::menu::OUTLINE,
            None,
            &frame,
        );

        for (index, item) in MenuItem::ALL.into_iter().enumerate() {
            let rect = menu.item_rect(index);
            draw_text(
                scene,
                item.label(),
                Point::new(rect.x0 + 10.0, rect.y0 + 5.0),
                rect.width() as f32,
                theme::menu::TEXT,
            );
        }
    }
}

/// Lay out and render one run of wrapped text at `origin`
fn draw_text(scene: &mut Scene, text: &str, origin: Point, max_width: f32, color: Color) {
    if text.is_empty() {
        return;
    }

    let mut font_cx = FontContext::default();
    let mut layout_cx = LayoutContext::new();

    let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
    builder.push_default(StyleProperty::FontSize(theme::node::TEXT_SIZE));
    builder.push_default(StyleProperty::FontStack(parley::FontStack::Single(
        parley::FontFamily::Generic(GenericFamily::SansSerif),
    )));
    builder.push_default(StyleProperty::Brush(BrushIndex(0))); // Index into brushes array
    let mut layout = builder.build(text);
    layout.break_all_lines(Some(max_width));

    let brushes = vec![Brush::Solid(color)];
    render_text(
        scene,
        Affine::translate((origin.x, origin.y)),
        &layout,
        &brushes,
        false, // No hinting
    );
}
