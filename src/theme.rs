// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_D: Color = Color::from_rgb8(0x40, 0x40, 0x40);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_K: Color = Color::from_rgb8(0xb0, 0xb0, 0xb0);
const BASE_M: Color = Color::from_rgb8(0xd0, 0xd0, 0xd0);

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Color = BASE_B;

// ============================================================================
// NODES
// ============================================================================
const QUESTION_BACKGROUND: Color = BASE_C;
const ANSWER_BACKGROUND: Color = Color::from_rgb8(0x26, 0x32, 0x26);
const NODE_OUTLINE: Color = BASE_F;
const NODE_FOCUSED_OUTLINE: Color = Color::from_rgb8(0x90, 0xee, 0x90);
const NODE_TITLE_BAR: Color = BASE_D;
const NODE_TITLE_BAR_LOCKED: Color = Color::from_rgb8(0x38, 0x30, 0x28);
const NODE_TEXT: Color = BASE_M;
const NODE_PLACEHOLDER_TEXT: Color = BASE_G;

// Submit button
const SUBMIT_BUTTON_BACKGROUND: Color = Color::from_rgb8(0x14, 0x64, 0x14);
const SUBMIT_BUTTON_TEXT: Color = BASE_M;

// ============================================================================
// CONTEXT MENU
// ============================================================================
const MENU_BACKGROUND: Color = BASE_C;
const MENU_OUTLINE: Color = BASE_I;
const MENU_TEXT: Color = BASE_K;

// ============================================================================
// SHAPE CONSTANTS
// ============================================================================
/// Corner radius for node rectangles
const NODE_CORNER_RADIUS: f64 = 6.0;

/// Outline stroke width for nodes and menus
const OUTLINE_WIDTH: f64 = 1.0;

/// Font size for node and menu text
const TEXT_SIZE: f32 = 14.0;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Canvas background
pub mod canvas {
    use super::Color;

    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
}

/// Node colors and shape constants
pub mod node {
    use super::Color;

    pub const QUESTION_BACKGROUND: Color = super::QUESTION_BACKGROUND;
    pub const ANSWER_BACKGROUND: Color = super::ANSWER_BACKGROUND;
    pub const OUTLINE: Color = super::NODE_OUTLINE;
    pub const FOCUSED_OUTLINE: Color = super::NODE_FOCUSED_OUTLINE;
    pub const TITLE_BAR: Color = super::NODE_TITLE_BAR;
    pub const TITLE_BAR_LOCKED: Color = super::NODE_TITLE_BAR_LOCKED;
    pub const TEXT: Color = super::NODE_TEXT;
    pub const PLACEHOLDER_TEXT: Color = super::NODE_PLACEHOLDER_TEXT;
    pub const SUBMIT_BACKGROUND: Color = super::SUBMIT_BUTTON_BACKGROUND;
    pub const SUBMIT_TEXT: Color = super::SUBMIT_BUTTON_TEXT;
    pub const CORNER_RADIUS: f64 = super::NODE_CORNER_RADIUS;
    pub const OUTLINE_WIDTH: f64 = super::OUTLINE_WIDTH;
    pub const TEXT_SIZE: f32 = super::TEXT_SIZE;
}

/// Context menu colors
pub mod menu {
    use super::Color;

    pub const BACKGROUND: Color = super::MENU_BACKGROUND;
    pub const OUTLINE: Color = super::MENU_OUTLINE;
    pub const TEXT: Color = super::MENU_TEXT;
}
