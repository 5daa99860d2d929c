// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings: node dimensions, hit regions,
//! collision parameters, and backend defaults. Visual styling (colors)
//! belongs in `theme.rs`.

// ============================================================================
// NODE DIMENSIONS
// ============================================================================
/// Width of a question node (canvas units)
const QUESTION_WIDTH: f64 = 320.0;

/// Height of a question node (canvas units)
const QUESTION_HEIGHT: f64 = 180.0;

/// Width of an answer node (canvas units)
const ANSWER_WIDTH: f64 = 320.0;

/// Height of an answer node (canvas units)
const ANSWER_HEIGHT: f64 = 120.0;

/// Height of the draggable title bar strip at the top of every node
const TITLE_BAR_HEIGHT: f64 = 28.0;

/// Inset from the node frame to its text content
const TEXT_INSET: f64 = 12.0;

/// Horizontal offset from a question's origin to its answer's desired origin
const ANSWER_OFFSET_X: f64 = 360.0;

// ============================================================================
// SUBMIT BUTTON
// ============================================================================
/// Submit button width
const SUBMIT_BUTTON_WIDTH: f64 = 72.0;

/// Submit button height
const SUBMIT_BUTTON_HEIGHT: f64 = 24.0;

/// Margin between the submit button and the node's bottom-right corner
const SUBMIT_BUTTON_MARGIN: f64 = 8.0;

// ============================================================================
// COLLISION SETTINGS
// ============================================================================
// Placement nudges a candidate by a fixed step until it clears every
// existing node or the attempt budget runs out.

/// Padding added around each rectangle before testing for overlap
const COLLISION_PADDING: f64 = 24.0;

/// Horizontal nudge applied per placement attempt
const COLLISION_STEP_X: f64 = 32.0;

/// Vertical nudge applied per placement attempt
const COLLISION_STEP_Y: f64 = 28.0;

/// Maximum number of placement attempts before accepting the last candidate
const COLLISION_MAX_ATTEMPTS: u32 = 200;

// ============================================================================
// CONTEXT MENU
// ============================================================================
/// Width of a context menu item
const MENU_ITEM_WIDTH: f64 = 132.0;

/// Height of a context menu item
const MENU_ITEM_HEIGHT: f64 = 26.0;

// ============================================================================
// BACKEND SETTINGS
// ============================================================================
/// Default URL of the Q&A backend's ask endpoint
const BACKEND_DEFAULT_URL: &str = "http://127.0.0.1:8000/api/ask";

/// Environment variable that overrides the backend URL
const BACKEND_ENV_VAR: &str = "ASKBOARD_BACKEND";

/// Literal text shown in an answer node when a request fails
const BACKEND_FAILURE_TEXT: &str = "request failed";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Node geometry (sizes, hit regions, answer offset)
pub mod node {
    /// Question node width
    pub const QUESTION_WIDTH: f64 = super::QUESTION_WIDTH;

    /// Question node height
    pub const QUESTION_HEIGHT: f64 = super::QUESTION_HEIGHT;

    /// Answer node width
    pub const ANSWER_WIDTH: f64 = super::ANSWER_WIDTH;

    /// Answer node height
    pub const ANSWER_HEIGHT: f64 = super::ANSWER_HEIGHT;

    /// Title bar (drag handle) height
    pub const TITLE_BAR_HEIGHT: f64 = super::TITLE_BAR_HEIGHT;

    /// Text content inset
    pub const TEXT_INSET: f64 = super::TEXT_INSET;

    /// Answer desired-position offset from its question
    pub const ANSWER_OFFSET_X: f64 = super::ANSWER_OFFSET_X;

    /// Submit button width
    pub const SUBMIT_BUTTON_WIDTH: f64 = super::SUBMIT_BUTTON_WIDTH;

    /// Submit button height
    pub const SUBMIT_BUTTON_HEIGHT: f64 = super::SUBMIT_BUTTON_HEIGHT;

    /// Submit button margin from the bottom-right corner
    pub const SUBMIT_BUTTON_MARGIN: f64 = super::SUBMIT_BUTTON_MARGIN;
}

/// Non-overlapping placement settings
pub mod collision {
    /// Padding around each rectangle during overlap tests
    pub const PADDING: f64 = super::COLLISION_PADDING;

    /// Horizontal step per placement attempt
    pub const STEP_X: f64 = super::COLLISION_STEP_X;

    /// Vertical step per placement attempt
    pub const STEP_Y: f64 = super::COLLISION_STEP_Y;

    /// Attempt budget before the search gives up
    pub const MAX_ATTEMPTS: u32 = super::COLLISION_MAX_ATTEMPTS;
}

/// Context menu geometry
pub mod menu {
    /// Menu item width
    pub const ITEM_WIDTH: f64 = super::MENU_ITEM_WIDTH;

    /// Menu item height
    pub const ITEM_HEIGHT: f64 = super::MENU_ITEM_HEIGHT;
}

/// Q&A backend settings
pub mod backend {
    /// Default ask endpoint
    pub const DEFAULT_URL: &str = super::BACKEND_DEFAULT_URL;

    /// Environment variable overriding the endpoint
    pub const ENV_VAR: &str = super::BACKEND_ENV_VAR;

    /// Placeholder answer text for failed requests
    pub const FAILURE_TEXT: &str = super::BACKEND_FAILURE_TEXT;
}
