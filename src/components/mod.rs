// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components

pub mod canvas;

pub use canvas::{CanvasUpdate, canvas_view};
