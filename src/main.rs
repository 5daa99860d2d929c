// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Askboard: a freeform Q&A canvas built with Xilem

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    askboard::run(EventLoop::with_user_event())
}
