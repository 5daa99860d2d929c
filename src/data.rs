// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` owns the canvas session, the channel to the submission
//! worker, and window metadata. Every UI rebuild reads from `AppState`;
//! mutations happen in event callbacks (canvas updates from the widget,
//! answer replies from the worker) and propagate through the Xilem view
//! tree.

use std::sync::{Arc, Mutex};

use xilem::WindowId;
use xilem::tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::lifecycle::{self, AnswerReply, SubmissionRequest};
use crate::qa::QaClient;
use crate::session::CanvasSession;

/// Main application state
pub struct AppState {
    /// The canvas session shared with the widget via Arc
    pub session: Arc<CanvasSession>,

    /// The main window's id
    pub main_window_id: WindowId,

    /// Client for the Q&A backend
    pub backend: QaClient,

    /// Sends captured submissions to the worker task
    submit_tx: UnboundedSender<SubmissionRequest>,

    /// Receiver handed to the worker task on first spawn.
    ///
    /// Kept in an Option slot so a view rebuild can never start a second
    /// worker: the first task takes the receiver, later calls find None.
    worker_rx: Arc<Mutex<Option<UnboundedReceiver<SubmissionRequest>>>>,
}

impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        // Single-window app: exit once the window has been closed.
        false
    }
}

impl AppState {
    /// Create the initial state with an empty canvas
    pub fn new(backend: QaClient) -> Self {
        let (submit_tx, worker_rx) = unbounded_channel();
        Self {
            session: Arc::new(CanvasSession::new()),
            main_window_id: WindowId::next(),
            backend,
            submit_tx,
            worker_rx: Arc::new(Mutex::new(Some(worker_rx))),
        }
    }

    /// The slot the worker task takes its receiver from
    pub fn worker_receiver(&self) -> Arc<Mutex<Option<UnboundedReceiver<SubmissionRequest>>>> {
        self.worker_rx.clone()
    }

    /// Handle an updated session from the canvas widget, dispatching any
    /// submissions it captured to the worker.
    pub fn handle_canvas_update(
        &mut self,
        session: CanvasSession,
        submissions: Vec<SubmissionRequest>,
    ) {
        self.session = Arc::new(session);
        for request in submissions {
            tracing::info!("dispatching submission for {:?}", request.node);
            if self.submit_tx.send(request).is_err() {
                tracing::error!("submission worker is gone, dropping request");
            }
        }
    }

    /// Handle a completed submission from the worker: place the answer
    /// node and republish the session.
    pub fn handle_answer_reply(&mut self, reply: AnswerReply) {
        let mut session = (*self.session).clone();
        lifecycle::complete(&mut session.store, reply);
        self.session = Arc::new(session);
    }
}
