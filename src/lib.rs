// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Askboard: a freeform Q&A canvas built with Xilem
//!
//! Double-click empty space to spawn a question node, type into it, and
//! submit; the answer comes back from the Q&A backend and lands beside the
//! question without overlapping anything already on the canvas.

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::core::fork;
use xilem::{EventLoopBuilder, WidgetView, WindowView, Xilem, window};

mod components;
mod data;
mod drag;
mod geometry;
mod lifecycle;
mod model;
mod qa;
mod session;
mod settings;
mod store;
mod theme;

use components::canvas_view;
use data::AppState;
use qa::QaClient;

/// Entry point for the Askboard application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("askboard=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap())
                .add_directive("wgpu_core=warn".parse().unwrap())
                .add_directive("wgpu_hal=warn".parse().unwrap()),
        )
        .init();

    let backend = QaClient::new(resolve_backend_url());
    tracing::info!("using Q&A backend at {}", backend.url());

    let initial_state = AppState::new(backend);

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Resolve the ask endpoint: first CLI argument, then the environment
/// variable, then the built-in default.
fn resolve_backend_url() -> String {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        return args[1].clone();
    }
    if let Ok(url) = std::env::var(settings::backend::ENV_VAR) {
        return url;
    }
    settings::backend::DEFAULT_URL.to_string()
}

/// Build the single-window UI
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let content = canvas_with_worker(state);

    let window_size = LogicalSize::new(1280.0, 800.0);
    let window_view = window(state.main_window_id, "Askboard", content);
    let window_with_options = window_view
        .with_options(|options| options.with_initial_inner_size(window_size));

    std::iter::once(window_with_options)
}

/// The canvas plus the background submission worker.
///
/// Wraps the canvas view with a `fork` + `task_raw` that runs the worker
/// for the app's lifetime. The worker takes its request receiver out of an
/// Option slot, so a view rebuild never spawns a second worker.
fn canvas_with_worker(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let worker_slot = state.worker_receiver();
    let client = state.backend.clone();

    let canvas = canvas_view(
        state.session.clone(),
        |state: &mut AppState, session, submissions| {
            state.handle_canvas_update(session, submissions);
        },
    );

    fork(
        canvas,
        xilem::view::task_raw(
            move |proxy| {
                let slot = worker_slot.clone();
                let client = client.clone();
                async move {
                    let receiver = slot.lock().ok().and_then(|mut slot| slot.take());
                    if let Some(receiver) = receiver {
                        qa::run_submission_worker(proxy, receiver, client).await;
                    }
                }
            },
            |state: &mut AppState, reply: lifecycle::AnswerReply| {
                state.handle_answer_reply(reply);
            },
        ),
    )
}
