// Copyright 2025 the Askboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Client for the Q&A backend and the background submission worker.
//!
//! The worker is a long-lived task that receives captured submissions on
//! an mpsc channel and spawns one task per network call, so a slow answer
//! never blocks a fast one. Replies reach the UI through the Xilem message
//! proxy in completion order. Every failure mode (connection refused,
//! non-2xx status, body that is not JSON, JSON with no usable answer
//! field) collapses to `answer: None`; the UI turns that into the
//! placeholder answer node. Nothing propagates as an error.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use xilem::core::MessageProxy;
use xilem::tokio;

use crate::lifecycle::{AnswerReply, SubmissionRequest};

/// Request body for the ask endpoint
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// Response body from the ask endpoint
#[derive(Debug, Deserialize)]
pub struct AskResponse {
    pub answer: Option<String>,
}

/// Errors from one ask round trip
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// Transport failure, error status, or a body that failed to parse
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The response parsed but carried no usable answer field
    #[error("backend response carried no answer")]
    MissingAnswer,
}

/// HTTP client for the Q&A backend
#[derive(Debug, Clone)]
pub struct QaClient {
    http: reqwest::Client,
    url: String,
}

impl QaClient {
    /// Create a client for the ask endpoint at `url`
    pub fn new(url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    /// The endpoint this client talks to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one question and return the backend's answer text
    pub async fn ask(&self, question: &str) -> Result<String, AskError> {
        tracing::debug!("asking backend at {}", self.url);
        let response = self
            .http
            .post(&self.url)
            .json(&AskRequest { question })
            .send()
            .await?
            .error_for_status()?;
        let body: AskResponse = response.json().await?;
        body.answer.ok_or(AskError::MissingAnswer)
    }
}

/// Drive submissions until the request channel closes.
///
/// Each request carries captured-by-value state from submit time; the
/// reply carries it back so the UI can place the answer relative to where
/// the question sat when it was submitted, not where it sits now.
pub async fn run_submission_worker(
    proxy: MessageProxy<AnswerReply>,
    mut requests: tokio::sync::mpsc::UnboundedReceiver<SubmissionRequest>,
    client: QaClient,
) {
    let proxy = Arc::new(proxy);

    while let Some(request) = requests.recv().await {
        let client = client.clone();
        let proxy = proxy.clone();
        tokio::spawn(async move {
            let answer = match client.ask(&request.question).await {
                Ok(text) => Some(text),
                Err(err) => {
                    tracing::warn!("submission for {:?} failed: {}", request.node, err);
                    None
                }
            };
            let reply = AnswerReply {
                node: request.node,
                origin: request.origin,
                answer,
            };
            // Err means the UI is gone; the reply has nowhere to go
            let _ = proxy.message(reply);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_with_and_without_answer() {
        let ok: AskResponse = serde_json::from_str(r#"{"answer":"world"}"#).unwrap();
        assert_eq!(ok.answer.as_deref(), Some("world"));

        // The original backend reports failures as {"detail": ...}; that
        // shape must parse and read as "no usable answer"
        let missing: AskResponse =
            serde_json::from_str(r#"{"detail":"Upstream model error"}"#).unwrap();
        assert!(missing.answer.is_none());
    }

    #[test]
    fn request_serializes_question_field() {
        let body = serde_json::to_value(AskRequest { question: "hello" }).unwrap();
        assert_eq!(body, serde_json::json!({"question": "hello"}));
    }
}
