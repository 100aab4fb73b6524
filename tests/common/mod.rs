#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use phishguard::analysis::Analyzer;
use phishguard::api::{build_router, AppState};
use phishguard::errors::PhishGuardError;
use phishguard::llm::CompletionProvider;

pub const PHISHING_VERDICT: &str = r#"{"classification":"Phishing","confidence":94,"explanation":"Lookalike PayPal domain with an urgent account threat","threats":["Spoofed sender domain","Credential harvesting link","Artificial deadline"],"recommendation":"Do not click the link; report and delete the email"}"#;

pub enum Reply {
    Text(String),
    Fail(fn() -> PhishGuardError),
}

/// Provider double that answers every prompt the same way and records calls.
pub struct ScriptedProvider {
    reply: Reply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedProvider {
    pub fn text(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn failing(make: fn() -> PhishGuardError) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(make),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn submit(&self, prompt: &str) -> Result<String, PhishGuardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(make) => Err(make()),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

pub fn api_app(provider: Arc<ScriptedProvider>) -> axum::Router {
    build_router(AppState::new(Analyzer::new(provider)))
}

/// Serve the API on an ephemeral local port and return its base URL.
pub async fn spawn_backend(provider: Arc<ScriptedProvider>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = api_app(provider);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// One canned answer from the fake chat completions endpoint.
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl UpstreamReply {
    pub fn json(status: StatusCode, body: serde_json::Value) -> Self {
        Self { status, content_type: "application/json", body: body.to_string() }
    }

    pub fn html(status: StatusCode, body: &str) -> Self {
        Self { status, content_type: "text/html", body: body.to_string() }
    }
}

/// A request as the fake upstream received it.
pub struct SeenRequest {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct UpstreamState {
    replies: Arc<Mutex<VecDeque<UpstreamReply>>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

async fn upstream_completions(
    State(state): State<UpstreamState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen.lock().unwrap().push(SeenRequest { authorization, body });

    let reply = state.replies.lock().unwrap().pop_front();
    match reply {
        Some(reply) => (reply.status, [(CONTENT_TYPE, reply.content_type)], reply.body).into_response(),
        None => (StatusCode::GONE, "no scripted reply left").into_response(),
    }
}

/// Serve an OpenAI-compatible endpoint at `{base}/chat/completions` that
/// answers with `replies` in order. Returns the base URL and the request log.
pub async fn spawn_upstream(replies: Vec<UpstreamReply>) -> (String, Arc<Mutex<Vec<SeenRequest>>>) {
    let state = UpstreamState {
        replies: Arc::new(Mutex::new(replies.into())),
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let seen = state.seen.clone();
    let app = Router::new()
        .route("/v1/chat/completions", post(upstream_completions))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/v1", addr), seen)
}

/// A local URL with nothing listening behind it.
pub async fn dead_backend_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "JSON parse error: {}. Status: {}, Body: {:?}",
            e,
            parts.status,
            String::from_utf8_lossy(&bytes)
        )
    })
}
