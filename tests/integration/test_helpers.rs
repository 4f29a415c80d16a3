//! In-process stub of the GitHub REST endpoints the bot calls.
//!
//! Serves `GET /repos/{owner}/{name}` from a seeded map and records every
//! `POST /repos/{owner}/{name}/issues/{number}/comments` so tests can
//! assert on replies. Binds an ephemeral port on localhost.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use issue_commander::config::GithubConfig;
use issue_commander::github::GithubClient;

/// A comment captured by the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedComment {
    pub repo: String,
    pub number: u64,
    pub body: String,
    pub authorization: Option<String>,
}

#[derive(Default)]
struct StubInner {
    repos: Mutex<HashMap<String, Value>>,
    comments: Mutex<Vec<PostedComment>>,
    repo_fetches: Mutex<Vec<Option<String>>>,
    reject_comments: AtomicBool,
}

/// Handle to a running stub server.
#[derive(Clone)]
pub struct GithubStub {
    inner: Arc<StubInner>,
    base_url: String,
}

impl GithubStub {
    /// Start the stub on an ephemeral port.
    pub async fn start() -> Self {
        let inner = Arc::new(StubInner::default());
        let router = Router::new()
            .route("/repos/{owner}/{name}", get(get_repo))
            .route(
                "/repos/{owner}/{name}/issues/{number}/comments",
                post(post_comment),
            )
            .with_state(Arc::clone(&inner));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            inner,
            base_url: format!("http://{addr}"),
        }
    }

    /// Seed repository `full_name` with the given owner and fork flag.
    pub fn add_repo(&self, full_name: &str, owner: &str, fork: bool) {
        self.add_repo_json(
            full_name,
            json!({
                "full_name": full_name,
                "owner": { "login": owner },
                "fork": fork
            }),
        );
    }

    /// Seed repository `full_name` with an arbitrary body.
    pub fn add_repo_json(&self, full_name: &str, body: Value) {
        self.inner
            .repos
            .lock()
            .unwrap()
            .insert(full_name.to_owned(), body);
    }

    /// Make every comment POST fail with `403 Forbidden`.
    pub fn reject_comments(&self) {
        self.inner.reject_comments.store(true, Ordering::SeqCst);
    }

    pub fn comments(&self) -> Vec<PostedComment> {
        self.inner.comments.lock().unwrap().clone()
    }

    /// `Authorization` headers seen on repository fetches, in order.
    pub fn repo_fetches(&self) -> Vec<Option<String>> {
        self.inner.repo_fetches.lock().unwrap().clone()
    }

    /// Base URL to configure as `github.api_url`.
    pub fn api_url(&self) -> String {
        self.base_url.clone()
    }

    /// Client pointed at this stub.
    pub fn client(&self, token: Option<&str>) -> Arc<GithubClient> {
        let config = GithubConfig {
            api_url: self.api_url(),
            ..GithubConfig::default()
        };
        Arc::new(GithubClient::new(&config, token.map(str::to_owned)).expect("client"))
    }
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

async fn get_repo(
    State(inner): State<Arc<StubInner>>,
    Path((owner, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    inner
        .repo_fetches
        .lock()
        .unwrap()
        .push(authorization(&headers));
    let key = format!("{owner}/{name}");
    let body = inner.repos.lock().unwrap().get(&key).cloned();
    match body {
        Some(body) => Json(body).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Not Found" })),
        )
            .into_response(),
    }
}

async fn post_comment(
    State(inner): State<Arc<StubInner>>,
    Path((owner, name, number)): Path<(String, String, u64)>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    if inner.reject_comments.load(Ordering::SeqCst) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "Resource not accessible by integration" })),
        )
            .into_response();
    }
    let comment = PostedComment {
        repo: format!("{owner}/{name}"),
        number,
        body: payload["body"].as_str().unwrap_or_default().to_owned(),
        authorization: authorization(&headers),
    };
    inner.comments.lock().unwrap().push(comment);
    (StatusCode::CREATED, Json(json!({ "id": 1 }))).into_response()
}
