//! In-process fake of the resume backend for bridge tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;

#[derive(Debug, Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    delay: Duration,
}

/// A request as the backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    /// Parsed JSON body, or `Value::Null` when it was not JSON.
    pub body: Value,
}

struct BackendState {
    routes: HashMap<String, Reply>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Canned replies keyed by path. Unknown paths answer 404.
#[derive(Default)]
pub struct TestBackend {
    routes: HashMap<String, Reply>,
}

pub struct RunningBackend {
    pub base_url: String,
    state: Arc<BackendState>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, path: &str, status: u16, body: &str) -> Self {
        self.delayed_route(path, status, body, Duration::ZERO)
    }

    pub fn delayed_route(mut self, path: &str, status: u16, body: &str, delay: Duration) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.routes.insert(
            path.to_string(),
            Reply {
                status,
                body: body.to_string(),
                delay,
            },
        );
        self
    }

    /// Serves the routes on an ephemeral localhost port.
    pub async fn spawn(self) -> RunningBackend {
        let state = Arc::new(BackendState {
            routes: self.routes,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test backend");
        let addr = listener.local_addr().expect("test backend address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test backend crashed");
        });

        RunningBackend {
            base_url: format!("http://{addr}"),
            state,
        }
    }
}

impl RunningBackend {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let Some(reply) = state.routes.get(uri.path()).cloned() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    (reply.status, [(CONTENT_TYPE, "application/json")], reply.body).into_response()
}

/// A base URL nothing is listening on.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}
