// Stub login endpoint for exercising the reqwest adapter over real HTTP.
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

pub const LOGIN_PATH: &str = "/api/login";

#[derive(Clone)]
struct StubState {
    // Status and JSON body returned for every login request.
    status: StatusCode,
    body: Option<Value>,
    // Every request body received, in arrival order.
    received: Arc<Mutex<Vec<Value>>>,
}

pub struct StubLoginServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl StubLoginServer {
    // Start a stub on an ephemeral port, served on the current test runtime.
    pub async fn start(status: StatusCode, body: Option<Value>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral test port");
        let addr = listener.local_addr().expect("get local addr");
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            body,
            received: Arc::clone(&received),
        };
        let app = Router::new()
            .route(LOGIN_PATH, post(login))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            received,
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, LOGIN_PATH)
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().expect("received mutex poisoned").clone()
    }
}

async fn login(State(state): State<StubState>, Json(payload): Json<Value>) -> Response {
    state
        .received
        .lock()
        .expect("received mutex poisoned")
        .push(payload);

    match state.body {
        Some(body) => (state.status, Json(body)).into_response(),
        None => state.status.into_response(),
    }
}

// URL of a port nothing listens on, for connection failures.
pub async fn unreachable_login_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}{LOGIN_PATH}")
}
