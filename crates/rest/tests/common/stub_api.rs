//! Local stand-in for the reqres.in user API.
//!
//! Serves the same routes, status codes and payload shapes as the public API
//! on an ephemeral loopback port, so the scenarios run offline.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value, json};
use tokio::sync::oneshot;

use reqres_rest::{RequestSpec, SuiteConfig};

const SUPPORT_URL: &str =
    "https://contentcaddy.io?utm_source=reqres&utm_medium=json&utm_campaign=referral";
const SUPPORT_TEXT: &str =
    "Tired of writing endless social media content? Let Content Caddy generate it for you.";

/// A user served by `GET /users/{id}`; ids are 1-based positions.
#[derive(Debug, Clone)]
pub struct StubUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl StubUser {
    fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            email: format!(
                "{}.{}@reqres.in",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// Behavior of a stub instance.
#[derive(Debug)]
pub struct StubState {
    /// When set, every request must carry this `x-api-key`.
    pub api_key: Option<String>,
    pub users: Vec<StubUser>,
    /// When set, `PUT /users/{id}` echoes the body without `updatedAt`.
    pub omit_updated_at: bool,
    next_id: AtomicU64,
}

impl Default for StubState {
    fn default() -> Self {
        let users = [
            ("George", "Bluth"),
            ("Janet", "Weaver"),
            ("Emma", "Wong"),
            ("Eve", "Holt"),
            ("Charles", "Morris"),
            ("Tracey", "Ramos"),
            ("Michael", "Lawson"),
            ("Lindsay", "Ferguson"),
            ("Tobias", "Funke"),
            ("Byron", "Fields"),
            ("George", "Edwards"),
            ("Rachel", "Howell"),
        ]
        .into_iter()
        .map(|(first, last)| StubUser::new(first, last))
        .collect();

        Self {
            api_key: None,
            users,
            omit_updated_at: false,
            next_id: AtomicU64::new(100),
        }
    }
}

impl StubState {
    /// Default users, but every request must carry `key` in `x-api-key`.
    pub fn with_api_key(key: &str) -> Self {
        Self {
            api_key: Some(key.to_string()),
            ..Self::default()
        }
    }
}

/// A running stub server. Dropping it shuts the server down.
pub struct StubApi {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    server: Option<std::thread::JoinHandle<()>>,
}

impl StubApi {
    /// Starts a stub serving the default users.
    pub fn start() -> Self {
        Self::start_with(StubState::default())
    }

    /// Starts a stub with custom behavior.
    pub fn start_with(state: StubState) -> Self {
        reqres_rest::init_logging("debug");

        let app = router(Arc::new(state));
        let (tx, rx) = std::sync::mpsc::channel();
        let (shutdown, stopped) = oneshot::channel::<()>();

        let server = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build stub runtime");

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind stub listener");
                tx.send(listener.local_addr().expect("Stub has no address"))
                    .expect("Test thread went away");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = stopped.await;
                    })
                    .await
                    .expect("Stub server failed");
            });
        });

        let addr = rx.recv().expect("Stub server did not start");
        Self {
            addr,
            shutdown: Some(shutdown),
            server: Some(server),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn config(&self) -> SuiteConfig {
        SuiteConfig::for_base_url(self.base_url())
    }

    /// A request specification aimed at this stub.
    pub fn request_spec(&self) -> RequestSpec {
        RequestSpec::new(&self.config()).expect("Failed to build request spec")
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(server) = self.server.take() {
            let _ = server.join();
        }
    }
}

fn router(state: Arc<StubState>) -> Router {
    let users = Router::new()
        .route("/users", post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_api_key,
        ))
        .with_state(state);

    Router::new().nest("/api", users)
}

async fn require_api_key(
    State(state): State<Arc<StubState>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(expected) = &state.api_key {
        let provided = request
            .headers()
            .get("x-api-key")
            .and_then(|value| value.to_str().ok());
        if provided != Some(expected.as_str()) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Missing API key"})),
            )
                .into_response();
        }
    }

    next.run(request).await
}

async fn create_user(
    State(state): State<Arc<StubState>>,
    Json(mut user): Json<Map<String, Value>>,
) -> (StatusCode, Json<Map<String, Value>>) {
    let id = state.next_id.fetch_add(1, Ordering::Relaxed);
    user.insert("id".to_string(), Value::String(id.to_string()));
    user.insert("createdAt".to_string(), Value::String(timestamp()));

    (StatusCode::CREATED, Json(user))
}

async fn get_user(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    let found = id
        .parse::<usize>()
        .ok()
        .and_then(|n| Some((n, state.users.get(n.checked_sub(1)?)?)));

    match found {
        Some((n, user)) => Json(json!({
            "data": {
                "id": n,
                "email": user.email,
                "first_name": user.first_name,
                "last_name": user.last_name,
                "avatar": format!("https://reqres.in/img/faces/{}-image.jpg", n)
            },
            "support": {
                "url": SUPPORT_URL,
                "text": SUPPORT_TEXT
            }
        }))
        .into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn update_user(
    State(state): State<Arc<StubState>>,
    Path(_id): Path<String>,
    Json(mut user): Json<Map<String, Value>>,
) -> Json<Map<String, Value>> {
    if !state.omit_updated_at {
        user.insert("updatedAt".to_string(), Value::String(timestamp()));
    }
    Json(user)
}

async fn delete_user(Path(_id): Path<String>) -> StatusCode {
    StatusCode::NO_CONTENT
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
