#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::http::header::AUTHORIZATION;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use jsonwebtoken::{EncodingKey, Header};
use serde_json::{Value, json};

use jobly::api::ApiClient;
use jobly::context::UserContext;
use jobly::store::SessionStore;

const SECRET: &[u8] = b"secret-dev";

/// One request as the backend saw it.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub auth: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct Backend {
    /// username -> (password, user record)
    users: HashMap<String, (String, Value)>,
    tokens: HashMap<String, String>,
    companies: Vec<Value>,
    jobs: Vec<Value>,
    /// "METHOD /path" -> canned error response
    failures: HashMap<String, (StatusCode, Value)>,
    requests: Vec<Recorded>,
}

type Shared = Arc<Mutex<Backend>>;

pub struct MockBackend {
    pub base_url: String,
    state: Shared,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Starts a backend seeded with `testuser` / `password`, two companies and
/// three jobs.
pub fn spawn_backend() -> Result<MockBackend> {
    let state: Shared = Arc::new(Mutex::new(seed()));

    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind mock backend")?;
    listener
        .set_nonblocking(true)
        .context("set listener nonblocking")?;
    let addr = listener.local_addr().context("mock backend addr")?;

    let app = router(state.clone());
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build mock runtime");
        rt.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("adopt mock listener");
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await
                .expect("serve mock backend");
        });
    });

    Ok(MockBackend {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(tx),
    })
}

/// A fresh context against `backend` with its own state dir.
pub fn open_context(backend: &MockBackend, state_dir: &std::path::Path) -> Result<UserContext> {
    let client = ApiClient::new(backend.base_url.clone())?;
    Ok(UserContext::new(client, SessionStore::open(state_dir)))
}

pub fn token_for(username: &str) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        &json!({ "username": username, "isAdmin": false, "iat": 1_700_000_000u64 }),
        &EncodingKey::from_secret(SECRET),
    )
    .expect("encode token")
}

impl MockBackend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state.lock().unwrap().requests.clear();
    }

    /// Every later `method path` request answers `status` with `body`.
    pub fn fail(&self, method: &str, path: &str, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(format!("{} {}", method, path), (status, body));
    }

    pub fn clear_companies(&self) {
        self.state.lock().unwrap().companies.clear();
    }

    pub fn add_user(&self, username: &str, password: &str, applications: &[u64]) {
        let user = json!({
            "username": username,
            "firstName": "Test",
            "lastName": "User",
            "email": format!("{}@example.com", username),
            "isAdmin": false,
            "applications": applications,
        });
        self.state
            .lock()
            .unwrap()
            .users
            .insert(username.to_string(), (password.to_string(), user));
    }
}

fn seed() -> Backend {
    let mut backend = Backend {
        companies: vec![
            json!({
                "handle": "anderson-arias-morrow",
                "name": "Anderson, Arias and Morrow",
                "description": "Somebody program how I.",
                "numEmployees": 245,
                "logoUrl": "/logos/logo3.png",
            }),
            json!({
                "handle": "bauer-gallagher",
                "name": "Bauer-Gallagher",
                "description": "Difficult ready trip question produce produce someone.",
                "numEmployees": 862,
                "logoUrl": null,
            }),
        ],
        jobs: vec![
            json!({
                "id": 1,
                "title": "Conservator, furniture",
                "salary": 110000,
                "equity": "0",
                "companyHandle": "anderson-arias-morrow",
                "companyName": "Anderson, Arias and Morrow",
            }),
            json!({
                "id": 2,
                "title": "Information officer",
                "salary": 200000,
                "equity": null,
                "companyHandle": "anderson-arias-morrow",
                "companyName": "Anderson, Arias and Morrow",
            }),
            json!({
                "id": 3,
                "title": "Consulting civil engineer",
                "salary": 60000,
                "equity": "0.05",
                "companyHandle": "bauer-gallagher",
                "companyName": "Bauer-Gallagher",
            }),
        ],
        ..Backend::default()
    };
    let testuser = json!({
        "username": "testuser",
        "firstName": "Test",
        "lastName": "User",
        "email": "joel@joelburton.com",
        "isAdmin": false,
        "applications": [],
    });
    backend.users.insert(
        "testuser".to_string(),
        ("password".to_string(), testuser),
    );
    backend
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/auth/token", post(login))
        .route("/auth/register", post(register))
        .route("/companies", get(list_companies))
        .route("/companies/:handle", get(get_company))
        .route("/companies/:handle/jobs", get(list_company_jobs))
        .route("/jobs", get(list_jobs))
        .route("/users/:username", get(get_user).patch(update_user))
        .route("/users/:username/jobs/:id", post(apply))
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

fn error(status: StatusCode, message: impl Into<Value>) -> Response {
    (
        status,
        Json(json!({ "error": { "message": message.into(), "status": status.as_u16() } })),
    )
        .into_response()
}

async fn record(State(state): State<Shared>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let auth = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, 1 << 20)
        .await
        .unwrap_or_default();
    let body_json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    let failure = {
        let mut s = state.lock().unwrap();
        s.requests.push(Recorded {
            method: method.clone(),
            path: path.clone(),
            query,
            auth,
            body: body_json,
        });
        s.failures.get(&format!("{} {}", method, path)).cloned()
    };
    if let Some((status, body)) = failure {
        return (status, Json(body)).into_response();
    }

    let req = Request::from_parts(parts, axum::body::Body::from(bytes));
    next.run(req).await
}

fn authorized(state: &Backend, headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .is_some_and(|t| state.tokens.contains_key(t))
}

fn issue_token(state: &mut Backend, username: &str) -> String {
    let token = token_for(username);
    state.tokens.insert(token.clone(), username.to_string());
    token
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut s = state.lock().unwrap();
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    let accepted = matches!(s.users.get(username), Some((pw, _)) if pw == password);
    if !accepted {
        return error(StatusCode::UNAUTHORIZED, "Invalid username/password");
    }
    let token = issue_token(&mut s, username);
    Json(json!({ "token": token })).into_response()
}

async fn register(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut s = state.lock().unwrap();
    let username = body["username"].as_str().unwrap_or_default().to_string();
    if s.users.contains_key(&username) {
        return error(
            StatusCode::BAD_REQUEST,
            format!("Duplicate username: {}", username),
        );
    }
    let user = json!({
        "username": username,
        "firstName": body["firstName"],
        "lastName": body["lastName"],
        "email": body["email"],
        "isAdmin": false,
        "applications": [],
    });
    let password = body["password"].as_str().unwrap_or_default().to_string();
    s.users.insert(username.clone(), (password, user));
    let token = issue_token(&mut s, &username);
    (StatusCode::CREATED, Json(json!({ "token": token }))).into_response()
}

async fn list_companies(
    State(state): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let s = state.lock().unwrap();
    let needle = q.get("name").map(|n| n.to_lowercase());
    let companies: Vec<&Value> = s
        .companies
        .iter()
        .filter(|c| {
            needle.as_deref().is_none_or(|n| {
                c["name"]
                    .as_str()
                    .is_some_and(|name| name.to_lowercase().contains(n))
            })
        })
        .collect();
    Json(json!({ "companies": companies })).into_response()
}

async fn get_company(State(state): State<Shared>, Path(handle): Path<String>) -> Response {
    let s = state.lock().unwrap();
    match s.companies.iter().find(|c| c["handle"] == handle.as_str()) {
        Some(c) => Json(json!({ "company": c })).into_response(),
        None => error(StatusCode::NOT_FOUND, format!("No company: {}", handle)),
    }
}

async fn list_company_jobs(State(state): State<Shared>, Path(handle): Path<String>) -> Response {
    let s = state.lock().unwrap();
    let jobs: Vec<&Value> = s
        .jobs
        .iter()
        .filter(|j| j["companyHandle"] == handle.as_str())
        .collect();
    Json(json!({ "jobs": jobs })).into_response()
}

async fn list_jobs(
    State(state): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let s = state.lock().unwrap();
    let title = q.get("title").map(|t| t.to_lowercase());
    let min_salary = match q.get("minSalary").map(|m| m.parse::<u64>()) {
        Some(Ok(n)) => Some(n),
        Some(Err(_)) => {
            return error(
                StatusCode::BAD_REQUEST,
                json!(["instance.minSalary is not of a type(s) integer"]),
            );
        }
        None => None,
    };
    let has_equity = q.get("hasEquity").is_some_and(|v| v == "true");

    let jobs: Vec<&Value> = s
        .jobs
        .iter()
        .filter(|j| {
            title.as_deref().is_none_or(|t| {
                j["title"]
                    .as_str()
                    .is_some_and(|jt| jt.to_lowercase().contains(t))
            })
        })
        .filter(|j| min_salary.is_none_or(|m| j["salary"].as_u64().is_some_and(|s| s >= m)))
        .filter(|j| {
            !has_equity
                || j["equity"]
                    .as_str()
                    .and_then(|e| e.parse::<f64>().ok())
                    .is_some_and(|e| e > 0.0)
        })
        .collect();
    Json(json!({ "jobs": jobs })).into_response()
}

async fn get_user(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(username): Path<String>,
) -> Response {
    let s = state.lock().unwrap();
    if !authorized(&s, &headers) {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    match s.users.get(&username) {
        Some((_, user)) => Json(json!({ "user": user })).into_response(),
        None => error(StatusCode::NOT_FOUND, format!("No user: {}", username)),
    }
}

async fn update_user(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(username): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&s, &headers) {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let Some((password, user)) = s.users.get_mut(&username) else {
        return error(StatusCode::NOT_FOUND, format!("No user: {}", username));
    };
    for field in ["firstName", "lastName", "email"] {
        if let Some(v) = body.get(field) {
            user[field] = v.clone();
        }
    }
    if let Some(pw) = body["password"].as_str() {
        *password = pw.to_string();
    }
    let mut updated = user.clone();
    if let Some(fields) = updated.as_object_mut() {
        fields.remove("applications");
    }
    Json(json!({ "user": updated })).into_response()
}

async fn apply(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((username, id)): Path<(String, u64)>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&s, &headers) {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    if !s.jobs.iter().any(|j| j["id"] == id) {
        return error(StatusCode::NOT_FOUND, format!("No job: {}", id));
    }
    let Some((_, user)) = s.users.get_mut(&username) else {
        return error(StatusCode::NOT_FOUND, format!("No user: {}", username));
    };
    if let Some(apps) = user["applications"].as_array_mut()
        && !apps.iter().any(|a| *a == id)
    {
        apps.push(json!(id));
    }
    Json(json!({ "applied": id })).into_response()
}
