//! In-memory CRUD server standing in for the hosted mock API.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use vendor_desk::config::RemoteConfig;
use vendor_desk::vendor::Vendor;

pub const COLLECTION: &str = "crud";

/// A request as the store saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

/// How the next request should fail instead of being served.
#[derive(Debug, Clone)]
pub enum Failure {
    Status(u16),
    Garbage,
}

#[derive(Default)]
struct StoreInner {
    records: Vec<Value>,
    next_id: u64,
    fail_next: Option<Failure>,
    requests: Vec<CapturedRequest>,
}

type SharedInner = Arc<Mutex<StoreInner>>;

pub struct MockStore {
    pub addr: SocketAddr,
    inner: SharedInner,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockStore {
    /// Start an empty store.
    pub async fn start() -> Self {
        Self::start_with(Vec::new()).await
    }

    /// Start a store holding `records`. Ids continue after the highest
    /// numeric id present.
    pub async fn start_with(records: Vec<Value>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|record| record.get("id")?.as_str()?.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let inner: SharedInner = Arc::new(Mutex::new(StoreInner {
            records,
            next_id,
            ..StoreInner::default()
        }));

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route(
                &format!("/{COLLECTION}"),
                get(list_records).post(create_record),
            )
            .route(
                &format!("/{COLLECTION}/{{id}}"),
                get(get_record).put(replace_record).delete(delete_record),
            )
            .with_state(inner.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock store");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            inner,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn remote_config(&self) -> RemoteConfig {
        RemoteConfig {
            base_url: self.base_url(),
            collection: COLLECTION.to_string(),
        }
    }

    /// Make the next request fail.
    pub async fn fail_next(&self, failure: Failure) {
        self.inner.lock().await.fail_next = Some(failure);
    }

    pub async fn records(&self) -> Vec<Value> {
        self.inner.lock().await.records.clone()
    }

    /// Stored record decoded the way the client decodes it.
    pub async fn vendor(&self, id: &str) -> Option<Vendor> {
        let inner = self.inner.lock().await;
        let record = inner
            .records
            .iter()
            .find(|record| record["id"] == json!(id))?
            .clone();
        Some(serde_json::from_value(record).expect("stored record decodes"))
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.inner.lock().await.requests.clone()
    }
}

impl Drop for MockStore {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Record the request and take any pending failure.
async fn begin(
    inner: &SharedInner,
    method: &str,
    path: String,
    body: Option<Value>,
) -> Option<Response> {
    let mut guard = inner.lock().await;
    guard.requests.push(CapturedRequest {
        method: method.to_string(),
        path,
        body,
    });
    match guard.fail_next.take()? {
        Failure::Status(status) => Some(
            (
                StatusCode::from_u16(status).unwrap(),
                Json(json!({ "error": "injected" })),
            )
                .into_response(),
        ),
        Failure::Garbage => Some((StatusCode::OK, "definitely not json").into_response()),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!("Not found"))).into_response()
}

async fn list_records(State(inner): State<SharedInner>) -> Response {
    if let Some(failure) = begin(&inner, "GET", format!("/{COLLECTION}"), None).await {
        return failure;
    }
    Json(Value::Array(inner.lock().await.records.clone())).into_response()
}

async fn get_record(State(inner): State<SharedInner>, Path(id): Path<String>) -> Response {
    if let Some(failure) = begin(&inner, "GET", format!("/{COLLECTION}/{id}"), None).await {
        return failure;
    }
    let guard = inner.lock().await;
    match guard.records.iter().find(|record| record["id"] == json!(id)) {
        Some(record) => Json(record.clone()).into_response(),
        None => not_found(),
    }
}

async fn create_record(State(inner): State<SharedInner>, Json(body): Json<Value>) -> Response {
    if let Some(failure) =
        begin(&inner, "POST", format!("/{COLLECTION}"), Some(body.clone())).await
    {
        return failure;
    }
    let mut guard = inner.lock().await;
    let id = guard.next_id.to_string();
    guard.next_id += 1;

    let mut record = body;
    if let Some(object) = record.as_object_mut() {
        object.insert("id".to_string(), json!(id));
        object.insert("createdAt".to_string(), json!("2024-05-20T10:00:00.000Z"));
    }
    guard.records.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn replace_record(
    State(inner): State<SharedInner>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Some(failure) = begin(
        &inner,
        "PUT",
        format!("/{COLLECTION}/{id}"),
        Some(body.clone()),
    )
    .await
    {
        return failure;
    }
    let mut guard = inner.lock().await;
    let Some(slot) = guard
        .records
        .iter_mut()
        .find(|record| record["id"] == json!(id))
    else {
        return not_found();
    };

    let mut record = body;
    if let Some(object) = record.as_object_mut() {
        object.insert("id".to_string(), json!(id));
    }
    *slot = record.clone();
    Json(record).into_response()
}

async fn delete_record(State(inner): State<SharedInner>, Path(id): Path<String>) -> Response {
    if let Some(failure) = begin(&inner, "DELETE", format!("/{COLLECTION}/{id}"), None).await {
        return failure;
    }
    let mut guard = inner.lock().await;
    match guard.records.iter().position(|record| record["id"] == json!(id)) {
        Some(index) => Json(guard.records.remove(index)).into_response(),
        None => not_found(),
    }
}
