//! In-memory stand-in for the remote service managed by the dispatcher.
//!
//! Objects live in a map keyed by server-minted id. The wire contract is
//! plain text: create and read answer with the object's identifier in the
//! body, update and delete answer with an empty body. The `/quirks/*` routes
//! produce the malformed responses the core's classification tests need
//! (empty identifier, wrong or missing content type, repeated headers,
//! server error).

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub type Db = Arc<RwLock<HashMap<String, String>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/objects", post(create_object))
        .route(
            "/objects/{id}",
            get(get_object).put(update_object).delete(delete_object),
        )
        .route("/quirks/empty-id", post(empty_id))
        .route("/quirks/xml", get(xml_payload))
        .route("/quirks/no-content-type", get(no_content_type))
        .route("/quirks/repeated-headers", get(repeated_headers))
        .route("/quirks/error", get(server_error))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_object(State(db): State<Db>, body: String) -> (StatusCode, String) {
    let id = Uuid::new_v4().to_string();
    db.write().await.insert(id.clone(), body);
    (StatusCode::CREATED, id)
}

async fn get_object(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<String, StatusCode> {
    let objects = db.read().await;
    if objects.contains_key(&id) {
        Ok(id)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn update_object(
    State(db): State<Db>,
    Path(id): Path<String>,
    body: String,
) -> Result<String, StatusCode> {
    let mut objects = db.write().await;
    match objects.get_mut(&id) {
        Some(stored) => {
            *stored = body;
            Ok(String::new())
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn delete_object(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<String, StatusCode> {
    db.write()
        .await
        .remove(&id)
        .map(|_| String::new())
        .ok_or(StatusCode::NOT_FOUND)
}

/// 200 with an empty body where an identifier was expected.
async fn empty_id() -> String {
    String::new()
}

/// 200 with a non-text content type.
async fn xml_payload() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml")], "<ok/>")
}

/// 200 with the content type stripped entirely.
async fn no_content_type() -> Response {
    let mut resp = "bare".into_response();
    resp.headers_mut().remove(header::CONTENT_TYPE);
    resp
}

/// 200 text body with a response header that appears twice.
async fn repeated_headers() -> Response {
    let mut resp = "ok".into_response();
    let headers = resp.headers_mut();
    headers.append("x-trace", HeaderValue::from_static("alpha"));
    headers.append("x-trace", HeaderValue::from_static("beta"));
    resp
}

async fn server_error() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}
