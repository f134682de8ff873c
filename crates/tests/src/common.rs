use api::ApiClient;
use axum::{http::HeaderMap, routing::get, Json, Router};
use serde_json::{json, Value};
use shared_types::ClientConfig;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its `/api` base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock backend stopped");
    });

    format!("http://{addr}/api")
}

/// Client pointed at `base_url`.
pub fn client(base_url: &str) -> ApiClient {
    ApiClient::new(ClientConfig {
        base_url: base_url.to_string(),
        ..ClientConfig::default()
    })
}

/// Base URL of a port nothing is listening on.
pub async fn dead_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}/api")
}

/// Backend answering both `my-details` routes with the same fixed JSON.
pub fn fixed_backend(body: Value) -> Router {
    let admin = body.clone();
    Router::new()
        .route("/api/admin/my-details", get(move || async move { Json(admin) }))
        .route("/api/student/my-details", get(move || async move { Json(body) }))
}

/// `Authorization` header as received, or `"<none>"`.
pub fn authorization(headers: &HeaderMap) -> String {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("<none>")
        .to_string()
}

/// Success envelope wrapping a profile.
pub fn profile_envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}
