use axum::{http::StatusCode, routing::get, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{ApiErrorKind, PortalRole};

use crate::common;

#[tokio::test]
async fn test_success_false_carries_server_message() {
    let body = json!({ "success": false, "message": "Student not found" });
    let base = common::spawn_backend(common::fixed_backend(body)).await;

    let err = common::client(&base)
        .my_details(PortalRole::Student, Some("tok"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Rejected);
    assert_eq!(
        err.user_message(PortalRole::Student.fetch_error_message()),
        "Student not found"
    );
}

#[tokio::test]
async fn test_unauthorized_keeps_body_message() {
    let router = Router::new().route(
        "/api/admin/my-details",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "message": "Invalid or expired token" })),
            )
        }),
    );
    let base = common::spawn_backend(router).await;

    let err = common::client(&base)
        .my_details(PortalRole::Admin, Some("stale"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Status);
    assert_eq!(err.status, Some(401));
    assert_eq!(
        err.user_message(PortalRole::Admin.fetch_error_message()),
        "Invalid or expired token"
    );
}

#[tokio::test]
async fn test_server_error_without_body_uses_fallback() {
    let router = Router::new().route(
        "/api/admin/my-details",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = common::spawn_backend(router).await;

    let err = common::client(&base)
        .my_details(PortalRole::Admin, Some("tok"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Status);
    assert_eq!(err.status, Some(500));
    assert_eq!(
        err.user_message(PortalRole::Admin.fetch_error_message()),
        "Error fetching admin details"
    );
}

#[tokio::test]
async fn test_unknown_route_is_status_error() {
    let base = common::spawn_backend(Router::new()).await;

    let err = common::client(&base)
        .my_details(PortalRole::Student, Some("tok"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Status);
    assert_eq!(err.status, Some(404));
}

#[tokio::test]
async fn test_success_without_data_is_decode_error() {
    let base = common::spawn_backend(common::fixed_backend(json!({ "success": true }))).await;

    let err = common::client(&base)
        .my_details(PortalRole::Student, Some("tok"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Decode);
    assert_eq!(
        err.user_message(PortalRole::Student.fetch_error_message()),
        "Error fetching user details"
    );
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let router = Router::new().route(
        "/api/student/my-details",
        get(|| async { "<html>maintenance</html>" }),
    );
    let base = common::spawn_backend(router).await;

    let err = common::client(&base)
        .my_details(PortalRole::Student, Some("tok"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Decode);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let base = common::dead_backend().await;

    let err = common::client(&base)
        .my_details(PortalRole::Admin, Some("tok"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Transport);
    assert_eq!(err.message, None);
    assert_eq!(
        err.user_message(PortalRole::Admin.fetch_error_message()),
        "Error fetching admin details"
    );
}
