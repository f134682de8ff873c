use axum::{http::HeaderMap, routing::get, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{PortalRole, ProfileData};

use crate::common;

#[tokio::test]
async fn test_admin_details_success() {
    let body = common::profile_envelope(json!({ "name": "Ada", "email": "ada@x.edu" }));
    let base = common::spawn_backend(common::fixed_backend(body)).await;

    let profile = common::client(&base)
        .my_details(PortalRole::Admin, Some("tok"))
        .await
        .unwrap();

    assert_eq!(profile, ProfileData::new("Ada", "ada@x.edu"));
}

#[tokio::test]
async fn test_student_details_keep_extra_fields() {
    let body = common::profile_envelope(json!({
        "name": "Grace",
        "email": "grace@x.edu",
        "enrollmentNo": 2041,
        "branch": "CSE",
        "semester": 5
    }));
    let base = common::spawn_backend(common::fixed_backend(body)).await;

    let profile = common::client(&base)
        .my_details(PortalRole::Student, Some("tok"))
        .await
        .unwrap();

    assert_eq!(profile.name, "Grace");
    assert_eq!(profile.details["branch"], "CSE");
    assert!(profile
        .detail_rows()
        .contains(&("Enrollment No".to_string(), "2041".to_string())));
}

#[tokio::test]
async fn test_null_email_still_yields_profile() {
    let body = common::profile_envelope(json!({
        "_id": "65f1c0ffee",
        "name": "Ada",
        "email": null,
        "phone": "123"
    }));
    let base = common::spawn_backend(common::fixed_backend(body)).await;

    let profile = common::client(&base)
        .my_details(PortalRole::Admin, Some("tok"))
        .await
        .unwrap();

    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.email, "");
    assert_eq!(
        profile.detail_rows(),
        vec![("Phone".to_string(), "123".to_string())]
    );
}

#[tokio::test]
async fn test_each_role_hits_its_own_path() {
    let router = Router::new()
        .route(
            "/api/admin/my-details",
            get(|| async {
                Json(common::profile_envelope(json!({ "name": "Admin Route", "email": "a@x.edu" })))
            }),
        )
        .route(
            "/api/student/my-details",
            get(|| async {
                Json(common::profile_envelope(json!({ "name": "Student Route", "email": "s@x.edu" })))
            }),
        );
    let base = common::spawn_backend(router).await;
    let client = common::client(&base);

    let admin = client.my_details(PortalRole::Admin, Some("tok")).await.unwrap();
    let student = client.my_details(PortalRole::Student, Some("tok")).await.unwrap();

    assert_eq!(admin.name, "Admin Route");
    assert_eq!(student.name, "Student Route");
}

#[tokio::test]
async fn test_bearer_token_is_forwarded() {
    let router = Router::new().route(
        "/api/student/my-details",
        get(|headers: HeaderMap| async move {
            let auth = common::authorization(&headers);
            Json(common::profile_envelope(json!({
                "name": "Ada",
                "email": "ada@x.edu",
                "authorization": auth
            })))
        }),
    );
    let base = common::spawn_backend(router).await;

    let profile = common::client(&base)
        .my_details(PortalRole::Student, Some("abc.def.ghi"))
        .await
        .unwrap();

    assert_eq!(profile.details["authorization"], "Bearer abc.def.ghi");
}

#[tokio::test]
async fn test_missing_token_still_sends_request() {
    let router = Router::new().route(
        "/api/admin/my-details",
        get(|headers: HeaderMap| async move {
            let auth = common::authorization(&headers);
            Json(common::profile_envelope(json!({
                "name": "Ada",
                "email": "ada@x.edu",
                "authorization": auth
            })))
        }),
    );
    let base = common::spawn_backend(router).await;

    let profile = common::client(&base)
        .my_details(PortalRole::Admin, None)
        .await
        .unwrap();

    let auth = profile.details["authorization"].as_str().unwrap();
    assert_eq!(auth.trim(), "Bearer");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let body = common::profile_envelope(json!({ "name": "Ada", "email": "ada@x.edu" }));
    let base = common::spawn_backend(common::fixed_backend(body)).await;

    let profile = common::client(&format!("{base}/"))
        .my_details(PortalRole::Admin, Some("tok"))
        .await
        .unwrap();

    assert_eq!(profile.email, "ada@x.edu");
}
