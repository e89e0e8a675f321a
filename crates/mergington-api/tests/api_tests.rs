//! Integration tests for the activities API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use mergington_activities::ActivityStore;
use mergington_api::router::build_router;
use mergington_api::state::AppState;
use mergington_types::Activity;
use serde_json::Value;
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(ActivityStore::with_seed_data())))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_activities(router: &Router) -> Value {
    let response = router
        .clone()
        .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

async fn post_signup(router: &Router, path: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::post(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn participants(json: &Value, activity: &str) -> Vec<String> {
    json[activity]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().to_owned())
        .collect()
}

// =========================================================================
// GET /
// =========================================================================

#[tokio::test]
async fn test_index_redirects_to_frontend() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "/static/index.html");
}

#[tokio::test]
async fn test_index_uses_configured_redirect_target() {
    let state = AppState::default().with_redirect_target("/ui/");
    let router = build_router(Arc::new(state));

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get("location").unwrap(), "/ui/");
}

// =========================================================================
// GET /activities
// =========================================================================

#[tokio::test]
async fn test_get_activities_returns_all() {
    let router = build_router(make_test_state());
    let json = get_activities(&router).await;

    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 3);
    assert!(obj.contains_key("Chess Club"));
    assert!(obj.contains_key("Programming Class"));
    assert!(obj.contains_key("Gym Class"));
}

#[tokio::test]
async fn test_get_activities_contains_expected_fields() {
    let router = build_router(make_test_state());
    let json = get_activities(&router).await;

    for activity in json.as_object().unwrap().values() {
        assert!(activity["description"].is_string());
        assert!(activity["schedule"].is_string());
        assert!(activity["max_participants"].is_u64());
        assert!(activity["participants"].is_array());
    }

    assert_eq!(
        json["Chess Club"]["description"],
        "Learn strategies and compete in chess tournaments"
    );
    assert_eq!(json["Chess Club"]["schedule"], "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(json["Chess Club"]["max_participants"], 12);
    assert_eq!(json["Programming Class"]["max_participants"], 20);
    assert_eq!(json["Gym Class"]["max_participants"], 30);
}

#[tokio::test]
async fn test_get_activities_deserializes_into_activity_map() {
    let router = build_router(make_test_state());
    let json = get_activities(&router).await;

    let parsed: BTreeMap<String, Activity> = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, mergington_activities::seed_activities());
}

#[tokio::test]
async fn test_get_activities_is_idempotent() {
    let router = build_router(make_test_state());

    let first = get_activities(&router).await;
    let second = get_activities(&router).await;

    assert_eq!(first, second);
}

// =========================================================================
// POST /activities/{activity_name}/signup
// =========================================================================

#[tokio::test]
async fn test_signup_success() {
    let router = build_router(make_test_state());

    let (status, json) = post_signup(
        &router,
        "/activities/Chess%20Club/signup?email=new_student@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({
            "message": "Signed up new_student@mergington.edu for Chess Club"
        })
    );

    let activities = get_activities(&router).await;
    assert_eq!(
        participants(&activities, "Chess Club"),
        vec![
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "new_student@mergington.edu",
        ]
    );
}

#[tokio::test]
async fn test_signup_adds_participant_to_list() {
    let router = build_router(make_test_state());

    let (status, _) = post_signup(
        &router,
        "/activities/Programming%20Class/signup?email=alice@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let activities = get_activities(&router).await;
    let roster = participants(&activities, "Programming Class");
    assert_eq!(
        roster.iter().filter(|p| *p == "alice@mergington.edu").count(),
        1
    );
    assert_eq!(roster.last().map(String::as_str), Some("alice@mergington.edu"));
}

#[tokio::test]
async fn test_signup_nonexistent_activity_returns_404() {
    let router = build_router(make_test_state());
    let before = get_activities(&router).await;

    let (status, json) = post_signup(
        &router,
        "/activities/Nonexistent%20Club/signup?email=student@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "detail": "Activity not found" }));
    assert_eq!(get_activities(&router).await, before);
}

#[tokio::test]
async fn test_signup_duplicate_returns_400() {
    let router = build_router(make_test_state());
    let path = "/activities/Chess%20Club/signup?email=duplicate@mergington.edu";

    let (first, _) = post_signup(&router, path).await;
    let (second, json) = post_signup(&router, path).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Student is already signed up");

    let activities = get_activities(&router).await;
    assert_eq!(participants(&activities, "Chess Club").len(), 3);
}

#[tokio::test]
async fn test_signup_seeded_student_returns_400() {
    let router = build_router(make_test_state());

    let (status, json) = post_signup(
        &router,
        "/activities/Gym%20Class/signup?email=olivia@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Student is already signed up");
}

#[tokio::test]
async fn test_signup_email_is_percent_decoded() {
    let router = build_router(make_test_state());

    let (status, json) = post_signup(
        &router,
        "/activities/Chess%20Club/signup?email=first.last%40mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "Signed up first.last@mergington.edu for Chess Club"
    );
}

#[tokio::test]
async fn test_signup_accepts_any_email_string() {
    let router = build_router(make_test_state());

    let (status, json) =
        post_signup(&router, "/activities/Chess%20Club/signup?email=not-an-email").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Signed up not-an-email for Chess Club");
}

#[tokio::test]
async fn test_signup_missing_email_returns_422() {
    let router = build_router(make_test_state());

    let (status, json) = post_signup(&router, "/activities/Chess%20Club/signup").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["detail"].is_string());

    let activities = get_activities(&router).await;
    assert_eq!(participants(&activities, "Chess Club").len(), 2);
}

#[tokio::test]
async fn test_signup_activity_name_is_case_sensitive() {
    let router = build_router(make_test_state());

    let (status, _) = post_signup(
        &router,
        "/activities/chess%20club/signup?email=student@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_signup_requires_post() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/activities/Chess%20Club/signup?email=a@mergington.edu")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_concurrent_duplicate_signups_admit_one() {
    let router = build_router(make_test_state());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move {
                router
                    .oneshot(
                        Request::post("/activities/Gym%20Class/signup?email=racer@mergington.edu")
                            .body(Body::empty())
                            .unwrap(),
                    )
                    .await
                    .unwrap()
                    .status()
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == StatusCode::BAD_REQUEST)
            .count(),
        15
    );
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
