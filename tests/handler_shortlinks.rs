mod common;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;
use shorty::api::dto::{DeletedResponse, ShortlinkResponse};
use shorty::error::ErrorBody;
use std::time::Duration;

const INVALID_SHORT: &str = r"invalid short does not match ^[a-zA-Z0-9\-_]+$";

/// Percent-encoded path keys with a space, a non-ASCII letter and a slash.
const BAD_PATH_KEYS: [&str; 3] = ["bad%20key", "n%C3%A4", "no%2Fslash"];

#[tokio::test]
async fn test_list_empty() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/shortlinks").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/shortlinks")
        .json(&json!({
            "short": "docs",
            "long": "https://example.com/documentation",
            "descr": "project docs"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert!(response.text().is_empty());

    let link: ShortlinkResponse = server.get("/shortlinks/docs").await.json();

    assert_eq!(link.short, "docs");
    assert_eq!(link.long, "https://example.com/documentation");
    assert_eq!(link.descr, "project docs");
    assert_eq!(link.access_count, 0);
    assert_eq!(link.created_at, link.updated_at);
    assert!(link.updated_at <= Utc::now());
}

#[tokio::test]
async fn test_get_does_not_expose_id() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "ex", "https://example.com").await;

    let body: serde_json::Value = server.get("/shortlinks/ex").await.json();

    assert!(body.get("id").is_none());
    assert!(body.get("_id").is_none());
}

#[tokio::test]
async fn test_list_returns_created() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "a", "https://a.example.com").await;
    common::create_test_shortlink(&server, "b", "https://b.example.com").await;

    let links: Vec<ShortlinkResponse> = server.get("/shortlinks").await.json();

    assert_eq!(links.len(), 2);
    assert!(links.iter().any(|l| l.short == "a"));
    assert!(links.iter().any(|l| l.short == "b"));
}

#[tokio::test]
async fn test_get_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/shortlinks/missing").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorBody>().error,
        "shortlink not found"
    );
}

#[tokio::test]
async fn test_create_duplicate_conflict() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "ex", "https://example.com").await;

    let response = server
        .post("/shortlinks")
        .json(&json!({ "short": "ex", "long": "https://other.example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(
        response.json::<ErrorBody>().error,
        "shortlink already exists"
    );

    let link: ShortlinkResponse = server.get("/shortlinks/ex").await.json();
    assert_eq!(link.long, "https://example.com");
}

#[tokio::test]
async fn test_create_invalid_short() {
    let (server, repo) = common::create_test_server();

    for short in ["", "has space", "slash/inside", "ümlaut", "dot.ted", "q?"] {
        let response = server
            .post("/shortlinks")
            .json(&json!({ "short": short, "long": "https://example.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{short}");
        assert_eq!(response.json::<ErrorBody>().error, INVALID_SHORT);
    }

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_invalid_url() {
    let (server, repo) = common::create_test_server();

    for long in ["", "example.com", "/relative/path", "mailto:someone@example.com", "http://"] {
        let response = server
            .post("/shortlinks")
            .json(&json!({ "short": "ex", "long": long }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{long}");
        assert_eq!(response.json::<ErrorBody>().error, "invalid redirect url");
    }

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_accepts_any_scheme_with_host() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/shortlinks")
        .json(&json!({ "short": "ftp", "long": "ftp://files.example.com/pub" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_malformed_json() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/shortlinks")
        .text("{\"short\": \"ex\",")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(!response.json::<ErrorBody>().error.is_empty());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_missing_long() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/shortlinks")
        .json(&json!({ "short": "ex" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorBody>().error, "invalid redirect url");
}

#[tokio::test]
async fn test_failed_create_leaves_short_free() {
    let (server, _repo) = common::create_test_server();

    server
        .post("/shortlinks")
        .json(&json!({ "short": "ex", "long": "not a url" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = server.get("/check/ex").await.json();
    assert_eq!(body, json!({ "free": true }));
}

#[tokio::test]
async fn test_get_invalid_short() {
    let (server, _repo) = common::create_test_server();

    for key in BAD_PATH_KEYS {
        let response = server.get(&format!("/shortlinks/{key}")).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{key}");
        assert_eq!(response.json::<ErrorBody>().error, INVALID_SHORT);
    }
}

#[tokio::test]
async fn test_update_fields_and_timestamps() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "ex", "https://example.com").await;
    let before: ShortlinkResponse = server.get("/shortlinks/ex").await.json();

    tokio::time::sleep(Duration::from_millis(5)).await;

    let response = server
        .put("/shortlinks/ex")
        .json(&json!({
            "short": "ex",
            "long": "https://example.org/new",
            "descr": "moved"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let after: ShortlinkResponse = response.json();

    assert_eq!(after.long, "https://example.org/new");
    assert_eq!(after.descr, "moved");
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
    assert!(after.updated_at <= Utc::now());

    let fetched: ShortlinkResponse = server.get("/shortlinks/ex").await.json();
    assert_eq!(fetched, after);
}

#[tokio::test]
async fn test_update_keeps_access_count() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "ex", "https://example.com").await;

    server.get("/go/ex").await;
    server.get("/go/ex").await;

    server
        .put("/shortlinks/ex")
        .json(&json!({ "short": "ex", "long": "https://example.org" }))
        .await
        .assert_status_ok();

    server.get("/go/ex").await;

    let link: ShortlinkResponse = server.get("/shortlinks/ex").await.json();
    assert_eq!(link.access_count, 3);
    assert_eq!(link.long, "https://example.org");
}

#[tokio::test]
async fn test_update_rename_preserves_identity() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "old", "https://example.com").await;
    server.get("/go/old").await;
    let before: ShortlinkResponse = server.get("/shortlinks/old").await.json();

    let renamed: ShortlinkResponse = server
        .put("/shortlinks/old")
        .json(&json!({ "short": "new", "long": "https://example.com" }))
        .await
        .json();

    assert_eq!(renamed.short, "new");
    assert_eq!(renamed.access_count, 1);
    assert_eq!(renamed.created_at, before.created_at);

    server
        .get("/shortlinks/old")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    common::create_test_shortlink(&server, "old", "https://recreated.example.com").await;
    let recreated: ShortlinkResponse = server.get("/shortlinks/old").await.json();
    assert_eq!(recreated.access_count, 0);
}

#[tokio::test]
async fn test_update_rename_collision() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "a", "https://a.example.com").await;
    common::create_test_shortlink(&server, "b", "https://b.example.com").await;

    let response = server
        .put("/shortlinks/a")
        .json(&json!({ "short": "b", "long": "https://a.example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(
        response.json::<ErrorBody>().error,
        "shortlink already exists"
    );

    let a: ShortlinkResponse = server.get("/shortlinks/a").await.json();
    let b: ShortlinkResponse = server.get("/shortlinks/b").await.json();
    assert_eq!(a.long, "https://a.example.com");
    assert_eq!(b.long, "https://b.example.com");
}

#[tokio::test]
async fn test_update_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .put("/shortlinks/missing")
        .json(&json!({ "short": "missing", "long": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<ErrorBody>().error, "shortlink not found");
}

#[tokio::test]
async fn test_update_validation() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "ex", "https://example.com").await;

    let bad_path = server
        .put("/shortlinks/bad!")
        .json(&json!({ "short": "ex", "long": "https://example.com" }))
        .await;
    assert_eq!(bad_path.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(bad_path.json::<ErrorBody>().error, INVALID_SHORT);

    let bad_body_short = server
        .put("/shortlinks/ex")
        .json(&json!({ "short": "bad key", "long": "https://example.com" }))
        .await;
    assert_eq!(bad_body_short.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(bad_body_short.json::<ErrorBody>().error, INVALID_SHORT);

    let bad_url = server
        .put("/shortlinks/ex")
        .json(&json!({ "short": "ex", "long": "nowhere" }))
        .await;
    assert_eq!(bad_url.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(bad_url.json::<ErrorBody>().error, "invalid redirect url");

    let link: ShortlinkResponse = server.get("/shortlinks/ex").await.json();
    assert_eq!(link.long, "https://example.com");
}

#[tokio::test]
async fn test_delete_returns_count() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "ex", "https://example.com").await;

    let first = server.delete("/shortlinks/ex").await;
    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(first.json::<DeletedResponse>(), DeletedResponse { deleted: 1 });

    let second = server.delete("/shortlinks/ex").await;
    assert_eq!(second.status_code(), StatusCode::OK);
    assert_eq!(second.json::<DeletedResponse>(), DeletedResponse { deleted: 0 });

    server
        .get("/shortlinks/ex")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_invalid_short() {
    let (server, _repo) = common::create_test_server();

    for key in BAD_PATH_KEYS {
        let response = server.delete(&format!("/shortlinks/{key}")).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{key}");
        assert_eq!(response.json::<ErrorBody>().error, INVALID_SHORT);
    }
}

#[tokio::test]
async fn test_update_invalid_path_short() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "ex", "https://example.com").await;

    for key in BAD_PATH_KEYS {
        let response = server
            .put(&format!("/shortlinks/{key}"))
            .json(&json!({ "short": "ex", "long": "https://example.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{key}");
        assert_eq!(response.json::<ErrorBody>().error, INVALID_SHORT);
    }
}

#[tokio::test]
async fn test_create_rejects_unnormalized_urls() {
    let (server, repo) = common::create_test_server();

    for long in [
        "http:example.com",
        "http:/example.com",
        " https://example.com",
        "https://example.com/\n",
        "https://exa\tmple.com",
        "https://example.com\0",
    ] {
        let response = server
            .post("/shortlinks")
            .json(&json!({ "short": "ex", "long": long }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{long:?}");
        assert_eq!(response.json::<ErrorBody>().error, "invalid redirect url");
    }

    assert!(repo.is_empty().await);
    server
        .get("/go/ex")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_unnormalized_urls() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "ex", "https://example.com").await;

    for long in ["http:example.com", " https://example.com", "https://example.com/\n"] {
        let response = server
            .put("/shortlinks/ex")
            .json(&json!({ "short": "ex", "long": long }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{long:?}");
        assert_eq!(response.json::<ErrorBody>().error, "invalid redirect url");
    }

    let response = server.get("/go/ex").await;
    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com");
}
