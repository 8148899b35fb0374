mod common;

use axum::http::StatusCode;
use futures::future::join_all;
use shorty::api::dto::ShortlinkResponse;
use shorty::error::ErrorBody;
use std::future::IntoFuture;
use std::time::Duration;

#[tokio::test]
async fn test_redirect_success() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "docs", "https://example.com/target?q=1").await;

    let response = server.get("/go/docs").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/target?q=1");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/go/nowhere").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorBody>().error,
        "no redirect for nowhere"
    );
}

#[tokio::test]
async fn test_redirect_invalid_short() {
    let (server, _repo) = common::create_test_server();

    for key in ["a.b", "bad%20key", "n%C3%A4", "no%2Fslash"] {
        let response = server.get(&format!("/go/{key}")).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{key}");
        assert_eq!(
            response.json::<ErrorBody>().error,
            r"invalid short does not match ^[a-zA-Z0-9\-_]+$"
        );
    }
}

#[tokio::test]
async fn test_redirect_counts_accesses() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "ex", "https://example.com").await;

    for _ in 0..3 {
        server
            .get("/go/ex")
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    let link: ShortlinkResponse = server.get("/shortlinks/ex").await.json();
    assert_eq!(link.access_count, 3);
}

#[tokio::test]
async fn test_redirect_does_not_touch_updated_at() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "ex", "https://example.com").await;
    let before: ShortlinkResponse = server.get("/shortlinks/ex").await.json();

    tokio::time::sleep(Duration::from_millis(5)).await;
    server.get("/go/ex").await;

    let after: ShortlinkResponse = server.get("/shortlinks/ex").await.json();
    assert_eq!(after.access_count, 1);
    assert_eq!(after.updated_at, before.updated_at);
}

#[tokio::test]
async fn test_concurrent_redirects_all_counted() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "hot", "https://example.com").await;

    let requests = (0..40).map(|_| server.get("/go/hot").into_future());
    let responses = join_all(requests).await;

    assert!(
        responses
            .iter()
            .all(|r| r.status_code() == StatusCode::TEMPORARY_REDIRECT)
    );

    let link: ShortlinkResponse = server.get("/shortlinks/hot").await.json();
    assert_eq!(link.access_count, 40);
}

#[tokio::test]
async fn test_redirect_after_delete() {
    let (server, _repo) = common::create_test_server();
    common::create_test_shortlink(&server, "gone", "https://example.com").await;
    server.delete("/shortlinks/gone").await.assert_status_ok();

    server
        .get("/go/gone")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
