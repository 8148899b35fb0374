#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use shorty::domain::repositories::ShortlinkRepository;
use shorty::infrastructure::persistence::InMemoryShortlinkRepository;
use shorty::routes::api_router;
use shorty::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<InMemoryShortlinkRepository>) {
    let repository = Arc::new(InMemoryShortlinkRepository::new());
    let state = AppState::new(repository.clone() as Arc<dyn ShortlinkRepository>);

    (state, repository)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryShortlinkRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(api_router(state)).unwrap();

    (server, repository)
}

pub async fn create_test_shortlink(server: &TestServer, short: &str, long: &str) {
    server
        .post("/shortlinks")
        .json(&json!({ "short": short, "long": long, "descr": "" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}
