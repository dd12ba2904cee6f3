#![allow(dead_code)]

use axum_test::TestServer;
use itty_id::config::Config;
use itty_id::routes::app_router;
use itty_id::state::AppState;

pub fn create_test_state(config: Config) -> AppState {
    AppState::from_config(config).unwrap()
}

pub fn create_test_server_with(config: Config) -> TestServer {
    let app = app_router(create_test_state(config));
    TestServer::new(app).unwrap()
}

pub fn create_test_server() -> TestServer {
    create_test_server_with(Config::default())
}
