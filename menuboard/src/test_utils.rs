//! Test utilities shared by handler and router tests.

use crate::{
    AppState, build_router,
    config::{AdminConfig, Config, DatabaseConfig},
    render::MenuRenderer,
    store::InMemoryMenuStore,
};
use axum_test::TestServer;
use std::sync::Arc;

pub const TEST_ADMIN_KEY: &str = "test-admin-key-for-testing-only";

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        database: DatabaseConfig::Memory,
        admin: AdminConfig {
            api_key: Some(TEST_ADMIN_KEY.to_string()),
        },
        ..Default::default()
    }
}

pub fn create_test_state_with_config(config: Config, items: Vec<(&str, i64)>) -> AppState {
    let renderer = MenuRenderer::new(config.menu.title.clone()).expect("Failed to build menu renderer");

    AppState::builder()
        .store(Arc::new(InMemoryMenuStore::with_items(items)))
        .renderer(Arc::new(renderer))
        .config(config)
        .build()
}

/// App state over an in-memory store holding `items` in order, with the admin API enabled.
pub fn create_test_state(items: Vec<(&str, i64)>) -> AppState {
    create_test_state_with_config(create_test_config(), items)
}

pub fn create_test_server_with_config(config: Config, items: Vec<(&str, i64)>) -> TestServer {
    let state = create_test_state_with_config(config, items);
    TestServer::new(build_router(&state)).expect("Failed to create test server")
}

pub fn create_test_server(items: Vec<(&str, i64)>) -> TestServer {
    create_test_server_with_config(create_test_config(), items)
}

/// `Authorization` header carrying the test admin key
pub fn admin_auth_header() -> (String, String) {
    ("authorization".to_string(), format!("Bearer {TEST_ADMIN_KEY}"))
}
