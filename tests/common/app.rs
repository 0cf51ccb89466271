use std::sync::Arc;

use axum_test::TestServer;
use time::macros::datetime;

use api_console::build_router;
use api_console::clock::ManualClock;
use api_console::config::Config;
use api_console::state::AppState;

/// Test configuration
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        notification_capacity: 50,
        ..Config::default()
    }
}

/// Test application wrapper
#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = test_config();

        // Timestamps only move when a test advances the clock
        let clock = Arc::new(ManualClock::new(datetime!(2024-01-15 10:30 UTC)));
        let state = AppState::with_clock(config, clock.clone());

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            state,
            clock,
        }
    }
}
