//! Common test utilities and fixtures for integration tests.
//!
//! The analysis service keeps no external state, so every test builds its
//! own router in-process.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use flashcards_quiz_backend::config::Config;
use flashcards_quiz_backend::{build_router, AppState};

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a test context with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test context with custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            app: build_router(AppState::new(config)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
