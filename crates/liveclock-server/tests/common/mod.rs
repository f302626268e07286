//! Shared test helpers for server integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use liveclock_core::updater::ClockUpdater;
use liveclock_page::profile::{Profile, profile_page};
use liveclock_page::{Page, PageDocument};
use liveclock_test_support::{FixedClock, ManualScheduler};
use tower::ServiceExt;

use liveclock_server::facts::{FactError, FactSource};
use liveclock_server::routes;
use liveclock_server::state::AppState;

/// Fixed epoch millisecond used across all integration tests.
pub const FIXED_MILLIS: i64 = 1_700_000_000_000;

/// Fact returned by [`StaticFacts`].
pub const STATIC_FACT: &str = "Cats have five toes on their front paws.";

/// The profile every integration test serves.
pub fn test_profile() -> Profile {
    Profile {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        stack: "Rust/Axum".into(),
    }
}

/// Fact source that always answers [`STATIC_FACT`].
pub struct StaticFacts;

#[async_trait]
impl FactSource for StaticFacts {
    async fn fetch_fact(&self) -> Result<String, FactError> {
        Ok(STATIC_FACT.to_string())
    }
}

/// Fact source that always fails with an upstream status.
pub struct FailingFacts;

#[async_trait]
impl FactSource for FailingFacts {
    async fn fetch_fact(&self) -> Result<String, FactError> {
        Err(FactError::Status(503))
    }
}

/// Build the profile page with its clock started on a fixed clock and a
/// manual scheduler. The returned updater must be kept alive by the caller.
pub fn started_profile_document() -> (PageDocument, ClockUpdater) {
    let document = PageDocument::new(profile_page(&test_profile()));
    let mut updater = ClockUpdater::locate(
        &document,
        Arc::new(FixedClock::at_millis(FIXED_MILLIS)),
        Box::new(ManualScheduler::new()),
    )
    .unwrap();
    updater.start().unwrap();
    (document, updater)
}

/// Build the full app router over `document`. Uses the same route structure
/// as the server.
pub fn build_test_app(document: PageDocument) -> Router {
    build_test_app_with_facts(document, Arc::new(StaticFacts))
}

/// Build the full app router with an injected fact source.
pub fn build_test_app_with_facts(document: PageDocument, facts: Arc<dyn FactSource>) -> Router {
    routes::app(AppState::new(
        document,
        test_profile(),
        Arc::new(FixedClock::at_millis(FIXED_MILLIS)),
        facts,
    ))
}

/// Build the app over a page with no clock element.
pub fn build_app_without_target() -> Router {
    build_test_app(PageDocument::new(Page::new("empty")))
}

/// Send a GET request and return status and raw body.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Send a GET request and return the response as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get_text(app, uri).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    (status, json)
}
