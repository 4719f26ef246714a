#![allow(dead_code)]

use httpmock::MockServer;
use outline_mirror::application::services::LegacyUrlResolver;
use outline_mirror::domain::entities::RedirectMapping;
use outline_mirror::infrastructure::cache::{CacheService, DEFAULT_NAMESPACE, MemoryCache};
use outline_mirror::infrastructure::outline::{OutlineClient, OutlineSettings};
use outline_mirror::state::{AppState, SiteSettings};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

pub const API_KEY: &str = "test-key";
pub const COLLECTION_ID: &str = "col-1";

pub fn outline_settings(server: &MockServer) -> OutlineSettings {
    OutlineSettings {
        api_url: server.base_url(),
        api_key: API_KEY.to_string(),
        collection_id: COLLECTION_ID.to_string(),
        timeout: Duration::from_secs(5),
    }
}

pub fn outline_client(server: &MockServer) -> OutlineClient {
    OutlineClient::new(outline_settings(server)).unwrap()
}

pub fn memory_cache() -> Arc<CacheService> {
    Arc::new(CacheService::new(Arc::new(MemoryCache::new()), DEFAULT_NAMESPACE))
}

pub fn no_cache() -> Arc<CacheService> {
    Arc::new(CacheService::disabled(DEFAULT_NAMESPACE))
}

pub fn legacy_mappings() -> Vec<RedirectMapping> {
    vec![
        RedirectMapping::new(
            "https://old.example.com/guides/getting-started/",
            "https://team.getoutline.com/doc/getting-started-abc123",
            "Getting started",
            None,
        ),
        RedirectMapping::new(
            "/doc/retired-page-xyz789",
            "https://team.getoutline.com/doc/replacement-def456",
            "Retired page",
            None,
        ),
    ]
}

pub fn create_test_state(server: &MockServer, cache: Arc<CacheService>) -> AppState {
    let site = SiteSettings {
        title: "Test Playbook".to_string(),
        base_url: "https://playbook.test".to_string(),
        collection_id: COLLECTION_ID.to_string(),
        public_url: Some("https://team.getoutline.com".to_string()),
    };

    AppState::new(
        Arc::new(outline_client(server)),
        cache,
        LegacyUrlResolver::new(legacy_mappings()),
        site,
    )
}

pub fn document_json(id: &str, title: &str, text: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "text": text,
        "url": format!("/doc/{}", id),
        "updatedAt": "2024-05-01T10:00:00.000Z",
    })
}

pub fn collection_json() -> Value {
    json!({
        "id": COLLECTION_ID,
        "name": "Playbook",
        "description": "Welcome to the **playbook**.",
        "url": "/collection/playbook-col1",
        "updatedAt": "2024-04-01T08:00:00.000Z",
    })
}

pub fn structure_json() -> Value {
    json!([
        {
            "id": "getting-started-abc123",
            "title": "Getting started",
            "url": "/doc/getting-started-abc123",
            "updatedAt": "2024-05-01T10:00:00.000Z",
            "children": [
                {
                    "id": "first-week-aaa111",
                    "title": "First week",
                    "url": "/doc/first-week-aaa111",
                    "children": []
                },
                {
                    "id": "payroll-bbb222",
                    "title": "Payroll [private]",
                    "url": "/doc/payroll-bbb222",
                    "children": []
                }
            ]
        },
        {
            "id": "holidays-ccc333",
            "title": "Holidays",
            "url": "/doc/holidays-ccc333",
            "children": []
        }
    ])
}

/// Registers a `collections.documents` mock returning [`structure_json`].
pub async fn mock_structure(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method("POST")
                .path("/collections.documents")
                .json_body(json!({ "id": COLLECTION_ID }));
            then.status(200).json_body(json!({ "data": structure_json() }));
        })
        .await
}
