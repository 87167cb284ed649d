#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, http::StatusCode, Router};
use flipdns_api::{create_api_routes, AppState};
use flipdns_application::ports::RecordStore;
use flipdns_application::services::QueryMetrics;
use flipdns_domain::{DomainError, LocalRecord, StoredRecord};
use flipdns_infrastructure::repositories::InMemoryRecordStore;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Store whose every lookup fails.
pub struct FailingRecordStore;

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn lookup(&self, _domain: &str) -> Result<Option<StoredRecord>, DomainError> {
        Err(DomainError::DatabaseError("database is locked".to_string()))
    }
}

pub fn test_state() -> AppState {
    AppState {
        store: Arc::new(InMemoryRecordStore::new(&[
            LocalRecord::new("example.com", "192.168.2.143", Some(60)),
            LocalRecord::new("printer.lan", "10.0.0.9", None),
        ])),
        metrics: Arc::new(QueryMetrics::new()),
    }
}

pub fn app(state: AppState) -> Router {
    create_api_routes(state)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}
