//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.
//!
//! | Path | GET | POST |
//! |------|-----|------|
//! | `/` | name envelope | append a name |
//! | `/api/` | bare record list | create a record (201) |
//! | `/health` | health status | - |

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode},
    middleware,
    routing::get,
};

use crate::application::dto::NameRecordDto;
use crate::application::use_cases::{
    CreateRecordUseCase, ListNamesUseCase, ListRecordsUseCase, SaveNameUseCase,
};
use crate::domain::names::NameRepository;
use crate::domain::records::RecordRepository;
use crate::error::ApiError;

use super::middleware::trace_request;
use super::request::Payload;
use super::response::{HealthResponse, MessageResponse, NAME_SAVED_MESSAGE, NameListResponse};

/// Application state shared across handlers.
pub struct AppState<N, R>
where
    N: NameRepository,
    R: RecordRepository,
{
    /// Use case for reading the name collection.
    pub list_names: Arc<ListNamesUseCase<N>>,
    /// Use case for appending a name.
    pub save_name: Arc<SaveNameUseCase<N>>,
    /// Use case for listing persisted records.
    pub list_records: Arc<ListRecordsUseCase<R>>,
    /// Use case for creating a record.
    pub create_record: Arc<CreateRecordUseCase<R>>,
    /// Application version.
    pub version: String,
}

impl<N, R> AppState<N, R>
where
    N: NameRepository,
    R: RecordRepository,
{
    /// Wire every use case onto the given stores.
    pub fn new(names: Arc<N>, records: Arc<R>, version: impl Into<String>) -> Self {
        Self {
            list_names: Arc::new(ListNamesUseCase::new(Arc::clone(&names))),
            save_name: Arc::new(SaveNameUseCase::new(names)),
            list_records: Arc::new(ListRecordsUseCase::new(Arc::clone(&records))),
            create_record: Arc::new(CreateRecordUseCase::new(records)),
            version: version.into(),
        }
    }
}

impl<N, R> Clone for AppState<N, R>
where
    N: NameRepository,
    R: RecordRepository,
{
    fn clone(&self) -> Self {
        Self {
            list_names: Arc::clone(&self.list_names),
            save_name: Arc::clone(&self.save_name),
            list_records: Arc::clone(&self.list_records),
            create_record: Arc::clone(&self.create_record),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<N, R>(state: AppState<N, R>) -> Router
where
    N: NameRepository + 'static,
    R: RecordRepository + 'static,
{
    Router::new()
        .route(
            "/",
            get(list_names)
                .post(save_name)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/",
            get(list_records)
                .post(create_record)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health_check).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<N, R>(State(state): State<AppState<N, R>>) -> Json<HealthResponse>
where
    N: NameRepository,
    R: RecordRepository,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// List every stored name with its count.
async fn list_names<N, R>(
    State(state): State<AppState<N, R>>,
) -> Result<Json<NameListResponse>, ApiError>
where
    N: NameRepository,
    R: RecordRepository,
{
    let listing = state.list_names.execute().await?;
    Ok(Json(NameListResponse::success(listing)))
}

/// Append a submitted name.
async fn save_name<N, R>(
    State(state): State<AppState<N, R>>,
    Payload(payload): Payload,
) -> Result<Json<MessageResponse>, ApiError>
where
    N: NameRepository,
    R: RecordRepository,
{
    state.save_name.execute(&payload).await?;
    Ok(Json(MessageResponse::success(NAME_SAVED_MESSAGE)))
}

/// List persisted records as a bare array.
async fn list_records<N, R>(
    State(state): State<AppState<N, R>>,
) -> Result<Json<Vec<NameRecordDto>>, ApiError>
where
    N: NameRepository,
    R: RecordRepository,
{
    let records = state.list_records.execute().await?;
    Ok(Json(records))
}

/// Validate and persist a record.
async fn create_record<N, R>(
    State(state): State<AppState<N, R>>,
    Payload(payload): Payload,
) -> Result<(StatusCode, Json<NameRecordDto>), ApiError>
where
    N: NameRepository,
    R: RecordRepository,
{
    let record = state.create_record.execute(&payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::method_not_allowed(&method)
}

async fn not_found() -> ApiError {
    ApiError::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::{NameRecord, NewNameRecord, RecordStoreError};
    use crate::infrastructure::persistence::{InMemoryNameStore, InMemoryRecordRepository};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct UnreachableDb;

    #[async_trait]
    impl RecordRepository for UnreachableDb {
        async fn create(&self, _record: NewNameRecord) -> Result<NameRecord, RecordStoreError> {
            Err(RecordStoreError::Connection("refused".to_string()))
        }

        async fn list_all(&self) -> Result<Vec<NameRecord>, RecordStoreError> {
            Err(RecordStoreError::Connection("refused".to_string()))
        }
    }

    fn create_test_state() -> AppState<InMemoryNameStore, InMemoryRecordRepository> {
        AppState::new(
            Arc::new(InMemoryNameStore::new()),
            Arc::new(InMemoryRecordRepository::new()),
            "1.0.0-test",
        )
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn health_check_returns_version() {
        let app = create_router(create_test_state());

        let (status, body) = send(app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy", "version": "1.0.0-test"}));
    }

    #[tokio::test]
    async fn empty_name_list() {
        let app = create_router(create_test_state());

        let (status, body) = send(app, "GET", "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "success", "count_name": 0, "name": []})
        );
    }

    #[tokio::test]
    async fn save_then_list_name() {
        let app = create_router(create_test_state());

        let (status, body) = send(app.clone(), "POST", "/", Some(json!({"name": "Alice"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "success", "message": "Name saved successfully"})
        );

        let (status, body) = send(app, "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "success", "count_name": 1, "name": ["Alice"]})
        );
    }

    #[tokio::test]
    async fn missing_name_is_rejected() {
        let app = create_router(create_test_state());

        let (status, body) = send(app, "POST", "/", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"status": "error", "message": "Name field is required"})
        );
    }

    #[tokio::test]
    async fn create_record_returns_created() {
        let app = create_router(create_test_state());

        let (status, body) = send(app, "POST", "/api/", Some(json!({"name": "Alice"}))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Alice");
        assert!(body["id"].is_string());
        assert!(body["created_at"].is_string());
    }

    #[tokio::test]
    async fn invalid_record_returns_field_errors() {
        let app = create_router(create_test_state());

        let (status, body) = send(app, "POST", "/api/", Some(json!({"name": ""}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"name": ["This field may not be blank."]}));
    }

    #[tokio::test]
    async fn unsupported_method_is_405() {
        let app = create_router(create_test_state());

        let (status, body) = send(app, "DELETE", "/", None).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"detail": "Method \"DELETE\" not allowed."}));
    }

    #[tokio::test]
    async fn admin_is_not_served() {
        let app = create_router(create_test_state());

        let (status, body) = send(app, "GET", "/admin/", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Not found."}));
    }

    #[tokio::test]
    async fn database_failure_is_500() {
        let state = AppState::new(
            Arc::new(InMemoryNameStore::new()),
            Arc::new(UnreachableDb),
            "1.0.0-test",
        );
        let app = create_router(state);

        let (status, body) = send(app, "GET", "/api/", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "A server error occurred."}));
    }
}
