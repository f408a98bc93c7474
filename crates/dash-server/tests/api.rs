//! HTTP surface tests: the data endpoint against real and failing stores, and
//! the single-page fallback routing.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use dash_config::{ServerConfig, StoreConfig};
use dash_core::Record;
use dash_db::{DashDb, DatabaseError, RecordStore};
use dash_server::{AppState, build_router, connect_store};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tower::ServiceExt;

/// A store whose backend is gone.
struct UnreachableStore;

#[async_trait]
impl RecordStore for UnreachableStore {
    async fn insert_many(&self, _records: &[Record]) -> Result<usize, DatabaseError> {
        Err(DatabaseError::Query("connection refused".into()))
    }

    async fn find_all(&self) -> Result<Vec<Record>, DatabaseError> {
        Err(DatabaseError::Query("connection refused".into()))
    }

    async fn count(&self) -> Result<u64, DatabaseError> {
        Err(DatabaseError::Query("connection refused".into()))
    }
}

fn static_dir_with_index() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<!doctype html><title>Data Visualization Dashboard</title>",
    )
    .unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('dashboard');").unwrap();
    dir
}

fn router(store: Option<Arc<dyn RecordStore>>, static_dir: &Path) -> Router {
    let server = ServerConfig {
        static_dir: static_dir.to_string_lossy().into_owned(),
        ..Default::default()
    };
    build_router(AppState::new(store, &server))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn memory_store(records: &[Record]) -> Arc<dyn RecordStore> {
    let db = DashDb::open_local(":memory:", "internship").await.unwrap();
    db.insert_many(records).await.unwrap();
    Arc::new(db)
}

#[tokio::test]
async fn empty_collection_returns_empty_array() {
    let dir = static_dir_with_index();
    let app = router(Some(memory_store(&[]).await), dir.path());

    let (status, body) = get(app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, serde_json::json!([]));
}

#[tokio::test]
async fn returns_all_records_in_insertion_order() {
    let records = vec![
        Record {
            title: "first".into(),
            topic: "A".into(),
            sector: "X".into(),
            intensity: Some(5.0),
            ..Default::default()
        },
        Record {
            title: "second".into(),
            topic: "B".into(),
            sector: "X".into(),
            intensity: Some(3.0),
            ..Default::default()
        },
    ];
    let dir = static_dir_with_index();
    let app = router(Some(memory_store(&records).await), dir.path());

    let (status, body) = get(app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);
    let served: Vec<Record> = serde_json::from_slice(&body).unwrap();
    assert_eq!(served, records);
}

#[tokio::test]
async fn store_failure_is_a_generic_server_error() {
    let dir = static_dir_with_index();
    let app = router(Some(Arc::new(UnreachableStore)), dir.path());

    let (status, body) = get(app, "/api/data").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, serde_json::json!({"error": "Server Error"}));
}

#[tokio::test]
async fn missing_store_is_a_generic_server_error() {
    let dir = static_dir_with_index();
    let app = router(None, dir.path());

    let (status, body) = get(app, "/api/data").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, serde_json::json!({"error": "Server Error"}));
}

#[tokio::test]
async fn unknown_paths_serve_the_entry_point() {
    let dir = static_dir_with_index();
    for uri in ["/", "/dashboard/sectors", "/api/other"] {
        let app = router(None, dir.path());
        let (status, body) = get(app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("Data Visualization Dashboard"), "{uri}: {text}");
    }
}

#[tokio::test]
async fn existing_static_assets_are_served_directly() {
    let dir = static_dir_with_index();
    let app = router(None, dir.path());

    let (status, body) = get(app, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"console.log('dashboard');");
}

#[tokio::test]
async fn missing_entry_point_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = router(None, dir.path());

    let (status, _) = get(app, "/anything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reload_reaches_store_once_it_becomes_available() {
    let static_dir = static_dir_with_index();
    let data_dir = tempfile::tempdir().unwrap();
    let db_dir = data_dir.path().join("not-yet");
    let store_config = StoreConfig {
        url: db_dir.join("dash.db").to_string_lossy().into_owned(),
        ..Default::default()
    };

    let store = connect_store(&store_config).await;
    assert!(store.is_none(), "store directory does not exist yet");

    let server = ServerConfig {
        static_dir: static_dir.path().to_string_lossy().into_owned(),
        ..Default::default()
    };
    let app = build_router(AppState::new(store, &server).with_reconnect(store_config));

    let (status, _) = get(app.clone(), "/api/data").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    std::fs::create_dir_all(&db_dir).unwrap();

    let (status, body) = get(app.clone(), "/api/data").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, serde_json::json!([]));

    // The reopened store is kept for later requests.
    let (status, _) = get(app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_store_without_reconnect_stays_unavailable() {
    let dir = static_dir_with_index();
    let app = router(None, dir.path());

    for _ in 0..2 {
        let (status, _) = get(app.clone(), "/api/data").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
