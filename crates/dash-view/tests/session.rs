//! End-to-end session: a real data provider on an ephemeral port, the one-shot
//! fetch, and filtering through the view.

use std::sync::Arc;

use dash_config::{ClientConfig, ServerConfig};
use dash_core::{CategoricalField, Record};
use dash_db::{DashDb, RecordStore};
use dash_server::{AppState, build_router};
use dash_view::{DashboardEvent, DashboardView, DataClient, TextRenderer};
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;

fn rec(title: &str, topic: &str, sector: &str, intensity: f64) -> Record {
    Record {
        title: title.into(),
        topic: topic.into(),
        sector: sector.into(),
        intensity: Some(intensity),
        ..Default::default()
    }
}

/// Serve `store` on 127.0.0.1 and return the base URL.
async fn spawn_provider(store: Option<Arc<dyn RecordStore>>) -> String {
    let static_dir = tempfile::tempdir().unwrap();
    let server = ServerConfig {
        static_dir: static_dir.path().to_string_lossy().into_owned(),
        ..Default::default()
    };
    let app = build_router(AppState::new(store, &server));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _keep = static_dir;
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: String) -> DataClient {
    DataClient::new(&ClientConfig {
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn fetch_filter_and_render() {
    let db = DashDb::open_local(":memory:", "internship").await.unwrap();
    db.insert_many(&[
        rec("r0", "A", "X", 5.0),
        rec("r1", "B", "X", 3.0),
        rec("r2", "A", "Y", 7.0),
    ])
    .await
    .unwrap();
    let base_url = spawn_provider(Some(Arc::new(db))).await;

    let mut view = DashboardView::new(TextRenderer::default());
    let event = client(base_url).load_event().await;
    assert!(matches!(event, DashboardEvent::Loaded(ref r) if r.len() == 3));
    view.handle(event);

    view.select(CategoricalField::Topic, Some("A".into()));
    let titles: Vec<&str> = view
        .dashboard()
        .filtered()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["r0", "r2"]);

    // Pie stays on the full set.
    let pie = view.pie_chart().expect("pie rendered");
    assert!(pie.body.contains("X"));
    assert!(pie.body.contains("66.7%"));
    let bar = view.bar_chart().expect("bar rendered");
    assert_eq!(bar.body.lines().count(), 4);
}

#[tokio::test]
async fn server_error_leaves_session_empty() {
    let base_url = spawn_provider(None).await;

    let mut view = DashboardView::new(TextRenderer::default());
    let event = client(base_url).load_event().await;
    assert!(matches!(event, DashboardEvent::FetchFailed(_)));
    view.handle(event);

    assert!(view.dashboard().records().is_empty());
    assert!(view.bar_chart().is_none());
    assert!(view.pie_chart().is_none());
}

#[tokio::test]
async fn unreachable_provider_leaves_session_empty() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let event = client(format!("http://{addr}")).load_event().await;
    assert!(matches!(event, DashboardEvent::FetchFailed(_)));
}
