// orphanage-view/tests/view_integration.rs
// End-to-end: view + client against an axum backend

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use orphanage_view::orphanage_client::{
    ClientConfig, OneshotHttpClient, OrphanageApi, network_api,
};
use orphanage_view::{
    Completion, DetailSession, DetailView, LoadPhase, Page, RenderConfig, WeekendNotice, html,
};

#[derive(Clone, Default)]
struct Backend {
    hits: Arc<AtomicUsize>,
}

async fn show(
    State(backend): State<Backend>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    let open_on_weekends = match id.as_str() {
        "1" => serde_json::json!(true),
        "2" => serde_json::json!(0),
        _ => return Err(StatusCode::NOT_FOUND),
    };
    Ok(Json(serde_json::json!({
        "id": id.parse::<i64>().unwrap_or_default(),
        "name": format!("Orphanage {}", id),
        "latitude": -27.2092052,
        "longitude": -49.6401092,
        "about": "About",
        "instructions": "Instructions",
        "opening_hour": "8am to 6pm",
        "open_on_weekends": open_on_weekends,
        "images": [
            { "id": 1, "path": "a" },
            { "id": 2, "path": "b" }
        ]
    })))
}

fn router(backend: Backend) -> Router {
    Router::new()
        .route("/orphanages/{id}", get(show))
        .with_state(backend)
}

fn in_process_view(backend: &Backend) -> DetailView<OrphanageApi<OneshotHttpClient>> {
    let api = OrphanageApi::new(OneshotHttpClient::new(router(backend.clone())));
    DetailView::new(Arc::new(api))
}

#[tokio::test]
async fn test_mount_loads_and_renders_detail() {
    let backend = Backend::default();
    let mut view = in_process_view(&backend);

    assert_eq!(view.load("1").await, Some(Completion::Loaded));
    assert_eq!(backend.hits.load(Ordering::SeqCst), 1);

    let page = view.render(&RenderConfig::default());
    let detail = page.detail().unwrap();
    assert_eq!(detail.name, "Orphanage 1");
    assert_eq!(detail.primary_image.as_ref().unwrap().src, "a");
    assert_eq!(detail.active_thumbnail().unwrap().index, 0);
    assert_eq!(detail.opening_hours.hours, "8am to 6pm");
    assert_eq!(detail.weekend, WeekendNotice::Open);
    assert_eq!(
        detail.routes_link.href,
        "https://www.google.com/maps/dir/?api=1&destination=-27.2092052,-49.6401092"
    );

    view.select_image(1).unwrap();
    view.select_image(1).unwrap();
    let page = view.render(&RenderConfig::default());
    assert_eq!(page.detail().unwrap().primary_image.as_ref().unwrap().src, "b");
    assert_eq!(page.detail().unwrap().active_thumbnail().unwrap().index, 1);
}

#[tokio::test]
async fn test_numeric_weekend_flag_renders_closed() {
    let backend = Backend::default();
    let mut view = in_process_view(&backend);

    view.load("2").await;

    let html = html::render_html(&view.render(&RenderConfig::default())).unwrap();
    assert!(html.contains("closed-on-weekends"));
    assert!(html.contains("Monday to Friday <br />8am to 6pm"));
}

#[tokio::test]
async fn test_failed_fetch_renders_loading_only() {
    let backend = Backend::default();
    let mut view = in_process_view(&backend);

    assert_eq!(view.load("404").await, Some(Completion::Failed));
    assert_eq!(view.state().phase, LoadPhase::Failed);
    assert_eq!(view.render(&RenderConfig::default()), Page::Loading);
    assert_eq!(html::render_html(&Page::Loading).unwrap(), "<p>Loading...</p>");

    assert_eq!(view.load("404").await, None);
    assert_eq!(backend.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_session_over_network() {
    let backend = Backend::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(backend.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let api = network_api(&ClientConfig::new(format!("http://{}", addr)).with_timeout(5)).unwrap();
    let (handle, task) = DetailSession::spawn(Arc::new(api), RenderConfig::default());

    handle.navigate("1").unwrap();
    let page = handle.wait_for(|p| !p.is_loading()).await.unwrap();
    assert_eq!(page.detail().unwrap().name, "Orphanage 1");

    handle.navigate("2").unwrap();
    let page = handle
        .wait_for(|p| p.detail().is_some_and(|d| d.name == "Orphanage 2"))
        .await
        .unwrap();
    assert_eq!(page.detail().unwrap().weekend, WeekendNotice::Closed);

    handle.close().unwrap();
    task.await.unwrap();
    assert_eq!(backend.hits.load(Ordering::SeqCst), 2);
}
