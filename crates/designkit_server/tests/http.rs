use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use designkit_server::{build_router, AppState, ErrorBody, FileStateStore, StateStore};
use designkit_tokens::{Catalog, DesignConfig, DesignKitState};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

struct Harness {
    _dir: TempDir,
    store: Arc<FileStateStore>,
    state: AppState,
}

impl Harness {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStateStore::new(dir.path().join("state.json")));
        let state = AppState::new(Catalog::builtin(), store.clone());
        Self {
            _dir: dir,
            store,
            state,
        }
    }

    fn app(&self) -> Router {
        build_router(self.state.clone())
    }

    async fn get(&self, uri: &str) -> Response {
        self.app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_state(&self, body: Value) -> Response {
        self.app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/state")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

async fn body_bytes(resp: Response) -> Vec<u8> {
    resp.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn body_json<T: serde::de::DeserializeOwned>(resp: Response) -> T {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

fn pill_state() -> Value {
    json!({
        "selections": { "radius": "pill" },
        "colorPicks": { "light": { "primary": "#ff0000" }, "dark": {} },
        "typeScale": "default"
    })
}

#[tokio::test]
async fn health_reports_catalog_version() {
    let h = Harness::new();
    let resp = h.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["catalogVersion"], Catalog::builtin().version());
    assert_eq!(body["seq"], 0);
}

#[tokio::test]
async fn empty_state_is_404_with_guidance() {
    let h = Harness::new();
    for uri in ["/config", "/state", "/export/css", "/tokens?path=colors"] {
        let resp = h.get(uri).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        let body: ErrorBody = body_json(resp).await;
        assert_eq!(body.error, "no design state recorded yet");
        assert!(body.hint.contains("Make a selection"), "{uri}: {}", body.hint);
    }
}

#[tokio::test]
async fn bogus_format_lists_known_formats() {
    let h = Harness::new();
    let resp = h.get("/export/bogus-format").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(
        body.error,
        "unknown export format `bogus-format`; known formats: \
         json, css, tailwind, swift, kotlin, flutter, react-native, claude-md"
    );
}

#[tokio::test]
async fn write_missing_fields_is_rejected_before_mutation() {
    let h = Harness::new();
    let resp = h.post_state(json!({ "selections": {} })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(body.error.contains("colorPicks, typeScale"), "{}", body.error);
    assert_eq!(h.store.get_state(), None);
    assert_eq!(h.state.sync.seq(), 0);
}

#[tokio::test]
async fn non_json_write_is_bad_request() {
    let h = Harness::new();
    let resp = h
        .app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/state")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(body.error.starts_with("invalid state document"));
}

#[tokio::test]
async fn write_then_read_config() {
    let h = Harness::new();
    let mut events = h.state.sync.subscribe();

    let resp = h.post_state(pill_state()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ack: Value = body_json(resp).await;
    assert_eq!(ack, json!({ "ok": true, "seq": 1 }));

    let event = events.recv().await.unwrap();
    assert_eq!((event.event.as_str(), event.seq), ("state.updated", 1));

    let config: DesignConfig = body_json(h.get("/config").await).await;
    assert_eq!(config.tokens.colors.light.primary, "#ff0000");
    let radius = config.component("radius").unwrap();
    assert_eq!(radius.id, "pill");
    assert_eq!(radius.data.styles["focus"]["outline"], "2px solid rgba(255,0,0,0.5)");

    let state: DesignKitState = body_json(h.get("/state").await).await;
    assert_eq!(state.selection("radius"), Some("pill"));
}

#[tokio::test]
async fn export_sets_content_type() {
    let h = Harness::new();
    h.post_state(pill_state()).await;

    let resp = h.get("/export/css").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");
    let css = String::from_utf8(body_bytes(resp).await).unwrap();
    assert!(css.contains("--color-primary: #ff0000;"));

    let resp = h.get("/export/json").await;
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    let config: DesignConfig = body_json(resp).await;
    assert_eq!(config.components.len(), 1);
}

#[tokio::test]
async fn token_lookup() {
    let h = Harness::new();
    h.post_state(pill_state()).await;

    let resp = h.get("/tokens?path=colors.light.primary").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let value: Value = body_json(resp).await;
    assert_eq!(value, json!("#ff0000"));

    let resp = h.get("/tokens?path=colors.sepia").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert!(body.error.contains("no `sepia`"));
    assert!(body.hint.contains("colors"));
    assert!(body.hint.contains("typography"));
}

#[tokio::test]
async fn catalog_lists_items_without_styles() {
    let h = Harness::new();
    let body: Value = body_json(h.get("/catalog").await).await;
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), Catalog::builtin().categories().len());
    assert_eq!(categories[0]["id"], "palette");
    let first_item = &categories[0]["items"][0];
    assert!(first_item["name"].is_string());
    assert!(first_item.get("data").is_none());
}

#[tokio::test]
async fn state_survives_a_restart() {
    let h = Harness::new();
    h.post_state(pill_state()).await;

    let reopened = Arc::new(FileStateStore::new(h.store.path()));
    let app = build_router(AppState::new(Catalog::builtin(), reopened));
    let resp = app
        .oneshot(Request::builder().uri("/state").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn events_stream_announces_writes() {
    let h = Harness::new();
    let resp = h.get("/events").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/event-stream");
    let mut body = resp.into_body();

    let ack: Value = body_json(h.post_state(pill_state()).await).await;
    assert_eq!(ack["seq"], 1);

    let mut received = String::new();
    let read = async {
        while !received.contains("\n\n") {
            let frame = body.frame().await.unwrap().unwrap();
            if let Ok(data) = frame.into_data() {
                received.push_str(std::str::from_utf8(&data).unwrap());
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(5), read).await.unwrap();

    assert!(received.contains("event: state.updated\n"), "{received}");
    assert!(
        received.contains(r#"data: {"event":"state.updated","seq":1}"#),
        "{received}"
    );
}

#[tokio::test]
async fn failed_write_is_500_and_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "").unwrap();
    let store = Arc::new(FileStateStore::new(blocker.join("state.json")));
    let state = AppState::new(Catalog::builtin(), store.clone());
    let mut events = state.sync.subscribe();
    let app = build_router(state.clone());

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/state")
                .header("content-type", "application/json")
                .body(Body::from(pill_state().to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = body_json(resp).await;
    assert!(body.hint.contains("previous state"));

    assert_eq!(store.get_state(), None);
    assert_eq!(state.sync.seq(), 0);
    assert!(events.try_recv().is_err());
    let resp = app
        .oneshot(Request::builder().uri("/config").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
