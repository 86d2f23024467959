//! Router construction for the designkit server.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use designkit_export::ExportFormat;
use designkit_tokens::{
    build_config, missing_state_fields, Catalog, DesignConfig, DesignKitState, TokenLookup,
};
use futures::stream::Stream;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::store::StateStore;
use crate::sync::{SyncChannel, SyncEvent};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: Arc<dyn StateStore>,
    pub sync: SyncChannel,
}

impl AppState {
    pub fn new(catalog: Catalog, store: Arc<dyn StateStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store,
            sync: SyncChannel::default(),
        }
    }

    fn state(&self) -> Result<DesignKitState, ApiError> {
        self.store.get_state().ok_or(ApiError::NoState)
    }

    fn config(&self) -> Result<DesignConfig, ApiError> {
        Ok(build_config(&self.catalog, &self.state()?))
    }
}

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/config", get(get_config))
        .route("/state", get(get_state).post(post_state))
        .route("/export/:format", get(export))
        .route("/tokens", get(tokens))
        .route("/catalog", get(catalog))
        .route("/events", get(events))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health(State(app): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "catalogVersion": app.catalog.version(),
        "seq": app.sync.seq(),
    }))
}

async fn get_config(State(app): State<AppState>) -> Result<Json<DesignConfig>, ApiError> {
    Ok(Json(app.config()?))
}

async fn get_state(State(app): State<AppState>) -> Result<Json<DesignKitState>, ApiError> {
    Ok(Json(app.state()?))
}

#[derive(Debug, Serialize)]
struct WriteAck {
    ok: bool,
    seq: u64,
}

/// POST /state: validate, replace, notify
async fn post_state(
    State(app): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WriteAck>, ApiError> {
    let Json(doc) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let missing = missing_state_fields(&doc);
    if !missing.is_empty() {
        debug!(?missing, "rejected state write");
        return Err(ApiError::MissingFields(missing));
    }
    let state: DesignKitState =
        serde_json::from_value(doc).map_err(|err| ApiError::InvalidBody(err.to_string()))?;

    app.store.set_state(state)?;
    let SyncEvent { seq, .. } = app.sync.publish();
    Ok(Json(WriteAck { ok: true, seq }))
}

/// GET /export/:format: one codec's output as plain text
async fn export(
    State(app): State<AppState>,
    Path(format): Path<String>,
) -> Result<Response, ApiError> {
    let format: ExportFormat = format.parse()?;
    let text = format.export(&app.config()?)?;
    debug!(%format, bytes = text.len(), "exported");
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", format.file_name()),
            ),
        ],
        text,
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
struct TokenQuery {
    #[serde(default)]
    path: String,
}

/// GET /tokens?path=colors.light.primary
async fn tokens(
    State(app): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Value>, ApiError> {
    match app.config()?.tokens.lookup(&query.path) {
        TokenLookup::Found(value) => Ok(Json(value)),
        TokenLookup::NotFound {
            path,
            missing,
            available,
        } => Err(ApiError::TokenNotFound {
            path,
            missing,
            available,
        }),
    }
}

#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct CatalogCategory<'a> {
    #[serde(flatten)]
    category: CatalogEntry<'a>,
    items: Vec<CatalogEntry<'a>>,
}

/// GET /catalog: categories and items without style bodies
async fn catalog(State(app): State<AppState>) -> Json<Value> {
    let catalog = &app.catalog;
    let categories: Vec<CatalogCategory<'_>> = catalog
        .categories()
        .iter()
        .map(|category| CatalogCategory {
            category: CatalogEntry {
                id: &category.id,
                name: &category.name,
                description: &category.description,
            },
            items: catalog
                .items_in(&category.id)
                .map(|item| CatalogEntry {
                    id: &item.id,
                    name: &item.name,
                    description: &item.description,
                })
                .collect(),
        })
        .collect();
    Json(json!({
        "version": catalog.version(),
        "categories": categories,
    }))
}

/// GET /events: server-sent `state.updated` notifications
async fn events(
    State(app): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("sync subscriber connected");
    let stream = BroadcastStream::new(app.sync.subscribe()).filter_map(|result| match result {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().event(event.event).data(data)))
        }
        // Lagged subscribers skip ahead; the next event carries the latest seq
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}
