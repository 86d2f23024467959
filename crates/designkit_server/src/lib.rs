//! designkit server
//!
//! Owns the recorded [`DesignKitState`](designkit_tokens::DesignKitState):
//! a memory-first [`FileStateStore`] with a JSON mirror on disk, a
//! [`SyncChannel`] that announces every write, and the HTTP surface that
//! serves the resolved config and every export format.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use designkit_server::{build_router, AppState, FileStateStore};
//! use designkit_tokens::Catalog;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = Arc::new(FileStateStore::new(".designkit/state.json"));
//! let app = build_router(AppState::new(Catalog::builtin(), store));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3456").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod store;
pub mod sync;

pub use config::DesignkitConfig;
pub use error::{ApiError, ErrorBody};
pub use routes::{build_router, AppState};
pub use store::{read_mirror, FileStateStore, StateStore, StoreError};
pub use sync::{SyncChannel, SyncEvent, STATE_UPDATED};
