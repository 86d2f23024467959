//! designkit bridge
//!
//! Read-only access to the design system for tool-calling clients. Data
//! comes from the designkit server when it is reachable and from the state
//! mirror on disk otherwise; [`BridgeData`] makes the difference explicit.
//!
//! ```rust,no_run
//! use designkit_bridge::{BridgeClient, DesignTools};
//! use serde_json::json;
//!
//! # async fn run() -> designkit_bridge::Result<()> {
//! let tools = DesignTools::new(BridgeClient::from_env()?);
//! let result = tools.call("get_token", &json!({ "path": "colors.light.primary" })).await;
//! println!("{}", result.text);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod tools;

pub use client::{BridgeClient, BridgeData, DEFAULT_STATE_FILE, DEFAULT_URL};
pub use error::{BridgeError, Result};
pub use tools::{tool_definitions, DesignTools, Tool, ToolResult};
