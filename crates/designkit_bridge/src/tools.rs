//! Tool definitions and dispatch
//!
//! Every tool is read-only. Results are plain text meant for a language
//! model; failures say what to do next.

use designkit_export::ExportFormat;
use designkit_tokens::{lookup_path, DesignKitState, Mode, TokenLookup};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::client::{BridgeClient, BridgeData};

const NO_DATA: &str = "No data available: the designkit server is not reachable and no saved state was found. \
     Start the designkit server (`designkit serve`) and make a selection first.";

const NO_STATE: &str = "The designkit server has no state yet. Make a selection first.";

const OFFLINE_NOTE: &str = "The designkit server is not reachable. \
     Showing the last saved raw state; tokens are unresolved until the server is started.";

/// Tool definition
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Outcome of one tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResult {
    pub text: String,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn json(value: &impl Serialize) -> Self {
        Self::text(serde_json::to_string_pretty(value).unwrap_or_default())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub fn tool_definitions() -> Vec<Tool> {
    let formats: Vec<&str> = ExportFormat::ALL.iter().map(|f| f.id()).collect();
    vec![
        Tool {
            name: "get_design_config".into(),
            description: "Get the resolved design tokens and selected component styles. \
                          Falls back to the raw saved state when the server is down."
                .into(),
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        Tool {
            name: "get_design_state".into(),
            description: "Get the raw selection state (selections, color picks, type scale).".into(),
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        Tool {
            name: "get_color_picks".into(),
            description: "Get the user's explicit color overrides.".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "mode": {
                        "type": "string",
                        "enum": ["light", "dark"],
                        "description": "Only return picks for this mode"
                    }
                }
            }),
        },
        Tool {
            name: "get_token".into(),
            description: "Look up one token by dot path, e.g. colors.light.primary. \
                          Offline, only colorPicks.* paths are answerable."
                .into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Dot path into the tokens"
                    }
                },
                "required": ["path"]
            }),
        },
        Tool {
            name: "export_design".into(),
            description: "Export the design system in a target format. Requires the designkit server."
                .into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "format": {
                        "type": "string",
                        "enum": formats,
                        "description": "Export format id"
                    }
                },
                "required": ["format"]
            }),
        },
        Tool {
            name: "list_formats".into(),
            description: "List the available export formats.".into(),
            input_schema: json!({ "type": "object", "properties": {} }),
        },
    ]
}

/// Dispatches tool calls against a [`BridgeClient`]
#[derive(Debug, Clone)]
pub struct DesignTools {
    client: BridgeClient,
}

impl DesignTools {
    pub fn new(client: BridgeClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &BridgeClient {
        &self.client
    }

    pub async fn call(&self, name: &str, args: &Value) -> ToolResult {
        debug!(tool = name, "tool call");
        match name {
            "get_design_config" => self.design_config().await,
            "get_design_state" => self.design_state().await,
            "get_color_picks" => self.color_picks(args).await,
            "get_token" => self.token(args).await,
            "export_design" => self.export(args).await,
            "list_formats" => list_formats(),
            other => ToolResult::error(format!(
                "Unknown tool `{other}`. Available: {}.",
                tool_definitions()
                    .iter()
                    .map(|t| t.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }

    async fn design_config(&self) -> ToolResult {
        match self.client.fetch().await {
            BridgeData::Resolved(config) => ToolResult::json(&config),
            BridgeData::RawSnapshot(state) => ToolResult::text(format!(
                "{OFFLINE_NOTE}\n\n{}",
                serde_json::to_string_pretty(&state).unwrap_or_default()
            )),
            BridgeData::Unavailable => ToolResult::error(NO_DATA),
        }
    }

    async fn design_state(&self) -> ToolResult {
        match self.client.state().await {
            Some(state) => ToolResult::json(&state),
            None => ToolResult::error(NO_DATA),
        }
    }

    async fn color_picks(&self, args: &Value) -> ToolResult {
        let mode = match args.get("mode").and_then(Value::as_str) {
            None => None,
            Some(name) => match name.parse::<Mode>() {
                Ok(mode) => Some(mode),
                Err(_) => {
                    return ToolResult::error(format!(
                        "Unknown mode `{name}`. Use `light` or `dark`."
                    ))
                }
            },
        };
        let Some(state) = self.client.state().await else {
            return ToolResult::error(NO_DATA);
        };
        match mode {
            Some(mode) => ToolResult::json(state.color_picks.for_mode(mode)),
            None => ToolResult::json(&state.color_picks),
        }
    }

    async fn token(&self, args: &Value) -> ToolResult {
        let Some(path) = args.get("path").and_then(Value::as_str) else {
            return ToolResult::error("Missing `path`, e.g. `colors.light.primary`.");
        };
        match self.client.fetch().await {
            BridgeData::Resolved(config) => lookup_result(config.tokens.lookup(path)),
            BridgeData::RawSnapshot(state) => snapshot_token(&state, path),
            BridgeData::Unavailable => ToolResult::error(NO_DATA),
        }
    }

    async fn export(&self, args: &Value) -> ToolResult {
        let Some(id) = args.get("format").and_then(Value::as_str) else {
            return ToolResult::error(format!(
                "Missing `format`. Use one of: {}.",
                ExportFormat::known_ids()
            ));
        };
        let format = match id.parse::<ExportFormat>() {
            Ok(format) => format,
            Err(err) => return ToolResult::error(err.to_string()),
        };
        match self.client.export(format).await {
            Ok(Some(text)) => ToolResult::text(text),
            Ok(None) => ToolResult::error(NO_STATE),
            Err(err) => ToolResult::error(format!(
                "{err}. Exporting needs the live catalog: start the designkit server (`designkit serve`) at {}.",
                self.client.base_url()
            )),
        }
    }
}

fn list_formats() -> ToolResult {
    let lines: Vec<String> = ExportFormat::ALL
        .iter()
        .map(|f| format!("- `{}`: {} ({})", f.id(), f.display_name(), f.file_name()))
        .collect();
    ToolResult::text(lines.join("\n"))
}

fn lookup_result(lookup: TokenLookup) -> ToolResult {
    match lookup {
        TokenLookup::Found(value) => ToolResult::json(&value),
        TokenLookup::NotFound {
            path,
            missing,
            available,
        } => ToolResult::error(format!(
            "Token `{path}` not found (no `{missing}`). Available top-level keys: {}.",
            available.join(", ")
        )),
    }
}

/// Offline lookups can only see what the raw state records
fn snapshot_token(state: &DesignKitState, path: &str) -> ToolResult {
    let Some(rest) = path.strip_prefix("colorPicks") else {
        return ToolResult::error(format!(
            "Token `{path}` needs the resolved config. {OFFLINE_NOTE} \
             Offline, only `colorPicks.*` paths are available."
        ));
    };
    let picks = serde_json::to_value(&state.color_picks).unwrap_or_default();
    lookup_result(lookup_path(&picks, rest.trim_start_matches('.')))
}
