//! output formatting utilities for scriptable CLI output
//!
//! uses JSON-RPC 2.0 format for machine-readable output:
//! - success: {"jsonrpc": "2.0", "result": {...}, "id": null}
//! - error: {"jsonrpc": "2.0", "error": {"code": N, "message": "...", "data": {...}}, "id": null}

use serde::Serialize;
use std::io::IsTerminal;

use crate::media::{ErrorKind, Media, ParsedExpression};

/// JSON-RPC version constant
const JSONRPC_VERSION: &str = "2.0";

/// output mode determines how results are formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// human-readable text output
    Text,
    /// machine-readable JSON-RPC 2.0 output
    Json,
    /// no output on success (errors still go to stderr)
    Quiet,
}

impl OutputMode {
    /// determine output mode from CLI flags and environment
    ///
    /// priority: quiet > json > no_json > auto-detect
    pub fn from_flags(json: bool, no_json: bool, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        if json {
            return Self::Json;
        }
        if no_json {
            return Self::Text;
        }
        // auto-detect: JSON when stdout is not a TTY (piped)
        if !std::io::stdout().is_terminal() {
            Self::Json
        } else {
            Self::Text
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// JSON-RPC 2.0 success response
#[derive(Serialize)]
pub struct JsonRpcResponse<T: Serialize> {
    pub jsonrpc: &'static str,
    pub result: T,
    /// null for CLI responses (no request id)
    pub id: Option<String>,
}

impl<T: Serialize> JsonRpcResponse<T> {
    pub fn new(result: T) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result,
            id: None,
        }
    }
}

/// JSON-RPC 2.0 error response
#[derive(Serialize)]
pub struct JsonRpcError {
    pub jsonrpc: &'static str,
    pub error: RpcError,
    pub id: Option<String>,
}

/// JSON-RPC 2.0 error object
#[derive(Serialize)]
pub struct RpcError {
    /// error code (mediaq exit codes, offset by -32000 for app-specific errors)
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ErrorData>,
}

/// additional error data
#[derive(Serialize)]
pub struct ErrorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl JsonRpcError {
    /// create error with standard JSON-RPC error code range
    /// mediaq uses -32000 to -32099 for application errors (per JSON-RPC spec)
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            error: RpcError {
                code: to_jsonrpc_code(code),
                message: message.into(),
                data: None,
            },
            id: None,
        }
    }

    /// attach the error kind and any "did you mean" names
    pub fn with_kind(mut self, kind: ErrorKind, suggestions: &[String]) -> Self {
        let data = self.error.data.get_or_insert_with(ErrorData::empty);
        data.kind = Some(kind.as_str());
        if !suggestions.is_empty() {
            data.suggestions = Some(suggestions.to_vec());
        }
        self
    }

    /// attach a list of detail lines (e.g. verification failures)
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        if !details.is_empty() {
            self.error.data.get_or_insert_with(ErrorData::empty).details = Some(details);
        }
        self
    }
}

impl ErrorData {
    fn empty() -> Self {
        Self {
            kind: None,
            suggestions: None,
            details: None,
        }
    }
}

/// convert mediaq exit code to JSON-RPC error code
/// JSON-RPC reserves -32000 to -32099 for server/application errors
fn to_jsonrpc_code(code: i32) -> i32 {
    -32000 - code
}

// ============================================================================
// Result data structures for different commands
// ============================================================================

/// result data for the query command
#[derive(Serialize)]
pub struct QueryData {
    /// "query", "unconditional" or "suppressed"
    pub outcome: &'static str,
    pub conditions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clauses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
}

impl QueryData {
    pub fn new(conditions: &[String], media: &Media, content: Option<&str>) -> Self {
        let (outcome, query, clauses) = match media {
            Media::Unconditional => ("unconditional", None, None),
            Media::Suppressed => ("suppressed", None, None),
            Media::Query(query) => (
                "query",
                Some(query.to_string()),
                Some(query.clauses().to_vec()),
            ),
        };

        Self {
            outcome,
            conditions: conditions.to_vec(),
            query,
            clauses,
            rendered: content.and_then(|content| media.render(content)),
        }
    }
}

/// result data for the parse command
#[derive(Serialize)]
pub struct ParseData {
    pub condition: String,
    /// "expression" for static names, "dynamic" for operator conditions
    #[serde(rename = "type")]
    pub condition_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub clause: String,
}

impl ParseData {
    pub fn expression(condition: &str, literal: &str) -> Self {
        Self {
            condition: condition.to_string(),
            condition_type: "expression",
            dimension: None,
            prefix: None,
            value: None,
            clause: literal.to_string(),
        }
    }

    pub fn dynamic(condition: &str, parsed: &ParsedExpression) -> Self {
        Self {
            condition: condition.to_string(),
            condition_type: "dynamic",
            dimension: Some(parsed.dimension.clone()),
            prefix: Some(parsed.prefix.as_str()),
            value: Some(parsed.value.to_string()),
            clause: parsed.to_string(),
        }
    }
}

/// result data for config path/verify/set
#[derive(Serialize)]
pub struct ConfigData {
    pub path: String,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

// ============================================================================
// Output functions
// ============================================================================

/// print JSON-RPC success response to stdout
pub fn print_json<T: Serialize>(data: &T) {
    let response = JsonRpcResponse::new(data);
    if let Ok(json) = serde_json::to_string(&response) {
        println!("{}", json);
    }
}

/// print JSON-RPC error to stdout
pub fn print_json_error(error: &JsonRpcError) {
    if let Ok(json) = serde_json::to_string(error) {
        println!("{}", json);
    }
}
