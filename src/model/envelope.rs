use serde::Serialize;
use serde_json::Value;

/// Backend body was not valid JSON.
pub const PARSE_ERROR: i64 = -32700;
/// The HTTP exchange itself failed.
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
}

/// JSON-RPC error response produced by the relay itself.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ErrorEnvelope {
    pub jsonrpc: &'static str,
    pub id: Value,
    pub error: ErrorObject,
}

impl ErrorEnvelope {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        ErrorEnvelope {
            jsonrpc: "2.0",
            id: Value::Null,
            error: ErrorObject {
                code,
                message: message.into(),
            },
        }
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(PARSE_ERROR, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }

    pub fn with_id(mut self, id: Value) -> Self {
        self.id = id;
        self
    }

    /// Single-line JSON text of the envelope.
    pub fn to_line(&self) -> String {
        match serde_json::to_string(self) {
            Ok(s) => s,
            // Unreachable for string and Value fields.
            Err(_) => format!(
                r#"{{"jsonrpc":"2.0","id":null,"error":{{"code":{},"message":"internal relay error"}}}}"#,
                self.error.code
            ),
        }
    }
}

/// The `id` of a request line, when the line is a JSON object carrying one.
pub fn request_id(line: &str) -> Value {
    serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|v| v.get("id").cloned())
        .unwrap_or(Value::Null)
}
