//! Per-line handling: forward, then map the backend reply (or the failure)
//! onto exactly zero or one output line.

use std::error::Error as _;

use serde_json::Value;

use crate::error::RelayError;
use crate::model::envelope::{request_id, ErrorEnvelope};
use crate::services::forward::{BackendReply, Forwarder};

/// What a single input line turned into.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Blank input line, nothing sent.
    Blank,
    /// Backend answered with an empty body (a notification).
    Dropped,
    /// Backend JSON, re-serialized compactly.
    Normalized(String),
    /// Backend body was not JSON; carries a -32700 envelope.
    ParseError(String),
    /// HTTP exchange failed; carries a -32603 envelope.
    TransportError(String),
}

impl Outcome {
    /// The output line to write, if any.
    pub fn line(&self) -> Option<&str> {
        match self {
            Outcome::Blank | Outcome::Dropped => None,
            Outcome::Normalized(s) | Outcome::ParseError(s) | Outcome::TransportError(s) => {
                Some(s)
            }
        }
    }
}

/// Re-serialize a JSON document into compact canonical form.
///
/// Numbers keep their literal text, so big integers and out-of-range
/// exponents pass through unchanged.
pub fn normalize(body: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    serde_json::to_string(&value)
}

/// The line is forwarded exactly as read; trimming only decides blankness.
pub fn handle(line: &str, forwarder: &Forwarder, echo_request_id: bool) -> Outcome {
    if line.trim().is_empty() {
        return Outcome::Blank;
    }

    tracing::info!("incoming: {line}");

    let id = if echo_request_id {
        request_id(line)
    } else {
        Value::Null
    };

    match forwarder.post(line) {
        Ok(reply) => handle_reply(&reply, id),
        Err(e) => handle_failure(&e, id),
    }
}

pub fn handle_reply(reply: &BackendReply, id: Value) -> Outcome {
    if !reply.status.is_success() {
        tracing::warn!(status = reply.status.as_u16(), "backend returned non-success status");
    }

    if reply.body.trim().is_empty() {
        tracing::warn!(status = reply.status.as_u16(), "empty response from backend (likely a notification)");
        return Outcome::Dropped;
    }

    match normalize(&reply.body) {
        Ok(clean) => {
            tracing::info!("response: {clean}");
            Outcome::Normalized(clean)
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid JSON from backend");
            Outcome::ParseError(ErrorEnvelope::parse_error(e.to_string()).with_id(id).to_line())
        }
    }
}

pub fn handle_failure(err: &RelayError, id: Value) -> Outcome {
    let message = error_chain(err);
    tracing::error!(error = %message, "error sending request");
    Outcome::TransportError(ErrorEnvelope::internal_error(message).with_id(id).to_line())
}

/// Render an error together with its sources, e.g.
/// `error sending request for url (...): tcp connect error: Connection refused`.
fn error_chain(err: &RelayError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}
