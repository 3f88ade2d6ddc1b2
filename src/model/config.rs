use std::time::Duration;

use reqwest::Url;

use crate::error::RelayError;

pub const DEFAULT_TARGET_URL: &str = "http://localhost:8080/invoke";

/// HTTP Basic credentials applied to every forwarded request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Everything the relay needs, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub target: Url,
    pub credentials: Option<Credentials>,
    /// Per-request timeout. `None` waits as long as the transport does.
    pub timeout: Option<Duration>,
    /// Copy the request `id` into relay-generated error envelopes.
    pub echo_request_id: bool,
}

impl RelayConfig {
    pub fn new(
        target: &str,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, RelayError> {
        let target = parse_target(target)?;

        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            (None, None) => None,
            _ => return Err(RelayError::IncompleteCredentials),
        };

        Ok(RelayConfig {
            target,
            credentials,
            timeout: None,
            echo_request_id: false,
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_echo_request_id(mut self, echo: bool) -> Self {
        self.echo_request_id = echo;
        self
    }
}

fn parse_target(raw: &str) -> Result<Url, RelayError> {
    let url = Url::parse(raw.trim()).map_err(|e| RelayError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RelayError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}
