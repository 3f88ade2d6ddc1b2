use reqwest::blocking::Client;
use reqwest::header::{CONNECTION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};

use crate::error::RelayError;
use crate::model::config::{Credentials, RelayConfig};

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// A completed HTTP exchange. The body is whatever the backend sent,
/// for success and error statuses alike.
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub status: StatusCode,
    pub body: String,
}

/// Posts request lines to the fixed backend endpoint.
pub struct Forwarder {
    client: Client,
    target: Url,
    credentials: Option<Credentials>,
}

impl Forwarder {
    pub fn new(cfg: &RelayConfig) -> Result<Self, RelayError> {
        // No retry and no timeout unless configured.
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(RelayError::ClientBuild)?;

        Ok(Forwarder {
            client,
            target: cfg.target.clone(),
            credentials: cfg.credentials.clone(),
        })
    }

    /// Send one line as the POST body and read the full response body.
    pub fn post(&self, line: &str) -> Result<BackendReply, RelayError> {
        let mut req = self
            .client
            .post(self.target.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(CONNECTION, "keep-alive")
            .body(line.to_owned());

        if let Some(creds) = &self.credentials {
            req = req.basic_auth(&creds.username, Some(&creds.password));
        }

        let resp = req.send().map_err(RelayError::Transport)?;
        let status = resp.status();

        // Read as text first so a non-JSON body still reaches the parser.
        let body = resp.text().map_err(RelayError::Transport)?;

        Ok(BackendReply { status, body })
    }
}
