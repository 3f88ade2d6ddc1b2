//! Error types for the relay.
//!
//! Startup variants (`InvalidUrl`, `UnsupportedScheme`, `IncompleteCredentials`,
//! `ClientBuild`) are fatal before the loop starts. `Transport` never escapes
//! the loop: it is turned into an internal-error envelope. `Input` and `Output`
//! end the loop.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The target URL could not be parsed.
    #[error("invalid target url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The target URL parsed but is not http or https.
    #[error("unsupported url scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },

    /// Only one of username/password was supplied.
    #[error("username and password must be given together")]
    IncompleteCredentials,

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The HTTP exchange failed before a complete response body was read.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}
