//! Command-line arguments.
//!
//! Kept out of `main.rs` so tests can parse them directly.

use std::time::Duration;

use clap::Parser;

use crate::error::RelayError;
use crate::model::config::{RelayConfig, DEFAULT_TARGET_URL};

/// Relay newline-delimited JSON-RPC from stdin to an HTTP endpoint and back to stdout.
#[derive(Parser, Debug)]
#[command(name = "stdio-http-relay", version)]
pub struct Cli {
    /// Backend URL every line is POSTed to.
    #[arg(env = "RELAY_TARGET_URL", default_value = DEFAULT_TARGET_URL)]
    pub url: String,

    /// HTTP Basic username (requires PASSWORD).
    #[arg(env = "RELAY_USERNAME", requires = "password")]
    pub username: Option<String>,

    /// HTTP Basic password (requires USERNAME).
    #[arg(env = "RELAY_PASSWORD", requires = "username", hide_env_values = true)]
    pub password: Option<String>,

    /// Per-request timeout in seconds. Without it a request waits indefinitely.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log a keep-alive line to stderr at this interval.
    #[arg(long)]
    pub heartbeat_secs: Option<u64>,

    /// Put the request id into relay-generated error responses instead of null.
    #[arg(long)]
    pub echo_request_id: bool,

    /// Enable debug logging.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn to_config(&self) -> Result<RelayConfig, RelayError> {
        Ok(
            RelayConfig::new(&self.url, self.username.clone(), self.password.clone())?
                .with_timeout(self.timeout_secs.map(Duration::from_secs))
                .with_echo_request_id(self.echo_request_id),
        )
    }

    pub fn heartbeat(&self) -> Option<Duration> {
        self.heartbeat_secs
            .filter(|&s| s > 0)
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn defaults() {
        let cli = parse(&["stdio-http-relay"]).unwrap();
        // RELAY_* may be set in the environment running the tests.
        if std::env::var_os("RELAY_TARGET_URL").is_none() {
            assert_eq!(cli.url, DEFAULT_TARGET_URL);
        }
        assert!(cli.timeout_secs.is_none());
        assert!(cli.heartbeat().is_none());
        assert!(!cli.echo_request_id);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn url_and_credentials_positional() {
        let cli = parse(&["stdio-http-relay", "https://api.example.com/rpc", "alice", "secret"])
            .unwrap();
        let cfg = cli.to_config().unwrap();
        assert_eq!(cfg.target.as_str(), "https://api.example.com/rpc");
        let creds = cfg.credentials.unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn username_without_password_is_rejected() {
        if std::env::var_os("RELAY_PASSWORD").is_some() {
            return;
        }
        assert!(parse(&["stdio-http-relay", "http://localhost:9000", "alice"]).is_err());
    }

    #[test]
    fn options() {
        let cli = parse(&[
            "stdio-http-relay",
            "http://localhost:9000/",
            "--timeout-secs",
            "15",
            "--heartbeat-secs",
            "10",
            "--echo-request-id",
            "-v",
        ])
        .unwrap();
        let cfg = cli.to_config().unwrap();
        assert_eq!(cfg.timeout, Some(Duration::from_secs(15)));
        assert!(cfg.echo_request_id);
        assert_eq!(cli.heartbeat(), Some(Duration::from_secs(10)));
        assert!(cli.verbose);
    }

    #[test]
    fn zero_heartbeat_disables_it() {
        let cli = parse(&["stdio-http-relay", "--heartbeat-secs", "0"]).unwrap();
        assert!(cli.heartbeat().is_none());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(parse(&["stdio-http-relay", "-v", "-q"]).is_err());
    }

    #[test]
    fn invalid_url_fails_at_config() {
        let cli = parse(&["stdio-http-relay", "::not a url::"]).unwrap();
        assert!(matches!(cli.to_config(), Err(RelayError::InvalidUrl { .. })));
    }
}
