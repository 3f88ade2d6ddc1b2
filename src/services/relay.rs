use std::io::{self, BufRead, Write};

use crate::error::RelayError;
use crate::model::config::RelayConfig;
use crate::protocol;
use crate::services::forward::Forwarder;
use crate::services::relay_types::RelayReport;

/// Run the relay until `input` is exhausted.
///
/// Lines are handled strictly one at a time: the next line is read only after
/// the previous exchange has produced its output (or nothing). Output is
/// flushed after every line.
pub fn relay<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    cfg: &RelayConfig,
) -> Result<RelayReport, RelayError> {
    let forwarder = Forwarder::new(cfg)?;
    run(input, &mut output, &forwarder, cfg.echo_request_id)
}

pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    forwarder: &Forwarder,
    echo_request_id: bool,
) -> Result<RelayReport, RelayError> {
    let mut report = RelayReport::default();

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(error = %e, "skipping line that is not valid UTF-8");
                report.lines_read += 1;
                report.undecodable += 1;
                continue;
            }
            Err(e) => return Err(RelayError::Input(e)),
        };
        report.lines_read += 1;

        let outcome = protocol::handle(&line, forwarder, echo_request_id);
        report.record(&outcome);

        if let Some(out) = outcome.line() {
            writeln!(output, "{out}").map_err(RelayError::Output)?;
            output.flush().map_err(RelayError::Output)?;
        }
    }

    Ok(report)
}
