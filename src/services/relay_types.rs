use crate::protocol::Outcome;

/// Counters for one run of the relay loop.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelayReport {
    pub lines_read: usize,
    pub blank: usize,
    pub undecodable: usize,
    pub forwarded: usize,
    pub normalized: usize,
    pub dropped: usize,
    pub parse_errors: usize,
    pub transport_errors: usize,
}

impl RelayReport {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Blank => self.blank += 1,
            Outcome::Dropped => {
                self.forwarded += 1;
                self.dropped += 1;
            }
            Outcome::Normalized(_) => {
                self.forwarded += 1;
                self.normalized += 1;
            }
            Outcome::ParseError(_) => {
                self.forwarded += 1;
                self.parse_errors += 1;
            }
            Outcome::TransportError(_) => {
                self.forwarded += 1;
                self.transport_errors += 1;
            }
        }
    }

    /// Number of lines written to output.
    pub fn emitted(&self) -> usize {
        self.normalized + self.parse_errors + self.transport_errors
    }
}
