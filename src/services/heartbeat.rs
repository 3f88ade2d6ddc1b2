use std::thread;
use std::time::Duration;

/// Log a keep-alive event every `interval` on a detached thread.
///
/// The thread only writes diagnostics and lives until the process exits.
pub fn spawn(interval: Duration) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("relay-heartbeat".into())
        .spawn(move || {
            let mut beats: u64 = 0;
            loop {
                thread::sleep(interval);
                beats += 1;
                beat(beats);
            }
        })
}

fn beat(beats: u64) {
    tracing::info!(beats, "keep-alive ping");
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn beat_is_visible_at_info_under_module_target() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || beat(3));

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("keep-alive ping"), "got: {text}");
        assert!(text.contains("INFO"), "got: {text}");
        assert!(text.contains("stdio_http_relay::services::heartbeat"), "got: {text}");
    }
}
