use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("log buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `run` under a plain-text fmt subscriber at `DEBUG` and returns what
/// it logged.
pub(crate) fn capture_logs(run: impl FnOnce()) -> String {
    let writer = CapturedWriter::default();
    let buffer = Arc::clone(&writer.buffer);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    let bytes = buffer.lock().expect("log buffer lock").clone();
    String::from_utf8(bytes).expect("logs should be utf-8")
}
