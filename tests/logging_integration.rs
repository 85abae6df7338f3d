//! Integration tests for the log events emitted while resolving.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tnsurl::resolve;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_info<F: FnOnce()>(f: F) -> String {
    capture(tracing::Level::INFO, f)
}

fn capture<F: FnOnce()>(level: tracing::Level, f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_unresolved_url_is_logged_at_info() {
    let url = "jdbc:tibero:thin:@(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=1))";
    let output = capture_info(|| {
        resolve(Some(url));
    });

    assert!(output.contains("INFO"), "{output}");
    assert!(output.contains("could not be resolved"), "{output}");
    assert!(output.contains(url), "{output}");
}

#[test]
fn test_null_url_is_logged() {
    let output = capture_info(|| {
        resolve(None);
    });
    assert!(output.contains("must not be null"), "{output}");
}

#[test]
fn test_resolved_url_is_quiet_at_info() {
    let output = capture_info(|| {
        resolve(Some("jdbc:tibero:thin:@localhost:8629:tibero"));
    });
    assert!(output.is_empty(), "{output}");
}

#[test]
fn test_flat_split_is_traced_by_subscriber_level() {
    let output = capture(tracing::Level::TRACE, || {
        resolve(Some("jdbc:tibero:thin:scott/p@ss@dbhost:1521:XE"));
    });
    assert!(output.contains("flat url split"), "{output}");
    assert!(output.contains("dbhost"), "{output}");
    assert!(!output.contains("ss@dbhost"), "{output}");
}
