//! Tracing output for the browser.
//!
//! A `tracing-subscriber` fmt layer formats each event into one line and hands
//! it to the devtools console method matching the event's level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

type Sink = fn(Level, &str);

/// Buffers one formatted event and flushes it to the sink on drop.
pub struct LineWriter {
    level: Level,
    buf: Vec<u8>,
    sink: Sink,
}

impl io::Write for LineWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
    }
}

/// `MakeWriter` producing one [`LineWriter`] per event.
#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl ConsoleMakeWriter {
    pub fn new(sink: Sink) -> Self {
        Self { sink }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            level: Level::INFO,
            buf: Vec::new(),
            sink: self.sink,
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter {
            level: *meta.level(),
            buf: Vec::new(),
            sink: self.sink,
        }
    }
}

fn console_sink(level: Level, line: &str) {
    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&msg),
        Level::WARN => web_sys::console::warn_1(&msg),
        Level::INFO => web_sys::console::info_1(&msg),
        _ => web_sys::console::debug_1(&msg),
    }
}

/// Parse a level name, defaulting to `INFO`.
fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::INFO)
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(log_level: &str) {
    // No wall clock on wasm32-unknown-unknown; skip timestamps.
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::new(console_sink))
        .with_max_level(parse_level(log_level))
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        web_sys::console::warn_1(&"[storefront] tracing subscriber already installed".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    #[test]
    fn events_are_routed_by_level() {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(ConsoleMakeWriter::new(capture))
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("timer refused");
            tracing::debug!(index = 2, "tick");
            tracing::trace!("dropped");
        });

        let lines = LINES.with(|lines| lines.borrow().clone());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::WARN);
        assert!(lines[0].1.contains("timer refused"));
        assert_eq!(lines[1].0, Level::DEBUG);
        assert!(lines[1].1.contains("index=2"));
        assert!(!lines[1].1.ends_with('\n'));
    }

    #[test]
    fn unknown_level_defaults_to_info() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }
}
