//! Forwards `tracing` events to the browser console.
//!
//! The fmt subscriber asks for one writer per event; the writer buffers the
//! formatted line and hands it to the console method matching the event's
//! level when it is dropped.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Install the console subscriber. Level comes from `TODO_LOG_LEVEL` at build
/// time, defaulting to `debug` in debug builds and `info` otherwise.
pub fn init() {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level())
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if let Err(err) = result {
        console::warn_1(&format!("console logging not installed: {err}").into());
    }
}

fn max_level() -> Level {
    option_env!("TODO_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        })
}

#[derive(Debug, Clone, Copy, Default)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

#[derive(Debug)]
struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(line.trim_end());
        if self.level == Level::ERROR {
            console::error_1(&message);
        } else if self.level == Level::WARN {
            console::warn_1(&message);
        } else if self.level == Level::INFO {
            console::info_1(&message);
        } else {
            console::debug_1(&message);
        }
    }
}
