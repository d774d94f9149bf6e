//! Console logging for the WASM module.
//!
//! A `tracing-subscriber` fmt layer whose writer forwards each formatted
//! event to `console.log` (or stderr when not running in a browser, e.g.
//! native unit tests).

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

/// Install the global subscriber. An already-installed subscriber (from an
/// earlier `start` that failed later on) counts as success; the level it was
/// built with stays in effect.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| AppError::InvalidConfig(format!("log_level {:?}: {}", level, e)))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .try_init();

    match installed {
        Ok(()) => {
            tracing::info!(level, "logging initialized");
            Ok(())
        }
        Err(_) if tracing::dispatcher::has_been_set() => {
            tracing::debug!(level, "logging already initialized");
            Ok(())
        }
        Err(e) => Err(AppError::Logger(e.to_string())),
    }
}

/// Buffers one formatted event and emits it as a single console line on drop.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn emit(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", line);
        self.buf.clear();
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}
