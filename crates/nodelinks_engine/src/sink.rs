use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use thiserror::Error;

use crate::persist::{write_atomic, PersistError};

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("console write failed: {0}")]
    Console(#[from] io::Error),
    #[error("failed to write list file {path}: {source}")]
    ListFile {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
}

/// A destination for the extracted URL list or the count line.
pub trait OutputSink {
    fn deliver(&mut self, text: &str) -> Result<(), SinkError>;
    fn name(&self) -> &str;
}

/// Writes each delivery followed by a newline, like a console log call.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn deliver(&mut self, text: &str) -> Result<(), SinkError> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Plain-text system clipboard via arboard.
///
/// The handle is opened on first delivery and lives as long as the sink, so
/// the selection stays owned until the run ends. On Linux a hold keeps serving
/// the selection after the copy until another application replaces it or the
/// hold runs out.
#[derive(Default)]
pub struct ClipboardSink {
    clipboard: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl ClipboardSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = Some(hold);
        self
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }

    pub fn is_open(&self) -> bool {
        self.clipboard.is_some()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, SinkError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| SinkError::Clipboard(e.to_string()))?,
        };
        Ok(self.clipboard.insert(clipboard))
    }
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    match hold {
        Some(hold) => clipboard
            .set()
            .wait_until(Instant::now() + hold)
            .text(text),
        None => clipboard.set_text(text),
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: Option<Duration>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

impl OutputSink for ClipboardSink {
    fn deliver(&mut self, text: &str) -> Result<(), SinkError> {
        let hold = self.hold;
        if let Some(hold) = hold {
            engine_debug!("Serving the clipboard selection for up to {:?}", hold);
        }
        let clipboard = self.handle()?;
        set_text(clipboard, text, hold).map_err(|e| SinkError::Clipboard(e.to_string()))?;
        engine_info!("Copied {} characters to the clipboard", text.chars().count());
        Ok(())
    }

    fn name(&self) -> &str {
        "clipboard"
    }
}

/// One URL per line, written atomically; the format the review scraper reads.
#[derive(Debug, Clone)]
pub struct ListFileSink {
    path: PathBuf,
}

impl ListFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for ListFileSink {
    fn deliver(&mut self, text: &str) -> Result<(), SinkError> {
        let mut content = text.to_string();
        if !content.is_empty() {
            content.push('\n');
        }
        let written = write_atomic(&self.path, &content).map_err(|source| SinkError::ListFile {
            path: self.path.clone(),
            source,
        })?;
        engine_debug!("Wrote URL list to {}", written.display());
        Ok(())
    }

    fn name(&self) -> &str {
        "list file"
    }
}
