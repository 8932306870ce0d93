use std::io::Write;
use std::sync::{Arc, Mutex};

use super::OutputSink;

#[derive(Debug, Default)]
struct DisplayState {
    text: String,
    writes: u64,
}

/// A shared output element. Clones point at the same display state.
///
/// Writes are unordered: when overlapping submissions settle, whichever
/// writes last is what `text()` returns.
#[derive(Debug, Clone, Default)]
pub struct OutputElement {
    state: Arc<Mutex<DisplayState>>,
}

impl OutputElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed text.
    pub fn text(&self) -> String {
        self.lock().text.clone()
    }

    /// Number of times the element has been written.
    pub fn write_count(&self) -> u64 {
        self.lock().writes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DisplayState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl OutputSink for OutputElement {
    fn set_text(&self, text: &str) {
        let mut state = self.lock();
        state.text = text.to_string();
        state.writes += 1;
    }
}

/// Prints each write to stdout, followed by a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn set_text(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{text}");
        let _ = stdout.flush();
    }
}
