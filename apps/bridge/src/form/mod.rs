//! Form access: the page elements the bridge reads from and writes to.
//!
//! The bridge never touches concrete inputs directly. Callers hand it a
//! `FormDataSource` for the three input fields and an `OutputSink` for the
//! output element, so the same request logic runs against a terminal, a
//! file-backed form, or a test double.

#![allow(dead_code)]

pub mod fields;
pub mod output;
pub mod prompt;

pub use fields::FormFields;
pub use output::{OutputElement, StdoutSink};

/// Read access to the current form values.
///
/// Values are read at call time on every call; nothing is cached and no
/// value is validated. Empty strings are legal.
pub trait FormDataSource: Send + Sync {
    fn resume(&self) -> String;
    fn job_description(&self) -> String;
    fn page_length(&self) -> String;
}

/// Write access to the output element.
///
/// `set_text` takes `&self` so overlapping submissions can share one sink;
/// each write replaces the previous text entirely.
pub trait OutputSink: Send + Sync {
    fn set_text(&self, text: &str);
}
