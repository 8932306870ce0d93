use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::FormDataSource;

/// An in-memory form. Field values are owned strings, returned as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub resume: String,
    pub job_description: String,
    pub page_length: String,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resume(mut self, resume: impl Into<String>) -> Self {
        self.resume = resume.into();
        self
    }

    pub fn with_job_description(mut self, job_description: impl Into<String>) -> Self {
        self.job_description = job_description.into();
        self
    }

    pub fn with_page_length(mut self, page_length: impl Into<String>) -> Self {
        self.page_length = page_length.into();
        self
    }
}

impl FormDataSource for FormFields {
    fn resume(&self) -> String {
        self.resume.clone()
    }

    fn job_description(&self) -> String {
        self.job_description.clone()
    }

    fn page_length(&self) -> String {
        self.page_length.clone()
    }
}

/// Loads a field's text from disk. PDFs go through text extraction; anything
/// else is read as UTF-8.
pub fn read_field_file(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Failed to extract text from PDF: {}", path.display()))?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?
    };

    debug!("Loaded {} chars from {}", text.len(), path.display());
    Ok(text)
}
