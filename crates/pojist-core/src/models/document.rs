//! Input document handed to the pipeline.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Plain text of one PDF together with its filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Decoded text of all pages.
    pub text: String,
    /// File name (without directory) of the source PDF.
    pub filename: String,
}

impl RawDocument {
    pub fn new(text: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filename: filename.into(),
        }
    }

    /// Read a PDF from disk and decode its text.
    pub fn from_pdf_path(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let mut extractor = PdfExtractor::new();
        extractor.load(&data)?;
        let text = extractor.extract_text()?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(
            "Decoded {} ({} pages, {} chars)",
            filename,
            extractor.page_count(),
            text.len()
        );

        Ok(Self::new(text, filename))
    }
}
