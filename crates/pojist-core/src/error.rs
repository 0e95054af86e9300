//! Error types for the pojist-core library.

use thiserror::Error;

/// Main error type for the pojist library.
#[derive(Error, Debug)]
pub enum PojistError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Document pipeline error.
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Per-document failures reported by the document pipeline.
///
/// All variants are terminal for the document. Callers decide what to do with
/// the source file based on success or failure alone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The document has no extractable text.
    #[error("document contains no text")]
    EmptyDocument,

    /// None of the supported insurers was recognized in the text.
    #[error("unsupported insurer")]
    UnsupportedIssuer,

    /// The extractor faulted while processing the document.
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}

/// Result type for the pojist library.
pub type Result<T> = std::result::Result<T, PojistError>;
