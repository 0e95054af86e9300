//! Classification and dispatch of a decoded document to its extractor.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::models::document::RawDocument;
use crate::models::record::FieldRecord;

use super::{
    classify, AllianzExtractor, GeneraliExtractor, Issuer, KooperativaExtractor, PolicyExtractor,
};

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Routes documents to the extractor of the detected insurer.
pub struct DocumentPipeline {
    extractors: Vec<Box<dyn PolicyExtractor>>,
}

impl DocumentPipeline {
    /// Create a pipeline with the Allianz, Kooperativa and Generali extractors.
    pub fn new() -> Self {
        Self {
            extractors: vec![
                Box::new(AllianzExtractor::new()),
                Box::new(KooperativaExtractor::new()),
                Box::new(GeneraliExtractor::new()),
            ],
        }
    }

    #[cfg(test)]
    fn with_extractors(extractors: Vec<Box<dyn PolicyExtractor>>) -> Self {
        Self { extractors }
    }

    /// Extractor registered for the insurer, if any.
    pub fn extractor_for(&self, issuer: Issuer) -> Option<&dyn PolicyExtractor> {
        self.extractors
            .iter()
            .find(|e| e.issuer() == issuer)
            .map(|e| e.as_ref())
    }

    /// Classify the document and extract its fields.
    pub fn process(&self, document: &RawDocument) -> Result<FieldRecord> {
        if document.text.trim().is_empty() {
            warn!("{}: no text extracted", document.filename);
            return Err(PipelineError::EmptyDocument);
        }

        let issuer = classify(&document.text);
        info!("{}: detected insurer {}", document.filename, issuer);
        if issuer == Issuer::Unrecognized {
            return Err(PipelineError::UnsupportedIssuer);
        }

        let extractor = self
            .extractor_for(issuer)
            .ok_or(PipelineError::UnsupportedIssuer)?;

        let record = panic::catch_unwind(AssertUnwindSafe(|| {
            extractor.extract(&document.text, &document.filename)
        }))
        .map_err(|payload| PipelineError::ExtractionFailed(panic_message(payload.as_ref())))?;

        debug!(
            "{}: {} of {} fields filled",
            document.filename,
            record.filled_count(),
            record.values().len()
        );

        Ok(record)
    }

    /// Decode a PDF from disk and extract its fields.
    pub fn process_path(&self, path: &Path) -> crate::Result<FieldRecord> {
        let document = RawDocument::from_pdf_path(path)?;
        Ok(self.process(&document)?)
    }
}

impl Default for DocumentPipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "extractor panicked".to_string()
    }
}
