//! Insurance policy field extraction module.

mod allianz;
mod classifier;
mod generali;
mod kooperativa;
mod pipeline;
pub mod rules;

pub use allianz::AllianzExtractor;
pub use classifier::{classify, Issuer};
pub use generali::GeneraliExtractor;
pub use kooperativa::KooperativaExtractor;
pub use pipeline::DocumentPipeline;

use crate::models::record::FieldRecord;

/// Trait for insurer-specific field extractors.
///
/// Extraction never fails: fields that cannot be found keep their
/// default value in the returned record.
pub trait PolicyExtractor: Send + Sync {
    /// Insurer this extractor handles.
    fn issuer(&self) -> Issuer;

    /// Extract all fields from the document text.
    fn extract(&self, text: &str, filename: &str) -> FieldRecord;
}
