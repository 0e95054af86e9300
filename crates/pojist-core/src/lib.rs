//! Core library for Czech motor-insurance document processing.
//!
//! This crate provides:
//! - PDF text decoding
//! - Insurer detection (Allianz, Kooperativa, Generali)
//! - Per-insurer policy field extraction into a fixed-schema record
//! - Normalizers for phone numbers, birth numbers and amounts

pub mod error;
pub mod models;
pub mod pdf;
pub mod policy;

pub use error::{PdfError, PipelineError, PojistError, Result};
pub use models::config::PojistConfig;
pub use models::document::RawDocument;
pub use models::record::{Field, FieldRecord};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use policy::{classify, DocumentPipeline, Issuer, PolicyExtractor};
