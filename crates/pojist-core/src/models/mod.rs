//! Data models: output record, input document and configuration.

pub mod config;
pub mod document;
pub mod record;
