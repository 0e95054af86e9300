//! Kooperativa contract extractor.

use std::collections::BTreeSet;

use crate::models::record::{Field, FieldRecord, NOT_STATED};

use super::rules::patterns::*;
use super::rules::{
    birth_date_from_national_id, limit_pair, normalize_phone, strip_grouping, yes_no,
    DocumentText,
};
use super::{Issuer, PolicyExtractor};

/// Field extractor for Kooperativa documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct KooperativaExtractor;

impl KooperativaExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Amount-like capture with grouping removed, or the "not stated" sentinel.
    fn amount_or_not_stated(&self, doc: &DocumentText, re: &regex::Regex) -> String {
        doc.capture_raw(re)
            .and_then(strip_grouping)
            .unwrap_or_else(|| NOT_STATED.to_string())
    }

    /// First two "NN mil. Kč" figures.
    fn liability_limits(&self, doc: &DocumentText) -> String {
        let limits: Vec<&str> = KOOPERATIVA_LIMIT
            .captures_iter(doc.raw())
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .take(2)
            .collect();

        match limits.as_slice() {
            [health, property] => limit_pair(health, property),
            _ => NOT_STATED.to_string(),
        }
    }

    /// Distinct insurance lines listed under "Doplňková pojištění", sorted.
    fn additional_coverage(&self, doc: &DocumentText) -> Option<String> {
        let block = doc.capture_raw(&KOOPERATIVA_ADDITIONAL_BLOCK)?;
        let items: BTreeSet<&str> = block
            .lines()
            .filter(|line| line.to_lowercase().contains("pojištění"))
            .map(str::trim)
            .collect();

        Some(items.into_iter().collect::<Vec<_>>().join(", "))
    }
}

impl PolicyExtractor for KooperativaExtractor {
    fn issuer(&self) -> Issuer {
        Issuer::Kooperativa
    }

    fn extract(&self, text: &str, filename: &str) -> FieldRecord {
        let doc = DocumentText::new(text);
        let mut record = FieldRecord::for_source(filename);

        record.set_opt(Field::FullName, doc.capture(&KOOPERATIVA_NAME));

        let national_id = doc.capture(&KOOPERATIVA_NATIONAL_ID).unwrap_or_default();
        record.set(Field::BirthDate, birth_date_from_national_id(&national_id));
        record.set(Field::NationalId, national_id);

        record.set_opt(Field::Address, doc.capture(&KOOPERATIVA_ADDRESS));
        record.set_opt(Field::ContractNumber, doc.capture(&KOOPERATIVA_CONTRACT));
        record.set_opt(Field::PlateNumber, doc.capture(&KOOPERATIVA_PLATE));

        record.set(
            Field::VehiclePrice,
            self.amount_or_not_stated(&doc, &KOOPERATIVA_VEHICLE_PRICE),
        );
        record.set(
            Field::Odometer,
            self.amount_or_not_stated(&doc, &KOOPERATIVA_ODOMETER),
        );
        record.set(Field::AnnualMileage, NOT_STATED);
        record.set_opt(Field::PolicyStart, doc.capture(&KOOPERATIVA_POLICY_START));
        record.set_opt(
            Field::Premium,
            doc.capture_raw(&KOOPERATIVA_PREMIUM).and_then(strip_grouping),
        );

        record.set(Field::LiabilityLimits, self.liability_limits(&doc));

        record.set(
            Field::SameOperator,
            yes_no(KOOPERATIVA_SAME_OPERATOR.is_match(text)),
        );
        record.set(
            Field::SameOwner,
            yes_no(KOOPERATIVA_SAME_OWNER.is_match(text)),
        );

        if let Some(raw) = doc.capture(&KOOPERATIVA_PHONE) {
            record.set(Field::Phone, normalize_phone(&raw));
        }
        record.set_opt(Field::Email, doc.first_email());
        record.set_opt(Field::HolderPersonType, doc.capture(&KOOPERATIVA_PERSON_TYPE));

        record.set_opt(Field::AdditionalCoverage, self.additional_coverage(&doc));
        record.set(
            Field::Comprehensive,
            yes_no(text.contains("Havarijní pojištění")),
        );

        record
    }
}
