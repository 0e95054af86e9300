//! Generali / Česká podnikatelská contract extractor.

use crate::models::record::{Field, FieldRecord, NO, NOT_STATED, YES};

use super::rules::patterns::*;
use super::rules::{
    birth_date_from_national_id, capture_in, limit_pair, normalize_phone, strip_grouping, yes_no,
    DocumentText,
};
use super::{Issuer, PolicyExtractor};

/// Keywords that indicate comprehensive (havarijní) cover anywhere in the text.
const COMPREHENSIVE_KEYWORDS: &[&str] = &[
    "havarijní pojištění",
    "poškození zvířetem",
    "přírodní události",
    "havárie",
    "skla",
    "krádež",
    "vandalismus",
    "gap",
];

/// Field extractor for Generali documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneraliExtractor;

impl GeneraliExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Fields of the "POJISTNÍK - fyzická osoba" block.
    fn fill_holder(&self, doc: &DocumentText, record: &mut FieldRecord) {
        let Some(block) = doc.capture_raw(&GENERALI_HOLDER_BLOCK) else {
            return;
        };

        let national_id = capture_in(block, &GENERALI_NATIONAL_ID).unwrap_or_default();
        record.set(
            Field::BirthDate,
            birth_date_from_national_id(&national_id.replace('/', "")),
        );
        record.set(Field::NationalId, national_id);

        record.set_opt(Field::FullName, capture_in(block, &GENERALI_HOLDER_NAME));
        if let Some(raw) = capture_in(block, &GENERALI_PHONE) {
            record.set(Field::Phone, normalize_phone(&raw));
        }
        record.set_opt(Field::Email, capture_in(block, &GENERALI_EMAIL));
        record.set_opt(Field::Address, capture_in(block, &GENERALI_ADDRESS));
        record.set(Field::HolderPersonType, "fyzická osoba");
    }

    fn premium(&self, doc: &DocumentText) -> Option<String> {
        GENERALI_PREMIUM
            .iter()
            .find_map(|re| doc.capture_raw(re))
            .and_then(strip_grouping)
    }

    fn amount_or_not_stated(&self, doc: &DocumentText, re: &regex::Regex) -> String {
        doc.capture_raw(re)
            .and_then(strip_grouping)
            .unwrap_or_else(|| NOT_STATED.to_string())
    }
}

impl PolicyExtractor for GeneraliExtractor {
    fn issuer(&self) -> Issuer {
        Issuer::Generali
    }

    fn extract(&self, text: &str, filename: &str) -> FieldRecord {
        let doc = DocumentText::new(text);
        let mut record = FieldRecord::for_source(filename);

        self.fill_holder(&doc, &mut record);

        record.set_opt(Field::ContractNumber, doc.capture(&GENERALI_CONTRACT));

        if let Some(vehicle) = doc.capture_raw(&GENERALI_VEHICLE_BLOCK) {
            record.set_opt(Field::PlateNumber, capture_in(vehicle, &GENERALI_PLATE));
        }

        record.set_opt(Field::PolicyStart, doc.capture(&GENERALI_POLICY_START));

        if let Some((health, property)) = doc.capture_pair(&GENERALI_LIABILITY_LIMITS) {
            record.set(Field::LiabilityLimits, limit_pair(&health, &property));
        }

        record.set_opt(Field::Premium, self.premium(&doc));
        record.set_opt(Field::AdditionalCoverage, doc.capture(&GENERALI_ADDITIONAL));

        let comprehensive = COMPREHENSIVE_KEYWORDS
            .iter()
            .any(|kw| doc.contains_phrase(kw));
        record.set(Field::Comprehensive, yes_no(comprehensive));

        record.set(
            Field::VehiclePrice,
            self.amount_or_not_stated(&doc, &GENERALI_VEHICLE_PRICE),
        );
        record.set(
            Field::Odometer,
            self.amount_or_not_stated(&doc, &GENERALI_ODOMETER),
        );
        record.set(
            Field::AnnualMileage,
            self.amount_or_not_stated(&doc, &GENERALI_ANNUAL_MILEAGE),
        );

        let vat_payer = if GENERALI_VAT_PAYER.is_match(text) {
            YES
        } else {
            NOT_STATED
        };
        record.set(Field::HolderVatPayer, vat_payer);

        record.set(
            Field::SameOperator,
            yes_no(GENERALI_SAME_OPERATOR.is_match(text)),
        );

        // The owner section is only printed when the owner differs
        record.set(
            Field::OwnerName,
            doc.capture_or(&GENERALI_OWNER, NOT_STATED),
        );
        record.set(Field::SameOwner, NO);

        record
    }
}
