//! Allianz offer/contract extractor.

use crate::models::record::{Field, FieldRecord, NOT_STATED};

use super::rules::patterns::*;
use super::rules::{
    birth_date_from_national_id, collapse_whitespace, limit_pair, normalize_phone,
    strip_grouping, yes_no, DocumentText,
};
use super::{Issuer, PolicyExtractor};

/// Additional-coverage packages, tested in this order.
///
/// A package is selected when any of its keywords appears in the
/// whitespace-collapsed lowercase text.
const PACKAGES: &[(&str, &[&str])] = &[
    (
        "Sjednaný balíček Max",
        &["havárie ano", "doplatek na nové (gap) ano", "gap ano"],
    ),
    (
        "Sjednaný balíček Extra",
        &["krádež ano", "skla ano", "vandalismus ano"],
    ),
    (
        "Sjednaný balíček Plus",
        &["přírodní události ano", "požár a výbuch ano", "poškození zvířetem ano"],
    ),
    (
        "Sjednaný balíček Komfort",
        &[
            "povinné ručení ano",
            "právní poradenství ano",
            "asistence ano",
            "rozšířená asistence ano",
            "úrazové pojištění ano",
        ],
    ),
];

/// Risks that make a policy comprehensive when followed by "ano".
const COMPREHENSIVE_RISKS: &[&str] = &[
    "přírodní události",
    "poškození zvířetem",
    "havárie",
    "gap",
    "skla",
    "krádež",
];

/// Field extractor for Allianz documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllianzExtractor;

impl AllianzExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Name from the line above "Rodné číslo", else the line after "Klient (Vy):".
    fn holder_name(&self, doc: &DocumentText) -> Option<String> {
        let lines = doc.lines();
        let above_id = lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| line.contains("Rodné číslo"))
            .map(|(i, _)| lines[i - 1].trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string);

        above_id.or_else(|| {
            doc.line_after("Klient (Vy):", 1)
                .filter(|line| !line.is_empty())
        })
    }

    fn address(&self, doc: &DocumentText) -> Option<String> {
        let index = doc.find_line("trvalý pobyt")?;
        doc.first_non_empty_after(index, 2)
    }

    /// First amount on the three lines below "Vaše pojistné".
    fn premium(&self, doc: &DocumentText) -> Option<String> {
        let index = doc.find_line("vaše pojistné")?;
        doc.lines()
            .iter()
            .skip(index + 1)
            .take(3)
            .find_map(|line| ALLIANZ_PREMIUM_AMOUNT.captures(line))
            .and_then(|caps| strip_grouping(&caps[1]))
    }

    fn package(&self, doc: &DocumentText) -> Option<&'static str> {
        let cleaned = collapse_whitespace(doc.lower());
        PACKAGES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| cleaned.contains(k)))
            .map(|(name, _)| *name)
    }
}

impl PolicyExtractor for AllianzExtractor {
    fn issuer(&self) -> Issuer {
        Issuer::Allianz
    }

    fn extract(&self, text: &str, filename: &str) -> FieldRecord {
        let doc = DocumentText::new(text);
        let mut record = FieldRecord::for_source(filename);

        record.set_opt(Field::FullName, self.holder_name(&doc));

        let national_id = doc.capture(&ALLIANZ_NATIONAL_ID).unwrap_or_default();
        record.set(Field::BirthDate, birth_date_from_national_id(&national_id));
        record.set(Field::NationalId, national_id);

        record.set_opt(Field::Address, self.address(&doc));
        record.set_opt(Field::PlateNumber, doc.capture(&ALLIANZ_PLATE));
        record.set_opt(Field::ContractNumber, doc.capture(&ALLIANZ_CONTRACT));
        record.set_opt(Field::PolicyStart, doc.capture(&ALLIANZ_POLICY_START));
        record.set(
            Field::AnnualMileage,
            doc.capture_or(&ALLIANZ_ANNUAL_MILEAGE, NOT_STATED),
        );

        if let Some(raw) = doc.capture(&ALLIANZ_PHONE) {
            record.set(Field::Phone, normalize_phone(&raw));
        }

        let email = doc
            .email_near("kontaktní adresa", 5)
            .or_else(|| doc.first_email());
        record.set_opt(Field::Email, email);

        if let Some((health, property)) = doc.capture_pair(&ALLIANZ_LIABILITY_LIMITS) {
            record.set(Field::LiabilityLimits, limit_pair(&health, &property));
        }

        record.set(
            Field::SameOperator,
            yes_no(doc.contains_phrase("provozovatel je shodný")),
        );
        record.set(
            Field::SameOwner,
            yes_no(doc.contains_phrase("vlastník vozidla je shodný")),
        );

        record.set_opt(Field::AdditionalCoverage, self.package(&doc));

        let comprehensive = COMPREHENSIVE_RISKS
            .iter()
            .any(|risk| doc.contains_phrase(&format!("{} ano", risk)));
        record.set(Field::Comprehensive, yes_no(comprehensive));

        record.set(
            Field::VehiclePrice,
            doc.capture_raw(&ALLIANZ_VEHICLE_PRICE)
                .and_then(strip_grouping)
                .unwrap_or_else(|| NOT_STATED.to_string()),
        );
        record.set(
            Field::Odometer,
            doc.capture_raw(&ALLIANZ_ODOMETER)
                .and_then(strip_grouping)
                .unwrap_or_else(|| NOT_STATED.to_string()),
        );
        record.set(
            Field::Premium,
            self.premium(&doc).unwrap_or_else(|| NOT_STATED.to_string()),
        );

        record
    }
}
