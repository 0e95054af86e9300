//! Insurer detection from document text.

use std::fmt;

/// Insurer that issued a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Issuer {
    Allianz,
    Kooperativa,
    /// Generali, including documents branded Česká podnikatelská.
    Generali,
    Unrecognized,
}

impl Issuer {
    /// Display name of the insurer.
    pub fn name(&self) -> &'static str {
        match self {
            Issuer::Allianz => "Allianz",
            Issuer::Kooperativa => "Kooperativa",
            Issuer::Generali => "Generali",
            Issuer::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase markers checked in priority order; first hit wins.
const ISSUER_MARKERS: &[(Issuer, &[&str])] = &[
    (Issuer::Allianz, &["allianz"]),
    (Issuer::Kooperativa, &["kooperativa"]),
    (Issuer::Generali, &["generali", "česká podnikatelská"]),
];

/// Determine the insurer by case-insensitive marker search.
pub fn classify(text: &str) -> Issuer {
    let lower = text.to_lowercase();

    ISSUER_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| lower.contains(m)))
        .map(|(issuer, _)| *issuer)
        .unwrap_or(Issuer::Unrecognized)
}
