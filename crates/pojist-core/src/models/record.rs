//! Fixed-schema output record shared by every insurer extractor.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Sentinel for a value the document does not state.
pub const NOT_STATED: &str = "neuvedeno";

/// Boolean-like field value for "yes".
pub const YES: &str = "ANO";

/// Boolean-like field value for "no".
pub const NO: &str = "NE";

/// A single column of the output table.
///
/// The declaration order is the column order of the table and must not change:
/// rows produced by different extractors are merged into one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    NationalId,
    BirthDate,
    Address,
    ContractNumber,
    PlateNumber,
    VehiclePrice,
    Odometer,
    AnnualMileage,
    PolicyStart,
    Premium,
    LiabilityLimits,
    Comprehensive,
    AdditionalCoverage,
    Phone,
    Email,
    HolderPersonType,
    HolderVatPayer,
    SameOperator,
    SameOwner,
    OperatorName,
    OperatorId,
    OperatorAddress,
    OperatorPersonType,
    OperatorVatPayer,
    OwnerName,
    OwnerId,
    OwnerAddress,
    OwnerPersonType,
    OwnerVatPayer,
    SourceFile,
}

impl Field {
    /// Number of fields in the schema.
    pub const COUNT: usize = 31;

    /// All fields in column order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::FullName,
        Field::NationalId,
        Field::BirthDate,
        Field::Address,
        Field::ContractNumber,
        Field::PlateNumber,
        Field::VehiclePrice,
        Field::Odometer,
        Field::AnnualMileage,
        Field::PolicyStart,
        Field::Premium,
        Field::LiabilityLimits,
        Field::Comprehensive,
        Field::AdditionalCoverage,
        Field::Phone,
        Field::Email,
        Field::HolderPersonType,
        Field::HolderVatPayer,
        Field::SameOperator,
        Field::SameOwner,
        Field::OperatorName,
        Field::OperatorId,
        Field::OperatorAddress,
        Field::OperatorPersonType,
        Field::OperatorVatPayer,
        Field::OwnerName,
        Field::OwnerId,
        Field::OwnerAddress,
        Field::OwnerPersonType,
        Field::OwnerVatPayer,
        Field::SourceFile,
    ];

    /// Column header used in the output table.
    pub fn column(&self) -> &'static str {
        match self {
            Field::FullName => "Jméno a příjmení",
            Field::NationalId => "Rodné číslo",
            Field::BirthDate => "Datum narození",
            Field::Address => "Adresa",
            Field::ContractNumber => "Číslo smlouvy",
            Field::PlateNumber => "SPZ",
            Field::VehiclePrice => "Cena vozidla",
            Field::Odometer => "Najeté km",
            Field::AnnualMileage => "Roční nájezd",
            Field::PolicyStart => "Počátek pojištění",
            Field::Premium => "Cena",
            Field::LiabilityLimits => "Krytí PR",
            Field::Comprehensive => "Havarijní pojištění",
            Field::AdditionalCoverage => "Další připojištění",
            Field::Phone => "Telefon",
            Field::Email => "E-mail",
            Field::HolderPersonType => "Pojistník - Typ osoby",
            Field::HolderVatPayer => "Pojistník - Plátce DPH",
            Field::SameOperator => "Shodný provozovatel",
            Field::SameOwner => "Shodný vlastník",
            Field::OperatorName => "Provozovatel - Název",
            Field::OperatorId => "Provozovatel - IČO",
            Field::OperatorAddress => "Provozovatel - Adresa",
            Field::OperatorPersonType => "Provozovatel - Typ osoby",
            Field::OperatorVatPayer => "Provozovatel - Plátce DPH",
            Field::OwnerName => "Vlastník - Název",
            Field::OwnerId => "Vlastník - IČO",
            Field::OwnerAddress => "Vlastník - Adresa",
            Field::OwnerPersonType => "Vlastník - Typ osoby",
            Field::OwnerVatPayer => "Vlastník - Plátce DPH",
            Field::SourceFile => "Zdrojový soubor",
        }
    }

    /// Table header row in column order.
    pub fn header() -> [&'static str; Field::COUNT] {
        Field::ALL.map(|f| f.column())
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One extracted document: a value for every [`Field`], empty by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    values: Vec<String>,
}

impl FieldRecord {
    /// Create a record with every field empty.
    pub fn new() -> Self {
        Self {
            values: vec![String::new(); Field::COUNT],
        }
    }

    /// Create an empty record tagged with its source filename.
    pub fn for_source(filename: &str) -> Self {
        let mut record = Self::new();
        record.set(Field::SourceFile, filename);
        record
    }

    /// Get the value of a field.
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Set the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Set a field only when a value is present.
    pub fn set_opt(&mut self, field: Field, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set(field, value);
        }
    }

    /// Values in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Field/value pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .iter()
            .zip(self.values.iter())
            .map(|(f, v)| (*f, v.as_str()))
    }

    /// Number of fields holding a non-empty value.
    pub fn filled_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_empty()).count()
    }
}

impl Default for FieldRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for FieldRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.column(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_order_matches_discriminants() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
        assert_eq!(Field::header()[0], "Jméno a příjmení");
        assert_eq!(Field::header()[Field::COUNT - 1], "Zdrojový soubor");
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = FieldRecord::new();
        assert_eq!(record.values().len(), Field::COUNT);
        assert_eq!(record.filled_count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut record = FieldRecord::for_source("smlouva.pdf");
        record.set(Field::PlateNumber, "1AB2345");
        record.set_opt(Field::Email, None::<String>);

        assert_eq!(record.get(Field::SourceFile), "smlouva.pdf");
        assert_eq!(record.get(Field::PlateNumber), "1AB2345");
        assert_eq!(record.get(Field::Email), "");
        assert_eq!(record.filled_count(), 2);
    }

    #[test]
    fn test_serialize_keeps_column_order() {
        let mut record = FieldRecord::for_source("a.pdf");
        record.set(Field::FullName, "Jan Novák");

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with("{\"Jméno a příjmení\":\"Jan Novák\",\"Rodné číslo\":\"\""));
        assert!(json.ends_with("\"Zdrojový soubor\":\"a.pdf\"}"));
    }
}
