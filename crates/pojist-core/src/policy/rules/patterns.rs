//! Regex patterns for Czech insurer documents.
//!
//! Patterns capture the interesting value in group 1 (and group 2 for limit
//! pairs). They are matched against the raw decoded text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+"
    ).unwrap();

    // ---------------------------------------------------------------- Allianz

    pub static ref ALLIANZ_NATIONAL_ID: Regex = Regex::new(
        r"Rodné číslo:\s*(\d{9,10})"
    ).unwrap();

    pub static ref ALLIANZ_PLATE: Regex = Regex::new(
        r"([A-Z0-9]{5,8}), č\."
    ).unwrap();

    pub static ref ALLIANZ_CONTRACT: Regex = Regex::new(
        r"Nabídka pojistitele č\.\s*(\d+)"
    ).unwrap();

    pub static ref ALLIANZ_POLICY_START: Regex = Regex::new(
        r"KČ ROČNĚ\s+(\d{1,2}\.\s*\d{1,2}\.\s*\d{4})"
    ).unwrap();

    pub static ref ALLIANZ_ANNUAL_MILEAGE: Regex = Regex::new(
        r"Roční nájezd:\s*(Do\s*[\d\s]+km)"
    ).unwrap();

    pub static ref ALLIANZ_PHONE: Regex = Regex::new(
        r"Mobilní telefon:\s*([+0-9 ]+)"
    ).unwrap();

    pub static ref ALLIANZ_LIABILITY_LIMITS: Regex = Regex::new(
        r"(?i)Limit.*?(\d{2,3})\s*/\s*(\d{2,3})"
    ).unwrap();

    pub static ref ALLIANZ_VEHICLE_PRICE: Regex = Regex::new(
        r"(?i)Cena vozidla\s*[:\-]?\s*([\d\s]+)\s*Kč"
    ).unwrap();

    pub static ref ALLIANZ_ODOMETER: Regex = Regex::new(
        r"(?i)Najeté km\s*[:\-]?\s*([\d\s]+)"
    ).unwrap();

    // Premium amount on one of the lines below "Vaše pojistné" (1 234 Kč)
    pub static ref ALLIANZ_PREMIUM_AMOUNT: Regex = Regex::new(
        r"([0-9]{1,3}(?:[ \u{00a0}]?[0-9]{3}))\s*Kč"
    ).unwrap();

    // ------------------------------------------------------------ Kooperativa

    pub static ref KOOPERATIVA_NAME: Regex = Regex::new(
        r"Titul, jméno, příjmení\s+([^\n]*)"
    ).unwrap();

    pub static ref KOOPERATIVA_NATIONAL_ID: Regex = Regex::new(
        r"Rodné číslo\s+(\d{9,10})"
    ).unwrap();

    pub static ref KOOPERATIVA_ADDRESS: Regex = Regex::new(
        r"Adresa bydliště\s+([^\n]*)"
    ).unwrap();

    // Any bare 10-digit number; the contract number is usually the first one
    pub static ref KOOPERATIVA_CONTRACT: Regex = Regex::new(
        r"\b(\d{10})\b"
    ).unwrap();

    pub static ref KOOPERATIVA_PLATE: Regex = Regex::new(
        r"Registrační značka\s+([^\n]*)"
    ).unwrap();

    pub static ref KOOPERATIVA_VEHICLE_PRICE: Regex = Regex::new(
        r"Pojistná částka\s+([\d\s]+)"
    ).unwrap();

    pub static ref KOOPERATIVA_ODOMETER: Regex = Regex::new(
        r"Stav počítadla \(km\)\s+([\d\s]+)"
    ).unwrap();

    pub static ref KOOPERATIVA_POLICY_START: Regex = Regex::new(
        r"Počátek pojištění\s+(\d{1,2}\.\s*\d{1,2}\.\s*\d{4})"
    ).unwrap();

    pub static ref KOOPERATIVA_PREMIUM: Regex = Regex::new(
        r"Celkové roční pojistné\s+([\d\s]+)"
    ).unwrap();

    pub static ref KOOPERATIVA_LIMIT: Regex = Regex::new(
        r"(\d{2,3})\s*mil\.\s*Kč"
    ).unwrap();

    pub static ref KOOPERATIVA_SAME_OPERATOR: Regex = Regex::new(
        r"(?i)Provozovatel\s+Shodný\s+s\s+pojistníkem"
    ).unwrap();

    pub static ref KOOPERATIVA_SAME_OWNER: Regex = Regex::new(
        r"(?i)Vlastník\s+Shodný\s+s\s+pojistníkem"
    ).unwrap();

    pub static ref KOOPERATIVA_PHONE: Regex = Regex::new(
        r"Mobil\s+([+0-9 ]+)"
    ).unwrap();

    pub static ref KOOPERATIVA_PERSON_TYPE: Regex = Regex::new(
        r"Typ osoby\s+([^\n]+)"
    ).unwrap();

    pub static ref KOOPERATIVA_ADDITIONAL_BLOCK: Regex = Regex::new(
        r"(?s)Doplňková pojištění(.*?)(?:Roční pojistné|$)"
    ).unwrap();

    // --------------------------------------------------------------- Generali

    pub static ref GENERALI_HOLDER_BLOCK: Regex = Regex::new(
        r"(?si)POJISTNÍK\s*-\s*fyzická osoba\s*(.*?)\n(?:PRACOVNÍK|POJISTNÁ|TECHNICKÉ|POJIŠTĚNÍ|$)"
    ).unwrap();

    // "Label: value" lines inside the holder and vehicle blocks
    pub static ref GENERALI_HOLDER_NAME: Regex = Regex::new(
        r"Titul, jméno, příjmení, titul za jménem\s*:\s*(.+)"
    ).unwrap();

    pub static ref GENERALI_NATIONAL_ID: Regex = Regex::new(
        r"Rodné číslo\s*:\s*(.+)"
    ).unwrap();

    pub static ref GENERALI_PHONE: Regex = Regex::new(
        r"Telefon\s*:\s*(.+)"
    ).unwrap();

    pub static ref GENERALI_EMAIL: Regex = Regex::new(
        r"E-mail\s*:\s*(.+)"
    ).unwrap();

    pub static ref GENERALI_ADDRESS: Regex = Regex::new(
        r"Trvalá adresa\s*:\s*(.+)"
    ).unwrap();

    pub static ref GENERALI_PLATE: Regex = Regex::new(
        r"Registrační značka\s*:\s*(.+)"
    ).unwrap();

    pub static ref GENERALI_CONTRACT: Regex = Regex::new(
        r"Pojistná smlouva číslo\s*:\s*(\d+)"
    ).unwrap();

    pub static ref GENERALI_VEHICLE_BLOCK: Regex = Regex::new(
        r"(?si)3\.3\s+Údaje o vozidle\s*(.*?)\n(?:3\.4|POJIŠTĚNÍ|TECHNICKÉ|$)"
    ).unwrap();

    pub static ref GENERALI_POLICY_START: Regex = Regex::new(
        r"(?i)počátkem pojištění\s+(\d{1,2}\.\s*\d{1,2}\.\s*\d{4})"
    ).unwrap();

    pub static ref GENERALI_LIABILITY_LIMITS: Regex = Regex::new(
        r"(?si)Limit pojistného plnění.*?(\d{2,3})\s*[\d\s]*Kč.*?škody na majetku.*?(\d{2,3})\s*[\d\s]*Kč"
    ).unwrap();

    // Tried in order, first match wins
    pub static ref GENERALI_PREMIUM: Vec<Regex> = vec![
        Regex::new(r"(?i)Celkem roční pojistné.*?([0-9\s]{4,7})\s*Kč").unwrap(),
        Regex::new(r"(?i)Výše jednotlivé splátky.*?([0-9\s]{4,7})\s*Kč").unwrap(),
        Regex::new(r"(?i)Částka\s*([0-9\s]{4,7})\s*Kč").unwrap(),
    ];

    pub static ref GENERALI_ADDITIONAL: Regex = Regex::new(
        r"(?i)4\.2\s+Doplňková pojištění\s+(.*)"
    ).unwrap();

    pub static ref GENERALI_VEHICLE_PRICE: Regex = Regex::new(
        r"(?i)cena vozidla\s*[:\-]?\s*([0-9\s]{4,10})"
    ).unwrap();

    pub static ref GENERALI_ODOMETER: Regex = Regex::new(
        r"(?i)Najeté kilometry\s*[:\-]?\s*([0-9\s]{1,10})"
    ).unwrap();

    pub static ref GENERALI_ANNUAL_MILEAGE: Regex = Regex::new(
        r"(?i)Roční nájezd\s*[:\-]?\s*([0-9\s]{1,10})"
    ).unwrap();

    pub static ref GENERALI_VAT_PAYER: Regex = Regex::new(
        r"(?i)Plátce DPH\s*[:\-]?\s*ano"
    ).unwrap();

    pub static ref GENERALI_SAME_OPERATOR: Regex = Regex::new(
        r"(?i)3\.2\s+Držitel\s+\(provozovatel\)\s+vozidla\s+je\s+shodný\s+s\s+pojistníkem"
    ).unwrap();

    pub static ref GENERALI_OWNER: Regex = Regex::new(
        r"3\.1\s+Vlastník vozidla:\s*(.+)"
    ).unwrap();
}
