//! Birth date derivation from the Czech birth number (rodné číslo).

/// Derive a `DD.MM.YYYY` birth date from a birth number.
///
/// The input must start with six digits (`YYMMDD`), otherwise the result is
/// empty. Years `50..=99` map to the 1900s, `00..=49` to the 2000s.
///
/// The month is copied as-is: female birth numbers carry `month + 50` and are
/// not corrected here, so `085512` yields `12.55.2008`.
pub fn birth_date_from_national_id(national_id: &str) -> String {
    let prefix_is_digits = national_id
        .chars()
        .take(6)
        .filter(|c| c.is_ascii_digit())
        .count()
        == 6;
    if !prefix_is_digits {
        return String::new();
    }

    let digits = national_id.replace('/', "");
    let yy = &digits[0..2];
    let mm = &digits[2..4];
    let dd = &digits[4..6];

    let year: u32 = match yy.parse() {
        Ok(y) => y,
        Err(_) => return String::new(),
    };
    let year = if year >= 50 { 1900 + year } else { 2000 + year };

    format!("{}.{}.{}", dd, mm, year)
}
