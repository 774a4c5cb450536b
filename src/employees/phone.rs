//! Display formatting for employee phone numbers
//!
//! The store keeps phones as one formatted string. The form composes that string
//! from a country code plus a 10-digit local number, and splits it again when an
//! existing record is opened for editing.

/// Country codes offered by the form, with their display names
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("+90", "Turkey"),
    ("+1", "USA/Canada"),
    ("+44", "UK"),
    ("+49", "Germany"),
    ("+33", "France"),
];

pub const DEFAULT_COUNTRY_CODE: &str = "+90";

/// Length of a complete local number
pub const LOCAL_NUMBER_LEN: usize = 10;

/// A formatted phone split back into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneParts {
    pub country_code: String,
    pub number: String,
}

pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a local number for display according to its country code
///
/// Numbers that are not exactly 10 digits, and unknown codes, fall back to
/// `"<code> <number>"`.
pub fn format_phone(country_code: &str, number: &str) -> String {
    if number.len() != LOCAL_NUMBER_LEN || !number.chars().all(|c| c.is_ascii_digit()) {
        return format!("{} {}", country_code, number);
    }

    let n = number;
    match country_code {
        "+90" => format!("+(90) {} {} {} {}", &n[0..3], &n[3..6], &n[6..8], &n[8..10]),
        "+1" => format!("+1 ({}) {}-{}", &n[0..3], &n[3..6], &n[6..10]),
        "+44" => format!("+44 {} {}", &n[0..4], &n[4..10]),
        "+49" => format!("+49 {} {}", &n[0..3], &n[3..10]),
        "+33" => format!(
            "+33 {} {} {} {} {}",
            &n[0..1],
            &n[1..3],
            &n[3..5],
            &n[5..7],
            &n[7..9]
        ),
        _ => format!("{} {}", country_code, number),
    }
}

/// Recover country code and local number from a stored phone string
pub fn parse_phone(phone: &str) -> PhoneParts {
    let digits = digits_only(phone);

    // (prefix, code, digits belonging to the code)
    const PREFIXES: &[(&str, &str, usize)] = &[
        ("+(90)", "+90", 2),
        ("+1", "+1", 1),
        ("+44", "+44", 2),
        ("+49", "+49", 2),
        ("+33", "+33", 2),
    ];

    for (prefix, code, code_digits) in PREFIXES {
        if phone.starts_with(prefix) {
            return PhoneParts {
                country_code: code.to_string(),
                number: digits.chars().skip(*code_digits).collect(),
            };
        }
    }

    let skip = digits.len().saturating_sub(LOCAL_NUMBER_LEN);
    PhoneParts {
        country_code: DEFAULT_COUNTRY_CODE.to_string(),
        number: digits[skip..].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_turkish_number() {
        assert_eq!(format_phone("+90", "5551234567"), "+(90) 555 123 45 67");
    }

    #[test]
    fn test_format_us_number() {
        assert_eq!(format_phone("+1", "5551234567"), "+1 (555) 123-4567");
    }

    #[test]
    fn test_format_uk_number() {
        assert_eq!(format_phone("+44", "7911123456"), "+44 7911 123456");
    }

    #[test]
    fn test_format_german_and_french_numbers() {
        assert_eq!(format_phone("+49", "1761234567"), "+49 176 1234567");
        assert_eq!(format_phone("+33", "6123456789"), "+33 6 12 34 56 78");
    }

    #[test]
    fn test_format_falls_back_for_short_numbers_and_unknown_codes() {
        assert_eq!(format_phone("+90", "12345"), "+90 12345");
        assert_eq!(format_phone("+31", "6123456789"), "+31 6123456789");
    }

    #[test]
    fn test_parse_turkish_number() {
        let parts = parse_phone("+(90) 555-123-4567");
        assert_eq!(parts.country_code, "+90");
        assert_eq!(parts.number, "5551234567");
    }

    #[test]
    fn test_parse_us_number() {
        let parts = parse_phone("+1 555-123-4567");
        assert_eq!(parts.country_code, "+1");
        assert_eq!(parts.number, "5551234567");
    }

    #[test]
    fn test_parse_without_country_code_uses_default() {
        let parts = parse_phone("1234567890");
        assert_eq!(parts.country_code, "+90");
        assert_eq!(parts.number, "1234567890");

        let parts = parse_phone("00 1234567890");
        assert_eq!(parts.number, "1234567890");
    }

    #[test]
    fn test_format_then_parse_keeps_country_code() {
        for (code, _) in COUNTRY_CODES {
            let formatted = format_phone(code, "6123456789");
            let parts = parse_phone(&formatted);
            assert_eq!(parts.country_code, *code);
        }
        assert_eq!(parse_phone("+44 7911 123456").number, "7911123456");
    }
}
