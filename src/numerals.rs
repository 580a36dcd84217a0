//! Persian and Arabic-Indic digit normalization, and validators for the numeric
//! form fields that accept them (phone, postcode, national id, prices, ...).

use std::sync::LazyLock;

use regex::Regex;

const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

#[allow(clippy::expect_used)]
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^09[0-9]{9}$").expect("valid phone regex"));
#[allow(clippy::expect_used)]
static TEN_DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid ten digit regex"));
#[allow(clippy::expect_used)]
static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));
#[allow(clippy::expect_used)]
static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("valid decimal regex"));

/// Error type for numeric field normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberValidationError {
    /// Not an Iranian mobile number.
    #[error("Invalid phone number format: {0}")]
    InvalidPhone(String),

    /// Not a plain or decimal amount once separators are removed.
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),
}

fn ascii_digit(ch: char) -> Option<char> {
    let code = u32::from(ch);
    [PERSIAN_ZERO, ARABIC_INDIC_ZERO]
        .into_iter()
        .find(|zero| (*zero..*zero + 10).contains(&code))
        .and_then(|zero| char::from_digit(code - zero, 10))
}

/// Replaces Persian (`۰-۹`) and Arabic-Indic (`٠-٩`) digits with ASCII digits.
/// Everything else is left untouched.
pub fn normalize_digits(input: &str) -> String {
    input.chars().map(|ch| ascii_digit(ch).unwrap_or(ch)).collect()
}

/// Replaces ASCII digits with Persian digits, for display.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|ch| {
            ch.to_digit(10)
                .and_then(|d| char::from_u32(PERSIAN_ZERO + d))
                .unwrap_or(ch)
        })
        .collect()
}

/// Returns true if `input` contains any Persian or Arabic-Indic digit.
pub fn contains_persian_digits(input: &str) -> bool {
    input.chars().any(|ch| ascii_digit(ch).is_some())
}

/// Kinds of numeric form field, each with its own format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Mobile number: `09` followed by nine digits
    Phone,
    /// Ten digits
    Postcode,
    /// Ten digits
    NationalId,
    /// Digits only, any length
    EconomicCode,
    Number,
    Price,
    Quantity,
    /// Width, length, GSM and similar measurements
    Dimension,
}

impl FieldKind {
    /// Normalizes digits, then checks the field's format.
    pub fn validate(self, input: &str) -> bool {
        let normalized = normalize_digits(input.trim());
        let regex = match self {
            Self::Phone => &PHONE_REGEX,
            Self::Postcode | Self::NationalId => &TEN_DIGITS_REGEX,
            Self::EconomicCode => &DIGITS_REGEX,
            Self::Number | Self::Price | Self::Quantity | Self::Dimension => &DECIMAL_REGEX,
        };
        let valid = regex.is_match(&normalized);
        if !valid {
            log::debug!("rejected {self:?} field value {input:?}");
        }
        valid
    }

    /// Message shown next to a field that failed [`Self::validate`].
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Phone => "شماره تلفن باید با 09 شروع شده و 11 رقم باشد",
            Self::Postcode => "کد پستی باید دقیقاً 10 رقم باشد",
            Self::NationalId => "شناسه ملی باید 10 رقم باشد",
            Self::EconomicCode => "کد اقتصادی باید فقط شامل اعداد باشد",
            Self::Number | Self::Price | Self::Quantity | Self::Dimension => {
                "فقط اعداد مجاز هستند"
            },
        }
    }
}

/// Brings a mobile number to the `09XXXXXXXXX` form.
///
/// Non-digits are dropped and a `98` / `0098` country prefix is removed.
///
/// # Errors
/// Returns `NumberValidationError::InvalidPhone` if what remains is not a mobile number.
pub fn normalize_phone(phone: &str) -> Result<String, NumberValidationError> {
    let digits: String = normalize_digits(phone)
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    let local = digits
        .strip_prefix("0098")
        .or_else(|| digits.strip_prefix("98"))
        .unwrap_or(digits.as_str());

    let normalized = if local.len() == 10 && local.starts_with('9') {
        format!("0{local}")
    } else {
        local.to_owned()
    };

    if PHONE_REGEX.is_match(&normalized) {
        Ok(normalized)
    } else {
        log::debug!("could not normalize phone number {phone:?}");
        Err(NumberValidationError::InvalidPhone(phone.to_owned()))
    }
}

/// Normalizes a price: digits converted, thousands separators and surrounding spaces removed.
///
/// # Errors
/// Returns `NumberValidationError::InvalidPrice` if the result is not a plain or decimal number.
pub fn normalize_price(price: &str) -> Result<String, NumberValidationError> {
    let normalized: String = normalize_digits(price)
        .trim()
        .chars()
        .filter(|&ch| ch != ',' && ch != '٬' && ch != '،')
        .collect();

    if DECIMAL_REGEX.is_match(&normalized) {
        Ok(normalized)
    } else {
        log::debug!("could not normalize price {price:?}");
        Err(NumberValidationError::InvalidPrice(price.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_digits() {
        assert_eq!(normalize_digits("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
        assert_eq!(normalize_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
        assert_eq!(normalize_digits("قیمت: ۱۲۵ ریال"), "قیمت: 125 ریال");
        assert_eq!(normalize_digits("abc 42"), "abc 42");
        assert_eq!(normalize_digits(""), "");
    }

    #[test]
    fn test_to_persian_digits() {
        assert_eq!(to_persian_digits("1403/01/01"), "۱۴۰۳/۰۱/۰۱");
        assert_eq!(to_persian_digits("no digits"), "no digits");
        assert_eq!(normalize_digits(&to_persian_digits("0123456789")), "0123456789");
    }

    #[test]
    fn test_contains_persian_digits() {
        assert!(contains_persian_digits("abc۵"));
        assert!(contains_persian_digits("٣"));
        assert!(!contains_persian_digits("12345"));
        assert!(!contains_persian_digits("فروردین"));
    }

    #[test]
    fn test_field_validation() {
        struct TestCase {
            kind: FieldKind,
            input: &'static str,
            valid: bool,
        }

        let cases = [
            TestCase { kind: FieldKind::Phone, input: "09123456789", valid: true },
            TestCase { kind: FieldKind::Phone, input: "۰۹۱۲۳۴۵۶۷۸۹", valid: true },
            TestCase { kind: FieldKind::Phone, input: "9123456789", valid: false },
            TestCase { kind: FieldKind::Phone, input: "0912345678", valid: false },
            TestCase { kind: FieldKind::Postcode, input: "1234567890", valid: true },
            TestCase { kind: FieldKind::Postcode, input: "123456789", valid: false },
            TestCase { kind: FieldKind::NationalId, input: "۰۰۱۲۳۴۵۶۷۸", valid: true },
            TestCase { kind: FieldKind::NationalId, input: "12345678901", valid: false },
            TestCase { kind: FieldKind::EconomicCode, input: "4111", valid: true },
            TestCase { kind: FieldKind::EconomicCode, input: "41-11", valid: false },
            TestCase { kind: FieldKind::Price, input: "۱۲۵۰۰.۵", valid: true },
            TestCase { kind: FieldKind::Quantity, input: "12", valid: true },
            TestCase { kind: FieldKind::Dimension, input: "1.", valid: false },
            TestCase { kind: FieldKind::Number, input: "-3", valid: false },
            TestCase { kind: FieldKind::Number, input: "", valid: false },
            // Devanagari and full-width digits are not converted, so they never pass
            TestCase { kind: FieldKind::Quantity, input: "१२३", valid: false },
            TestCase { kind: FieldKind::Postcode, input: "१२३४५६७८९०", valid: false },
            TestCase { kind: FieldKind::EconomicCode, input: "１２３", valid: false },
            TestCase { kind: FieldKind::Phone, input: "09१२३४५६७८९", valid: false },
        ];

        for case in &cases {
            assert_eq!(
                case.kind.validate(case.input),
                case.valid,
                "{:?} {:?}",
                case.kind,
                case.input
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldKind::Postcode.error_message(), "کد پستی باید دقیقاً 10 رقم باشد");
        assert_eq!(FieldKind::Price.error_message(), FieldKind::Quantity.error_message());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("09123456789").unwrap(), "09123456789");
        assert_eq!(normalize_phone("9123456789").unwrap(), "09123456789");
        assert_eq!(normalize_phone("+98 912 345 6789").unwrap(), "09123456789");
        assert_eq!(normalize_phone("00989123456789").unwrap(), "09123456789");
        assert_eq!(normalize_phone("۰۹۱۲-۳۴۵-۶۷۸۹").unwrap(), "09123456789");
        assert!(matches!(
            normalize_phone("12345"),
            Err(NumberValidationError::InvalidPhone(_))
        ));
        assert!(normalize_phone("").is_err());
        assert!(normalize_phone("٠٩١٢٣٤٥٦٧٨٩").is_ok());
    }

    #[test]
    fn test_normalize_price() {
        assert_eq!(normalize_price("1,250,000").unwrap(), "1250000");
        assert_eq!(normalize_price(" ۱٬۲۵۰ ").unwrap(), "1250");
        assert_eq!(normalize_price("99.95").unwrap(), "99.95");
        assert!(matches!(
            normalize_price("12a"),
            Err(NumberValidationError::InvalidPrice(_))
        ));
        assert!(normalize_price(",").is_err());
        assert!(normalize_price("१२३").is_err());
        assert!(normalize_price("12.३").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = NumberValidationError::InvalidPrice("x".to_owned());
        assert_eq!(err.to_string(), "Invalid price format: x");
    }
}
