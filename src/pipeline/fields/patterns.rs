//! Per-field pattern matchers.
//!
//! Each KYC field has its own matcher so a rule change for one field
//! cannot regress the others. All matchers are unanchored and take the
//! first match scanning top to bottom.

use std::sync::LazyLock;

use regex::Regex;

use super::DocumentType;

/// "Name" label followed by one or more proper-case words separated by
/// single spaces. All-caps or all-lowercase names deliberately do not
/// match, and the capture never crosses a line break.
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Name[:\s]+([A-Z][a-z]+(?: [A-Z][a-z]+)*)").unwrap());

/// "Date of Birth" label followed by DD/MM/YYYY or DD-MM-YYYY.
/// The alternation keeps separators unmixed within one match.
static DATE_OF_BIRTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Date of Birth[:\s]+(\d{2}/\d{2}/\d{4}|\d{2}-\d{2}-\d{4})").unwrap()
});

/// "Address" label followed by a run of word characters, whitespace and
/// commas. The run has no terminator other than the character class, so
/// trailing text of the same class is folded in — accepted behavior.
static ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Address[:\s]+([\w\s,]+)").unwrap());

/// Standalone date-shape check, anchored at both ends.
/// Used by the risk scorer to vet a date of birth that arrived from a
/// source other than [`match_date_of_birth`].
static DOB_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}/\d{2}/\d{4}|\d{2}-\d{2}-\d{4})$").unwrap());

pub fn match_name(text: &str) -> Option<String> {
    NAME.captures(text).map(|c| c[1].to_string())
}

pub fn match_date_of_birth(text: &str) -> Option<String> {
    DATE_OF_BIRTH.captures(text).map(|c| c[1].to_string())
}

pub fn match_address(text: &str) -> Option<String> {
    ADDRESS.captures(text).map(|c| c[1].to_string())
}

/// Case-insensitive substring search over the whole text.
/// "passport" wins over "license" when both appear.
pub fn match_document_type(text: &str) -> DocumentType {
    let lower = text.to_lowercase();
    if lower.contains("passport") {
        DocumentType::Passport
    } else if lower.contains("license") {
        DocumentType::DriverLicense
    } else {
        DocumentType::Unknown
    }
}

pub fn dob_has_expected_shape(value: &str) -> bool {
    DOB_SHAPE.is_match(value)
}
