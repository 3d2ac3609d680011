pub mod patterns;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Closed set of recognized document categories.
/// Never absent — extraction always resolves to one of the three tags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DocumentType {
    Passport,
    DriverLicense,
    Unknown,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passport => "Passport",
            Self::DriverLicense => "Driver's License",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four KYC fields extracted from a document.
///
/// Absence is `None`, never an empty string — the patterns require at
/// least one character in every capture, so `Some("")` cannot occur.
/// Immutable once built; both the risk scorer and the advisory validator
/// read the same record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KycRecord {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub document_type: DocumentType,
}

impl KycRecord {
    /// Number of absent fields among the three optional ones.
    /// `document_type` always resolves to a tag and never counts.
    pub fn absent_field_count(&self) -> u32 {
        [
            self.name.is_none(),
            self.date_of_birth.is_none(),
            self.address.is_none(),
        ]
        .iter()
        .filter(|absent| **absent)
        .count() as u32
    }
}

/// Parse a [`KycRecord`] out of raw document text.
///
/// Pure function — no external calls, no state. Every slot is assigned:
/// unmatched fields come back `None` and the document type defaults to
/// [`DocumentType::Unknown`].
pub fn extract_fields(text: &str) -> KycRecord {
    let record = KycRecord {
        name: patterns::match_name(text),
        date_of_birth: patterns::match_date_of_birth(text),
        address: patterns::match_address(text),
        document_type: patterns::match_document_type(text),
    };
    debug!(
        absent_fields = record.absent_field_count(),
        document_type = %record.document_type,
        "field extraction complete"
    );
    record
}
