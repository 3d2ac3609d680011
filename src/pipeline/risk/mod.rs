//! Heuristic risk scoring over an extracted [`KycRecord`].
//!
//! Additive penalties, clamped to 100, then bucketed into three levels.
//! Pure and total: the same record always scores the same, and no record
//! can make scoring fail.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pipeline::fields::{patterns, DocumentType, KycRecord};

/// Added once per absent field.
pub const ABSENT_FIELD_PENALTY: u32 = 15;
/// Added when the document type resolves to Unknown.
pub const UNKNOWN_DOCUMENT_PENALTY: u32 = 20;
/// Added when a present date of birth fails the DD/MM/YYYY or DD-MM-YYYY
/// shape. Inert under the current extractor, whose own pattern already
/// enforces the shape; kept for records populated by other sources.
pub const MALFORMED_DOB_PENALTY: u32 = 10;
/// Added when a present address has fewer than [`SHORT_ADDRESS_CHARS`]
/// characters.
pub const SHORT_ADDRESS_PENALTY: u32 = 10;

pub const SHORT_ADDRESS_CHARS: usize = 10;
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Deterministic partition of the score range: ≤ 20 Low, 21–50
    /// Medium, > 50 High.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=20 => Self::Low,
            21..=50 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
}

/// Score a record. Penalty order does not affect the sum.
pub fn assess(record: &KycRecord) -> RiskAssessment {
    let mut score = record.absent_field_count() * ABSENT_FIELD_PENALTY;

    if record.document_type == DocumentType::Unknown {
        score += UNKNOWN_DOCUMENT_PENALTY;
    }

    if let Some(dob) = &record.date_of_birth {
        if !patterns::dob_has_expected_shape(dob) {
            score += MALFORMED_DOB_PENALTY;
        }
    }

    if let Some(address) = &record.address {
        if address.chars().count() < SHORT_ADDRESS_CHARS {
            score += SHORT_ADDRESS_PENALTY;
        }
    }

    let score = score.min(MAX_SCORE) as u8;
    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
    }
}
