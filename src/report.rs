//! Final result assembly: one tabular record per processed document.

use serde::{Deserialize, Serialize};

use crate::pipeline::advisory::Advisory;
use crate::pipeline::fields::KycRecord;
use crate::pipeline::risk::RiskAssessment;

pub const COLUMNS: [&str; 6] = [
    "Name",
    "Date of Birth",
    "Address",
    "Document Type",
    "Risk Score",
    "Risk Level",
];

/// Everything the pipeline produced for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycReport {
    pub record: KycRecord,
    pub risk: RiskAssessment,
    pub advisory: Advisory,
}

/// Flat row shape for CSV serialization; `None` becomes an empty field.
#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Name")]
    name: Option<&'a str>,
    #[serde(rename = "Date of Birth")]
    date_of_birth: Option<&'a str>,
    #[serde(rename = "Address")]
    address: Option<&'a str>,
    #[serde(rename = "Document Type")]
    document_type: &'a str,
    #[serde(rename = "Risk Score")]
    risk_score: u8,
    #[serde(rename = "Risk Level")]
    risk_level: &'a str,
}

impl KycReport {
    /// Cell values in column order, with `-` standing in for absent
    /// fields in human-readable output.
    pub fn cells(&self) -> [String; 6] {
        let cell = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        [
            cell(&self.record.name),
            cell(&self.record.date_of_birth),
            cell(&self.record.address),
            self.record.document_type.to_string(),
            self.risk.score.to_string(),
            self.risk.level.to_string(),
        ]
    }

    /// Render the header row and the single value row, columns padded to
    /// a shared width.
    pub fn to_table(&self) -> String {
        let cells = self.cells();
        let widths: Vec<usize> = COLUMNS
            .iter()
            .zip(&cells)
            .map(|(header, cell)| header.len().max(cell.len()))
            .collect();

        let render = |values: &[&str]| -> String {
            values
                .iter()
                .zip(widths.iter())
                .map(|(value, &width)| format!("{value:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let header = render(&COLUMNS);
        let row = render(&cells.iter().map(String::as_str).collect::<Vec<_>>());
        format!("{header}\n{row}")
    }

    /// Render the record as CSV: header line plus one data row.
    pub fn to_csv(&self) -> Result<String, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(CsvRow {
            name: self.record.name.as_deref(),
            date_of_birth: self.record.date_of_birth.as_deref(),
            address: self.record.address.as_deref(),
            document_type: self.record.document_type.as_str(),
            risk_score: self.risk.score,
            risk_level: self.risk.level.as_str(),
        })?;
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
