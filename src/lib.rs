//! KYC document triage pipeline.
//!
//! Given one identity document (image or PDF), the pipeline acquires
//! machine-readable text, parses four KYC fields out of it, derives a
//! bounded heuristic risk score, and asks a language model for advisory
//! commentary on the extracted fields. One document per invocation,
//! synchronous, stateless.

pub mod config;
pub mod pipeline;
pub mod report;

pub use pipeline::advisory::{Advisory, ChatClient, OpenAiChatClient};
pub use pipeline::fields::{DocumentType, KycRecord};
pub use pipeline::processor::{DocumentProcessor, ProcessingError, ProcessingOutput};
pub use pipeline::risk::{RiskAssessment, RiskLevel};
pub use report::KycReport;
