pub mod client;
pub mod prompt;

pub use client::*;
pub use prompt::*;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::fields::KycRecord;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("cannot connect to {0}")]
    Connection(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("chat API returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("malformed chat response: {0}")]
    MalformedResponse(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("advisory not configured: {0}")]
    NotConfigured(String),
}

/// Advisory commentary from the language model.
///
/// Opaque, informational text — displayed, never parsed, and never fed
/// back into the risk assessment or the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Advisory {
    Text(String),
    Unavailable { reason: String },
}

impl Advisory {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Unavailable { reason } => write!(f, "advisory unavailable: {reason}"),
        }
    }
}

/// Ask the language model to sanity-check the extracted fields.
///
/// Failures never abort the pipeline: they degrade to
/// [`Advisory::Unavailable`] and the record and risk assessment stand.
pub fn request_advisory(client: &dyn ChatClient, record: &KycRecord) -> Advisory {
    let user_prompt = prompt::build_validation_prompt(record);
    match client.complete(prompt::SYSTEM_PERSONA, &user_prompt) {
        Ok(text) => Advisory::Text(text),
        Err(e) => {
            tracing::warn!(error = %e, "advisory call failed — continuing without it");
            Advisory::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}
