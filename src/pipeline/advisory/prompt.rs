use crate::pipeline::fields::KycRecord;

/// Fixed system persona for the validation call.
pub const SYSTEM_PERSONA: &str = "You are a compliance officer analyzing KYC data.";

/// Shown to the model for fields the extractor could not find.
const MISSING: &str = "missing";

/// Serialize the four fields into a natural-language validation prompt.
pub fn build_validation_prompt(record: &KycRecord) -> String {
    let name = record.name.as_deref().unwrap_or(MISSING);
    let date_of_birth = record.date_of_birth.as_deref().unwrap_or(MISSING);
    let address = record.address.as_deref().unwrap_or(MISSING);
    let document_type = record.document_type.as_str();

    format!(
        "Validate the following KYC details extracted from a document:\n\
         - Name: {name}\n\
         - Date of Birth: {date_of_birth}\n\
         - Address: {address}\n\
         - Document Type: {document_type}\n\
         \n\
         Check if the details are complete and formatted correctly."
    )
}
