use thiserror::Error;

use crate::model::copy_result::GeneratedCopyResult;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("backend returned no text payload")]
    Empty,

    #[error("payload does not match the copy schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Decode raw LLM JSON into a GeneratedCopyResult.
/// Any missing or non-string field rejects the whole payload.
pub fn decode_copy_result(text: &str) -> Result<GeneratedCopyResult, DecodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DecodeError::Empty);
    }

    Ok(serde_json::from_str(text)?)
}
