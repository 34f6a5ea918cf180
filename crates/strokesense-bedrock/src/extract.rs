//! Locating the JSON object inside free-form model output.
//!
//! Models asked for "JSON only" still wrap it in markdown fences or add a
//! sentence before it.

use crate::error::ModelError;

/// Return the JSON block in a model response.
///
/// Prefers a ```` ```json ```` fence, then any fence whose body looks like
/// JSON, then the span from the first `{` to the last `}`.
pub fn extract_json_block(response: &str) -> Result<&str, ModelError> {
    let trimmed = response.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return Ok(after_fence[..end].trim());
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            let block = after_fence[..end].trim();
            if block.starts_with('{') {
                return Ok(block);
            }
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}'))
        && start < end
    {
        return Ok(&trimmed[start..=end]);
    }

    Err(ModelError::ResponseParse(
        "no JSON object found in model response".to_string(),
    ))
}
