use serde::de::DeserializeOwned;

use crate::domain::common::entities::app_errors::CoreError;

/// A typed payload the AI model returns under a response schema.
///
/// Decoding already enforces the required fields; `validate` covers what a
/// JSON schema cannot express for us (blank names, negative calories...).
pub trait StructuredResponse: DeserializeOwned {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Parses the raw model text into `T` and validates it.
///
/// `context` is spliced into the user facing message, e.g. `" for recipe"`.
pub fn parse_structured<T: StructuredResponse>(raw: &str, context: &str) -> Result<T, CoreError> {
    let json_text = strip_code_fence(raw.trim());

    let parsed: T = serde_json::from_str(json_text).map_err(|e| {
        tracing::error!(
            "Failed to parse Gemini JSON response{}: {} ({})",
            context,
            json_text,
            e
        );
        format_error(context)
    })?;

    parsed.validate().map_err(|reason| {
        tracing::error!("Gemini JSON response{} failed validation: {}", context, reason);
        format_error(context)
    })?;

    Ok(parsed)
}

fn format_error(context: &str) -> CoreError {
    CoreError::InvalidResponseFormat(format!(
        "AI response{} was not in the expected format.",
        context
    ))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
