use serde_json::Value;

use crate::error::LcdError;

/// Error body the LCD attaches to non-2xx responses.
#[derive(serde::Deserialize)]
struct LcdErrorBody {
    error: Value,
}

/// Extract the human-readable message from an LCD error body.
///
/// The gateway answers failures with `{"error": "<text>"}`; some handlers
/// nest a JSON document inside that string, or return a non-string value.
/// Anything that is not JSON at all is returned trimmed, if non-empty.
pub(super) fn parse_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<LcdErrorBody>(body) {
        Ok(LcdErrorBody {
            error: Value::String(message),
        }) => Some(message),
        Ok(LcdErrorBody { error }) => Some(error.to_string()),
        Err(_) => {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
    }
}

/// Decode a 2xx body. An empty body decodes to `null`.
pub(super) fn decode_body(url: &str, body: &str) -> Result<Value, LcdError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| LcdError::InvalidResponse {
        url: url.to_owned(),
        message: format!("decode JSON body: {e}; body={body}"),
    })
}
