//! Text rendering of operation results for terminal output.

use crate::models::OperationResult;
use serde_json::Value;

/// Render a result the way it is shown to the user.
///
/// JSON bodies are pretty-printed, except bare strings which are shown
/// without quotes. Failures become `error: <message>`.
pub fn render(result: &OperationResult) -> String {
    match result {
        OperationResult::Success(Value::String(text)) => text.clone(),
        OperationResult::Success(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        OperationResult::Failure(message) => format!("error: {}", message),
    }
}
