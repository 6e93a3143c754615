/// Task suggestion endpoint
///
/// Turns a free-text snippet into a suggested task classification using
/// the keyword heuristic from `eisentask_shared::suggest`. The endpoint
/// is stateless and does not touch the task store, so it does not
/// require an identity header.
///
/// # Endpoint
///
/// `POST /api/ai/suggest`
///
/// # Example Request
///
/// ```json
/// {
///   "text": "Call the bank today, it is important"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "suggestion": {
///     "title": "Call the bank today, it is important",
///     "priority": "urgent",
///     "importance": "important",
///     "confidence": 0.75,
///     "reasoning": "Based on keyword analysis: priority=urgent, importance=important"
///   }
/// }
/// ```
use crate::error::ApiError;
use axum::Json;
use eisentask_shared::suggest::{suggest, Suggestion};
use serde::{Deserialize, Serialize};

/// Suggestion request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuggestRequest {
    /// Free text to classify
    pub text: Option<String>,
}

/// Suggestion response
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    /// Suggested task fields derived from the text
    pub suggestion: Suggestion,
}

/// Suggestion endpoint handler
///
/// # Errors
///
/// - 400 Bad Request: `text` missing or empty
pub async fn suggest_task(
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let text = match request.text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ApiError::BadRequest("Text input is required".to_string())),
    };

    let suggestion = suggest(&text);

    tracing::debug!(
        priority = suggestion.priority.as_str(),
        importance = suggestion.importance.as_str(),
        "Generated task suggestion"
    );

    Ok(Json(SuggestResponse { suggestion }))
}
