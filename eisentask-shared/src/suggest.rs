/// Keyword-based categorization suggestions
///
/// A deterministic stand-in for a smarter classifier: scans free text for a
/// small set of keywords and guesses a (priority, importance) pair with a
/// fixed confidence. Stateless and non-learning.
use serde::Serialize;

use crate::models::task::{Importance, Priority};

/// Substrings that flag a text as urgent
const URGENT_KEYWORDS: [&str; 4] = ["urgent", "asap", "now", "today"];

/// Substrings that flag a text as important
const IMPORTANT_KEYWORDS: [&str; 4] = ["important", "critical", "must", "key"];

/// Fixed confidence reported with every suggestion
pub const SUGGESTION_CONFIDENCE: f64 = 0.75;

/// A guessed categorization for a piece of free text
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    /// The input text, trimmed, usable as a task title
    pub title: String,

    /// Guessed urgency
    pub priority: Priority,

    /// Guessed importance
    pub importance: Importance,

    /// Always `SUGGESTION_CONFIDENCE`
    pub confidence: f64,

    /// Human-readable summary of how the guess was made
    pub reasoning: String,
}

/// Guesses a categorization for `text`.
///
/// Matching is plain substring containment over the lowercased input, so a
/// keyword inside a longer word still counts. Callers reject empty text
/// before calling.
pub fn suggest(text: &str) -> Suggestion {
    let lowered = text.to_lowercase();

    let priority = if URGENT_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Priority::Urgent
    } else {
        Priority::NotUrgent
    };

    let importance = if IMPORTANT_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Importance::Important
    } else {
        Importance::NotImportant
    };

    Suggestion {
        title: text.trim().to_string(),
        priority,
        importance,
        confidence: SUGGESTION_CONFIDENCE,
        reasoning: format!(
            "Based on keyword analysis: priority={}, importance={}",
            priority.as_str(),
            importance.as_str()
        ),
    }
}
