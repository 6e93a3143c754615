/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `tasks`: Task CRUD and archive endpoints
/// - `suggest`: Keyword-based task suggestion endpoint

pub mod health;
pub mod suggest;
pub mod tasks;
