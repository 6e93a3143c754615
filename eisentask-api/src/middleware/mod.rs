/// Middleware modules for the API server
///
/// This module contains custom middleware for:
/// - Identity extraction from the `x-user-id` header

pub mod identity;
