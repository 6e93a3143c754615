//! # Eisentask Shared Library
//!
//! This crate contains the domain types and business logic shared by the
//! eisentask API server: the task model, the file-backed task store, the
//! Eisenhower matrix views, and the categorization heuristic.
//!
//! ## Module Organization
//!
//! - `models`: task record and classification enums
//! - `store`: file-backed per-user task repository
//! - `matrix`: quadrant partitioning and the completed view
//! - `archive`: archived-view selection (day-boundary arithmetic)
//! - `suggest`: keyword-based categorization suggestions
//! - `clock`: injectable time source

pub mod archive;
pub mod clock;
pub mod matrix;
pub mod models;
pub mod store;
pub mod suggest;

/// Current version of the eisentask shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
