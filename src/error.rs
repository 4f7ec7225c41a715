//! Error types for the roster query engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The engine has exactly one failure mode: an invalid page size passed to
//! [`crate::query::paginate`]. Every other boundary condition (empty input,
//! empty partition, all-duplicate input) resolves to a neutral default value
//! rather than an error.

use thiserror::Error;

/// The error type for roster query operations.
///
/// # Example
///
/// ```
/// use roster_query::error::QueryError;
///
/// let error = QueryError::InvalidPageSize { size: 0 };
/// assert_eq!(error.to_string(), "Invalid page size: 0 (must be positive)");
/// ```
#[derive(Debug, Error)]
pub enum QueryError {
    /// A pagination request used a zero or negative page size.
    #[error("Invalid page size: {size} (must be positive)")]
    InvalidPageSize {
        /// The offending page size value.
        size: i32,
    },
}

/// A type alias for Results that return QueryError.
pub type QueryResult<T> = Result<T, QueryError>;
