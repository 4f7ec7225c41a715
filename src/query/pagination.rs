//! Roster pagination.
//!
//! Page numbers are 1-based: page 1 with size 3 returns the first three
//! employees, page 2 the next three, and so on. This is the only fallible
//! operation in the engine.

use tracing::warn;

use crate::error::{QueryError, QueryResult};
use crate::models::Employee;

/// Returns one page of the roster.
///
/// Skips `(page_number - 1) * page_size` employees, then takes up to
/// `page_size`. Requesting a page past the end yields an empty page; a last
/// page with fewer than `page_size` employees left is returned short.
///
/// A non-positive `page_number` is clamped to the first page rather than
/// rejected: the error contract covers `page_size` only, and a negative skip
/// has no meaning for a 1-based sequence.
///
/// # Arguments
///
/// * `employees` - The ordered roster to page through
/// * `page_number` - 1-based page number
/// * `page_size` - Requested page length; must be strictly positive
///
/// # Errors
///
/// Returns [`QueryError::InvalidPageSize`] when `page_size <= 0`, carrying
/// the offending value.
///
/// # Examples
///
/// ```
/// use roster_query::models::{Employee, PositionType};
/// use roster_query::query::paginate;
///
/// let roster: Vec<Employee> = (1..=6)
///     .map(|i| Employee {
///         id: i,
///         name: format!("Name{i}"),
///         rating: 10 + i as i32,
///         position_type: PositionType::Developer,
///     })
///     .collect();
///
/// let page = paginate(&roster, 2, 3).unwrap();
/// assert_eq!(page, roster[3..6].to_vec());
/// ```
pub fn paginate(
    employees: &[Employee],
    page_number: i32,
    page_size: i32,
) -> QueryResult<Vec<Employee>> {
    if page_size <= 0 {
        warn!(page_size, "rejecting pagination request");
        return Err(QueryError::InvalidPageSize { size: page_size });
    }

    let size = page_size as usize;
    let skip = page_number.saturating_sub(1).max(0) as usize * size;

    Ok(employees.iter().skip(skip).take(size).cloned().collect())
}
