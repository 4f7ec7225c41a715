//! Deduplicated rating filters.
//!
//! Rosters handed to the engine may contain value-duplicate entries (the same
//! employee listed twice). Both filters here first drop duplicates, keeping
//! the first occurrence and preserving relative order, then apply a rating
//! threshold.

use std::collections::HashSet;

use crate::models::Employee;

/// Returns the deduplicated employees whose rating is strictly above the
/// threshold.
///
/// Value-duplicates are removed first (first occurrence wins, input order is
/// preserved), then the rating filter is applied.
///
/// # Arguments
///
/// * `employees` - The roster to filter, possibly containing duplicates
/// * `min_rating_exclusive` - Employees must have `rating` strictly greater
///   than this to survive
///
/// # Examples
///
/// ```
/// use roster_query::models::{Employee, PositionType};
/// use roster_query::query::distinct_above_rating;
///
/// let ivan = Employee {
///     id: 1,
///     name: "Ivan".to_string(),
///     rating: 72,
///     position_type: PositionType::Developer,
/// };
/// let roster = vec![ivan.clone(), ivan.clone()];
///
/// let result = distinct_above_rating(&roster, 50);
/// assert_eq!(result, vec![ivan]);
/// ```
pub fn distinct_above_rating(employees: &[Employee], min_rating_exclusive: i32) -> Vec<Employee> {
    let mut seen = HashSet::new();
    employees
        .iter()
        .filter(|employee| seen.insert(*employee))
        .filter(|employee| employee.rating > min_rating_exclusive)
        .cloned()
        .collect()
}

/// Returns `"<name>=<rating>"` lines for the deduplicated employees whose
/// rating is strictly below the threshold.
///
/// Same deduplication rule as [`distinct_above_rating`]; the surviving
/// employees are projected to formatted strings in filtered order.
///
/// # Arguments
///
/// * `employees` - The roster to filter, possibly containing duplicates
/// * `max_rating_exclusive` - Employees must have `rating` strictly less
///   than this to survive
///
/// # Examples
///
/// ```
/// use roster_query::models::{Employee, PositionType};
/// use roster_query::query::distinct_below_rating_formatted;
///
/// let olga = Employee {
///     id: 2,
///     name: "Olga".to_string(),
///     rating: 34,
///     position_type: PositionType::Analyst,
/// };
///
/// let result = distinct_below_rating_formatted(&[olga], 50);
/// assert_eq!(result, vec!["Olga=34".to_string()]);
/// ```
pub fn distinct_below_rating_formatted(
    employees: &[Employee],
    max_rating_exclusive: i32,
) -> Vec<String> {
    let mut seen = HashSet::new();
    employees
        .iter()
        .filter(|employee| seen.insert(*employee))
        .filter(|employee| employee.rating < max_rating_exclusive)
        .map(|employee| format!("{}={}", employee.name, employee.rating))
        .collect()
}
