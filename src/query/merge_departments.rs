//! Multi-department merge with descending rating sort.
//!
//! One employee can be listed in several departments at once, so the merged
//! roster must be deduplicated by value equality before sorting.

use std::collections::HashSet;

use tracing::debug;

use crate::models::Employee;

/// Flattens department rosters into one deduplicated list sorted by rating,
/// highest first.
///
/// Groups are flattened in order (first group first, within-group order
/// preserved); value-duplicates are dropped keeping the first occurrence.
/// The sort is stable, so employees with equal ratings keep their flattened
/// pre-sort order.
///
/// # Arguments
///
/// * `groups` - One roster per department; the same employee value may
///   appear in several of them
///
/// # Examples
///
/// ```
/// use roster_query::models::{Employee, PositionType};
/// use roster_query::query::merge_distinct_sorted;
///
/// let ivan = Employee {
///     id: 1,
///     name: "Ivan".to_string(),
///     rating: 72,
///     position_type: PositionType::Developer,
/// };
/// let olga = Employee {
///     id: 2,
///     name: "Olga".to_string(),
///     rating: 90,
///     position_type: PositionType::Manager,
/// };
///
/// // Ivan is listed in both departments.
/// let merged = merge_distinct_sorted(&[vec![ivan.clone()], vec![ivan.clone(), olga.clone()]]);
/// assert_eq!(merged, vec![olga, ivan]);
/// ```
pub fn merge_distinct_sorted(groups: &[Vec<Employee>]) -> Vec<Employee> {
    let mut seen = HashSet::new();
    let mut merged: Vec<Employee> = groups
        .iter()
        .flatten()
        .filter(|employee| seen.insert(*employee))
        .cloned()
        .collect();

    debug!(
        groups = groups.len(),
        unique = merged.len(),
        "merged department rosters"
    );

    merged.sort_by(|a, b| b.rating.cmp(&a.rating));
    merged
}
