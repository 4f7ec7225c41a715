//! Boolean efficiency partitioning.
//!
//! An employee is efficient when their rating is strictly greater than
//! [`EFFICIENCY_RATING_THRESHOLD`]. Both queries here partition the roster on
//! that predicate under standard grouping semantics: a key appears in the
//! result iff its partition is non-empty, never as an explicit zero or empty
//! entry.

use std::collections::HashMap;

use tracing::debug;

use crate::models::Employee;

/// Rating above which an employee counts as efficient.
pub const EFFICIENCY_RATING_THRESHOLD: i32 = 50;

/// Counts employees on each side of the efficiency partition.
///
/// Key `true` maps to the number of efficient employees (`rating > 50`),
/// key `false` to the rest. A key is present only when its partition is
/// non-empty, so an empty roster yields an empty map and an all-efficient
/// roster has no `false` entry.
///
/// # Examples
///
/// ```
/// use roster_query::models::{Employee, PositionType};
/// use roster_query::query::count_by_efficiency;
///
/// let roster = vec![
///     Employee { id: 1, name: "Ivan".to_string(), rating: 72, position_type: PositionType::Developer },
///     Employee { id: 2, name: "Olga".to_string(), rating: 34, position_type: PositionType::Analyst },
/// ];
///
/// let counts = count_by_efficiency(&roster);
/// assert_eq!(counts[&true], 1);
/// assert_eq!(counts[&false], 1);
/// ```
pub fn count_by_efficiency(employees: &[Employee]) -> HashMap<bool, usize> {
    let mut counts = HashMap::new();
    for employee in employees {
        *counts.entry(employee.is_efficient()).or_insert(0) += 1;
    }

    debug!(partitions = counts.len(), total = employees.len(), "partitioned roster");
    counts
}

/// Joins the names on each side of the efficiency partition.
///
/// Same partition as [`count_by_efficiency`]; each value is that partition's
/// names in roster order, joined with `", "` (no brackets and no fallback
/// text). Empty partitions produce no key.
///
/// # Examples
///
/// ```
/// use roster_query::models::{Employee, PositionType};
/// use roster_query::query::names_by_efficiency;
///
/// let roster = vec![
///     Employee { id: 1, name: "Ivan".to_string(), rating: 72, position_type: PositionType::Developer },
///     Employee { id: 2, name: "Olga".to_string(), rating: 34, position_type: PositionType::Analyst },
/// ];
///
/// let names = names_by_efficiency(&roster);
/// assert_eq!(names[&true], "Ivan");
/// assert_eq!(names[&false], "Olga");
/// ```
pub fn names_by_efficiency(employees: &[Employee]) -> HashMap<bool, String> {
    let mut groups: HashMap<bool, Vec<&str>> = HashMap::new();
    for employee in employees {
        groups
            .entry(employee.is_efficient())
            .or_default()
            .push(employee.name.as_str());
    }

    groups
        .into_iter()
        .map(|(efficient, names)| (efficient, names.join(", ")))
        .collect()
}
