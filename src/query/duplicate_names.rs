//! Duplicate name detection.

use std::collections::HashSet;

use crate::models::Employee;

/// Returns true if at least one name value occurs more than once.
///
/// Only the `name` field matters: two distinct employees sharing a name count
/// as a duplicate. The scan stops at the first repeated name; the result is
/// order-independent. An empty or fully-name-unique roster yields `false`.
///
/// # Examples
///
/// ```
/// use roster_query::models::{Employee, PositionType};
/// use roster_query::query::has_duplicate_names;
///
/// let roster = vec![
///     Employee { id: 1, name: "Ivan".to_string(), rating: 72, position_type: PositionType::Developer },
///     Employee { id: 2, name: "Ivan".to_string(), rating: 34, position_type: PositionType::Tester },
/// ];
/// assert!(has_duplicate_names(&roster));
/// ```
pub fn has_duplicate_names(employees: &[Employee]) -> bool {
    let mut seen = HashSet::new();
    employees
        .iter()
        .any(|employee| !seen.insert(employee.name.as_str()))
}
