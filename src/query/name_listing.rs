//! Bracketed name listing.

use crate::models::Employee;

/// Joins all employee names into one bracketed string.
///
/// Names are taken in roster order, without deduplication, separated by
/// `", "` and wrapped in `[` and `]`. An empty roster produces the literal
/// fallback text `"empty list"`, which is still wrapped: `"[empty list]"`.
///
/// # Examples
///
/// ```
/// use roster_query::models::{Employee, PositionType};
/// use roster_query::query::join_names;
///
/// let roster: Vec<Employee> = ["Ivan", "Olga", "John"]
///     .iter()
///     .enumerate()
///     .map(|(i, name)| Employee {
///         id: i as u32 + 1,
///         name: name.to_string(),
///         rating: 50,
///         position_type: PositionType::Developer,
///     })
///     .collect();
///
/// assert_eq!(join_names(&roster), "[Ivan, Olga, John]");
/// assert_eq!(join_names(&[]), "[empty list]");
/// ```
pub fn join_names(employees: &[Employee]) -> String {
    let joined = if employees.is_empty() {
        "empty list".to_string()
    } else {
        employees
            .iter()
            .map(|employee| employee.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("[{joined}]")
}
