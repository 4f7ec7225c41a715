//! Roster-wide rating average.

use crate::models::Employee;

/// Computes the arithmetic mean rating over all employees.
///
/// Duplicates are NOT removed: every element of the input contributes to the
/// mean. An empty roster yields `0.0` as a neutral default rather than an
/// error.
///
/// # Examples
///
/// ```
/// use roster_query::models::{Employee, PositionType};
/// use roster_query::query::average_rating;
///
/// let roster = vec![
///     Employee { id: 1, name: "Ivan".to_string(), rating: 40, position_type: PositionType::Developer },
///     Employee { id: 2, name: "Olga".to_string(), rating: 60, position_type: PositionType::Analyst },
/// ];
/// assert_eq!(average_rating(&roster), 50.0);
/// assert_eq!(average_rating(&[]), 0.0);
/// ```
pub fn average_rating(employees: &[Employee]) -> f64 {
    if employees.is_empty() {
        return 0.0;
    }
    let sum: i64 = employees.iter().map(|employee| i64::from(employee.rating)).sum();
    sum as f64 / employees.len() as f64
}
