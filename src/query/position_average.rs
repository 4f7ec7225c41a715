//! Per-position rating averages.

use std::collections::HashMap;

use crate::models::{Employee, PositionType};

/// Computes the mean rating for each position present in the roster.
///
/// The result holds one entry per distinct `position_type` that actually
/// occurs in the input; positions with no employees produce no entry. An
/// empty roster yields an empty map.
///
/// # Examples
///
/// ```
/// use roster_query::models::{Employee, PositionType};
/// use roster_query::query::average_rating_by_position;
///
/// let roster = vec![
///     Employee { id: 1, name: "Ivan".to_string(), rating: 40, position_type: PositionType::Developer },
///     Employee { id: 2, name: "Olga".to_string(), rating: 60, position_type: PositionType::Developer },
/// ];
///
/// let averages = average_rating_by_position(&roster);
/// assert_eq!(averages[&PositionType::Developer], 50.0);
/// assert_eq!(averages.len(), 1);
/// ```
pub fn average_rating_by_position(employees: &[Employee]) -> HashMap<PositionType, f64> {
    let mut sums: HashMap<PositionType, (i64, usize)> = HashMap::new();
    for employee in employees {
        let entry = sums.entry(employee.position_type).or_insert((0, 0));
        entry.0 += i64::from(employee.rating);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(position, (sum, count))| (position, sum as f64 / count as f64))
        .collect()
}
