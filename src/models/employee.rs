//! Employee model and related types.
//!
//! This module defines the Employee struct and PositionType enum used by all
//! queries. Equality and hashing are derived field-wise: two employees are
//! equal if and only if every attribute matches. That value-equality contract
//! is what every deduplicating query keys on.

use serde::{Deserialize, Serialize};

use crate::query::EFFICIENCY_RATING_THRESHOLD;

/// Represents the job category of an employee.
///
/// The exact variants only matter to the engine as grouping keys; the set is
/// closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionType {
    /// People management positions.
    Manager,
    /// Business and data analysis positions.
    Analyst,
    /// Software development positions.
    Developer,
    /// Quality assurance positions.
    Tester,
}

impl std::fmt::Display for PositionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionType::Manager => write!(f, "Manager"),
            PositionType::Analyst => write!(f, "Analyst"),
            PositionType::Developer => write!(f, "Developer"),
            PositionType::Tester => write!(f, "Tester"),
        }
    }
}

/// Represents an employee record in a roster.
///
/// Immutable value entity: the engine only ever reads it. Derived `Eq` and
/// `Hash` cover all fields, so a set keyed by `Employee` reproduces the
/// deduplication semantics of the queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: u32,
    /// The employee's display name.
    pub name: String,
    /// Integer performance score.
    pub rating: i32,
    /// The employee's job category.
    pub position_type: PositionType,
}

impl Employee {
    /// Returns true if the employee counts as efficient.
    ///
    /// An employee is efficient when their rating is strictly greater than
    /// [`EFFICIENCY_RATING_THRESHOLD`].
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_query::models::{Employee, PositionType};
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     name: "Ivan".to_string(),
    ///     rating: 72,
    ///     position_type: PositionType::Developer,
    /// };
    /// assert!(employee.is_efficient());
    /// ```
    pub fn is_efficient(&self) -> bool {
        self.rating > EFFICIENCY_RATING_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn create_test_employee(rating: i32) -> Employee {
        Employee {
            id: 1,
            name: "Ivan".to_string(),
            rating,
            position_type: PositionType::Developer,
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": 7,
            "name": "Olga",
            "rating": 64,
            "position_type": "analyst"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 7);
        assert_eq!(employee.name, "Olga");
        assert_eq!(employee.rating, 64);
        assert_eq!(employee.position_type, PositionType::Analyst);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee(55);
        let json = serde_json::to_string(&employee).unwrap();

        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_position_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PositionType::Manager).unwrap(),
            "\"manager\""
        );
        assert_eq!(
            serde_json::to_string(&PositionType::Tester).unwrap(),
            "\"tester\""
        );
    }

    #[test]
    fn test_position_type_display() {
        assert_eq!(PositionType::Developer.to_string(), "Developer");
        assert_eq!(PositionType::Analyst.to_string(), "Analyst");
    }

    #[test]
    fn test_value_equality_over_all_fields() {
        let a = create_test_employee(55);
        let b = create_test_employee(55);
        assert_eq!(a, b);

        let mut c = create_test_employee(55);
        c.rating = 56;
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_set_deduplicates_by_value() {
        let set: HashSet<Employee> = [
            create_test_employee(55),
            create_test_employee(55),
            create_test_employee(40),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_is_efficient_above_threshold() {
        assert!(create_test_employee(51).is_efficient());
    }

    #[test]
    fn test_is_efficient_at_threshold_is_false() {
        assert!(!create_test_employee(50).is_efficient());
    }

    #[test]
    fn test_is_efficient_below_threshold_is_false() {
        assert!(!create_test_employee(12).is_efficient());
    }
}
