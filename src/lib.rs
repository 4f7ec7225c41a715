//! Read-only query engine over in-memory employee rosters.
//!
//! This crate provides ten fixed queries over caller-supplied collections of
//! [`models::Employee`] records: deduplicated filtering, formatted projection,
//! averaging, multi-department merge with descending sort, pagination,
//! delimited name joining, duplicate-name detection, grouped averaging by
//! position, and boolean efficiency partitioning.
//!
//! All operations are pure: they borrow their inputs read-only, return owned
//! results, and share no state between calls.

#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod query;
