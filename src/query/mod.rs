//! Query operations for the roster query engine.
//!
//! This module contains the ten fixed queries: deduplicated rating filters,
//! roster-wide averaging, multi-department merge with descending sort,
//! pagination, delimited name joining, duplicate-name detection, per-position
//! averaging, and boolean efficiency partitioning.
//!
//! Every function here is pure: inputs are borrowed read-only, outputs are
//! owned, and any tracking structure (a seen-set during deduplication, say)
//! is local to one call.

mod average_rating;
mod distinct_filter;
mod duplicate_names;
mod efficiency_partition;
mod merge_departments;
mod name_listing;
mod pagination;
mod position_average;

pub use average_rating::average_rating;
pub use distinct_filter::{distinct_above_rating, distinct_below_rating_formatted};
pub use duplicate_names::has_duplicate_names;
pub use efficiency_partition::{
    count_by_efficiency, names_by_efficiency, EFFICIENCY_RATING_THRESHOLD,
};
pub use merge_departments::merge_distinct_sorted;
pub use name_listing::join_names;
pub use pagination::paginate;
pub use position_average::average_rating_by_position;
