//! Core data models for the roster query engine.
//!
//! The engine never constructs, mutates, or deletes these values; callers
//! supply fully built collections and the engine borrows them read-only.

mod employee;

pub use employee::{Employee, PositionType};
