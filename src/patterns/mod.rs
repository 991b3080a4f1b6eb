//! Slow/fast pairs of common patterns.
//!
//! Every module exposes `inefficient` and `optimized` with the same signature
//! and the same result for the same input, so the timer can compare them
//! directly.

pub mod dictionary_access;
pub mod file_writes;
pub mod filtering;
pub mod insertion;
pub mod lookups;
pub mod membership;
pub mod nested_loops;
pub mod string_building;
