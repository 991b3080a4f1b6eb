//! Inefficient vs optimized implementations of common patterns, timed
//! head-to-head.
//!
//! The [`timer`] module runs one slow/fast pair and reports the speedup,
//! [`runner`] strings the fixed trials together, and [`patterns`] holds the
//! pairs themselves.

pub mod config;
pub mod error;
pub mod measurement;
pub mod patterns;
pub mod report;
pub mod runner;
pub mod timer;

pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use measurement::Measurement;
pub use report::Report;
pub use runner::{run_suite, Runner};
pub use timer::{measure, Timer};
