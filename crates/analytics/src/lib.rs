//! # Financial Analytics
//!
//! The calculation core: profit metrics for a single period, compound-growth
//! revenue forecasts, and aggregate summaries over a set of period records.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** This crate has no knowledge of storage, configuration, or
//!   presentation. It depends only on `core-types`.
//! - **Stateless Calculation:** Every entry point is a free function from inputs to
//!   a value record. Nothing is mutated in place and nothing is cached, so calls
//!   are independent and may run concurrently.
//!
//! ## Public API
//!
//! - `compute_metrics` / `build_record`: derive variable costs, gross and net profit, and margin.
//! - `generate_forecast`: project revenue and metrics over a horizon.
//! - `summarize`: totals, averages and the best period across records.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

pub mod error;
pub mod forecast;
pub mod metrics;
pub mod summary;

pub use error::AnalyticsError;
pub use forecast::generate_forecast;
pub use metrics::{build_record, compute_metrics};
pub use summary::{summarize, PeriodSummary};
