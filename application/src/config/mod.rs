//! Application-level configuration.
//!
//! - [`ReconcileParams`] - fetch timeout and concurrency for reconciliation
//! - [`ImportParams`] - target group and threshold for imported reports

pub mod review_params;

pub use review_params::{ImportParams, ReconcileParams};
