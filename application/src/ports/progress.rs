//! Progress notification port
//!
//! Defines the interface for reporting progress during a training-data
//! reconciliation run.

use reviewng_domain::EditId;

/// Callbacks during reconciliation.
///
/// Implementations live in the presentation layer. All methods default to
/// no-ops, so implement only what you need.
pub trait ReconcileProgressNotifier: Send + Sync {
    /// Called once the set of edits missing training data is known
    fn on_fetch_start(&self, _missing: usize) {}

    /// Called after each fetch attempt
    fn on_edit_complete(&self, _edit: EditId, _success: bool) {}

    /// Called when the run finishes
    fn on_complete(&self, _fetched: usize, _failed: usize) {}
}

/// No-op progress notifier
pub struct NoReconcileProgress;

impl ReconcileProgressNotifier for NoReconcileProgress {}
