//! Progress reporting for training-data reconciliation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reviewng_application::ReconcileProgressNotifier;
use reviewng_domain::EditId;
use std::sync::Mutex;

/// Reports reconciliation progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn fetch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconcileProgressNotifier for ProgressReporter {
    fn on_fetch_start(&self, missing: usize) {
        let pb = ProgressBar::new(missing as u64);
        pb.set_style(Self::fetch_style());
        pb.set_prefix("Training data");
        pb.set_message("Starting...");

        *self.bar.lock().unwrap_or_else(|e| e.into_inner()) = Some(pb);
    }

    fn on_edit_complete(&self, edit: EditId, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), edit)
            } else {
                format!("{} {}", "x".red(), edit)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_complete(&self, fetched: usize, failed: usize) {
        if let Some(pb) = self.bar.lock().unwrap_or_else(|e| e.into_inner()).take() {
            let message = if failed == 0 {
                format!("{} fetched", fetched).green()
            } else {
                format!("{} fetched, {} failed", fetched, failed).yellow()
            };
            pb.finish_with_message(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_fetch_start(2);
        reporter.on_edit_complete(EditId::new(1), true);
        reporter.on_edit_complete(EditId::new(2), false);
        {
            let bar = reporter.bar.lock().unwrap();
            assert_eq!(bar.as_ref().unwrap().position(), 2);
        }
        reporter.on_complete(1, 1);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_events_without_start_are_ignored() {
        let reporter = ProgressReporter::new();
        reporter.on_edit_complete(EditId::new(1), true);
        reporter.on_complete(0, 0);
        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
