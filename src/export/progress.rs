//! Progress tracking for bulk exports
//!
//! Shows which collection is being read and how many are done while all
//! collections of a database are accumulated.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress tracker for exporting all collections
pub struct ProgressTracker {
    /// Progress bar (optional, can be disabled)
    bar: Option<ProgressBar>,
}

impl ProgressTracker {
    /// Create a new progress tracker
    ///
    /// # Arguments
    /// * `total` - Number of collections to export
    /// * `enable_bar` - Whether to display a progress bar
    pub fn new(total: u64, enable_bar: bool) -> Self {
        let bar = enable_bar.then(|| {
            let bar = ProgressBar::new(total);
            if let Ok(style) =
                ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                bar.set_style(style.progress_chars("#>-"));
            }
            bar
        });

        Self { bar }
    }

    /// Announce the collection currently being read
    pub fn start_collection(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
        }
    }

    /// Mark one collection as done
    pub fn finish_collection(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Finish and clear the progress bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    /// Position of the bar, if one is shown
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(|bar| bar.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_tracker_has_no_bar() {
        let tracker = ProgressTracker::new(3, false);
        tracker.start_collection("orders");
        tracker.finish_collection();
        tracker.finish();
        assert_eq!(tracker.position(), None);
    }

    #[test]
    fn test_enabled_tracker_counts_collections() {
        let tracker = ProgressTracker::new(2, true);
        tracker.start_collection("orders");
        tracker.finish_collection();
        tracker.start_collection("users");
        tracker.finish_collection();
        assert_eq!(tracker.position(), Some(2));
        tracker.finish();
    }
}
