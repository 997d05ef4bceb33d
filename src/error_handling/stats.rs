//! Analysis statistics tracking.
//!
//! Counts notable events over a run (successes, failures, fallbacks, skipped
//! structured data) so the binary can log a summary at the end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::AnalysisEvent;

/// Per-run event counters.
///
/// All event kinds are initialized to zero on creation. Counters are atomic so
/// the tracker can be shared behind an `&` reference from async code.
pub struct AnalysisStats {
    counts: HashMap<AnalysisEvent, AtomicUsize>,
}

impl AnalysisStats {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for event in AnalysisEvent::iter() {
            counts.insert(event, AtomicUsize::new(0));
        }
        AnalysisStats { counts }
    }

    /// Increment an event counter.
    pub fn increment(&self, event: AnalysisEvent) {
        self.add(event, 1);
    }

    /// Add `amount` to an event counter.
    pub fn add(&self, event: AnalysisEvent, amount: usize) {
        if let Some(counter) = self.counts.get(&event) {
            counter.fetch_add(amount, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in AnalysisStats initialization.",
                event
            );
        }
    }

    /// Get the count for an event.
    pub fn get(&self, event: AnalysisEvent) -> usize {
        self.counts
            .get(&event)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Logs every non-zero counter at info level.
    pub fn log_summary(&self) {
        for event in AnalysisEvent::iter() {
            let count = self.get(event);
            if count > 0 {
                log::info!("{}: {}", event, count);
            }
        }
    }
}

impl Default for AnalysisStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_initialized_to_zero() {
        let stats = AnalysisStats::new();
        for event in AnalysisEvent::iter() {
            assert_eq!(stats.get(event), 0);
        }
    }

    #[test]
    fn test_stats_increment_and_add() {
        let stats = AnalysisStats::new();
        stats.increment(AnalysisEvent::AnalysisSucceeded);
        stats.increment(AnalysisEvent::AnalysisSucceeded);
        stats.add(AnalysisEvent::InvalidStructuredData, 3);
        assert_eq!(stats.get(AnalysisEvent::AnalysisSucceeded), 2);
        assert_eq!(stats.get(AnalysisEvent::InvalidStructuredData), 3);
        assert_eq!(stats.get(AnalysisEvent::AnalysisFailed), 0);
    }
}
