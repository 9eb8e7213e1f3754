// SPDX-License-Identifier: MPL-2.0
//! Request generations for discarding stale responses.
//!
//! Every fetch a screen issues is tagged with a fresh [`Generation`]. When
//! the response arrives, only the one carrying the latest generation is
//! applied; anything older belongs to a request that was superseded (page
//! changed again, filters changed, user retried) and is dropped.

/// Tag attached to one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerationTracker {
    latest: u64,
}

impl GenerationTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier one.
    pub fn next(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    /// Returns `true` if `generation` belongs to the most recent request.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }

    /// Like [`Self::is_current`], logging the discarded response otherwise.
    #[must_use]
    pub fn accept(&self, generation: Generation, what: &'static str) -> bool {
        let current = self.is_current(generation);
        if !current {
            tracing::debug!(
                what,
                stale = generation.0,
                latest = self.latest,
                "discarding stale response"
            );
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_generation_is_current() {
        let mut tracker = GenerationTracker::new();
        let first = tracker.next();
        let second = tracker.next();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn accept_rejects_superseded_request() {
        let mut tracker = GenerationTracker::new();
        let stale = tracker.next();
        let _fresh = tracker.next();

        assert!(!tracker.accept(stale, "cards"));
    }

    #[test]
    fn fresh_tracker_has_no_current_request() {
        let mut other = GenerationTracker::new();
        let foreign = other.next();
        let tracker = GenerationTracker::new();
        assert!(!tracker.is_current(foreign));
    }
}
