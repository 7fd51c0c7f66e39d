//! Hint banner visibility with its single auto-hide timer.
//!
//! The banner is visible exactly while a hide deadline is pending and not yet
//! reached. Showing it again while the deadline is pending keeps the original
//! deadline, so the banner never stays up longer than one duration after it
//! first appeared. A deadline that has passed counts as fired even if
//! `fire_due` has not been called yet.

use std::time::{Duration, Instant};

pub const DEFAULT_HINT_BANNER_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
pub struct HintBanner {
    duration: Duration,
    hide_at: Option<Instant>,
}

impl Default for HintBanner {
    fn default() -> Self {
        Self::new(DEFAULT_HINT_BANNER_DURATION)
    }
}

impl HintBanner {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            hide_at: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.hide_at.is_some_and(|deadline| now < deadline)
    }

    /// Makes the banner visible and arms the hide timer.
    /// Returns `false` when it was already visible; the pending deadline is left untouched.
    pub fn show(&mut self, now: Instant) -> bool {
        if self.is_visible_at(now) {
            return false;
        }
        self.hide_at = Some(now + self.duration);
        true
    }

    /// Fires the hide timer if its deadline has passed. Returns whether the banner was hidden.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.hide_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
