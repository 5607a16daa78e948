//! Client-side completion heuristics for topics.
//!
//! These are hints only; the server stays the sole authority on completion
//! state. Duplicate completion calls are expected and tolerated.

/// Scroll offset (px) still counted as "near the top".
pub const NEAR_TOP_PX: f64 = 50.0;

/// Fraction of the content height that counts as "reached the bottom".
pub const BOTTOM_RATIO: f64 = 0.98;

/// Minimum time a text topic must stay open before it can auto-complete.
pub const TEXT_DWELL_SECS: u64 = 5;

/// Playback seconds after which a video topic counts as watched.
pub const VIDEO_WATCH_SECS: u64 = 5;

/// Two-flag latch for text topics: the reader must be seen near the top of
/// the content before reaching the bottom threshold counts. Once satisfied
/// the latch never resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingLatch {
    saw_top: bool,
    reached_bottom: bool,
}

impl ReadingLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll measurement. Returns whether the latch is now satisfied.
    pub fn observe(&mut self, scroll_top: f64, viewport: f64, content_height: f64) -> bool {
        if scroll_top <= NEAR_TOP_PX {
            self.saw_top = true;
        }
        let progress = (scroll_top + viewport) / content_height.max(1.0);
        if self.saw_top && progress >= BOTTOM_RATIO {
            self.reached_bottom = true;
        }
        self.is_satisfied()
    }

    #[must_use]
    pub fn is_satisfied(self) -> bool {
        self.saw_top && self.reached_bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_before_top_does_not_satisfy() {
        let mut latch = ReadingLatch::new();
        // Landed mid-page and scrolled straight to the end.
        assert!(!latch.observe(900.0, 600.0, 1500.0));
        assert!(!latch.is_satisfied());
    }

    #[test]
    fn top_then_bottom_satisfies() {
        let mut latch = ReadingLatch::new();
        assert!(!latch.observe(0.0, 600.0, 3000.0));
        assert!(!latch.observe(1200.0, 600.0, 3000.0));
        assert!(latch.observe(2400.0, 600.0, 3000.0));
    }

    #[test]
    fn single_screen_content_satisfies_immediately() {
        let mut latch = ReadingLatch::new();
        assert!(latch.observe(0.0, 800.0, 500.0));
    }

    #[test]
    fn latch_does_not_reset_after_satisfaction() {
        let mut latch = ReadingLatch::new();
        latch.observe(0.0, 800.0, 500.0);
        assert!(latch.observe(0.0, 800.0, 10_000.0));
    }
}
