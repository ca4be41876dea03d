//! Scroll position tracking and anchor scroll geometry
//!
//! Browser-independent half of the scroll behavior: the navbar's "scrolled"
//! flag and the destination math for smooth anchor navigation. The UI layer
//! feeds window offsets and element rectangles into these types.

/// Vertical offset (px) past which the navbar switches to its scrolled style
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 20.0;

/// Height (px) of the fixed navbar, subtracted from anchor destinations
pub const NAVBAR_OFFSET: f64 = 80.0;

/// Tracks whether the document has been scrolled past a threshold.
///
/// The state is a pure function of the last observed offset: there is no
/// hysteresis, scrolling back above the threshold clears it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMonitor {
    threshold: f64,
    scrolled: bool,
}

impl ScrollMonitor {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Whether `offset` lies past the threshold
    pub fn is_past(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    /// Whether observing `offset` would flip the current state
    pub fn would_change(&self, offset: f64) -> bool {
        self.is_past(offset) != self.scrolled
    }

    /// Record a new scroll offset
    ///
    /// Returns true if the scrolled state changed.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = self.is_past(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

impl Default for ScrollMonitor {
    fn default() -> Self {
        Self::new(NAVBAR_SCROLL_THRESHOLD)
    }
}

/// Document-relative scroll destination for an anchor target.
///
/// `element_top` and `body_top` are viewport-relative rectangle tops measured
/// at the same instant; their difference is the element's position in the
/// document. The fixed `offset` keeps the section clear of the navbar.
pub fn anchor_destination(element_top: f64, body_top: f64, offset: f64) -> f64 {
    (element_top - body_top) - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_top() {
        let monitor = ScrollMonitor::default();
        assert!(!monitor.is_scrolled());
        assert_eq!(monitor.threshold(), 20.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut monitor = ScrollMonitor::default();

        monitor.observe(20.0);
        assert!(!monitor.is_scrolled());

        monitor.observe(20.5);
        assert!(monitor.is_scrolled());
    }

    #[test]
    fn test_state_matches_offset_at_every_observation() {
        let mut monitor = ScrollMonitor::default();
        let offsets = [0.0, 5.0, 21.0, 500.0, 19.9, 20.0, 1200.0, 0.0, 80.0, -10.0];

        for offset in offsets {
            monitor.observe(offset);
            assert_eq!(monitor.is_scrolled(), offset > 20.0, "offset {offset}");
        }
    }

    #[test]
    fn test_observe_reports_only_transitions() {
        let mut monitor = ScrollMonitor::default();

        assert!(!monitor.observe(10.0));
        assert!(monitor.observe(30.0));
        assert!(!monitor.observe(300.0));
        assert!(monitor.observe(0.0));
        assert!(!monitor.observe(0.0));
    }

    #[test]
    fn test_would_change_does_not_mutate() {
        let monitor = ScrollMonitor::default();

        assert!(monitor.would_change(100.0));
        assert!(!monitor.would_change(10.0));
        assert!(!monitor.is_scrolled());
    }

    #[test]
    fn test_custom_threshold() {
        let mut monitor = ScrollMonitor::new(100.0);
        monitor.observe(50.0);
        assert!(!monitor.is_scrolled());
        monitor.observe(101.0);
        assert!(monitor.is_scrolled());
    }

    #[test]
    fn test_anchor_destination_subtracts_navbar_offset() {
        // Page scrolled by 300px: body top is at -300, element 900px into the document
        let destination = anchor_destination(600.0, -300.0, NAVBAR_OFFSET);
        assert_eq!(destination, 820.0);
    }

    #[test]
    fn test_anchor_destination_at_top_of_page() {
        assert_eq!(anchor_destination(0.0, 0.0, NAVBAR_OFFSET), -80.0);
        assert_eq!(anchor_destination(1500.0, 0.0, 0.0), 1500.0);
    }
}
