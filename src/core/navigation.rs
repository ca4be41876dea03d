//! Navigation bar state machine
//!
//! Two independent axes: the mobile menu (`Closed`/`Open`) and the scroll
//! style (`top`/`scrolled`). The menu is driven by the toggle button and by
//! anchor navigation; the scroll axis follows a [`ScrollMonitor`].

use super::scroll::{NAVBAR_OFFSET, ScrollMonitor, anchor_destination};

/// Mobile menu overlay state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(&self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Accessible label for the toggle button
    pub fn toggle_label(&self) -> &'static str {
        match self {
            MenuState::Closed => "Abrir menu",
            MenuState::Open => "Fechar menu",
        }
    }
}

/// Result of an anchor navigation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationOutcome {
    /// A smooth scroll to this document offset was started
    Scrolled { destination: f64 },
    /// No element with the requested id exists; nothing scrolled
    TargetMissing,
}

/// Plan an anchor navigation from the target's measured rectangle.
///
/// `element_top` is `None` when the target is not in the document.
pub fn plan_navigation(element_top: Option<f64>, body_top: f64) -> NavigationOutcome {
    match element_top {
        Some(top) => NavigationOutcome::Scrolled {
            destination: anchor_destination(top, body_top, NAVBAR_OFFSET),
        },
        None => NavigationOutcome::TargetMissing,
    }
}

/// Combined navbar state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavState {
    menu: MenuState,
    scroll: ScrollMonitor,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.is_scrolled()
    }

    /// Toggle button activated
    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
    }

    /// An anchor link was followed; the overlay never stays open afterwards
    pub fn navigated(&mut self, _outcome: NavigationOutcome) {
        self.menu = MenuState::Closed;
    }

    /// Whether a scroll to `offset` would change the navbar style
    pub fn scroll_would_change(&self, offset: f64) -> bool {
        self.scroll.would_change(offset)
    }

    /// Window scrolled to `offset`; returns true if the style flipped
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        self.scroll.observe(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_closed_top() {
        let state = NavState::new();
        assert_eq!(state.menu(), MenuState::Closed);
        assert!(!state.is_menu_open());
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut state = NavState::new();

        state.toggle_menu();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert!(!state.is_menu_open());

        state.toggle_menu();
        let before = state.menu();
        state.toggle_menu();
        state.toggle_menu();
        assert_eq!(state.menu(), before);
    }

    #[test]
    fn test_navigation_closes_menu_from_any_state() {
        for open in [false, true] {
            let mut state = NavState::new();
            if open {
                state.toggle_menu();
            }
            state.navigated(NavigationOutcome::Scrolled { destination: 420.0 });
            assert!(!state.is_menu_open());
        }
    }

    #[test]
    fn test_navigation_to_missing_target_still_closes_menu() {
        let mut state = NavState::new();
        state.toggle_menu();
        state.navigated(NavigationOutcome::TargetMissing);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_axes_are_independent() {
        let mut state = NavState::new();

        state.toggle_menu();
        assert!(state.observe_scroll(500.0));
        assert!(state.is_menu_open());
        assert!(state.is_scrolled());

        state.toggle_menu();
        assert!(state.is_scrolled());

        assert!(state.observe_scroll(0.0));
        assert!(!state.is_menu_open());
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_toggle_label_follows_state() {
        assert_eq!(MenuState::Closed.toggle_label(), "Abrir menu");
        assert_eq!(MenuState::Open.toggle_label(), "Fechar menu");
    }

    #[test]
    fn test_plan_navigation_existing_target() {
        assert_eq!(
            plan_navigation(Some(1000.0), 0.0),
            NavigationOutcome::Scrolled { destination: 920.0 }
        );
        assert_eq!(
            plan_navigation(Some(250.0), -750.0),
            NavigationOutcome::Scrolled { destination: 920.0 }
        );
    }

    #[test]
    fn test_plan_navigation_missing_target() {
        assert_eq!(plan_navigation(None, -120.0), NavigationOutcome::TargetMissing);
    }
}
