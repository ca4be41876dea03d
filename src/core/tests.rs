#[cfg(test)]
mod tests {
    use crate::core::{
        BENEFITS, LatchEvent, NavState, NavigationOutcome, ObserverOptions,
        VisibilityLatch, benefit_card_options, plan_navigation,
    };

    /// Page state as the browser would drive it: navbar plus one latch per benefit card
    struct PageModel {
        nav: NavState,
        benefits: Vec<VisibilityLatch>,
    }

    impl PageModel {
        fn load() -> Self {
            Self {
                nav: NavState::new(),
                benefits: vec![VisibilityLatch::new(); BENEFITS.len()],
            }
        }

        fn scroll_to(&mut self, offset: f64) {
            self.nav.observe_scroll(offset);
        }

        fn card_intersects(&mut self, index: usize) -> LatchEvent {
            self.benefits[index].observe(true)
        }

        fn entered(&self) -> Vec<bool> {
            self.benefits.iter().map(|l| l.has_entered()).collect()
        }
    }

    #[test]
    fn test_initial_load_state() {
        let page = PageModel::load();

        assert!(!page.nav.is_scrolled());
        assert!(!page.nav.is_menu_open());
        assert_eq!(page.entered(), vec![false; 5]);
    }

    #[test]
    fn test_scroll_then_third_card_enters_view() {
        let mut page = PageModel::load();

        page.scroll_to(500.0);
        assert!(page.nav.is_scrolled());

        assert_eq!(page.card_intersects(2), LatchEvent::Entered);
        assert_eq!(page.entered(), vec![false, false, true, false, false]);

        // Scrolling away never resets the card
        page.scroll_to(0.0);
        page.benefits[2].observe(false);
        assert!(!page.nav.is_scrolled());
        assert_eq!(page.entered(), vec![false, false, true, false, false]);
    }

    #[test]
    fn test_mobile_navigation_round_trip() {
        let mut page = PageModel::load();

        page.nav.toggle_menu();
        assert!(page.nav.is_menu_open());

        // Recruitment section sits 3200px into the document, page scrolled by 1000px
        let outcome = plan_navigation(Some(2200.0), -1000.0);
        assert_eq!(outcome, NavigationOutcome::Scrolled { destination: 3120.0 });

        page.nav.navigated(outcome);
        assert!(!page.nav.is_menu_open());
    }

    #[test]
    fn test_navigation_to_unknown_section_is_inert() {
        assert_eq!(plan_navigation(None, 0.0), NavigationOutcome::TargetMissing);
    }

    #[test]
    fn test_benefit_cards_use_low_threshold() {
        assert_eq!(benefit_card_options().threshold, 0.1);
        assert_eq!(ObserverOptions::default().threshold, 0.0);
    }
}
