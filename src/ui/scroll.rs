//! Window scroll bindings
//!
//! Connects the navbar state to the window `scroll` event and performs
//! smooth anchor navigation. On the server these are inert: there is no
//! window to listen to and nothing to scroll.

use leptos::prelude::*;

use crate::core::{NavState, NavigationOutcome, SectionId};

/// Keep the navbar's scroll axis in sync with `window.scrollY`.
///
/// The listener is removed when the calling component is torn down. The
/// signal is only written when the offset crosses the threshold.
pub fn track_window_scroll(nav: RwSignal<NavState>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::scroll;

        let sync = move || {
            let offset = window().scroll_y().unwrap_or(0.0);
            if nav.with_untracked(|state| state.scroll_would_change(offset)) {
                nav.update(|state| {
                    state.observe_scroll(offset);
                });
            }
        };

        // A reload may restore the page mid-scroll; sample once after hydration
        request_animation_frame(sync);

        let handle = window_event_listener(scroll, move |_| sync());
        on_cleanup(move || handle.remove());
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
    }
}

/// Smoothly scroll so that `section` sits just below the fixed navbar.
///
/// Missing targets are not an error: nothing scrolls and
/// [`NavigationOutcome::TargetMissing`] is returned.
pub fn scroll_to_section(section: SectionId) -> NavigationOutcome {
    #[cfg(feature = "hydrate")]
    {
        use crate::core::plan_navigation;

        let document = document();
        let element_top = document
            .get_element_by_id(section.as_str())
            .map(|element| element.get_bounding_client_rect().top());
        let body_top = document
            .body()
            .map(|body| body.get_bounding_client_rect().top())
            .unwrap_or(0.0);

        let outcome = plan_navigation(element_top, body_top);
        match outcome {
            NavigationOutcome::Scrolled { destination } => smooth_scroll_to(destination),
            NavigationOutcome::TargetMissing => {
                leptos::logging::debug_warn!("no element with id #{section} to scroll to");
            }
        }
        outcome
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
        NavigationOutcome::TargetMissing
    }
}

/// Smoothly scroll back to the top of the page
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    smooth_scroll_to(0.0);
}

#[cfg(feature = "hydrate")]
fn smooth_scroll_to(top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
