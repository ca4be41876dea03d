//! Viewport visibility tracking for entrance animations
//!
//! `use_element_in_view` hands out a node reference and a [`RevealState`]
//! signal. Once the referenced element has been seen intersecting the
//! viewport the state stays `Entered` and the element is no longer observed.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{ObserverOptions, RevealState};

/// Track whether the element bound to the returned `NodeRef` has entered the
/// viewport.
///
/// One `IntersectionObserver` is created per mounted element and disconnected
/// when the owning component is cleaned up. The state only becomes `Armed`
/// once that observer is live; if the element is never mounted, or the
/// observer API is unavailable, it stays `Static`.
pub fn use_element_in_view(options: ObserverOptions) -> (NodeRef<Div>, ReadSignal<RevealState>) {
    let node_ref = NodeRef::<Div>::new();
    let (state, set_state) = signal(RevealState::Static);

    #[cfg(feature = "hydrate")]
    {
        let subscription = StoredValue::new_local(None::<Subscription>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };

            subscription.update_value(|slot| {
                if let Some(previous) = slot.take() {
                    previous.release();
                }
            });

            if state.get_untracked().has_entered() {
                return;
            }

            match Subscription::observe(&element, options, set_state) {
                Ok(active) => {
                    subscription.set_value(Some(active));
                    set_state.update(|current| *current = current.armed());
                }
                Err(err) => {
                    leptos::logging::debug_warn!("IntersectionObserver unavailable: {err:?}");
                }
            }
        });

        on_cleanup(move || {
            subscription.try_update_value(|slot| {
                if let Some(active) = slot.take() {
                    active.release();
                }
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (options, set_state);
    }

    (node_ref, state)
}

#[cfg(feature = "hydrate")]
type EntriesCallback = wasm_bindgen::closure::Closure<
    dyn FnMut(js_sys::Array, web_sys::IntersectionObserver),
>;

/// A live observer and the JS callback it calls into
#[cfg(feature = "hydrate")]
struct Subscription {
    observer: web_sys::IntersectionObserver,
    _callback: EntriesCallback,
}

#[cfg(feature = "hydrate")]
impl Subscription {
    fn observe(
        element: &web_sys::Element,
        options: ObserverOptions,
        set_state: WriteSignal<RevealState>,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        use crate::core::{LatchEvent, VisibilityLatch};
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let mut latch = VisibilityLatch::new();
        let callback = EntriesCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if latch.observe(entry.is_intersecting()) == LatchEvent::Entered {
                        observer.unobserve(&entry.target());
                        set_state.set(RevealState::Entered);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn release(self) {
        self.observer.disconnect();
    }
}
