//! Fixed navigation bar
//!
//! Desktop: inline anchor links plus the form CTA. Mobile: a toggle button
//! that opens a full-screen overlay with the same links. The bar gains a
//! solid background once the page is scrolled past the threshold.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::{BRAND_NAME, FORM_LINK, IconKind, NAV_LINKS, NavState, SectionId};
use crate::ui::common::{ExternalLink, LinkSize, LinkVariant};
use crate::ui::icon::Icon;
use crate::ui::scroll::{scroll_to_section, scroll_to_top, track_window_scroll};

const BAR_TOP: &str = "fixed w-full z-50 transition-all duration-500 bg-transparent py-6";
const BAR_SCROLLED: &str = "fixed w-full z-50 transition-all duration-500 bg-black/95 backdrop-blur-xl py-3 border-b border-yellow-400/20";

fn bar_class(scrolled: bool) -> &'static str {
    if scrolled { BAR_SCROLLED } else { BAR_TOP }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::new());
    track_window_scroll(nav);

    view! { <NavbarView nav=nav /> }
}

#[component]
fn NavbarView(nav: RwSignal<NavState>) -> impl IntoView {
    let is_scrolled = Memo::new(move |_| nav.with(|state| state.is_scrolled()));
    let menu = Memo::new(move |_| nav.with(|state| state.menu()));

    // Anchors keep their href so the page still jumps natively before hydration
    let follow = move |ev: MouseEvent, section: SectionId| {
        ev.prevent_default();
        let outcome = scroll_to_section(section);
        nav.update(|state| state.navigated(outcome));
    };

    view! {
        <nav class=move || bar_class(is_scrolled.get()) aria-label="Navegação principal">
            <div class="container mx-auto px-6 flex justify-between items-center">
                <div
                    class="flex items-center space-x-3 group cursor-pointer"
                    on:click=move |_| scroll_to_top()
                >
                    <div class="bg-yellow-400 p-1.5 rounded-lg group-hover:scale-110 transition-transform duration-300">
                        <Icon kind=IconKind::Terminal size=20 class="text-black" />
                    </div>
                    <span class="text-2xl font-black tracking-tighter text-white uppercase italic text-shadow">
                        {BRAND_NAME}
                    </span>
                </div>

                // Desktop navigation
                <div class="hidden md:flex space-x-8 items-center">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let section = link.target;
                            view! {
                                <a
                                    href=section.href()
                                    on:click=move |ev| follow(ev, section)
                                    class="text-[10px] font-black text-gray-400 hover:text-yellow-400 transition-colors uppercase tracking-[0.2em]"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ExternalLink href=FORM_LINK variant=LinkVariant::Compact size=LinkSize::Small>
                        "QUERO PARTICIPAR"
                    </ExternalLink>
                </div>

                // Mobile menu button
                <button
                    on:click=move |_| nav.update(NavState::toggle_menu)
                    aria-label=move || menu.get().toggle_label()
                    aria-expanded=move || menu.get().is_open().to_string()
                    class="md:hidden text-white p-2"
                >
                    {move || {
                        if menu.get().is_open() {
                            view! { <Icon kind=IconKind::X size=28 /> }.into_any()
                        } else {
                            view! { <Icon kind=IconKind::Menu size=28 /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile overlay
            <Show when=move || menu.get().is_open()>
                <div class="md:hidden fixed inset-0 top-0 h-screen bg-black z-40 py-24 px-8 flex flex-col space-y-6">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let section = link.target;
                            view! {
                                <a
                                    href=section.href()
                                    on:click=move |ev| follow(ev, section)
                                    class="text-5xl font-black border-l-8 border-transparent pl-4 hover:border-yellow-400 transition-all uppercase italic"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_renders_closed_at_top() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Navbar /> }.to_html());

        assert!(html.contains(BAR_TOP));
        assert!(html.contains(r#"aria-label="Abrir menu""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        // Overlay is not rendered while closed
        assert!(!html.contains("h-screen bg-black"));
    }

    #[test]
    fn test_navbar_links_point_at_sections() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Navbar /> }.to_html());

        let positions: Vec<usize> = SectionId::ALL
            .iter()
            .map(|section| {
                html.find(&format!(r##"href="{}""##, section.href()))
                    .unwrap_or_else(|| panic!("missing link to {section}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_bar_class_follows_scroll_state() {
        assert_eq!(bar_class(false), BAR_TOP);
        assert_eq!(bar_class(true), BAR_SCROLLED);
        assert!(bar_class(true).contains("bg-black/95"));
    }

    #[test]
    fn test_navbar_renders_scrolled_with_menu_open() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let mut state = NavState::new();
            state.observe_scroll(500.0);
            state.toggle_menu();
            let nav = RwSignal::new(state);
            view! { <NavbarView nav=nav /> }.to_html()
        });

        assert!(html.contains(BAR_SCROLLED));
        assert!(html.contains(r#"aria-label="Fechar menu""#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("h-screen bg-black"));
        // Desktop row plus overlay
        for section in SectionId::ALL {
            assert_eq!(html.matches(&format!(r##"href="{}""##, section.href())).count(), 2);
        }
    }

    #[test]
    fn test_navbar_cta_uses_compact_glow() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Navbar /> }.to_html());

        assert!(html.contains("shadow-[0_0_20px_rgba(250,204,21,0.2)]"));
        assert!(!html.contains("shadow-[0_0_30px"));
        assert!(html.contains("italic text-shadow"));
    }
}
