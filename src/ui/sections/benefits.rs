use leptos::prelude::*;

use crate::core::{
    BENEFITS, ContentItem, ENTRANCE_DURATION_MS, RevealState, SectionId, benefit_card_options,
    entrance_delay_ms,
};
use crate::ui::common::SectionTitle;
use crate::ui::icon::Icon;
use crate::ui::visibility::use_element_in_view;

const CARD_BASE: &str = "flex space-x-6 p-6 rounded-3xl bg-black border border-white/5 hover:bg-zinc-900 transition-all transform";

/// Membership benefits; each card slides in the first time it is seen
#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id=SectionId::Benefits.as_str() class="py-24 bg-zinc-950 border-y border-white/5">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row gap-16">
                    <div class="md:w-1/3">
                        <SectionTitle subtitle="// upgrade_your_skills.bin">"Por que participar?"</SectionTitle>
                        <p class="text-gray-500 font-medium">
                            "Não é apenas sobre aprender a programar, é sobre se tornar a profissional que o futuro exige."
                        </p>
                    </div>
                    <div class="md:w-2/3 grid sm:grid-cols-2 gap-8">
                        {BENEFITS
                            .iter()
                            .enumerate()
                            .map(|(index, benefit)| view! { <BenefitCard benefit=*benefit index=index /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitCard(benefit: ContentItem, index: usize) -> impl IntoView {
    let (node_ref, reveal) = use_element_in_view(benefit_card_options());

    let style = format!(
        "transition-delay: {}ms; transition-duration: {}ms",
        entrance_delay_ms(index),
        ENTRANCE_DURATION_MS
    );

    view! {
        <div
            node_ref=node_ref
            data-reveal=move || reveal.get().as_str()
            class=move || card_class(reveal.get())
            style=style
        >
            <div class="text-yellow-400 shrink-0">
                <Icon kind=benefit.icon />
            </div>
            <div>
                <h4 class="text-white font-black uppercase text-sm mb-2">{benefit.title}</h4>
                <p class="text-gray-500 text-xs leading-relaxed">{benefit.description}</p>
            </div>
        </div>
    }
}

fn card_class(reveal: RevealState) -> String {
    let motion = if reveal.is_hidden() {
        "opacity-0 translate-y-12"
    } else {
        "opacity-100 translate-y-0"
    };
    format!("{CARD_BASE} {motion}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class_hidden_only_while_armed() {
        assert!(card_class(RevealState::Armed).ends_with("opacity-0 translate-y-12"));
        assert!(card_class(RevealState::Entered).ends_with("opacity-100 translate-y-0"));
        assert!(card_class(RevealState::Static).ends_with("opacity-100 translate-y-0"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_benefits_render_visible_with_staggered_delays() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Benefits /> }.to_html());

        assert!(html.contains(r#"id="beneficios""#));
        // No observer runs on the server, so every card is rendered at rest
        assert!(!html.contains("opacity-0"));
        assert_eq!(html.matches("opacity-100 translate-y-0").count(), BENEFITS.len());
        assert_eq!(html.matches(r#"data-reveal="static""#).count(), BENEFITS.len());
        for index in 0..BENEFITS.len() {
            assert!(html.contains(&format!("transition-delay: {}ms", index * 100)));
        }
        for benefit in BENEFITS.iter() {
            assert!(html.contains(benefit.title));
        }
    }
}
