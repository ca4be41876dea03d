use leptos::prelude::*;

use crate::core::{ContentItem, PILLARS, SectionId};
use crate::ui::common::SectionTitle;
use crate::ui::icon::Icon;

/// The three pillars: teaching, extension and research
#[component]
pub fn WhatWeDo() -> impl IntoView {
    view! {
        <section id=SectionId::WhatWeDo.as_str() class="py-24 bg-black">
            <div class="container mx-auto px-6">
                <SectionTitle subtitle="// logic_structure.sys">"O que fazemos"</SectionTitle>
                <div class="grid md:grid-cols-3 gap-8">
                    {PILLARS.iter().map(|pillar| view! { <PillarCard pillar=*pillar /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PillarCard(pillar: ContentItem) -> impl IntoView {
    view! {
        <div class="group bg-zinc-900/50 p-8 rounded-[40px] border border-white/5 hover:border-yellow-400/50 transition-all duration-500">
            <div class="w-14 h-14 bg-yellow-400 rounded-2xl flex items-center justify-center mb-8 group-hover:rotate-12 transition-transform">
                <Icon kind=pillar.icon class="text-black" />
            </div>
            <h3 class="text-3xl font-black uppercase italic mb-4">{pillar.title}</h3>
            <p class="text-gray-400 mb-8 leading-relaxed">{pillar.description}</p>
            {pillar.has_tags().then(|| view! {
                <div class="flex flex-wrap gap-2">
                    {pillar
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-[10px] font-black uppercase tracking-widest border border-yellow-400/30 text-yellow-400 px-3 py-1 rounded-full">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}
