use leptos::prelude::*;

use crate::core::{ABOUT_HIGHLIGHTS, BRAND_FULL_NAME, ContentItem, SectionId};
use crate::ui::common::SectionTitle;
use crate::ui::icon::Icon;

/// Mission statement next to a mock terminal window
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-24 bg-zinc-950">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row gap-16 items-center">
                    <div class="md:w-1/2">
                        <SectionTitle subtitle="// mission_statement.txt">"Sobre a LAFTEC"</SectionTitle>
                        <p class="text-gray-400 text-xl leading-relaxed mb-8">
                            "A "
                            <span class="text-white font-bold">{BRAND_FULL_NAME}</span>
                            " nasceu para quebrar barreiras. Somos um espaço seguro e focado no crescimento de mulheres que querem dominar a tecnologia, promovendo comunidade, desenvolvimento técnico e impacto social real."
                        </p>
                        <div class="space-y-4">
                            {ABOUT_HIGHLIGHTS
                                .iter()
                                .map(|item| view! { <Highlight item=*item /> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="md:w-1/2 relative">
                        <TerminalWindow />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Highlight(item: ContentItem) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-4">
            <div class="mt-1 text-yellow-400">
                <Icon kind=item.icon size=20 />
            </div>
            <div>
                <h4 class="text-white font-black uppercase text-sm italic">{item.title}</h4>
                <p class="text-gray-500 text-sm">{item.description}</p>
            </div>
        </div>
    }
}

#[component]
fn TerminalWindow() -> impl IntoView {
    view! {
        <div class="bg-yellow-400 aspect-video rounded-3xl flex items-center justify-center rotate-3 scale-95 opacity-50 absolute inset-0"></div>
        <div class="bg-zinc-900 border border-white/10 aspect-video rounded-3xl relative z-10 flex flex-col overflow-hidden">
            <div class="h-8 bg-zinc-800 flex items-center px-4 space-x-2 border-b border-white/5">
                <div class="w-2 h-2 rounded-full bg-red-500"></div>
                <div class="w-2 h-2 rounded-full bg-yellow-500"></div>
                <div class="w-2 h-2 rounded-full bg-green-500"></div>
            </div>
            <div class="p-8 font-mono text-sm text-yellow-400 space-y-2">
                <p class="text-gray-500">"# Iniciando sistema LAFTEC..."</p>
                <p>"> loading_women_empowerment.js"</p>
                <p>"> connecting_to_innovation..."</p>
                <p class="text-white mt-4 italic">"// Junte-se a nós e escreva o seu futuro."</p>
                <div class="pt-4 flex animate-pulse">
                    <div class="w-2 h-5 bg-yellow-400"></div>
                </div>
            </div>
        </div>
    }
}
