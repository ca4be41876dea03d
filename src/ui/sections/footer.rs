use leptos::prelude::*;

use crate::core::{BRAND_FULL_NAME, BRAND_NAME, INSTAGRAM_LINK, IconKind};
use crate::ui::icon::Icon;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 bg-black border-t border-white/5">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-center gap-8 mb-12">
                    <div class="flex items-center space-x-4">
                        <div class="bg-yellow-400 p-2 rounded-lg">
                            <Icon kind=IconKind::Terminal class="text-black" />
                        </div>
                        <span class="text-3xl font-black italic tracking-tighter uppercase">{BRAND_NAME}</span>
                    </div>
                    <div class="flex space-x-6">
                        <a
                            href=INSTAGRAM_LINK
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-3 bg-zinc-900 rounded-full hover:bg-yellow-400 hover:text-black transition-all"
                            aria-label="Instagram da LAFTEC"
                        >
                            <Icon kind=IconKind::Instagram />
                        </a>
                    </div>
                </div>
                <div class="flex flex-col md:flex-row justify-between items-center text-[10px] text-gray-600 font-black uppercase tracking-[0.3em]">
                    <p>{format!("© 2026 {BRAND_NAME} - {BRAND_FULL_NAME}")}</p>
                    <p class="mt-4 md:mt-0 italic">"Designed for the future_"</p>
                </div>
            </div>
        </footer>
    }
}
