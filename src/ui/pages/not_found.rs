//! Not found page component
//!
//! A 404 page displayed for any path other than the landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::{BRAND_NAME, IconKind};
use crate::ui::icon::Icon;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("404 - {BRAND_NAME}") />

        <div class="min-h-screen bg-black text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-yellow-400 rounded-full flex items-center justify-center">
                    <Icon kind=IconKind::Terminal size=48 class="text-black" />
                </div>

                <h1 class="text-6xl font-black italic mb-4">
                    <span class="text-yellow-400">"/"</span>
                    " 404"
                </h1>

                <p class="text-gray-400 font-mono text-sm uppercase tracking-wider mb-8">
                    "// page_not_found.log"
                </p>

                <A
                    href="/"
                    attr:class="bg-yellow-400 text-black px-10 py-5 rounded-full font-black text-lg hover:bg-white transition-all"
                >
                    "VOLTAR AO INÍCIO"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-[10px] text-gray-600 font-black uppercase tracking-[0.3em]">
                    {format!("© 2026 {BRAND_NAME}")}
                </p>
            </div>
        </div>
    }
}
