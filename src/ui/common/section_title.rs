use leptos::prelude::*;

/// Section heading with the slash accent and a monospace "file name" subtitle
#[component]
pub fn SectionTitle(
    children: Children,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-12">
            <h2 class="text-4xl md:text-5xl font-black uppercase italic mb-4 leading-none">
                <span class="text-yellow-400">"/"</span>
                " "
                {children()}
            </h2>
            {subtitle.map(|text| view! {
                <p class="text-gray-400 font-mono text-sm uppercase tracking-wider">{text}</p>
            })}
        </div>
    }
}
