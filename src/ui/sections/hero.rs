use leptos::prelude::*;

use crate::core::{FORM_LINK, INSTAGRAM_LINK, IconKind, SectionId};
use crate::ui::common::{Badge, ExternalLink, LinkVariant};
use crate::ui::icon::Icon;

/// Full-height opening section with the headline and the two main CTAs
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=SectionId::Home.as_str() class="relative min-h-screen flex items-center pt-20 overflow-hidden bg-black">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_50%_10%,rgba(250,204,21,0.15),transparent_60%)]"></div>
            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-4xl">
                    <Badge>"Conexão Calouros 2026"</Badge>
                    <h1 class="text-5xl sm:text-7xl md:text-9xl font-black text-white leading-[0.85] tracking-tighter mb-8 italic uppercase">
                        "Conectando " <br />
                        <span class="text-yellow-400">"Mulheres"</span> <br />
                        "ao Futuro."
                    </h1>
                    <p class="text-gray-400 text-lg md:text-xl max-w-2xl mb-12 font-medium leading-relaxed border-l-2 border-yellow-400/30 pl-6">
                        "A LAFTEC é a sua comunidade de tecnologia na faculdade. Aqui, transformamos curiosidade em código, protagonismo em carreira e calouras em líderes."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <ExternalLink href=FORM_LINK>
                            <span>"QUERO FAZER PARTE"</span>
                            <Icon kind=IconKind::ArrowRight />
                        </ExternalLink>
                        <ExternalLink href=INSTAGRAM_LINK variant=LinkVariant::Outline>
                            "CONHECER A LIGA"
                        </ExternalLink>
                    </div>
                </div>
            </div>
        </section>
    }
}
