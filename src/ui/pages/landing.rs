//! Landing page
//!
//! The whole site: fixed navbar followed by the sections in page order
//! (hero, about, pillars, benefits, recruitment) and the footer.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::seo::{OrganizationJsonLd, PAGE_DESCRIPTION, PAGE_KEYWORDS, PAGE_TITLE};
use crate::ui::navbar::Navbar;
use crate::ui::sections::{About, Benefits, Footer, Hero, Recruitment, WhatWeDo};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-black text-white selection:bg-yellow-400 selection:text-black font-sans">
            <Navbar />
            <Hero />
            <About />
            <WhatWeDo />
            <Benefits />
            <Recruitment />
            <Footer />
        </div>
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content=PAGE_KEYWORDS />
        <Meta name="theme-color" content="#000000" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />
        <Meta property="og:locale" content="pt_BR" />

        // Twitter
        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:title" content=PAGE_TITLE />
        <Meta name="twitter:description" content=PAGE_DESCRIPTION />

        <script type="application/ld+json" inner_html=OrganizationJsonLd::laftec().to_script()></script>
    }
}
