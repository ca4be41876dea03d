use leptos::prelude::*;

/// Call-to-action link styles
#[derive(Clone, Copy, PartialEq)]
pub enum LinkVariant {
    /// Solid yellow pill
    Primary,
    /// Solid yellow pill with a softer glow, for the navbar
    Compact,
    /// Transparent pill with a light border
    Outline,
    /// Solid black pill with yellow text, for yellow backgrounds
    Dark,
    /// Solid black pill with white text, for yellow backgrounds
    DarkMuted,
}

/// Call-to-action sizes
#[derive(Clone, Copy, PartialEq)]
pub enum LinkSize {
    Small,
    Medium,
    Large,
}

impl LinkVariant {
    fn class(&self) -> &'static str {
        match self {
            LinkVariant::Primary => {
                "bg-yellow-400 text-black hover:bg-white transform hover:scale-105 shadow-[0_0_30px_rgba(250,204,21,0.3)]"
            }
            LinkVariant::Compact => {
                "bg-yellow-400 text-black hover:bg-white transform hover:scale-105 shadow-[0_0_20px_rgba(250,204,21,0.2)]"
            }
            LinkVariant::Outline => "border border-white/20 text-white hover:bg-white/5",
            LinkVariant::Dark => {
                "bg-black text-yellow-400 hover:scale-105 shadow-xl border border-yellow-400/10"
            }
            LinkVariant::DarkMuted => "bg-black text-white hover:scale-105 shadow-xl",
        }
    }
}

impl LinkSize {
    fn class(&self) -> &'static str {
        match self {
            LinkSize::Small => "px-6 py-2 text-xs",
            LinkSize::Medium => "w-full py-5 text-sm",
            LinkSize::Large => "px-10 py-5 text-lg",
        }
    }
}

/// Link that opens in a new browsing context without leaking the opener
#[component]
pub fn ExternalLink(
    href: &'static str,
    #[prop(default = LinkVariant::Primary)]
    variant: LinkVariant,
    #[prop(default = LinkSize::Large)]
    size: LinkSize,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-full font-black flex items-center justify-center space-x-3 transition-all {} {}",
        variant.class(),
        size.class()
    );

    view! {
        <a href=href class=classes target="_blank" rel="noopener noreferrer">
            {children()}
        </a>
    }
}
