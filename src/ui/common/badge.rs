use leptos::prelude::*;

use crate::core::IconKind;
use crate::ui::icon::Icon;

/// Badge color scheme, chosen by the section background
#[derive(Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    /// Yellow text on a translucent yellow pill, for dark sections
    Accent,
    /// Dark text on a translucent dark pill, for the yellow recruitment card
    OnAccent,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Accent => "bg-yellow-400/10 border-yellow-400/30 text-yellow-400",
            BadgeVariant::OnAccent => "bg-black/10 border-black/20 text-black",
        }
    }
}

/// Pill-shaped label with a sparkle, shown above headlines
#[component]
pub fn Badge(
    /// Badge text
    children: Children,
    /// Visual variant
    #[prop(default = BadgeVariant::Accent)]
    variant: BadgeVariant,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center space-x-2 border rounded-full px-4 py-1.5 mb-6 {}",
        variant.class()
    );

    view! {
        <span class=classes>
            <Icon kind=IconKind::Sparkles size=14 />
            <span class="text-[10px] font-black uppercase tracking-widest">{children()}</span>
        </span>
    }
}
