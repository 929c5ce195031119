//! Pill-shaped anchor buttons

use leptos::prelude::*;

/// Visual weight of a [`PillButton`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    /// Solid yellow with glow
    #[default]
    Primary,
    /// Outlined glass
    Secondary,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Primary => "pill pill-primary",
            Tone::Secondary => "pill pill-secondary",
        }
    }
}

/// Rounded call-to-action link
#[component]
pub fn PillButton(
    /// Link target, usually an in-page anchor
    href: &'static str,
    #[prop(optional)] tone: Tone,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=tone.class()>
            {children()}
        </a>
    }
}
