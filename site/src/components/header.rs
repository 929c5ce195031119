//! Site header - brand mark, anchor nav and beta CTA

use super::{Icon, IconKind, PillButton};
use crate::content::{NAV_LINKS, NavLink, Section};
use leptos::prelude::*;

/// Rounded header bar
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header" data-section=Section::Header.as_str()>
            <div class="brand">
                <div class="brand-mark">
                    <div class="brand-prism"></div>
                    <span class="brand-letter">"P"</span>
                </div>
                <div>
                    <p class="brand-name">"Prism"</p>
                    <p class="brand-tagline">"AI photo intelligence"</p>
                </div>
            </div>
            <nav class="site-nav">
                {NAV_LINKS.iter().copied().map(|link| view! { <NavItem link=link /> }).collect::<Vec<_>>()}
            </nav>
            <div class="header-cta">
                <PillButton href="#waitlist">
                    "Join private beta"
                    <Icon kind=IconKind::ArrowUpRight class="icon-sm" />
                </PillButton>
            </div>
        </header>
    }
}

#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    let href = link.target.href().unwrap_or_default();
    view! { <a href=href>{link.label}</a> }
}
