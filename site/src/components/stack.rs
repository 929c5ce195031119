//! Stack section - core feature cards

use super::Icon;
use crate::content::{CORE_FEATURES, Feature, Section};
use leptos::prelude::*;

/// Feature grid under `#stack`
#[component]
pub fn StackSection() -> impl IntoView {
    view! {
        <section id="stack" class="stack" data-section=Section::Stack.as_str()>
            <div class="section-head">
                <div>
                    <p class="kicker kicker-cyan">"Stack"</p>
                    <h2 class="section-title">"Engineered for zero-friction visual intelligence."</h2>
                </div>
                <p class="section-lede">
                    "Prism synchronizes adaptive neural galleries, neon-grade identity security, and global delivery rails in one utilitarian workspace."
                </p>
            </div>
            <div class="card-grid">
                {CORE_FEATURES.iter().copied().map(|feature| view! { <GlowCard feature=feature /> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Feature card with an accent-tinted badge and hover halo
#[component]
pub fn GlowCard(feature: Feature) -> impl IntoView {
    let style = feature.accent.style();

    view! {
        <div class="glow-card" data-accent=feature.accent.as_str()>
            <div class="glow-card-inner">
                <div class="glow-card-halo" style=format!("background:{}", style.halo) aria-hidden="true"></div>
                <div class="icon-badge" style=style.badge_css()>
                    <Icon kind=feature.icon />
                </div>
                <h3 class="card-title">{feature.title}</h3>
                <p class="card-body">{feature.description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn glow_card_carries_resolved_accent_style() {
        for feature in CORE_FEATURES.iter().copied() {
            let html = view! { <GlowCard feature=feature /> }.to_html();
            let style = feature.accent.style();

            assert!(html.contains(&format!("data-accent=\"{}\"", feature.accent.as_str())));
            assert!(html.contains(style.glow), "{}", feature.title);
            assert!(html.contains(style.halo), "{}", feature.title);
            assert!(html.contains(feature.title));
        }
    }
}
