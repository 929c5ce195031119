//! Gallery section - highlight reel cards

use super::{Icon, IconKind, PillButton, Tone};
use crate::content::{HIGHLIGHT_REELS, HighlightReel, Section};
use leptos::prelude::*;

/// Reel grid under `#gallery`
#[component]
pub fn GallerySection() -> impl IntoView {
    view! {
        <section id="gallery" class="gallery" data-section=Section::Gallery.as_str()>
            <div class="section-head">
                <div>
                    <p class="kicker kicker-pink">"Highlight Reels"</p>
                    <h2 class="section-title">"Tech-noir galleries curated by AI instincts."</h2>
                </div>
                <PillButton href="#waitlist" tone=Tone::Secondary>
                    "Leak a reel"
                    <Icon kind=IconKind::ArrowUpRight class="icon-sm" />
                </PillButton>
            </div>
            <div class="reel-grid">
                {HIGHLIGHT_REELS.iter().copied().map(|reel| view! { <ReelCard reel=reel /> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Reel card; the glow layer comes from `reel.glow`
#[component]
pub fn ReelCard(reel: HighlightReel) -> impl IntoView {
    view! {
        <div class="reel-card" data-glow=reel.glow.as_str()>
            <div class="reel-card-inner">
                <div class="reel-glow" style=format!("background:{}", reel.glow.background()) aria-hidden="true"></div>
                <div class="reel-head">
                    <div class="reel-text">
                        <h3 class="reel-title">{reel.title}</h3>
                        <p class="reel-body">{reel.description}</p>
                    </div>
                    <Icon kind=IconKind::Aperture class="icon-lg tint-ghost" />
                </div>
                <div class="tag-row">
                    {reel.tags.iter().copied().map(|tag| view! { <span class="tag">{tag}</span> }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn reordered_reels_keep_their_glow() {
        for reel in HIGHLIGHT_REELS.iter().rev().copied() {
            let html = view! { <ReelCard reel=reel /> }.to_html();
            assert!(html.contains(&format!("data-glow=\"{}\"", reel.glow.as_str())));
            assert!(html.contains(reel.glow.background()));
        }
    }

    #[test]
    fn reel_card_renders_tags_in_order() {
        let reel = HIGHLIGHT_REELS[1];
        let html = view! { <ReelCard reel=reel /> }.to_html();

        assert_eq!(html.matches("class=\"tag\"").count(), reel.tags.len());
        let first = html.find(reel.tags[0]).expect("first tag");
        let second = html.find(reel.tags[1]).expect("second tag");
        assert!(first < second);
    }
}
