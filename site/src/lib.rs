//! # prism-site
//!
//! Leptos SSR renderer for the Prism landing page.
//!
//! The whole page is static: content lives in `'static` tables in
//! [`content`], flows through pure Leptos components in [`components`],
//! and comes out as one HTML string. There is no hydration and no client
//! runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use prism_site::render_page;
//!
//! let html = render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Write to file
//! // std::fs::write("dist/index.html", html)?;
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Content records and the seed tables
//! - [`accent`] - Closed accent themes and their style bundles
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and document policy constants
//! - [`validate`] - Consistency checks over the content tables
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod accent;
pub mod components;
pub mod content;
pub mod styles;
pub mod validate;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use accent::{Accent, AccentStyle, ReelGlow};
pub use content::{SITE_METADATA, Section, SiteMetadata};
pub use validate::{ContentIssue, validate_content};

/// Render the complete landing page.
///
/// Takes no input: every piece of copy comes from the tables in
/// [`content`]. Calling this twice yields byte-identical output.
///
/// # Example
///
/// ```rust
/// let html = prism_site::render_page();
/// assert!(html.contains("id=\"waitlist\""));
/// ```
pub fn render_page() -> String {
    let doc = view! { <SiteDocument meta=SITE_METADATA /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HERO_STATS, HIGHLIGHT_REELS, PIPELINE_PHASES};
    use pretty_assertions::assert_eq;

    fn positions_in_order(html: &str, needles: &[String]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| {
                html.find(n.as_str())
                    .unwrap_or_else(|| panic!("missing {n} in rendered page"))
            })
            .collect()
    }

    fn assert_ascending(positions: &[usize]) {
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1], "out of order: {:?}", positions);
        }
    }

    #[test]
    fn renders_complete_document() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("lang=\"en\""));
        assert!(html.contains(SITE_METADATA.title));
        assert!(html.contains(SITE_METADATA.description));
    }

    #[test]
    fn renders_link_preview_tags() {
        let html = render_page();

        assert!(html.contains(&format!(
            "<meta property=\"og:title\" content=\"{}\"",
            SITE_METADATA.title
        )));
        assert!(html.contains(&format!(
            "<meta property=\"og:description\" content=\"{}\"",
            SITE_METADATA.description
        )));
        assert!(html.contains("<meta property=\"og:type\" content=\"website\""));
    }

    #[test]
    fn rendering_is_idempotent() {
        let first = render_page();
        let second = render_page();
        assert_eq!(first, second);
    }

    #[test]
    fn sections_follow_fixed_order() {
        let html = render_page();
        let markers: Vec<String> = Section::ORDER
            .iter()
            .map(|s| format!("data-section=\"{}\"", s.as_str()))
            .collect();

        assert_ascending(&positions_in_order(&html, &markers));
    }

    #[test]
    fn each_section_renders_once() {
        let html = render_page();
        for section in Section::ORDER {
            let marker = format!("data-section=\"{}\"", section.as_str());
            assert_eq!(html.matches(&marker).count(), 1, "{marker}");
        }
    }

    #[test]
    fn anchored_sections_carry_ids() {
        let html = render_page();
        for id in ["stack", "pipeline", "gallery", "security", "waitlist"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
    }

    #[test]
    fn hero_renders_seed_stats_in_order() {
        let html = render_page();

        assert_eq!(html.matches("class=\"stat-tile\"").count(), 3);
        assert_eq!(HERO_STATS.len(), 3);

        let expected = [
            ("Creators", "82K+"),
            ("Neural edits / day", "3.1M"),
            ("Latency p95", "122ms"),
        ];
        for (stat, (label, value)) in HERO_STATS.iter().zip(expected) {
            assert_eq!(stat.label, label);
            assert_eq!(stat.value, value);
        }

        let hero_start = html.find("data-section=\"hero\"").expect("hero section");
        let hero_end = html.find("data-section=\"stack\"").expect("stack section");
        let hero = &html[hero_start..hero_end];

        let needles: Vec<String> = expected
            .iter()
            .flat_map(|(label, value)| [value.to_string(), label.to_string()])
            .collect();
        assert_ascending(&positions_in_order(hero, &needles));
    }

    #[test]
    fn one_phase_card_per_pipeline_phase_in_order() {
        let html = render_page();

        assert_eq!(
            html.matches("class=\"phase-card\"").count(),
            PIPELINE_PHASES.len()
        );

        let titles: Vec<String> = PIPELINE_PHASES.iter().map(|p| p.title.to_string()).collect();
        assert_ascending(&positions_in_order(&html, &titles));
    }

    #[test]
    fn one_reel_card_per_highlight_reel_in_order() {
        let html = render_page();

        assert_eq!(
            html.matches("class=\"reel-card\"").count(),
            HIGHLIGHT_REELS.len()
        );

        let titles: Vec<String> = HIGHLIGHT_REELS.iter().map(|r| r.title.to_string()).collect();
        assert_ascending(&positions_in_order(&html, &titles));
    }

    #[test]
    fn reel_glow_comes_from_the_record() {
        let html = render_page();
        let glows: Vec<String> = HIGHLIGHT_REELS
            .iter()
            .map(|r| format!("data-glow=\"{}\"", r.glow.as_str()))
            .collect();

        assert_ascending(&positions_in_order(&html, &glows));
    }

    #[test]
    fn waitlist_form_is_inert() {
        let html = render_page();
        let start = html.find("<form").expect("waitlist form");
        let end = start + html[start..].find("</form>").expect("form close");
        let form = &html[start..end];

        assert!(form.contains("type=\"email\""));
        assert!(form.contains("type=\"submit\""));
        assert!(!form.contains("action="));
        assert!(!form.contains("method="));
        assert!(!form.contains("onsubmit"));
        assert!(html.contains("form-action 'none'"));
        assert!(html.contains("connect-src 'none'"));
    }

    #[test]
    fn page_ships_no_scripts() {
        let html = render_page();
        assert!(!html.contains("<script"));
    }
}
