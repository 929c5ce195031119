//! Root document component - the complete HTML page
//!
//! Owns `<head>`: metadata, link-preview tags, the CSP, web fonts and the
//! inlined stylesheet. The body only wraps [`LandingPage`].

use super::LandingPage;
use crate::content::SiteMetadata;
use crate::styles::{CSP, FONT_ORIGIN, FONT_STYLESHEET, PRISM_CSS};
use leptos::prelude::*;

/// The complete HTML document
#[component]
pub fn SiteDocument(meta: SiteMetadata) -> impl IntoView {
    view! {
        <html lang=meta.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                {og_meta("og:title", meta.title)}
                {og_meta("og:description", meta.description)}
                {og_meta("og:type", "website")}
                <link rel="preconnect" href=FONT_ORIGIN crossorigin="anonymous" />
                <link rel="stylesheet" href=FONT_STYLESHEET />
                <style>{PRISM_CSS}</style>
            </head>
            <body class="antialiased">
                <div class="page">
                    <div class="page-backdrop" aria-hidden="true"></div>
                    <LandingPage />
                </div>
            </body>
        </html>
    }
}

/// Link-preview `<meta property=...>` tag.
///
/// `property` collides with the DOM property setter in `view!`, so these
/// tags go through the element builder.
fn og_meta(property: &'static str, content: &'static str) -> impl IntoView {
    leptos::html::meta().attr("property", property).attr("content", content)
}
