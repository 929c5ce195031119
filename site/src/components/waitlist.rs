//! Waitlist section - email capture
//!
//! The form is inert: no action, no method, no handler. The document CSP
//! sets `form-action 'none'`, so pressing the button neither sends a request
//! nor navigates.

use super::{Icon, IconKind};
use crate::content::Section;
use leptos::prelude::*;

/// Placeholder shown in the email field
pub const EMAIL_PLACEHOLDER: &str = "neon@yourstudio.io";

/// Invite-only call to action under `#waitlist`
#[component]
pub fn WaitlistSection() -> impl IntoView {
    view! {
        <section id="waitlist" class="waitlist" data-section=Section::Waitlist.as_str()>
            <div class="glow-layer" style="background:radial-gradient(circle at 50% 0%, rgba(243,230,143,0.15), transparent 60%)"></div>
            <div class="glow-layer" style="background:radial-gradient(circle at 15% 15%, rgba(74,242,234,0.1), transparent 50%)"></div>
            <div class="waitlist-inner">
                <span class="eyebrow">
                    <Icon kind=IconKind::Sparkles class="icon-sm tint-yellow" />
                    "Launch Window: Q3"
                </span>
                <h2 class="waitlist-title">
                    "Prism is invite-only while the neural co-pilot trains on creator collectives."
                </h2>
                <p class="section-lede">
                    "Request your spot in the private beta to unlock tech-noir storytelling, biometric safeguards, and AI-curated collaboration."
                </p>
                <form class="waitlist-form">
                    <input
                        type="email"
                        placeholder=EMAIL_PLACEHOLDER
                        aria-label="Email address"
                        class="waitlist-input"
                    />
                    <button type="submit" class="waitlist-submit">
                        "Request access"
                    </button>
                </form>
                <p class="waitlist-note">"11 slots remain for creator collectives"</p>
            </div>
        </section>
    }
}
