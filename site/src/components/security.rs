//! Security section - SafeShare copy, trust rows and the Face ID card

use super::{Icon, IconKind, ReadoutPill};
use crate::content::{
    AUDIT_FEED, AuditEntry, FACE_ID_CHECKS, Section, SignalReadout, TRUST_SIGNALS, TrustSignal,
};
use leptos::prelude::*;

/// Framed trust panel under `#security`
#[component]
pub fn SecuritySection() -> impl IntoView {
    view! {
        <section id="security" class="framed" data-section=Section::Security.as_str()>
            <div class="glow-layer" style="background:radial-gradient(circle at 15% 30%, rgba(239,169,182,0.2), transparent 55%)"></div>
            <div class="glow-layer" style="background:radial-gradient(circle at 70% 20%, rgba(74,242,234,0.15), transparent 60%)"></div>
            <div class="framed-inner security-inner">
                <div class="security-copy">
                    <span class="eyebrow">
                        <Icon kind=IconKind::ShieldCheck class="icon-sm tint-pink" />
                        "SafeShare protocol"
                    </span>
                    <h2 class="section-title">"Neon-pink biometric perimeters on every share."</h2>
                    <p class="security-body">
                        "Face ID SafeShare deploys biometric signatures with neon pink confirmation pulses. Every viewport is verified, watermarking is quantum-resistant, and audit logs compile in real time."
                    </p>
                    <div class="trust-grid">
                        {TRUST_SIGNALS.iter().copied().map(|signal| view! { <TrustSignalRow signal=signal /> }).collect::<Vec<_>>()}
                    </div>
                </div>
                <FaceIdCard checks=FACE_ID_CHECKS feed=AUDIT_FEED />
            </div>
        </section>
    }
}

/// Icon plus label
#[component]
pub fn TrustSignalRow(signal: TrustSignal) -> impl IntoView {
    view! {
        <div class="trust-row">
            <Icon kind=signal.icon />
            <span>{signal.label}</span>
        </div>
    }
}

/// Decorative confirmation card with check pills and an audit feed
#[component]
pub fn FaceIdCard(
    checks: &'static [SignalReadout],
    feed: &'static [AuditEntry],
) -> impl IntoView {
    view! {
        <div class="faceid">
            <div class="faceid-ring"></div>
            <div class="faceid-card">
                <div class="faceid-head">
                    <span>"Face ID Confirm"</span>
                    <Icon kind=IconKind::Palette class="icon tint-pink" />
                </div>
                <div class="faceid-checks">
                    {checks.iter().copied().map(|readout| view! { <ReadoutPill readout=readout /> }).collect::<Vec<_>>()}
                </div>
                <div class="audit-feed">
                    <p class="audit-title">"Audit feed"</p>
                    <div class="audit-lines">
                        {feed.iter().map(|entry| view! { <p>{entry.line()}</p> }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}
