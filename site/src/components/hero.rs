//! Hero section - headline, CTAs, stats and the signal scan panel

use super::{Icon, IconKind, PillButton, Tone};
use crate::content::{HERO_STATS, HeroStat, SIGNAL_SCAN, Section, SignalReadout};
use leptos::prelude::*;

/// Opening section of the page
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero" data-section=Section::Hero.as_str()>
            <div class="hero-copy">
                <span class="eyebrow eyebrow-cyan">
                    <Icon kind=IconKind::Sparkles class="icon-sm" />
                    "Intelligent photo sharing"
                </span>
                <h1 class="hero-title">
                    "Build visual narratives that self-optimize in real time."
                </h1>
                <p class="hero-lede">
                    "Prism is the tech-noir command center for creators. Train custom styles, secure identities with neon-grade biometrics, and stream cinematic stories that evolve with every interaction."
                </p>
            </div>
            <div class="hero-actions">
                <PillButton href="#waitlist">
                    "Enter the prism"
                    <Icon kind=IconKind::ArrowUpRight class="icon-sm" />
                </PillButton>
                <PillButton href="#stack" tone=Tone::Secondary>
                    "Explore the stack"
                </PillButton>
            </div>
            <div class="framed hero-panel">
                <div class="glow-layer" style="background:radial-gradient(circle at 30% 20%, rgba(74,242,234,0.18), transparent 55%)"></div>
                <div class="glow-layer" style="background:radial-gradient(circle at 70% 30%, rgba(239,169,182,0.15), transparent 60%)"></div>
                <div class="hero-panel-inner">
                    <div class="hero-signal">
                        <div class="chip">
                            "Signal Core"
                            <span class="dot dot-yellow"></span>
                            "Gen-Z Pro"
                        </div>
                        <p class="hero-signal-copy">
                            "Prism threads Face ID SafeShare, AI tone mapping, and adaptive contrast into a single cinematic signal. Every share is signed, stylized, and safeguarded."
                        </p>
                        <div class="stat-grid">
                            {HERO_STATS.iter().copied().map(|stat| view! { <StatTile stat=stat /> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                    <SignalScanCard readouts=SIGNAL_SCAN />
                </div>
            </div>
        </section>
    }
}

/// One hero figure, value over label
#[component]
pub fn StatTile(stat: HeroStat) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <p class="stat-value">{stat.value}</p>
            <p class="stat-label">{stat.label}</p>
        </div>
    }
}

/// "AI signal scan" card beside the hero stats
#[component]
pub fn SignalScanCard(readouts: &'static [SignalReadout]) -> impl IntoView {
    view! {
        <div class="scan-card">
            <div class="scan-head">
                <span>"AI SIGNAL SCAN"</span>
                <span class="live">
                    "Live"
                    <span class="dot dot-cyan pulse"></span>
                </span>
            </div>
            <div class="readouts">
                {readouts.iter().copied().map(|readout| view! { <ReadoutPill readout=readout /> }).collect::<Vec<_>>()}
            </div>
            <div class="scan-match">
                <span>"SIGNAL MATCHED"</span>
                <span class="scan-match-tag">
                    "Neon Pink"
                    <Icon kind=IconKind::Fingerprint class="icon-sm" />
                </span>
            </div>
        </div>
    }
}

/// Tinted status pill; the reading sits on the right when present
#[component]
pub fn ReadoutPill(readout: SignalReadout) -> impl IntoView {
    let style = readout.accent.style();
    view! {
        <div class="readout" data-accent=readout.accent.as_str() style=style.readout_css()>
            {readout.label}
            {readout.reading.map(|reading| view! { <span>{reading}</span> })}
        </div>
    }
}
