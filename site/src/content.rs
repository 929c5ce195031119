//! Content records and the seed tables for the landing page.
//!
//! Every record is `Copy` and built from `'static` data, so the tables below
//! are plain constants. They're designed to be:
//!
//! - **Closed** - accents, glows and icons are enums, never free strings
//! - **Ordered** - slice order is render order
//! - **Serializable** - `prism content` dumps them as JSON via serde
//!
//! # Example
//!
//! ```rust
//! use prism_site::content::{CORE_FEATURES, HERO_STATS};
//!
//! assert_eq!(HERO_STATS[0].value, "82K+");
//! assert!(CORE_FEATURES.iter().all(|f| !f.accent.style().glow.is_empty()));
//! ```

use serde::Serialize;

use crate::accent::{Accent, ReelGlow};
use crate::components::IconKind;

/// Document metadata for the single route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    /// `<title>` and `og:title`
    pub title: &'static str,
    /// `<meta name="description">` and `og:description`
    pub description: &'static str,
    /// Document language
    pub lang: &'static str,
}

/// Page metadata.
pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "Prism — Intelligent AI Photo Sharing",
    description: "Prism is the intelligent AI-native platform for sharing, curating, and collaborating on visual narratives.",
    lang: "en",
};

/// The fixed blocks of the page, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Brand mark, anchor nav and the beta CTA
    Header,
    /// Headline, CTAs, stats and the signal panel
    Hero,
    /// Core feature grid
    Stack,
    /// Three-phase pipeline explainer
    Pipeline,
    /// Highlight reel gallery
    Gallery,
    /// SafeShare trust panel
    Security,
    /// Email capture
    Waitlist,
}

impl Section {
    /// Render order of the page.
    pub const ORDER: [Section; 7] = [
        Section::Header,
        Section::Hero,
        Section::Stack,
        Section::Pipeline,
        Section::Gallery,
        Section::Security,
        Section::Waitlist,
    ];

    /// Name used in `data-section` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero => "hero",
            Section::Stack => "stack",
            Section::Pipeline => "pipeline",
            Section::Gallery => "gallery",
            Section::Security => "security",
            Section::Waitlist => "waitlist",
        }
    }

    /// Element id for sections reachable through an in-page anchor.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Header | Section::Hero => None,
            Section::Stack => Some("stack"),
            Section::Pipeline => Some("pipeline"),
            Section::Gallery => Some("gallery"),
            Section::Security => Some("security"),
            Section::Waitlist => Some("waitlist"),
        }
    }

    /// Fragment link (`#stack`) for anchored sections.
    pub fn href(self) -> Option<String> {
        self.anchor().map(|id| format!("#{id}"))
    }
}

/// A header navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible label
    pub label: &'static str,
    /// Section the link jumps to
    pub target: Section,
}

/// A hero statistic, rendered verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    /// Caption under the figure
    pub label: &'static str,
    /// Pre-formatted figure
    pub value: &'static str,
}

/// A core feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Card heading
    pub title: &'static str,
    /// Body copy
    pub description: &'static str,
    /// Badge icon
    pub icon: IconKind,
    /// Theme for the badge border, glow and hover halo
    pub accent: Accent,
}

/// One step of the pipeline explainer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PipelinePhase {
    /// Step number, e.g. `"01"`
    pub id: &'static str,
    /// Step heading
    pub title: &'static str,
    /// One-line summary
    pub summary: &'static str,
    /// Longer explanation
    pub details: &'static str,
    /// CSS gradient for the step orb
    pub accent: &'static str,
}

/// A gallery card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HighlightReel {
    /// Card heading
    pub title: &'static str,
    /// Body copy
    pub description: &'static str,
    /// Tag pills, in display order
    pub tags: &'static [&'static str],
    /// Background glow treatment
    pub glow: ReelGlow,
}

/// A trust row in the security panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrustSignal {
    /// Leading icon
    pub icon: IconKind,
    /// Row text
    pub label: &'static str,
}

/// A tinted status pill in the hero scan card or the Face ID card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SignalReadout {
    /// Left-hand caption
    pub label: &'static str,
    /// Right-hand reading, when the pill has one
    pub reading: Option<&'static str>,
    /// Tint
    pub accent: Accent,
}

/// A line of the security audit feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    /// Event description
    pub message: &'static str,
    /// Pre-formatted elapsed time
    pub elapsed: &'static str,
}

impl AuditEntry {
    /// Display line, e.g. `↳ Vault 09 watermark embedded • 2.1s`.
    pub fn line(&self) -> String {
        format!("↳ {} • {}", self.message, self.elapsed)
    }
}

// =============================================================================
// Seed tables
// =============================================================================

/// Header navigation.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Stack",
        target: Section::Stack,
    },
    NavLink {
        label: "Pipeline",
        target: Section::Pipeline,
    },
    NavLink {
        label: "Showcase",
        target: Section::Gallery,
    },
    NavLink {
        label: "Security",
        target: Section::Security,
    },
];

/// Hero statistics.
pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        label: "Creators",
        value: "82K+",
    },
    HeroStat {
        label: "Neural edits / day",
        value: "3.1M",
    },
    HeroStat {
        label: "Latency p95",
        value: "122ms",
    },
];

/// Readouts in the hero "AI signal scan" card.
pub const SIGNAL_SCAN: &[SignalReadout] = &[
    SignalReadout {
        label: "Edge Render",
        reading: Some("002.18"),
        accent: Accent::Cyan,
    },
    SignalReadout {
        label: "Face ID SafeShare",
        reading: Some("Auth: granted"),
        accent: Accent::Pink,
    },
    SignalReadout {
        label: "Dynamic Contrast",
        reading: Some("Pulse: 98%"),
        accent: Accent::Yellow,
    },
];

/// Core feature cards.
pub const CORE_FEATURES: &[Feature] = &[
    Feature {
        title: "Adaptive Neural Gallery",
        description: "Prism auto-curates live galleries using sentiment clusters, creator identity, and real-time engagement volatility.",
        icon: IconKind::Layers,
        accent: Accent::Cyan,
    },
    Feature {
        title: "Face ID SafeShare",
        description: "Neural biometric guardrails gate sensitive frames with face-matched access tokens and audit trails.",
        icon: IconKind::Fingerprint,
        accent: Accent::Pink,
    },
    Feature {
        title: "Prism Burst Delivery",
        description: "Ultra-low latency global distribution with edge-compute stylization and adaptive contrast balancing.",
        icon: IconKind::Globe2,
        accent: Accent::Yellow,
    },
];

/// Pipeline explainer steps.
pub const PIPELINE_PHASES: &[PipelinePhase] = &[
    PipelinePhase {
        id: "01",
        title: "Capture + Intake",
        summary: "Ingest RAW, HDR, and volumetric captures simultaneously.",
        details: "Meta-tags, temporal fingerprints, and lens telemetry stream into Prism Core in under 180ms, preserving depth, grain, and POV context.",
        accent: "linear-gradient(135deg, rgba(74,242,234,0.55), rgba(239,169,182,0.35))",
    },
    PipelinePhase {
        id: "02",
        title: "Neural Processing",
        summary: "Style, safety, and narrative threads fuse via multi-head AI.",
        details: "Our spectral transformer resolves lighting drift, removes noise, and composes narrative anchors using the Prism lore engine.",
        accent: "linear-gradient(135deg, rgba(243,230,143,0.65), rgba(74,242,234,0.35))",
    },
    PipelinePhase {
        id: "03",
        title: "Signal Distribution",
        summary: "Deliver every frame with adaptive bandwidth negotiation.",
        details: "Edge shards stream cinematic content with predictive pre-loading, secure embed tokens, and fingerprinted share links.",
        accent: "linear-gradient(135deg, rgba(239,169,182,0.55), rgba(243,230,143,0.35))",
    },
];

/// Gallery cards.
pub const HIGHLIGHT_REELS: &[HighlightReel] = &[
    HighlightReel {
        title: "Chromatic Threads",
        description: "Realtime cinematic sequences generated from live multi-cam sync with tone-mapped overlays.",
        tags: &["Cinematic Sync", "Realtime HDR"],
        glow: ReelGlow::CyanTopLeft,
    },
    HighlightReel {
        title: "Vertex Relays",
        description: "Collaborative mood boards with neural annotations, motion prompts, and AI scene swaps.",
        tags: &["AI Annotations", "Mood Weaving"],
        glow: ReelGlow::PinkTopRight,
    },
    HighlightReel {
        title: "Signal Vaults",
        description: "Private vaults gated by Face ID SafeShare, featuring quantum-resistant watermarking.",
        tags: &["SafeShare", "Audit Ready"],
        glow: ReelGlow::YellowTopCenter,
    },
];

/// Security panel trust rows.
pub const TRUST_SIGNALS: &[TrustSignal] = &[
    TrustSignal {
        icon: IconKind::ShieldCheck,
        label: "GDPR and SOC 2 aligned adaptive compliance mesh.",
    },
    TrustSignal {
        icon: IconKind::BadgeCheck,
        label: "Quantum-resistant watermarking on every distributed signal.",
    },
    TrustSignal {
        icon: IconKind::CircuitBoard,
        label: "Dedicated GPU inference lanes with zero data retention.",
    },
];

/// Pills in the "Face ID Confirm" card.
pub const FACE_ID_CHECKS: &[SignalReadout] = &[
    SignalReadout {
        label: "Neon Pink pulse verified",
        reading: None,
        accent: Accent::Pink,
    },
    SignalReadout {
        label: "Live retina fallback",
        reading: None,
        accent: Accent::Cyan,
    },
    SignalReadout {
        label: "Signal watermark synced",
        reading: None,
        accent: Accent::Yellow,
    },
];

/// Security audit feed.
pub const AUDIT_FEED: &[AuditEntry] = &[
    AuditEntry {
        message: "User prism.wraith authenticated",
        elapsed: "0.9s",
    },
    AuditEntry {
        message: "Vault 09 watermark embedded",
        elapsed: "2.1s",
    },
    AuditEntry {
        message: "Share link encrypted + dispatched",
        elapsed: "2.5s",
    },
];

/// Snapshot of every content table, for JSON export.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SiteContent {
    /// Document metadata
    pub metadata: SiteMetadata,
    /// Header navigation
    pub nav: &'static [NavLink],
    /// Hero statistics
    pub hero_stats: &'static [HeroStat],
    /// Hero scan readouts
    pub signal_scan: &'static [SignalReadout],
    /// Feature cards
    pub features: &'static [Feature],
    /// Pipeline steps
    pub pipeline: &'static [PipelinePhase],
    /// Gallery cards
    pub reels: &'static [HighlightReel],
    /// Trust rows
    pub trust_signals: &'static [TrustSignal],
    /// Face ID card pills
    pub face_id_checks: &'static [SignalReadout],
    /// Audit feed lines
    pub audit_feed: &'static [AuditEntry],
}

/// All seed tables bundled together.
pub const SITE_CONTENT: SiteContent = SiteContent {
    metadata: SITE_METADATA,
    nav: NAV_LINKS,
    hero_stats: HERO_STATS,
    signal_scan: SIGNAL_SCAN,
    features: CORE_FEATURES,
    pipeline: PIPELINE_PHASES,
    reels: HIGHLIGHT_REELS,
    trust_signals: TRUST_SIGNALS,
    face_id_checks: FACE_ID_CHECKS,
    audit_feed: AUDIT_FEED,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_tables_have_three_entries() {
        assert_eq!(HERO_STATS.len(), 3);
        assert_eq!(CORE_FEATURES.len(), 3);
        assert_eq!(PIPELINE_PHASES.len(), 3);
        assert_eq!(HIGHLIGHT_REELS.len(), 3);
        assert_eq!(TRUST_SIGNALS.len(), 3);
    }

    #[test]
    fn pipeline_ids_are_sequential() {
        let ids: Vec<_> = PIPELINE_PHASES.iter().map(|p| p.id).collect();
        assert_eq!(ids, ["01", "02", "03"]);
    }

    #[test]
    fn section_order_starts_with_header_and_ends_with_waitlist() {
        assert_eq!(Section::ORDER.first(), Some(&Section::Header));
        assert_eq!(Section::ORDER.last(), Some(&Section::Waitlist));
    }

    #[test]
    fn only_body_sections_are_anchored() {
        assert_eq!(Section::Header.href(), None);
        assert_eq!(Section::Hero.href(), None);
        assert_eq!(Section::Gallery.href().as_deref(), Some("#gallery"));
    }

    #[test]
    fn audit_line_format() {
        assert_eq!(AUDIT_FEED[1].line(), "↳ Vault 09 watermark embedded • 2.1s");
    }

    #[test]
    fn content_exports_as_json() {
        let json = serde_json::to_value(SITE_CONTENT).expect("serialize");
        assert_eq!(json["features"][1]["accent"], "pink");
        assert_eq!(json["reels"][0]["glow"], "cyan-top-left");
        assert_eq!(json["nav"][2]["target"], "gallery");
        assert_eq!(json["hero_stats"][2]["value"], "122ms");
    }
}
