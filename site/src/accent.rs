//! Accent themes and their precomputed style bundles.
//!
//! Every accent is a closed enum variant, so a card can never name a theme
//! the resolver doesn't know about. Adding a variant fails to compile until
//! [`Accent::style`] covers it.

use serde::Serialize;

/// Color theme tag for cards, readouts and badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Signal cyan `#4AF2EA`
    Cyan,
    /// Neon pink `#EFA9B6`
    Pink,
    /// Prism yellow `#F3E68F`
    Yellow,
}

/// Visual attributes resolved from an [`Accent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentStyle {
    /// Solid color used for text and dots
    pub color: &'static str,
    /// Border color (CSS color value)
    pub border: &'static str,
    /// Fainter border drawn around readout pills
    pub outline: &'static str,
    /// Soft fill used behind badges and readouts
    pub fill: &'static str,
    /// Outer glow (CSS `box-shadow` value)
    pub glow: &'static str,
    /// Radial halo revealed on hover (CSS `background` value)
    pub halo: &'static str,
}

impl Accent {
    /// All accents, in declaration order.
    pub const ALL: [Accent; 3] = [Accent::Cyan, Accent::Pink, Accent::Yellow];

    /// Lowercase tag used in `data-accent` attributes and CSS class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Cyan => "cyan",
            Accent::Pink => "pink",
            Accent::Yellow => "yellow",
        }
    }

    /// Resolve the style bundle for this accent.
    pub fn style(self) -> AccentStyle {
        match self {
            Accent::Cyan => AccentStyle {
                color: "#4AF2EA",
                border: "rgba(34,211,238,0.5)",
                outline: "rgba(74,242,234,0.3)",
                fill: "rgba(74,242,234,0.1)",
                glow: "0 0 45px rgba(74,242,234,0.25)",
                halo: "radial-gradient(circle at 50%, rgba(74,242,234,0.18), transparent 60%)",
            },
            Accent::Pink => AccentStyle {
                color: "#EFA9B6",
                border: "rgba(239,169,182,0.5)",
                outline: "rgba(239,169,182,0.3)",
                fill: "rgba(239,169,182,0.1)",
                glow: "0 0 45px rgba(239,169,182,0.3)",
                halo: "radial-gradient(circle at 50%, rgba(239,169,182,0.18), transparent 60%)",
            },
            Accent::Yellow => AccentStyle {
                color: "#F3E68F",
                border: "rgba(243,230,143,0.4)",
                outline: "rgba(243,230,143,0.4)",
                fill: "rgba(243,230,143,0.1)",
                glow: "0 0 45px rgba(243,230,143,0.25)",
                halo: "radial-gradient(circle at 50%, rgba(243,230,143,0.18), transparent 60%)",
            },
        }
    }
}

impl AccentStyle {
    /// Inline style for a bordered, glowing icon badge.
    pub fn badge_css(&self) -> String {
        format!("border-color:{};box-shadow:{}", self.border, self.glow)
    }

    /// Inline style for a tinted readout pill.
    pub fn readout_css(&self) -> String {
        format!(
            "border-color:{};background:{};color:{}",
            self.outline, self.fill, self.color
        )
    }
}

/// Background glow of a highlight reel card.
///
/// Stored on each reel record so reordering or filtering the gallery keeps
/// every card's treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReelGlow {
    /// Cyan glow anchored top-left
    CyanTopLeft,
    /// Pink glow bleeding in from above the top-right corner
    PinkTopRight,
    /// Yellow glow centered near the top edge
    YellowTopCenter,
}

impl ReelGlow {
    /// All glow variants.
    pub const ALL: [ReelGlow; 3] = [
        ReelGlow::CyanTopLeft,
        ReelGlow::PinkTopRight,
        ReelGlow::YellowTopCenter,
    ];

    /// Tag used in `data-glow` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            ReelGlow::CyanTopLeft => "cyan-top-left",
            ReelGlow::PinkTopRight => "pink-top-right",
            ReelGlow::YellowTopCenter => "yellow-top-center",
        }
    }

    /// CSS `background` value for the glow layer.
    pub fn background(self) -> &'static str {
        match self {
            ReelGlow::CyanTopLeft => {
                "radial-gradient(circle at 20% 15%, rgba(74,242,234,0.2), transparent 55%)"
            }
            ReelGlow::PinkTopRight => {
                "radial-gradient(circle at 80% -5%, rgba(239,169,182,0.22), transparent 60%)"
            }
            ReelGlow::YellowTopCenter => {
                "radial-gradient(circle at 50% 10%, rgba(243,230,143,0.2), transparent 55%)"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_accent_resolves_to_a_full_bundle() {
        for accent in Accent::ALL {
            let style = accent.style();
            assert!(!style.color.is_empty(), "{accent:?} color");
            assert!(!style.border.is_empty(), "{accent:?} border");
            assert!(!style.outline.is_empty(), "{accent:?} outline");
            assert!(!style.fill.is_empty(), "{accent:?} fill");
            assert!(!style.glow.is_empty(), "{accent:?} glow");
            assert!(style.halo.starts_with("radial-gradient"), "{accent:?} halo");
        }
    }

    #[test]
    fn accents_resolve_to_distinct_bundles() {
        let borders: HashSet<_> = Accent::ALL.iter().map(|a| a.style().border).collect();
        let tags: HashSet<_> = Accent::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(borders.len(), Accent::ALL.len());
        assert_eq!(tags.len(), Accent::ALL.len());
    }

    #[test]
    fn badge_css_carries_border_and_glow() {
        let css = Accent::Pink.style().badge_css();
        assert!(css.contains("border-color:rgba(239,169,182,0.5)"));
        assert!(css.contains("box-shadow:0 0 45px rgba(239,169,182,0.3)"));
    }

    #[test]
    fn readout_css_uses_the_fainter_outline() {
        let css = Accent::Cyan.style().readout_css();
        assert!(css.contains("border-color:rgba(74,242,234,0.3)"));
        assert!(!css.contains("rgba(34,211,238,0.5)"));

        let yellow = Accent::Yellow.style().readout_css();
        assert!(yellow.contains("border-color:rgba(243,230,143,0.4)"));
    }

    #[test]
    fn glows_have_distinct_backgrounds() {
        let backgrounds: HashSet<_> = ReelGlow::ALL.iter().map(|g| g.background()).collect();
        assert_eq!(backgrounds.len(), ReelGlow::ALL.len());
    }

    #[test]
    fn accent_serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&Accent::Yellow).expect("serialize");
        assert_eq!(json, "\"yellow\"");
    }
}
