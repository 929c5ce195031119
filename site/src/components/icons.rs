//! SVG icon components using Lucide icons.
//!
//! Icons are inline stroke SVGs on a 24x24 grid, so the page needs no icon
//! font or sprite sheet. See [Lucide](https://lucide.dev/) for the source set.

use leptos::prelude::*;
use serde::Serialize;

/// The icons the page uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Camera aperture
    Aperture,
    /// Diagonal outbound arrow
    ArrowUpRight,
    /// Scalloped badge with a check
    BadgeCheck,
    /// Circuit board
    CircuitBoard,
    /// Fingerprint
    Fingerprint,
    /// Globe with continents
    Globe2,
    /// Stacked layers
    Layers,
    /// Paint palette
    Palette,
    /// Shield with a check
    ShieldCheck,
    /// Sparkles
    Sparkles,
    /// Workflow boxes
    Workflow,
}

impl IconKind {
    /// SVG path data (`d` attributes) making up the icon.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Aperture => &[
                "M22 12A10 10 0 1 1 2 12a10 10 0 0 1 20 0Z",
                "m14.31 8 5.74 9.94",
                "M9.69 8h11.48",
                "m7.38 12 5.74-9.94",
                "M9.69 16 3.95 6.06",
                "M14.31 16H2.83",
                "m16.62 12-5.74 9.94",
            ],
            IconKind::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            IconKind::BadgeCheck => &[
                "M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z",
                "m9 12 2 2 4-4",
            ],
            IconKind::CircuitBoard => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2Z",
                "M11 9h4a2 2 0 0 0 2-2V3",
                "M13 9a2 2 0 1 1-4 0 2 2 0 0 1 4 0Z",
                "M7 21v-4a2 2 0 0 1 2-2h4",
                "M17 15a2 2 0 1 1-4 0 2 2 0 0 1 4 0Z",
            ],
            IconKind::Fingerprint => &[
                "M12 10a2 2 0 0 0-2 2c0 1.02-.1 2.51-.26 4",
                "M14 13.12c0 2.38 0 6.38-1 8.88",
                "M17.29 21.02c.12-.6.43-2.3.5-3.02",
                "M2 12a10 10 0 0 1 18-6",
                "M2 16h.01",
                "M21.8 16c.2-2 .131-5.354 0-6",
                "M5 19.5C5.5 18 6 15 6 12a6 6 0 0 1 .34-2",
                "M8.65 22c.21-.66.45-1.32.57-2",
                "M9 6.8a6 6 0 0 1 9 5.2v2",
            ],
            IconKind::Globe2 => &[
                "M21.54 15H17a2 2 0 0 0-2 2v4.54",
                "M7 3.34V5a3 3 0 0 0 3 3 2 2 0 0 1 2 2c0 1.1.9 2 2 2a2 2 0 0 0 2-2c0-1.1.9-2 2-2h3.17",
                "M11 21.95V18a2 2 0 0 0-2-2 2 2 0 0 1-2-2v-1a2 2 0 0 0-2-2H2.05",
                "M22 12A10 10 0 1 1 2 12a10 10 0 0 1 20 0Z",
            ],
            IconKind::Layers => &[
                "M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            IconKind::Palette => &[
                "M12 22a1 1 0 0 1 0-20 10 9 0 0 1 10 9 5 5 0 0 1-5 5h-2.25a1.75 1.75 0 0 0-1.4 2.8l.3.4a1.75 1.75 0 0 1-1.4 2.8Z",
                "M14 6.5a.5.5 0 1 1-1 0 .5.5 0 0 1 1 0Z",
                "M18 10.5a.5.5 0 1 1-1 0 .5.5 0 0 1 1 0Z",
                "M7 12.5a.5.5 0 1 1-1 0 .5.5 0 0 1 1 0Z",
                "M9 7.5a.5.5 0 1 1-1 0 .5.5 0 0 1 1 0Z",
            ],
            IconKind::ShieldCheck => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1Z",
                "m9 12 2 2 4-4",
            ],
            IconKind::Sparkles => &[
                "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0Z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
            IconKind::Workflow => &[
                "M5 3h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2Z",
                "M7 11v4a2 2 0 0 0 2 2h4",
                "M15 13h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2h-4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2Z",
            ],
        }
    }
}

/// Renders an inline Lucide icon.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Sparkles class="icon-sm tint-yellow" /> }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw
    kind: IconKind,
    /// CSS class names (sizing and tint)
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {kind.paths().iter().copied().map(|d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconKind; 11] = [
        IconKind::Aperture,
        IconKind::ArrowUpRight,
        IconKind::BadgeCheck,
        IconKind::CircuitBoard,
        IconKind::Fingerprint,
        IconKind::Globe2,
        IconKind::Layers,
        IconKind::Palette,
        IconKind::ShieldCheck,
        IconKind::Sparkles,
        IconKind::Workflow,
    ];

    #[test]
    fn every_icon_has_path_data() {
        for kind in ALL {
            let paths = kind.paths();
            assert!(!paths.is_empty(), "{kind:?}");
            assert!(
                paths.iter().all(|d| d.starts_with('M') || d.starts_with('m')),
                "{kind:?} path must start with a moveto"
            );
        }
    }
}
