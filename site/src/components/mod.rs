//! Leptos UI components for the landing page.
//!
//! Every component is a pure `#[component]` function: a content record in,
//! markup out. Nothing here holds signals or runs effects.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! └── LandingPage
//!     ├── SiteHeader            (PillButton)
//!     ├── HeroSection           (StatTile, SignalScanCard, ReadoutPill)
//!     ├── StackSection          (GlowCard per Feature)
//!     ├── PipelineSection       (PhaseCard per PipelinePhase)
//!     ├── GallerySection        (ReelCard per HighlightReel)
//!     ├── SecuritySection       (TrustSignalRow, FaceIdCard)
//!     └── WaitlistSection       (inert form)
//! ```
//!
//! # Usage
//!
//! Components are normally driven by [`crate::render_page`], but cards can
//! be rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use prism_site::components::GlowCard;
//! use prism_site::content::CORE_FEATURES;
//!
//! view! { <GlowCard feature=CORE_FEATURES[0] /> }
//! ```

mod buttons;
mod document;
mod gallery;
mod header;
mod hero;
mod icons;
mod page;
mod pipeline;
mod security;
mod stack;
mod waitlist;

pub use buttons::{PillButton, Tone};
pub use document::SiteDocument;
pub use gallery::{GallerySection, ReelCard};
pub use header::SiteHeader;
pub use hero::{HeroSection, ReadoutPill, SignalScanCard, StatTile};
pub use icons::{Icon, IconKind};
pub use page::LandingPage;
pub use pipeline::{PhaseCard, PipelineSection};
pub use security::{FaceIdCard, SecuritySection, TrustSignalRow};
pub use stack::{GlowCard, StackSection};
pub use waitlist::{EMAIL_PLACEHOLDER, WaitlistSection};
